//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the page content and view state and turns them into
//! cells on the terminal.  No process spawning or file I/O happens here.

pub mod document;
pub mod layout;
pub mod menu;
pub mod motion;
pub mod nav;
pub mod render;
pub mod theme;
