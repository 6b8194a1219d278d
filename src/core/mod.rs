//! Core model – static content, sections, and view state.
//!
//! Nothing in this module depends on any TUI or rendering crate.

pub mod content;
pub mod section;
pub mod text;
pub mod view_state;
