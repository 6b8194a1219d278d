//! Application orchestration — state management, event loop, and input handling.

pub mod event;
pub mod handler;
pub mod page_view;
pub mod state;
pub mod viewport;
