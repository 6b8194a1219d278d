//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use std::path::PathBuf;

use crate::config::AppConfig;
use crate::core::content::LinkTarget;
use crate::ui::{motion::Motion, render::FrameLayout};

use super::{page_view::PageView, viewport::Viewport};

/// Top-level application state.
pub struct AppState {
    /// Scrollable body; the page view listens to it.
    pub viewport: Viewport,
    /// The page and its view state.
    pub page: PageView,
    /// Entrance animations.
    pub motion: Motion,
    /// User-configurable keybindings and options.
    pub config: AppConfig,
    /// Directory holding the resume and portrait.
    pub assets: PathBuf,
    /// Highlighted link while the mobile menu is open.
    pub menu_selected: usize,
    /// Geometry of the last drawn frame.  `None` before the first draw.
    pub frame: Option<FrameLayout>,
    /// Outbound links requested by the user, opened by the main loop.
    pub pending_links: Vec<LinkTarget>,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Controls the main event loop.
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: AppConfig, assets: PathBuf) -> Self {
        let mut viewport = Viewport::new();
        let page = PageView::mount(&mut viewport);
        Self {
            viewport,
            page,
            motion: Motion::new(config.animations),
            config,
            assets,
            menu_selected: 0,
            frame: None,
            pending_links: Vec::new(),
            status_message: None,
            should_quit: false,
        }
    }

    /// Detach the page from the viewport before the terminal is restored.
    pub fn teardown(&mut self) {
        self.page.unmount();
    }
}
