//! View state and its pure mapping onto presentation choices.
//!
//! The three flags are independent two-state toggles.  Nothing here performs
//! I/O or rendering; the UI layer reads a [`Presentation`] and picks styles.

/// Scroll offset (in rows) past which the navigation bar becomes elevated.
pub const SCROLL_THRESHOLD: usize = 20;

/// `true` when `offset` is strictly past [`SCROLL_THRESHOLD`].
pub fn is_past_threshold(offset: usize) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Mutable UI flags owned by the page view.  Defaults to all-off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub is_dark_mode: bool,
    pub is_scrolled: bool,
    pub is_mobile_menu_open: bool,
}

/// Top-level palette selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// Navigation bar treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavVariant {
    /// At the top of the page: blends into the background, roomy padding.
    #[default]
    Transparent,
    /// Scrolled: surface background, tight padding, drop shadow.
    Elevated,
}

/// What the renderer should draw for a given [`ViewState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub color_scheme: ColorScheme,
    pub nav: NavVariant,
    pub show_mobile_menu: bool,
}

impl From<&ViewState> for Presentation {
    fn from(state: &ViewState) -> Self {
        Self {
            color_scheme: if state.is_dark_mode {
                ColorScheme::Dark
            } else {
                ColorScheme::Light
            },
            nav: if state.is_scrolled {
                NavVariant::Elevated
            } else {
                NavVariant::Transparent
            },
            show_mobile_menu: state.is_mobile_menu_open,
        }
    }
}
