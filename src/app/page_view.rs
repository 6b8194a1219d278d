//! The page view — owns the [`ViewState`] and the scroll subscription.

use crate::core::section::Section;
use crate::core::view_state::{is_past_threshold, Presentation, ViewState};

use super::viewport::{ScrollSubscription, Viewport};

/// The single view of the page.
///
/// Mounting acquires a scroll subscription from the [`Viewport`]; unmounting
/// (or dropping the view) releases it.
#[derive(Debug)]
pub struct PageView {
    state: ViewState,
    scroll: Option<ScrollSubscription>,
}

impl PageView {
    /// Attach to `viewport`.  State starts all-off regardless of the current
    /// scroll position; the first notification brings `is_scrolled` in line.
    pub fn mount(viewport: &mut Viewport) -> Self {
        Self {
            state: ViewState::default(),
            scroll: Some(viewport.subscribe()),
        }
    }

    /// Release the scroll subscription.  Idempotent.
    pub fn unmount(&mut self) {
        if self.scroll.take().is_some() {
            tracing::debug!("page view unmounted; scroll subscription released");
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn presentation(&self) -> Presentation {
        Presentation::from(&self.state)
    }

    /// Apply every pending scroll notification, in order.
    pub fn sync_scroll(&mut self) {
        let Some(sub) = self.scroll.as_mut() else {
            return;
        };
        while let Some(event) = sub.try_next() {
            self.state.is_scrolled = is_past_threshold(event.offset);
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.state.is_dark_mode = !self.state.is_dark_mode;
        tracing::debug!("dark mode: {}", self.state.is_dark_mode);
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.state.is_mobile_menu_open = !self.state.is_mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.state.is_mobile_menu_open = false;
    }

    /// Follow a navigation link.  Always closes the mobile menu and hands the
    /// destination back so the caller can scroll to it.
    pub fn select_link(&mut self, section: Section) -> Section {
        self.close_mobile_menu();
        section
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::view_state::{ColorScheme, NavVariant};

    fn mounted() -> (Viewport, PageView) {
        let mut viewport = Viewport::new();
        viewport.set_extent(300, 30);
        let view = PageView::mount(&mut viewport);
        (viewport, view)
    }

    #[test]
    fn starts_with_everything_off() {
        let (_vp, view) = mounted();
        assert_eq!(*view.state(), ViewState::default());
        assert_eq!(view.presentation().color_scheme, ColorScheme::Light);
        assert!(!view.presentation().show_mobile_menu);
    }

    #[test]
    fn dark_mode_round_trips() {
        let (_vp, mut view) = mounted();
        view.toggle_dark_mode();
        assert!(view.state().is_dark_mode);
        assert_eq!(view.presentation().color_scheme, ColorScheme::Dark);
        view.toggle_dark_mode();
        assert_eq!(view.presentation().color_scheme, ColorScheme::Light);
    }

    #[test]
    fn scroll_past_threshold_elevates_nav() {
        let (mut vp, mut view) = mounted();

        vp.scroll_to(21);
        view.sync_scroll();
        assert!(view.state().is_scrolled);
        assert_eq!(view.presentation().nav, NavVariant::Elevated);

        vp.scroll_to(20);
        view.sync_scroll();
        assert!(!view.state().is_scrolled);
    }

    #[test]
    fn every_notification_is_evaluated() {
        let (mut vp, mut view) = mounted();
        vp.scroll_to(50);
        vp.scroll_to(3);
        view.sync_scroll();
        assert!(!view.state().is_scrolled);
    }

    #[test]
    fn selecting_a_link_closes_the_menu() {
        let (_vp, mut view) = mounted();
        view.toggle_mobile_menu();
        assert!(view.state().is_mobile_menu_open);

        let target = view.select_link(Section::Projects);
        assert_eq!(target, Section::Projects);
        assert!(!view.state().is_mobile_menu_open);
    }

    #[test]
    fn unmount_stops_scroll_tracking() {
        let (mut vp, mut view) = mounted();
        view.unmount();
        assert_eq!(vp.listener_count(), 0);

        vp.scroll_to(100);
        view.sync_scroll();
        assert!(!view.state().is_scrolled);
    }

    #[test]
    fn dropping_the_view_releases_the_listener() {
        let (vp, view) = mounted();
        assert_eq!(vp.listener_count(), 1);
        drop(view);
        assert_eq!(vp.listener_count(), 0);
    }
}
