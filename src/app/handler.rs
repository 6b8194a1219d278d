//! Input handling — maps key/mouse events to state mutations.
//!
//! Every handler finishes by letting the page view consume the scroll
//! notifications it caused, so state is settled before the next draw.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::config::Action;
use crate::core::{content::LinkTarget, section::Section};

use super::state::AppState;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+c always quits, regardless of bindings.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    if state.page.state().is_mobile_menu_open && handle_menu_key(state, key) {
        state.page.sync_scroll();
        return;
    }

    if let Some(action) = state.config.match_key(key) {
        apply_action(state, action);
    }
    state.page.sync_scroll();
}

/// Menu-local navigation.  Returns `true` when the key was consumed.
fn handle_menu_key(state: &mut AppState, key: KeyEvent) -> bool {
    let count = Section::NAV.len();
    match key.code {
        KeyCode::Esc => {
            state.page.close_mobile_menu();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.menu_selected = state.menu_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.menu_selected + 1 < count {
                state.menu_selected += 1;
            }
        }
        KeyCode::Enter => {
            let section = Section::NAV[state.menu_selected.min(count - 1)];
            navigate(state, section);
        }
        _ => return false,
    }
    true
}

fn apply_action(state: &mut AppState, action: Action) {
    let step = state.config.scroll_step as isize;

    match action {
        Action::Quit => state.should_quit = true,
        Action::ToggleDarkMode => state.page.toggle_dark_mode(),
        Action::ToggleMenu => {
            state.page.toggle_mobile_menu();
            state.menu_selected = 0;
        }
        Action::ScrollUp => state.viewport.scroll_by(-step),
        Action::ScrollDown => state.viewport.scroll_by(step),
        Action::PageUp => state.viewport.page(false),
        Action::PageDown => state.viewport.page(true),
        Action::Top => state.viewport.scroll_to(0),
        Action::Bottom => state.viewport.scroll_to(usize::MAX),
        Action::NextSection => {
            if let Some(next) = current_section(state).and_then(Section::next) {
                scroll_to_section(state, next);
            }
        }
        Action::PrevSection => {
            let Some(current) = current_section(state) else {
                return;
            };
            // Mid-section: back to its top first.
            let target = if state.viewport.offset() > anchor(state, current) {
                Some(current)
            } else {
                current.prev()
            };
            if let Some(section) = target {
                scroll_to_section(state, section);
            }
        }
        Action::JumpAbout | Action::JumpSkills | Action::JumpProjects | Action::JumpExperience => {
            if let Some(section) = action.jump_target() {
                navigate(state, section);
            }
        }
        Action::OpenResume => state.pending_links.push(LinkTarget::Resume),
        Action::OpenGitHub => state.pending_links.push(LinkTarget::GitHub),
        Action::OpenLinkedIn => state.pending_links.push(LinkTarget::LinkedIn),
    }
}

// ── Navigation ──────────────────────────────────────────────────

/// Follow a navigation link: closes the mobile menu, then scrolls.
fn navigate(state: &mut AppState, section: Section) {
    let target = state.page.select_link(section);
    scroll_to_section(state, target);
    tracing::debug!("navigate: #{}", target.anchor());
}

fn scroll_to_section(state: &mut AppState, section: Section) {
    let row = anchor(state, section);
    state.viewport.scroll_to(row);
}

fn anchor(state: &AppState, section: Section) -> usize {
    state
        .frame
        .as_ref()
        .map_or(0, |f| f.document.anchor(section))
}

fn current_section(state: &AppState) -> Option<Section> {
    let frame = state.frame.as_ref()?;
    Some(frame.document.section_at(state.viewport.offset()))
}

// ── Mouse ───────────────────────────────────────────────────────

/// Process a mouse event.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let step = state.config.scroll_step as isize;

    match mouse.kind {
        MouseEventKind::ScrollDown => state.viewport.scroll_by(step),
        MouseEventKind::ScrollUp => state.viewport.scroll_by(-step),
        MouseEventKind::Down(MouseButton::Left) => handle_click(state, mouse.column, mouse.row),
        _ => {}
    }
    state.page.sync_scroll();
}

/// What a left click landed on.
enum ClickTarget {
    Link(Section),
    DarkToggle,
    MenuButton,
    Page(Option<LinkTarget>),
    Elsewhere,
}

fn hit_test(state: &AppState, col: u16, row: u16) -> Option<ClickTarget> {
    let frame = state.frame.as_ref()?;

    let links = frame.menu.iter().chain(frame.nav.links.iter());
    for &(section, rect) in links {
        if point_in_rect(rect, col, row) {
            return Some(ClickTarget::Link(section));
        }
    }
    if frame.nav.dark_toggle.is_some_and(|r| point_in_rect(r, col, row)) {
        return Some(ClickTarget::DarkToggle);
    }
    if frame.nav.menu_button.is_some_and(|r| point_in_rect(r, col, row)) {
        return Some(ClickTarget::MenuButton);
    }

    let body = frame.layout.body_area;
    if point_in_rect(body, col, row) {
        let doc_row = state.viewport.offset() + usize::from(row - body.y);
        let doc_col = usize::from(col - body.x);
        return Some(ClickTarget::Page(frame.document.link_at(doc_row, doc_col)));
    }
    Some(ClickTarget::Elsewhere)
}

fn handle_click(state: &mut AppState, col: u16, row: u16) {
    let Some(target) = hit_test(state, col, row) else {
        return;
    };

    match target {
        ClickTarget::Link(section) => navigate(state, section),
        ClickTarget::DarkToggle => state.page.toggle_dark_mode(),
        ClickTarget::MenuButton => {
            state.page.toggle_mobile_menu();
            state.menu_selected = 0;
        }
        // Clicking outside an open menu only dismisses it.
        _ if state.page.state().is_mobile_menu_open => state.page.close_mobile_menu(),
        ClickTarget::Page(Some(link)) => state.pending_links.push(link),
        ClickTarget::Page(None) | ClickTarget::Elsewhere => {}
    }
}

fn point_in_rect(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x
        && col < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::config::AppConfig;
    use crate::ui::render;

    struct Harness {
        terminal: Terminal<TestBackend>,
        state: AppState,
    }

    impl Harness {
        fn new(width: u16, height: u16) -> Self {
            let config = AppConfig {
                animations: false,
                ..AppConfig::default()
            };
            let mut h = Self {
                terminal: Terminal::new(TestBackend::new(width, height)).unwrap(),
                state: AppState::new(config, PathBuf::from("public")),
            };
            h.draw();
            h
        }

        fn draw(&mut self) {
            let state = &mut self.state;
            self.terminal.draw(|f| render::draw(f, state)).unwrap();
        }

        fn press(&mut self, code: KeyCode) {
            handle_key(&mut self.state, KeyEvent::new(code, KeyModifiers::NONE));
            self.draw();
        }

        fn click(&mut self, col: u16, row: u16) {
            handle_mouse(
                &mut self.state,
                MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column: col,
                    row,
                    modifiers: KeyModifiers::NONE,
                },
            );
            self.draw();
        }

        fn wheel(&mut self, down: bool) {
            let kind = if down {
                MouseEventKind::ScrollDown
            } else {
                MouseEventKind::ScrollUp
            };
            handle_mouse(
                &mut self.state,
                MouseEvent {
                    kind,
                    column: 0,
                    row: 10,
                    modifiers: KeyModifiers::NONE,
                },
            );
            self.draw();
        }

        fn anchor(&self, section: Section) -> usize {
            anchor(&self.state, section)
        }
    }

    #[test]
    fn dark_mode_key_round_trips() {
        let mut h = Harness::new(100, 30);
        h.press(KeyCode::Char('d'));
        assert!(h.state.page.state().is_dark_mode);
        h.press(KeyCode::Char('d'));
        assert!(!h.state.page.state().is_dark_mode);
    }

    #[test]
    fn scrolling_past_threshold_elevates_the_nav() {
        let mut h = Harness::new(100, 30);
        for _ in 0..7 {
            h.press(KeyCode::Char('j'));
        }
        assert_eq!(h.state.viewport.offset(), 21);
        assert!(h.state.page.state().is_scrolled);

        h.press(KeyCode::Char('k'));
        assert_eq!(h.state.viewport.offset(), 18);
        assert!(!h.state.page.state().is_scrolled);
    }

    #[test]
    fn wheel_scrolls_by_step() {
        let mut h = Harness::new(100, 30);
        h.wheel(true);
        h.wheel(true);
        assert_eq!(h.state.viewport.offset(), 6);
        h.wheel(false);
        assert_eq!(h.state.viewport.offset(), 3);
    }

    #[test]
    fn jump_keys_scroll_to_section_anchors() {
        let mut h = Harness::new(100, 30);
        h.press(KeyCode::Char('3'));
        assert_eq!(h.state.viewport.offset(), h.anchor(Section::Projects));
        assert!(h.state.page.state().is_scrolled);
    }

    #[test]
    fn next_and_prev_walk_sections() {
        let mut h = Harness::new(100, 30);
        h.press(KeyCode::Char('n'));
        assert_eq!(h.state.viewport.offset(), h.anchor(Section::About));
        h.press(KeyCode::Char('n'));
        assert_eq!(h.state.viewport.offset(), h.anchor(Section::Skills));

        h.press(KeyCode::Char('j'));
        h.press(KeyCode::Char('p'));
        assert_eq!(h.state.viewport.offset(), h.anchor(Section::Skills));
        h.press(KeyCode::Char('p'));
        assert_eq!(h.state.viewport.offset(), h.anchor(Section::About));
    }

    #[test]
    fn menu_opens_and_link_selection_closes_it() {
        let mut h = Harness::new(50, 30);
        h.press(KeyCode::Char('m'));
        assert!(h.state.page.state().is_mobile_menu_open);
        assert_eq!(h.state.frame.as_ref().unwrap().menu.len(), 4);

        h.press(KeyCode::Down);
        h.press(KeyCode::Enter);
        assert!(!h.state.page.state().is_mobile_menu_open);
        assert_eq!(h.state.viewport.offset(), h.anchor(Section::Skills));
        assert!(h.state.frame.as_ref().unwrap().menu.is_empty());
    }

    #[test]
    fn escape_closes_menu_without_navigating() {
        let mut h = Harness::new(50, 30);
        h.press(KeyCode::Char('m'));
        h.press(KeyCode::Esc);
        assert!(!h.state.page.state().is_mobile_menu_open);
        assert_eq!(h.state.viewport.offset(), 0);
    }

    #[test]
    fn every_cell_of_a_narrow_menu_button_opens_the_menu() {
        let mut h = Harness::new(22, 30);
        let button = h.state.frame.as_ref().unwrap().nav.menu_button.unwrap();
        let last = button.x + button.width - 1;
        h.click(last, button.y);
        assert!(h.state.page.state().is_mobile_menu_open);
        assert!(!h.state.page.state().is_dark_mode);
    }

    #[test]
    fn clicking_menu_button_then_link() {
        let mut h = Harness::new(50, 30);
        let button = h.state.frame.as_ref().unwrap().nav.menu_button.unwrap();
        h.click(button.x, button.y);
        assert!(h.state.page.state().is_mobile_menu_open);

        let (section, rect) = h.state.frame.as_ref().unwrap().menu[3];
        assert_eq!(section, Section::Experience);
        h.click(rect.x + 2, rect.y);
        assert!(!h.state.page.state().is_mobile_menu_open);
        assert_eq!(h.state.viewport.offset(), h.anchor(Section::Experience).min(h.state.viewport.max_offset()));
    }

    #[test]
    fn clicking_nav_link_and_toggle() {
        let mut h = Harness::new(100, 30);
        let nav = h.state.frame.as_ref().unwrap().nav.clone();

        let (section, rect) = nav.links[1];
        assert_eq!(section, Section::Skills);
        h.click(rect.x, rect.y);
        assert_eq!(h.state.viewport.offset(), h.anchor(Section::Skills));

        let toggle = h.state.frame.as_ref().unwrap().nav.dark_toggle.unwrap();
        h.click(toggle.x, toggle.y);
        assert!(h.state.page.state().is_dark_mode);
    }

    #[test]
    fn clicking_hero_button_queues_link() {
        let mut h = Harness::new(100, 30);
        let frame = h.state.frame.as_ref().unwrap();
        let body = frame.layout.body_area;
        let zone = frame
            .document
            .links()
            .iter()
            .find(|z| z.target == LinkTarget::GitHub)
            .copied()
            .unwrap();
        h.click(body.x + zone.x as u16, body.y + zone.row as u16);
        assert_eq!(h.state.pending_links, vec![LinkTarget::GitHub]);
    }

    #[test]
    fn link_keys_queue_requests() {
        let mut h = Harness::new(100, 30);
        h.press(KeyCode::Char('r'));
        h.press(KeyCode::Char('l'));
        assert_eq!(
            h.state.pending_links,
            vec![LinkTarget::Resume, LinkTarget::LinkedIn]
        );
    }

    #[test]
    fn quit_keys() {
        let mut h = Harness::new(100, 30);
        handle_key(
            &mut h.state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(h.state.should_quit);

        let mut h = Harness::new(100, 30);
        h.press(KeyCode::Char('q'));
        assert!(h.state.should_quit);
    }

    #[test]
    fn unmounted_page_ignores_scrolling() {
        let mut h = Harness::new(100, 30);
        h.state.teardown();
        assert_eq!(h.state.viewport.listener_count(), 0);

        h.press(KeyCode::End);
        assert!(h.state.viewport.offset() > 20);
        assert!(!h.state.page.state().is_scrolled);
    }
}
