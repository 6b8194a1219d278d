//! Frame composition — draws the whole screen from `AppState` and records
//! the geometry the input handler needs for the next event.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame,
};

use crate::app::state::AppState;
use crate::core::{section::Section, text::display_width};

use super::{
    document::Document,
    layout::AppLayout,
    menu::MobileMenu,
    nav::{NavBar, NavHitZones},
    theme::Palette,
};

/// Geometry of the last drawn frame, for hit-testing and navigation.
#[derive(Debug, Clone)]
pub struct FrameLayout {
    pub layout: AppLayout,
    pub document: Document,
    pub nav: NavHitZones,
    /// Mobile menu links, empty when the menu is closed.
    pub menu: Vec<(Section, Rect)>,
}

/// Draw one frame.
pub fn draw(frame: &mut Frame<'_>, state: &mut AppState) {
    let area = frame.area();
    let palette = Palette::for_scheme(state.page.presentation().color_scheme);
    // The body spans the full width, so the document doesn't depend on the
    // nav height.
    let document = Document::build(area.width, &palette, &state.motion, &state.assets);

    // Settle the scroll position for this size before picking the nav
    // variant: a resize can clamp the offset back under the threshold.
    let mut layout = AppLayout::from_area(area, NavBar::height(state.page.presentation().nav));
    fit_viewport(state, &document, layout.body_area);
    let settled_height = NavBar::height(state.page.presentation().nav);
    if settled_height != layout.nav_area.height {
        layout = AppLayout::from_area(area, settled_height);
        fit_viewport(state, &document, layout.body_area);
    }
    let presentation = state.page.presentation();
    let body = layout.body_area;

    let offset = state.viewport.offset();
    let visible_end = offset + body.height as usize;
    if !state.motion.about.is_triggered() && document.anchor(Section::About) < visible_end {
        tracing::debug!("about section entered the viewport at offset {offset}");
        state.motion.about.trigger();
    }

    let buf = frame.buffer_mut();
    buf.set_style(body, palette.text_on(palette.background));
    let end = visible_end.min(document.height());
    let start = offset.min(end);
    Paragraph::new(document.lines()[start..end].to_vec()).render(body, buf);

    // ── chrome ────────────────────────────────────────────────
    let nav = NavBar {
        presentation,
        palette: &palette,
        slide: state.motion.nav.row_offset(),
    }
    .render_and_hit(layout.nav_area, buf);

    if !layout.status_area.is_empty() {
        draw_status(state, &document, &palette, layout.status_area, buf);
    }

    // ── overlays ──────────────────────────────────────────────
    let menu = if presentation.show_mobile_menu && area.height > layout.nav_area.height {
        let menu_area = MobileMenu::area(area, layout.nav_area);
        MobileMenu {
            palette: &palette,
            selected: state.menu_selected,
        }
        .render_and_hit(menu_area, buf)
    } else {
        Vec::new()
    };

    state.frame = Some(FrameLayout {
        layout,
        document,
        nav,
        menu,
    });
}

fn fit_viewport(state: &mut AppState, document: &Document, body: Rect) {
    state
        .viewport
        .set_extent(document.height(), body.height as usize);
    state.page.sync_scroll();
}

fn draw_status(
    state: &AppState,
    document: &Document,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let hint = state.config.status_bar_hint();
    let status = state.status_message.as_deref().unwrap_or(&hint);
    let section = document.section_at(state.viewport.offset()).nav_label();
    let right_w = display_width(section) as u16 + 2;
    let status_style = palette.status_bar();
    buf.set_style(area, status_style);
    Paragraph::new(Line::from(Span::styled(format!(" {status}"), status_style))).render(
        Rect {
            width: area.width.saturating_sub(right_w),
            ..area
        },
        buf,
    );
    if area.width > right_w {
        buf.set_line(
            area.x + area.width - right_w,
            area.y,
            &Line::from(Span::styled(format!(" {section} "), palette.selected())),
            right_w,
        );
    }
}
