//! Fixed navigation bar: section links, dark-mode toggle, and (on narrow
//! terminals) the mobile menu button.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
};

use crate::core::{
    section::Section,
    text::display_width,
    view_state::{ColorScheme, NavVariant, Presentation},
};

use super::theme::Palette;

/// Below this many columns the links collapse into a menu button.
pub const COMPACT_BELOW: u16 = 72;

/// Space between centered links.
const LINK_GAP: u16 = 3;

/// Clickable regions returned after rendering, for mouse hit-testing.
#[derive(Debug, Clone, Default)]
pub struct NavHitZones {
    pub links: Vec<(Section, Rect)>,
    pub dark_toggle: Option<Rect>,
    pub menu_button: Option<Rect>,
}

/// The navigation bar widget — created fresh each frame.
pub struct NavBar<'a> {
    pub presentation: Presentation,
    pub palette: &'a Palette,
    /// Entrance displacement; negative rows are still above the screen.
    pub slide: i16,
}

impl<'a> NavBar<'a> {
    /// Rows the bar occupies for a given variant.
    pub fn height(variant: NavVariant) -> u16 {
        match variant {
            NavVariant::Transparent => 3,
            NavVariant::Elevated => 2,
        }
    }

    fn toggle_label(&self) -> &'static str {
        match self.presentation.color_scheme {
            ColorScheme::Light => "[ 🌙 Dark ]",
            ColorScheme::Dark => "[ ☀ Light ]",
        }
    }

    fn menu_label(&self) -> &'static str {
        if self.presentation.show_mobile_menu {
            "[ ✕ Close ]"
        } else {
            "[ ☰ Menu ]"
        }
    }

    /// Render and return hit zones for mouse interaction.
    pub fn render_and_hit(self, area: Rect, buf: &mut Buffer) -> NavHitZones {
        let variant = self.presentation.nav;
        let p = self.palette;
        let bg = p.nav_background(variant);
        let mut zones = NavHitZones::default();

        if area.height == 0 || area.width == 0 {
            return zones;
        }
        buf.set_style(area, p.text_on(bg));

        let (content_row, shadow_row) = match variant {
            NavVariant::Transparent => (1, None),
            NavVariant::Elevated => (0, Some(1)),
        };

        // Entrance slide: rows still "above the screen" are skipped.
        let hidden = self.slide.min(0).unsigned_abs();
        let Some(y) = (area.y + content_row).checked_sub(hidden) else {
            return zones;
        };
        if y < area.y || y >= area.y + area.height {
            return zones;
        }

        if let Some(row) = shadow_row {
            if let Some(sy) = (area.y + row).checked_sub(hidden) {
                if sy >= area.y && sy < area.y + area.height {
                    let rule = "▔".repeat(area.width as usize);
                    buf.set_line(
                        area.x,
                        sy,
                        &Line::from(Span::styled(rule, p.nav_shadow())),
                        area.width,
                    );
                }
            }
        }

        let toggle = self.toggle_label();
        let toggle_w = display_width(toggle) as u16;
        let toggle_style = p.nav_link(variant).add_modifier(Modifier::BOLD);
        let right = area.x + area.width;
        let mut toggle_x = right.saturating_sub(toggle_w + 2).max(area.x);

        let compact = area.width < COMPACT_BELOW;
        if compact {
            let label = self.menu_label();
            let w = (display_width(label) as u16).min(area.width);
            let x = area.x + 2.min(area.width);
            let w = w.min(right - x);
            buf.set_line(
                x,
                y,
                &Line::from(Span::styled(label, p.nav_link(variant))),
                w,
            );
            zones.menu_button = Some(Rect::new(x, y, w, 1));
            // The toggle never covers the menu button.
            toggle_x = toggle_x.max(x + w + 1);
        }

        // Dark-mode toggle, right-aligned; dropped when it doesn't fit.
        if toggle_x + toggle_w <= right {
            buf.set_line(
                toggle_x,
                y,
                &Line::from(Span::styled(toggle, toggle_style)),
                toggle_w,
            );
            zones.dark_toggle = Some(Rect::new(toggle_x, y, toggle_w, 1));
        }

        if compact {
            return zones;
        }

        // Centered links.
        let total: u16 = Section::NAV
            .iter()
            .map(|s| display_width(s.nav_label()) as u16)
            .sum::<u16>()
            + LINK_GAP * (Section::NAV.len() as u16 - 1);
        let mut x = area.x + area.width.saturating_sub(total) / 2;
        for &section in Section::NAV {
            let label = section.nav_label();
            let w = display_width(label) as u16;
            buf.set_line(
                x,
                y,
                &Line::from(Span::styled(label, p.nav_link(variant))),
                w,
            );
            zones.links.push((section, Rect::new(x, y, w, 1)));
            x += w + LINK_GAP;
        }

        zones
    }
}
