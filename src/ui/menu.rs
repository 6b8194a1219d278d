//! Mobile menu dropdown — the section links, stacked under the navigation bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::core::section::Section;

use super::theme::Palette;

/// Dropdown overlay widget.
pub struct MobileMenu<'a> {
    pub palette: &'a Palette,
    /// Highlighted link (index into [`Section::NAV`]).
    pub selected: usize,
}

impl<'a> MobileMenu<'a> {
    /// Where the dropdown goes: full width below `nav`, clamped to `screen`.
    pub fn area(screen: Rect, nav: Rect) -> Rect {
        let top = nav.y + nav.height;
        let height = (Section::NAV.len() as u16 + 2).min(screen.height.saturating_sub(top));
        let x = screen.x + 1.min(screen.width);
        Rect::new(x, top, screen.width.saturating_sub(2), height)
    }

    /// Render and return one hit zone per link.
    pub fn render_and_hit(self, area: Rect, buf: &mut Buffer) -> Vec<(Section, Rect)> {
        let p = self.palette;
        if area.is_empty() {
            return Vec::new();
        }
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(p.border_on(p.surface))
            .style(p.text_on(p.surface));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        let mut zones = Vec::new();
        for (i, &section) in Section::NAV.iter().enumerate() {
            let (prefix, style) = if i == self.selected {
                (" ▸ ", p.selected())
            } else {
                ("   ", p.text_on(p.surface).add_modifier(Modifier::BOLD))
            };
            let label = format!("{prefix}{}", section.nav_label());
            let pad = (inner.width as usize).saturating_sub(label.chars().count());
            lines.push(Line::from(vec![
                Span::styled(label, style),
                Span::styled(" ".repeat(pad), style),
            ]));

            let y = inner.y + i as u16;
            if y < inner.y + inner.height {
                zones.push((section, Rect::new(inner.x, y, inner.width, 1)));
            }
        }

        Paragraph::new(lines).render(inner, buf);
        zones
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn dropdown_lists_every_link_under_the_nav() {
        let screen = Rect::new(0, 0, 50, 30);
        let nav = Rect::new(0, 0, 50, 3);
        let area = MobileMenu::area(screen, nav);
        assert_eq!(area.y, 3);
        assert_eq!(area.height, 6);

        let mut buf = Buffer::empty(screen);
        let zones = MobileMenu {
            palette: &Palette::LIGHT,
            selected: 1,
        }
        .render_and_hit(area, &mut buf);

        let order: Vec<Section> = zones.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, Section::NAV.to_vec());

        let row: String = (0..50).map(|x| buf[(x, zones[1].1.y)].symbol().to_string()).collect();
        assert!(row.contains("▸ Skills"), "{row}");
    }

    #[test]
    fn dropdown_clamps_to_short_screens() {
        let screen = Rect::new(0, 0, 40, 6);
        let nav = Rect::new(0, 0, 40, 3);
        let area = MobileMenu::area(screen, nav);
        assert_eq!(area.height, 3);

        let mut buf = Buffer::empty(screen);
        let zones = MobileMenu {
            palette: &Palette::LIGHT,
            selected: 0,
        }
        .render_and_hit(area, &mut buf);
        assert_eq!(zones.len(), 1);
    }
}
