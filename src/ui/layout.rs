//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout: fixed nav bar, scrollable page body, status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub nav_area: Rect,
    pub body_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area and the nav bar's
    /// current height.
    pub fn from_area(area: Rect, nav_height: u16) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(nav_height), // fixed navigation bar
                Constraint::Min(1),             // page body (takes all remaining space)
                Constraint::Length(1),          // status bar
            ])
            .split(area);

        // On very short terminals the solver can place regions past the
        // bottom edge; clip them so they are empty instead.
        Self {
            nav_area: chunks[0].intersection(area),
            body_area: chunks[1].intersection(area),
            status_area: chunks[2].intersection(area),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn body_fills_between_nav_and_status() {
        let layout = AppLayout::from_area(Rect::new(0, 0, 80, 24), 3);
        assert_eq!(layout.nav_area, Rect::new(0, 0, 80, 3));
        assert_eq!(layout.body_area, Rect::new(0, 3, 80, 20));
        assert_eq!(layout.status_area, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn regions_stay_inside_a_tiny_area() {
        for height in 0..4 {
            let area = Rect::new(0, 0, 80, height);
            let layout = AppLayout::from_area(area, 3);
            for region in [layout.nav_area, layout.body_area, layout.status_area] {
                assert_eq!(region.intersection(area), region, "height {height}");
            }
        }
    }
}
