//! The page's sections, in layout order.

/// A top-level section of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Experience,
}

impl Section {
    /// Every section in the order it is laid out.
    pub const ALL: &[Section] = &[
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
    ];

    /// Sections reachable from the navigation bar, in link order.
    pub const NAV: &[Section] = &[
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
    ];

    /// Stable anchor id, e.g. `"skills"`.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
        }
    }

    /// Navigation link caption.
    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
        }
    }

    /// Heading printed at the top of the section (the hero has none).
    pub fn heading(self) -> Option<&'static str> {
        match self {
            Section::Hero => None,
            Section::About => Some("About Me"),
            Section::Skills => Some("Skills"),
            Section::Projects => Some("Projects"),
            Section::Experience => Some("Experience & Education"),
        }
    }

    /// Section following `self` in layout order, if any.
    pub fn next(self) -> Option<Section> {
        let idx = Self::ALL.iter().position(|s| *s == self)?;
        Self::ALL.get(idx + 1).copied()
    }

    /// Section preceding `self` in layout order, if any.
    pub fn prev(self) -> Option<Section> {
        let idx = Self::ALL.iter().position(|s| *s == self)?;
        idx.checked_sub(1).map(|i| Self::ALL[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_walk_layout_order() {
        assert_eq!(Section::Hero.next(), Some(Section::About));
        assert_eq!(Section::Experience.next(), None);
        assert_eq!(Section::About.prev(), Some(Section::Hero));
        assert_eq!(Section::Hero.prev(), None);
    }

    #[test]
    fn nav_links_skip_hero() {
        assert!(!Section::NAV.contains(&Section::Hero));
        assert_eq!(Section::NAV.len(), 4);
    }
}
