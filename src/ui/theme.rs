//! Colour palettes and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

use crate::core::view_state::{ColorScheme, NavVariant};

/// Central theme — one palette per colour scheme; every style derives from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background (alternating sections).
    pub background: Color,
    /// Raised sections and cards.
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(248, 250, 252),
        surface: Color::Rgb(255, 255, 255),
        text: Color::Rgb(31, 41, 55),
        muted: Color::Rgb(75, 85, 99),
        accent: Color::Rgb(37, 99, 235),
        border: Color::Rgb(209, 213, 219),
    };

    pub const DARK: Palette = Palette {
        background: Color::Rgb(17, 24, 39),
        surface: Color::Rgb(31, 41, 55),
        text: Color::Rgb(243, 244, 246),
        muted: Color::Rgb(209, 213, 219),
        accent: Color::Rgb(96, 165, 250),
        border: Color::Rgb(75, 85, 99),
    };

    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::LIGHT,
            ColorScheme::Dark => Self::DARK,
        }
    }

    // ── page ───────────────────────────────────────────────────
    pub fn text_on(&self, bg: Color) -> Style {
        Style::default().fg(self.text).bg(bg)
    }

    pub fn muted_on(&self, bg: Color) -> Style {
        Style::default().fg(self.muted).bg(bg)
    }

    pub fn accent_on(&self, bg: Color) -> Style {
        Style::default().fg(self.accent).bg(bg)
    }

    pub fn heading_on(&self, bg: Color) -> Style {
        self.text_on(bg).add_modifier(Modifier::BOLD)
    }

    pub fn border_on(&self, bg: Color) -> Style {
        Style::default().fg(self.border).bg(bg)
    }

    /// Filled call-to-action button.
    pub fn primary_button(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Outlined button on `bg`.
    pub fn outline_button(&self, bg: Color) -> Style {
        self.accent_on(bg).add_modifier(Modifier::BOLD)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn nav_background(&self, variant: NavVariant) -> Color {
        match variant {
            NavVariant::Transparent => self.background,
            NavVariant::Elevated => self.surface,
        }
    }

    pub fn nav_link(&self, variant: NavVariant) -> Style {
        self.text_on(self.nav_background(variant))
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_shadow(&self) -> Style {
        Style::default().fg(self.border).bg(self.background)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.surface)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.muted).bg(self.surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemes_select_distinct_palettes() {
        assert_eq!(Palette::for_scheme(ColorScheme::Light), Palette::LIGHT);
        assert_eq!(Palette::for_scheme(ColorScheme::Dark), Palette::DARK);
        assert_ne!(Palette::LIGHT.background, Palette::DARK.background);
    }

    #[test]
    fn elevated_nav_sits_on_surface() {
        let p = Palette::LIGHT;
        assert_eq!(p.nav_background(NavVariant::Transparent), p.background);
        assert_eq!(p.nav_background(NavVariant::Elevated), p.surface);
    }
}
