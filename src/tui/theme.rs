//! Theme system for consistent indicator colors across dark and light modes.
//!
//! `ColorScheme::Auto` detects the OS theme through the `dark-light` crate.

use ratatui::style::Color;

use crate::config::ColorScheme;

/// Semantic color theme for the indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Border and title color
    pub primary: Color,
    /// Active breakpoint marker and label
    pub accent: Color,
    /// Configuration errors
    pub error: Color,

    /// Primary text content color
    pub text: Color,
    /// Help text and inactive rows
    pub text_muted: Color,

    /// Screen background
    pub background: Color,
    /// Background of the active row
    pub highlight_bg: Color,
    /// Indicator panel background
    pub surface: Color,
}

impl Theme {
    /// Detects the OS theme and returns the matching Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves a configured color scheme to a theme.
    #[must_use]
    pub fn from_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Auto => Self::detect(),
            ColorScheme::Dark => Self::dark(),
            ColorScheme::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            error: Color::Red,

            text: Color::White,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            error: Color::Red,

            text: Color::Black,
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(245, 245, 245),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.background, Color::Black);
        assert_eq!(theme.text, Color::White);
        assert_eq!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_eq!(theme.background, Color::White);
        // Yellow is unreadable on white
        assert_ne!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_theme_from_scheme() {
        assert_eq!(Theme::from_scheme(ColorScheme::Dark), Theme::dark());
        assert_eq!(Theme::from_scheme(ColorScheme::Light), Theme::light());

        let auto = Theme::from_scheme(ColorScheme::Auto);
        assert!(auto == Theme::dark() || auto == Theme::light());
    }

    #[test]
    fn test_active_row_is_distinguishable() {
        for theme in [Theme::dark(), Theme::light()] {
            assert_ne!(theme.highlight_bg, theme.surface);
            assert_ne!(theme.accent, theme.text_muted);
        }
    }
}
