//! # Theme System
//!
//! Color palettes for the light and dark page themes.
//!
//! ## Overview
//!
//! The [`Theme`] struct defines all colors used throughout the UI. Rendering
//! code references theme fields instead of hardcoding
//! `ratatui::style::Color` values. The active theme follows the persisted
//! dark-mode flag.
//!
//! - **Light** - Catppuccin Latte
//! - **Dark** - Catppuccin Mocha

use ratatui::style::Color;

/// All colors used by the TUI, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name.
    pub name: &'static str,

    // -- Background colors --
    /// Main background color for the page and overlays.
    pub bg: Color,
    /// Raised surfaces: highlighted menu items, message bubbles.
    pub surface: Color,

    // -- Foreground / text colors --
    /// Primary text color.
    pub fg: Color,
    /// Muted/secondary text (e.g. hints, footer, timestamps).
    pub fg_dim: Color,

    // -- Accent colors --
    /// Titles, focused borders, bot messages.
    pub accent: Color,
    /// Section headings, accordion headers.
    pub secondary: Color,
    /// User messages and the chat button.
    pub success: Color,
}

impl Theme {
    pub fn light() -> &'static Theme {
        &LIGHT
    }

    pub fn dark() -> &'static Theme {
        &DARK
    }

    pub fn for_mode(dark_mode: bool) -> &'static Theme {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

static LIGHT: Theme = Theme {
    name: "Light",
    bg: Color::Rgb(239, 241, 245),        // base
    surface: Color::Rgb(204, 208, 218),   // surface0
    fg: Color::Rgb(76, 79, 105),          // text
    fg_dim: Color::Rgb(156, 160, 176),    // overlay0
    accent: Color::Rgb(30, 102, 245),     // blue
    secondary: Color::Rgb(136, 57, 239),  // mauve
    success: Color::Rgb(64, 160, 43),     // green
};

static DARK: Theme = Theme {
    name: "Dark",
    bg: Color::Rgb(30, 30, 46),           // base
    surface: Color::Rgb(49, 50, 68),      // surface0
    fg: Color::Rgb(205, 214, 244),        // text
    fg_dim: Color::Rgb(108, 112, 134),    // overlay0
    accent: Color::Rgb(137, 180, 250),    // blue
    secondary: Color::Rgb(203, 166, 247), // mauve
    success: Color::Rgb(166, 227, 161),   // green
};

// Verify the themes use the actual Catppuccin palette values.
#[cfg(test)]
mod tests {
    use super::*;

    /// Convert a catppuccin color to a ratatui Color via its RGB values.
    fn ctp(color: catppuccin::Color) -> Color {
        Color::Rgb(color.rgb.r, color.rgb.g, color.rgb.b)
    }

    #[test]
    fn test_for_mode() {
        assert_eq!(Theme::for_mode(true).name, "Dark");
        assert_eq!(Theme::for_mode(false).name, "Light");
    }

    #[test]
    fn test_light_matches_latte() {
        let latte = catppuccin::PALETTE.latte.colors;
        let theme = Theme::light();
        assert_eq!(theme.bg, ctp(latte.base));
        assert_eq!(theme.surface, ctp(latte.surface0));
        assert_eq!(theme.fg, ctp(latte.text));
        assert_eq!(theme.fg_dim, ctp(latte.overlay0));
        assert_eq!(theme.accent, ctp(latte.blue));
        assert_eq!(theme.secondary, ctp(latte.mauve));
        assert_eq!(theme.success, ctp(latte.green));
    }

    #[test]
    fn test_dark_matches_mocha() {
        let mocha = catppuccin::PALETTE.mocha.colors;
        let theme = Theme::dark();
        assert_eq!(theme.bg, ctp(mocha.base));
        assert_eq!(theme.surface, ctp(mocha.surface0));
        assert_eq!(theme.fg, ctp(mocha.text));
        assert_eq!(theme.fg_dim, ctp(mocha.overlay0));
        assert_eq!(theme.accent, ctp(mocha.blue));
        assert_eq!(theme.secondary, ctp(mocha.mauve));
        assert_eq!(theme.success, ctp(mocha.green));
    }
}
