//! Color themes

mod tokyo_night;

pub use tokyo_night::TOKYO_NIGHT;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// A color theme for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_tertiary: Color,

    // Foreground colors
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Answer feedback and status
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    /// Inline code spans
    pub code: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
}

impl Theme {
    /// Look up a built-in theme by name (case-insensitive)
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "tokyo night" | "tokyo-night" | "tokyonight" => Some(Self::tokyo_night()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::tokyo_night()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_tokyo_night() {
        assert_eq!(Theme::default().name, "Tokyo Night");
    }

    #[test]
    fn lookup_by_name() {
        assert!(Theme::by_name("tokyo-night").is_some());
        assert!(Theme::by_name("Tokyo Night").is_some());
        assert!(Theme::by_name("dracula").is_none());
    }
}
