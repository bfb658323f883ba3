//! Stroke color themes.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color used to stroke every branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    White,
    Green,
    Cyan,
    Magenta,
    Yellow,
    Red,
    Blue,
}

impl ColorTheme {
    /// Cycle to the next color theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::White => ColorTheme::Green,
            ColorTheme::Green => ColorTheme::Cyan,
            ColorTheme::Cyan => ColorTheme::Magenta,
            ColorTheme::Magenta => ColorTheme::Yellow,
            ColorTheme::Yellow => ColorTheme::Red,
            ColorTheme::Red => ColorTheme::Blue,
            ColorTheme::Blue => ColorTheme::White,
        }
    }

    /// Convert theme to Ratatui Color.
    pub fn color(self) -> Color {
        match self {
            ColorTheme::White => Color::White,
            ColorTheme::Green => Color::Green,
            ColorTheme::Cyan => Color::Cyan,
            ColorTheme::Magenta => Color::Magenta,
            ColorTheme::Yellow => Color::Yellow,
            ColorTheme::Red => Color::Red,
            ColorTheme::Blue => Color::Blue,
        }
    }

    /// Lowercase name, as written in the config file.
    pub fn name(self) -> &'static str {
        match self {
            ColorTheme::White => "white",
            ColorTheme::Green => "green",
            ColorTheme::Cyan => "cyan",
            ColorTheme::Magenta => "magenta",
            ColorTheme::Yellow => "yellow",
            ColorTheme::Red => "red",
            ColorTheme::Blue => "blue",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_returns_to_start() {
        let mut theme = ColorTheme::default();
        for _ in 0..7 {
            theme = theme.next();
        }
        assert_eq!(theme, ColorTheme::White);
        assert_eq!(ColorTheme::White.next(), ColorTheme::Green);
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(ColorTheme::default().color(), Color::White);
        assert_eq!(ColorTheme::default().name(), "white");
    }
}
