//! Color theme derived from configuration.

use ratatui::style::Color;

use crate::infrastructure::AppConfig;

/// Presentation colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Border color for the focused panel.
    pub accent: Color,
    /// Border color for unfocused panels.
    pub inactive: Color,
    /// Text color for completed items.
    pub done: Color,
}

impl Theme {
    /// Builds a theme from the configured accent color name. Unknown names
    /// fall back to cyan.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            accent: parse_color(&config.accent_color).unwrap_or(Color::Cyan),
            inactive: Color::Gray,
            done: Color::DarkGray,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            inactive: Color::Gray,
            done: Color::DarkGray,
        }
    }
}

fn parse_color(name: &str) -> Option<Color> {
    match name.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        other => other.strip_prefix('#').and_then(|hex| {
            if hex.len() != 6 {
                return None;
            }
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }),
    }
}
