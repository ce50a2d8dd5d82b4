use fltk::enums::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error::{AppError, Result};

/// Four color slots a theme provides. Values are `#RRGGBB` hex strings or
/// one of a small set of named colors (the formats the themes config file
/// has always accepted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub text_bg: String,
    pub text_fg: String,
    pub window_bg: String,
    pub filename_bg: String,
}

impl ThemePalette {
    pub fn text_bg(&self) -> Color {
        parse_color(&self.text_bg).unwrap_or(Color::Black)
    }

    pub fn text_fg(&self) -> Color {
        parse_color(&self.text_fg).unwrap_or(Color::White)
    }

    pub fn window_bg(&self) -> Color {
        parse_color(&self.window_bg).unwrap_or(Color::Black)
    }

    pub fn filename_bg(&self) -> Color {
        parse_color(&self.filename_bg).unwrap_or(Color::Black)
    }
}

/// Parse a color string into an FLTK color. Returns None for anything
/// unrecognized so callers can fall back per slot.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::from_rgb(r, g, b));
    }
    match s.to_ascii_lowercase().as_str() {
        "white" => Some(Color::White),
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "blue" => Some(Color::Blue),
        "yellow" => Some(Color::Yellow),
        "cyan" => Some(Color::Cyan),
        "magenta" => Some(Color::Magenta),
        "gray" | "grey" => Some(Color::from_rgb(128, 128, 128)),
        _ => None,
    }
}

/// Named palettes. Ships two built-ins; palettes from the themes config
/// file are merged on top, with the built-ins kept as fallback.
pub struct ThemeRegistry {
    themes: BTreeMap<String, ThemePalette>,
}

impl ThemeRegistry {
    pub fn with_builtins() -> Self {
        let mut themes = BTreeMap::new();
        themes.insert(
            "C64".to_string(),
            ThemePalette {
                text_bg: "#0000AA".to_string(),
                text_fg: "white".to_string(),
                window_bg: "#0000AA".to_string(),
                filename_bg: "#0000AA".to_string(),
            },
        );
        themes.insert(
            "Dark".to_string(),
            ThemePalette {
                text_bg: "#1a1a1a".to_string(),
                text_fg: "#ffffff".to_string(),
                window_bg: "#1a1a1a".to_string(),
                filename_bg: "#1a1a1a".to_string(),
            },
        );
        Self { themes }
    }

    pub fn register(&mut self, name: impl Into<String>, palette: ThemePalette) {
        self.themes.insert(name.into(), palette);
    }

    /// Merge user palettes from the config file. Loaded names override
    /// built-ins of the same name.
    pub fn merge(&mut self, themes: BTreeMap<String, ThemePalette>) {
        for (name, palette) in themes {
            self.themes.insert(name, palette);
        }
    }

    pub fn get(&self, name: &str) -> Result<&ThemePalette> {
        self.themes
            .get(name)
            .ok_or_else(|| AppError::NotFound(format!("theme '{}'", name)))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Theme names in stable (sorted) order, for the picker.
    pub fn names(&self) -> Vec<String> {
        self.themes.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_color("#0000AA"), Some(Color::from_rgb(0, 0, 0xAA)));
        assert_eq!(parse_color("#1a1a1a"), Some(Color::from_rgb(0x1a, 0x1a, 0x1a)));
        assert_eq!(parse_color(" #ffffff "), Some(Color::from_rgb(255, 255, 255)));
    }

    #[test]
    fn test_parse_named_color() {
        assert_eq!(parse_color("white"), Some(Color::White));
        assert_eq!(parse_color("White"), Some(Color::White));
        assert_eq!(parse_color("grey"), Some(Color::from_rgb(128, 128, 128)));
    }

    #[test]
    fn test_parse_color_rejects_garbage() {
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
        assert_eq!(parse_color("chartreuse-ish"), None);
        assert_eq!(parse_color(""), None);
    }

    #[test]
    fn test_builtins_present() {
        let registry = ThemeRegistry::with_builtins();
        assert!(registry.contains("C64"));
        assert!(registry.contains("Dark"));
        assert_eq!(registry.names(), vec!["C64", "Dark"]);
    }

    #[test]
    fn test_get_unknown_theme() {
        let registry = ThemeRegistry::with_builtins();
        let err = registry.get("Solarized").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_merge_overrides_and_extends() {
        let mut registry = ThemeRegistry::with_builtins();
        let mut user = BTreeMap::new();
        user.insert(
            "Dark".to_string(),
            ThemePalette {
                text_bg: "#000000".to_string(),
                text_fg: "#00ff00".to_string(),
                window_bg: "#000000".to_string(),
                filename_bg: "#000000".to_string(),
            },
        );
        user.insert(
            "Paper".to_string(),
            ThemePalette {
                text_bg: "#fdf6e3".to_string(),
                text_fg: "#333333".to_string(),
                window_bg: "#eee8d5".to_string(),
                filename_bg: "#eee8d5".to_string(),
            },
        );
        registry.merge(user);

        assert_eq!(registry.get("Dark").unwrap().text_fg, "#00ff00");
        assert!(registry.contains("Paper"));
        assert!(registry.contains("C64"));
        assert_eq!(registry.names(), vec!["C64", "Dark", "Paper"]);
    }

    #[test]
    fn test_palette_color_fallbacks() {
        let palette = ThemePalette {
            text_bg: "not-a-color".to_string(),
            text_fg: "also-not".to_string(),
            window_bg: "#101010".to_string(),
            filename_bg: "#202020".to_string(),
        };
        assert_eq!(palette.text_bg(), Color::Black);
        assert_eq!(palette.text_fg(), Color::White);
        assert_eq!(palette.window_bg(), Color::from_rgb(0x10, 0x10, 0x10));
    }
}
