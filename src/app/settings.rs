use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use super::error::Result;
use super::theme::ThemePalette;

/// Themes config document: a mapping of theme name to palette, stored as
/// `themes.json` under the config dir. Independent from the email config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemesConfig {
    #[serde(default)]
    pub themes: BTreeMap<String, ThemePalette>,
}

impl Default for ThemesConfig {
    fn default() -> Self {
        Self {
            themes: BTreeMap::new(),
        }
    }
}

impl ThemesConfig {
    /// Load from disk, or create the default file if not exists. A malformed
    /// file degrades to defaults; it never fails startup.
    pub fn load() -> Self {
        let config_path = Self::get_config_path();

        match fs::read_to_string(&config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Failed to parse themes config: {}. Using built-ins.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                let _ = default.save();
                default
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, json)?;

        Ok(())
    }

    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("cyberwriter");
        path.push("themes.json");
        path
    }
}

/// Email transport settings, stored as `smtp_config.json` under the config
/// dir. Empty fields disable the email action rather than failing load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailConfig {
    #[serde(default = "default_server")]
    pub server: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub sender_email: String,

    #[serde(default)]
    pub sender_password: String,

    #[serde(default)]
    pub recipient_email: String,
}

fn default_server() -> String {
    "smtp.gmail.com".to_string()
}

fn default_port() -> u16 {
    587
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            port: default_port(),
            sender_email: String::new(),
            sender_password: String::new(),
            recipient_email: String::new(),
        }
    }
}

impl EmailConfig {
    /// Load from disk, or create the template file if not exists.
    pub fn load() -> Self {
        let config_path = Self::get_config_path();

        match fs::read_to_string(&config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Failed to parse SMTP config: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                let default = Self::default();
                let _ = default.save();
                default
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, json)?;

        Ok(())
    }

    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("cyberwriter");
        path.push("smtp_config.json");
        path
    }

    /// Name of the first empty field, if any. All fields must be set before
    /// a send is attempted.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        if self.server.trim().is_empty() {
            Some("server")
        } else if self.sender_email.trim().is_empty() {
            Some("sender_email")
        } else if self.sender_password.trim().is_empty() {
            Some("sender_password")
        } else if self.recipient_email.trim().is_empty() {
            Some("recipient_email")
        } else {
            None
        }
    }

    pub fn is_complete(&self) -> bool {
        self.first_missing_field().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_email_config() {
        let config = EmailConfig::default();
        assert_eq!(config.server, "smtp.gmail.com");
        assert_eq!(config.port, 587);
        assert!(config.sender_email.is_empty());
        assert!(!config.is_complete());
        assert_eq!(config.first_missing_field(), Some("sender_email"));
    }

    #[test]
    fn test_partial_email_config() {
        // Old config missing new fields should still deserialize
        let json = r#"{"sender_email": "me@example.com"}"#;
        let config: EmailConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.server, "smtp.gmail.com"); // default
        assert_eq!(config.port, 587); // default
        assert_eq!(config.sender_email, "me@example.com"); // file value
    }

    #[test]
    fn test_email_config_completeness() {
        let config = EmailConfig {
            server: "smtp.example.com".to_string(),
            port: 587,
            sender_email: "me@example.com".to_string(),
            sender_password: "hunter2".to_string(),
            recipient_email: "you@example.com".to_string(),
        };
        assert!(config.is_complete());

        let blank_recipient = EmailConfig {
            recipient_email: "   ".to_string(),
            ..config
        };
        assert_eq!(blank_recipient.first_missing_field(), Some("recipient_email"));
    }

    #[test]
    fn test_email_config_round_trip() {
        let config = EmailConfig {
            server: "mail.internal".to_string(),
            port: 2525,
            sender_email: "a@b.c".to_string(),
            sender_password: "pw".to_string(),
            recipient_email: "d@e.f".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let loaded: EmailConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_themes_config_deserialization() {
        let json = r##"{
            "themes": {
                "Paper": {
                    "text_bg": "#fdf6e3",
                    "text_fg": "#333333",
                    "window_bg": "#eee8d5",
                    "filename_bg": "#eee8d5"
                }
            }
        }"##;
        let config: ThemesConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.themes.len(), 1);
        assert_eq!(config.themes["Paper"].text_fg, "#333333");
    }

    #[test]
    fn test_themes_config_empty_document() {
        let config: ThemesConfig = serde_json::from_str("{}").unwrap();
        assert!(config.themes.is_empty());
    }
}
