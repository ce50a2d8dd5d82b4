//! Application layer.
//!
//! # Structure
//!
//! - `store` - flat-file document persistence
//! - `theme` - named color palettes
//! - `settings` - the two JSON config documents (themes, SMTP)
//! - `session` - UI mode state machine and appearance state
//! - `mailer` - outbound email
//! - `state` - main application coordinator

pub mod error;
pub mod mailer;
pub mod messages;
pub mod session;
pub mod settings;
pub mod state;
pub mod store;
pub mod text_ops;
pub mod theme;

// Re-exports for convenient external access
pub use error::{AppError, Result};
pub use messages::Message;
pub use session::{Session, UiMode};
pub use settings::{EmailConfig, ThemesConfig};
pub use store::DocumentStore;
pub use theme::{ThemePalette, ThemeRegistry};
