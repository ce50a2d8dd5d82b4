use super::store::DocumentStore;

/// Which auxiliary panel is visible. Exactly one mode is active at a time;
/// opening one panel closes any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Normal,
    Help,
    ThemePicker,
    FileBrowser,
}

pub const MIN_FONT_SIZE: i32 = 8;
pub const FONT_STEP: i32 = 2;

/// Explicit session state: the active document's filename, appearance
/// settings, and the current UI mode. One instance lives for the whole
/// application run, owned by the coordinator.
pub struct Session {
    pub filename: String,
    pub theme_name: String,
    pub font_size: i32,
    pub bold: bool,
    pub ui_mode: UiMode,
}

impl Session {
    pub fn new() -> Self {
        Self {
            filename: DocumentStore::default_filename(),
            theme_name: "Dark".to_string(),
            font_size: 12,
            bold: true,
            ui_mode: UiMode::Normal,
        }
    }

    /// Toggle an auxiliary panel: requesting the active mode returns to
    /// Normal, requesting a different one switches directly to it. Returns
    /// the mode now in effect.
    pub fn toggle(&mut self, mode: UiMode) -> UiMode {
        self.ui_mode = if self.ui_mode == mode { UiMode::Normal } else { mode };
        self.ui_mode
    }

    /// Close whatever panel is open.
    pub fn reset_mode(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Adopt a freshly generated filename for a new empty document.
    pub fn start_new_document(&mut self) {
        self.filename = DocumentStore::default_filename();
    }

    pub fn increase_font(&mut self) {
        self.font_size += FONT_STEP;
    }

    pub fn decrease_font(&mut self) {
        if self.font_size - FONT_STEP >= MIN_FONT_SIZE {
            self.font_size -= FONT_STEP;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
