use fltk::{
    app,
    app::Sender,
    browser::HoldBrowser,
    dialog,
    enums::Font,
    frame::Frame,
    group::Flex,
    input::Input,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use super::error::AppError;
use super::mailer;
use super::messages::Message;
use super::session::{Session, UiMode};
use super::settings::EmailConfig;
use super::store::DocumentStore;
use super::text_ops::counts_label;
use super::theme::ThemeRegistry;
use crate::ui::main_window::{HELP_PANEL_HEIGHT, MainWidgets, THEME_PANEL_HEIGHT};
use crate::ui::theme::{Role, StyleBinder, apply_global_palette};

pub struct AppState {
    pub wind: Window,
    pub flex: Flex,
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    pub filename_input: Input,
    pub word_count: Frame,
    pub char_count: Frame,
    pub help_view: Frame,
    pub theme_browser: HoldBrowser,
    pub file_browser: HoldBrowser,
    pub session: Session,
    pub store: DocumentStore,
    pub registry: ThemeRegistry,
    pub email: EmailConfig,
    binder: StyleBinder,
    editing_filename: bool,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        store: DocumentStore,
        registry: ThemeRegistry,
        email: EmailConfig,
        sender: Sender<Message>,
    ) -> Self {
        let MainWidgets {
            wind,
            flex,
            top_row,
            file_label,
            filename_input,
            help_hint,
            word_count,
            char_count,
            editor,
            mut buffer,
            help_view,
            theme_browser,
            file_browser,
        } = widgets;

        buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                sender.send(Message::BufferModified);
            }
        });

        // Each element registers its semantic role once; theme changes
        // re-resolve the bindings instead of walking the widget tree.
        let mut binder = StyleBinder::new();
        binder.bind(Role::Container, &wind);
        binder.bind(Role::Container, &flex);
        binder.bind(Role::Container, &top_row);
        binder.bind(Role::Label, &file_label);
        binder.bind(Role::Label, &help_hint);
        binder.bind(Role::Label, &word_count);
        binder.bind(Role::Label, &char_count);
        binder.bind(Role::Label, &help_view);
        binder.bind(Role::List, &theme_browser);
        binder.bind(Role::List, &file_browser);
        {
            let mut editor = editor.clone();
            binder.bind_with(move |p| {
                editor.set_color(p.text_bg());
                editor.set_text_color(p.text_fg());
                editor.set_cursor_color(p.text_fg());
            });
        }
        {
            let mut input = filename_input.clone();
            binder.bind_with(move |p| {
                input.set_color(p.filename_bg());
                input.set_text_color(p.text_fg());
                input.set_cursor_color(p.text_fg());
            });
        }

        let session = Session::new();

        let mut state = Self {
            wind,
            flex,
            editor,
            buffer,
            filename_input,
            word_count,
            char_count,
            help_view,
            theme_browser,
            file_browser,
            session,
            store,
            registry,
            email,
            binder,
            editing_filename: false,
        };

        state.filename_input.set_value(&state.session.filename);
        state.update_font();
        state.apply_theme(&state.session.theme_name.clone());
        state.update_counts();
        state
    }

    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::Save => self.save_file(),
            Message::NewFile => self.new_file(),
            Message::Undo => self.editor.undo(),
            Message::EditFilename => self.edit_filename(),
            Message::FinishFilenameEdit => self.finish_filename_edit(),
            Message::ToggleHelp => self.toggle_panel(UiMode::Help),
            Message::ToggleThemePicker => self.toggle_panel(UiMode::ThemePicker),
            Message::ToggleFileBrowser => self.toggle_panel(UiMode::FileBrowser),
            Message::ConfirmSelection => self.confirm_selection(),
            Message::CancelThemePicker => self.cancel_theme_picker(),
            Message::LoadSelected => self.load_selected(),
            Message::DeleteSelected => self.delete_selected(),
            Message::ToggleBold => {
                self.session.bold = !self.session.bold;
                self.update_font();
            }
            Message::IncreaseFont => {
                self.session.increase_font();
                self.update_font();
            }
            Message::DecreaseFont => {
                self.session.decrease_font();
                self.update_font();
            }
            Message::SendEmail => self.email_text(),
            Message::BufferModified => self.update_counts(),
            Message::ForceFocusReset => self.force_focus_reset(),
            Message::Shutdown => self.shutdown_host(),
            Message::Quit => app::quit(),
        }
    }

    // --- Document operations ---

    fn save_file(&mut self) {
        let content = self.buffer.text().trim().to_string();
        let filename = self.filename_input.value();
        match self.store.save(&filename, &content) {
            Ok(written) => {
                self.session.filename = written.clone();
                self.filename_input.set_value(&written);
            }
            Err(e) => dialog::alert_default(&format!("Error saving file: {}", e)),
        }
        let _ = self.editor.take_focus();
    }

    fn new_file(&mut self) {
        self.buffer.set_text("");
        self.session.start_new_document();
        self.filename_input.set_value(&self.session.filename);
        self.update_counts();
        let _ = self.editor.take_focus();
    }

    fn load_selected(&mut self) {
        if self.session.ui_mode != UiMode::FileBrowser {
            return;
        }
        let Some(name) = self.browser_selection() else {
            return;
        };
        match self.store.load(&name) {
            Ok(content) => {
                self.buffer.set_text(&content);
                self.session.filename = name.clone();
                self.filename_input.set_value(&name);
                self.session.reset_mode();
                self.sync_panels();
                self.update_counts();
            }
            // Active document stays untouched on failure
            Err(e) => dialog::alert_default(&format!("Error loading file '{}': {}", name, e)),
        }
    }

    fn delete_selected(&mut self) {
        if self.session.ui_mode != UiMode::FileBrowser {
            return;
        }
        let Some(name) = self.browser_selection() else {
            dialog::message_default("No file selected.");
            return;
        };
        if dialog::choice2_default(&format!("Delete '{}'?", name), "Delete", "Cancel", "")
            != Some(0)
        {
            return;
        }
        match self.store.delete(&name, &self.session.filename) {
            Ok(()) => {
                self.buffer.set_text("");
                self.session.start_new_document();
                self.filename_input.set_value(&self.session.filename);
                self.populate_file_browser();
                self.update_counts();
            }
            Err(e @ AppError::Permission(_)) => dialog::alert_default(&e.to_string()),
            Err(e) => dialog::alert_default(&format!("Error deleting file: {}", e)),
        }
    }

    fn browser_selection(&self) -> Option<String> {
        let line = self.file_browser.value();
        if line <= 0 {
            return None;
        }
        self.file_browser.text(line)
    }

    // --- Filename editing ---

    fn edit_filename(&mut self) {
        self.editing_filename = true;
        self.filename_input.set_readonly(false);
        let _ = self.filename_input.take_focus();
    }

    fn finish_filename_edit(&mut self) {
        if !self.editing_filename {
            return;
        }
        self.editing_filename = false;
        self.session.filename = self.filename_input.value();
        self.filename_input.set_readonly(true);
        let _ = self.editor.take_focus();
    }

    // --- Panels ---

    fn toggle_panel(&mut self, mode: UiMode) {
        self.session.toggle(mode);
        self.sync_panels();
    }

    fn confirm_selection(&mut self) {
        if self.editing_filename {
            self.finish_filename_edit();
            return;
        }
        match self.session.ui_mode {
            UiMode::ThemePicker => self.apply_selected_theme(),
            UiMode::FileBrowser => self.load_selected(),
            UiMode::Normal | UiMode::Help => {}
        }
    }

    fn cancel_theme_picker(&mut self) {
        if self.session.ui_mode == UiMode::ThemePicker {
            self.session.reset_mode();
            self.sync_panels();
        }
    }

    fn sync_panels(&mut self) {
        self.help_view.hide();
        self.flex.fixed(&self.help_view, 0);
        self.theme_browser.hide();
        self.flex.fixed(&self.theme_browser, 0);
        self.file_browser.hide();

        match self.session.ui_mode {
            UiMode::Normal => {
                let _ = self.editor.take_focus();
            }
            UiMode::Help => {
                self.help_view.show();
                self.flex.fixed(&self.help_view, HELP_PANEL_HEIGHT);
                let _ = self.editor.take_focus();
            }
            UiMode::ThemePicker => {
                self.populate_theme_browser();
                self.theme_browser.show();
                self.flex.fixed(&self.theme_browser, THEME_PANEL_HEIGHT);
                let _ = self.theme_browser.take_focus();
            }
            UiMode::FileBrowser => {
                self.populate_file_browser();
                self.file_browser
                    .resize(self.wind.w() - 280, 70, 250, 200);
                self.file_browser.show();
                let _ = self.file_browser.take_focus();
            }
        }

        // Force the flex column to pick up the new fixed sizes
        let (x, y, w, h) = (self.flex.x(), self.flex.y(), self.flex.w(), self.flex.h());
        self.flex.resize(x, y, w, h);
        app::redraw();
    }

    fn populate_file_browser(&mut self) {
        self.file_browser.clear();
        match self.store.list() {
            Ok(names) => {
                for name in &names {
                    self.file_browser.add(name);
                }
                if !names.is_empty() {
                    self.file_browser.select(1);
                }
            }
            Err(e) => dialog::alert_default(&format!("Error listing files: {}", e)),
        }
    }

    fn populate_theme_browser(&mut self) {
        self.theme_browser.clear();
        for (i, name) in self.registry.names().iter().enumerate() {
            self.theme_browser.add(name);
            if *name == self.session.theme_name {
                self.theme_browser.select(i as i32 + 1);
            }
        }
    }

    // --- Theme ---

    fn apply_selected_theme(&mut self) {
        let line = self.theme_browser.value();
        let Some(name) = (line > 0).then(|| self.theme_browser.text(line)).flatten() else {
            return;
        };
        self.apply_theme(&name);
        self.session.reset_mode();
        self.sync_panels();
    }

    pub fn apply_theme(&mut self, name: &str) {
        match self.registry.get(name) {
            Ok(palette) => {
                let palette = palette.clone();
                apply_global_palette(&palette);
                self.binder.apply(&palette);
                self.session.theme_name = name.to_string();
                app::redraw();
            }
            Err(e) => dialog::alert_default(&e.to_string()),
        }
    }

    // --- Appearance ---

    fn update_font(&mut self) {
        let font = if self.session.bold {
            Font::CourierBold
        } else {
            Font::Courier
        };
        self.editor.set_text_font(font);
        self.editor.set_text_size(self.session.font_size);
        self.editor.redraw();
    }

    fn update_counts(&mut self) {
        let text = self.buffer.text();
        let (words, chars) = counts_label(&text);
        self.word_count.set_label(&words);
        self.char_count.set_label(&chars);
    }

    // --- Email ---

    fn email_text(&mut self) {
        let content = self.buffer.text().trim().to_string();
        let subject = mailer::subject_for(&self.session.filename);
        match mailer::send(&self.email, &subject, &content) {
            Ok(()) => dialog::message_default("Email Sent"),
            Err(e @ AppError::Config(_)) => {
                dialog::message_default(&format!(
                    "Email not configured: {}. Fill in {}.",
                    e,
                    EmailConfig::get_config_path().display()
                ));
            }
            Err(e) => dialog::alert_default(&e.to_string()),
        }
        let _ = self.editor.take_focus();
    }

    // --- Host ---

    fn force_focus_reset(&mut self) {
        self.session.reset_mode();
        self.editing_filename = false;
        self.filename_input.set_readonly(true);
        self.sync_panels();
    }

    fn shutdown_host(&mut self) {
        if dialog::choice2_default(
            "Are you sure you want to shut down the system?",
            "Shut Down",
            "Cancel",
            "",
        ) != Some(0)
        {
            return;
        }
        let result = if cfg!(target_os = "windows") {
            std::process::Command::new("shutdown")
                .args(["/s", "/t", "0"])
                .spawn()
        } else {
            std::process::Command::new("shutdown").arg("now").spawn()
        };
        if let Err(e) = result {
            dialog::alert_default(&format!("Shutdown failed: {}", e));
        }
    }
}
