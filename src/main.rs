use chrono::Local;
use fltk::prelude::*;
use fltk::{app, dialog};

use cyber_writer::app::messages::Message;
use cyber_writer::app::settings::{EmailConfig, ThemesConfig};
use cyber_writer::app::state::AppState;
use cyber_writer::app::store::DocumentStore;
use cyber_writer::app::theme::ThemeRegistry;
use cyber_writer::ui::{main_window, shortcuts};

/// Append a fatal failure to error.log next to the executable's working
/// directory. Best effort; called from the panic hook.
fn log_fatal(detail: &str) {
    use std::io::Write;
    if let Ok(mut file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("error.log")
    {
        let _ = writeln!(
            file,
            "{}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            detail
        );
    }
}

fn main() {
    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log_fatal(&format!("{}\n{}", info, backtrace));
        eprintln!("Unhandled exception occurred: {}", info);
    }));

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    // Both config documents degrade to defaults when malformed
    let themes_config = ThemesConfig::load();
    let mut registry = ThemeRegistry::with_builtins();
    registry.merge(themes_config.themes);
    let email = EmailConfig::load();

    let store = match DocumentStore::open_default() {
        Ok(store) => store,
        Err(e) => {
            dialog::alert_default(&format!("Cannot open the writing directory: {}", e));
            std::process::exit(1);
        }
    };

    let mut widgets = main_window::build_main_window(&sender);
    shortcuts::install(&mut widgets.wind, sender);
    {
        let s = sender;
        // Escape is consumed by the key map, so this only fires for a
        // real close request
        widgets.wind.set_callback(move |_| s.send(Message::Quit));
    }

    let mut state = AppState::new(widgets, store, registry, email, sender);
    state.wind.show();

    // One-shot deferred callback to normalize initial focus once the
    // window is mapped
    app::add_timeout3(0.1, move |_| sender.send(Message::ForceFocusReset));

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            state.handle(msg);
        }
    }
}
