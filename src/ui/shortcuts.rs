use fltk::{
    app,
    app::Sender,
    enums::{Event, EventState, Key},
    prelude::*,
    window::Window,
};

use crate::app::messages::Message;

/// Install the keyboard command map on the main window. Keys the focused
/// widget doesn't consume arrive here (as KeyDown or Shortcut) and are
/// translated into channel messages; the dispatch loop does the rest.
pub fn install(wind: &mut Window, sender: Sender<Message>) {
    wind.handle(move |_, ev| {
        if ev != Event::KeyDown && ev != Event::Shortcut {
            return false;
        }

        let state = app::event_state();
        let key = app::event_key();

        // Enter confirms the selection in whichever panel is open;
        // Escape cancels the theme picker
        if key == Key::Enter || key == Key::KPEnter {
            sender.send(Message::ConfirmSelection);
            return true;
        }
        if key == Key::Escape {
            sender.send(Message::CancelThemePicker);
            return true;
        }

        if !state.contains(EventState::Ctrl) {
            return false;
        }

        // Shutdown chord is deliberately awkward: Ctrl+Alt+Shift+S
        if state.contains(EventState::Alt) && state.contains(EventState::Shift) {
            if key == Key::from_char('s') {
                sender.send(Message::Shutdown);
                return true;
            }
            return false;
        }

        if key == Key::F1 {
            sender.send(Message::ForceFocusReset);
            return true;
        }

        let msg = if key == Key::from_char('s') {
            Message::Save
        } else if key == Key::from_char('n') {
            Message::NewFile
        } else if key == Key::from_char('b') {
            Message::ToggleBold
        } else if key == Key::from_char('e') {
            Message::EditFilename
        } else if key == Key::from_char('f') {
            Message::ToggleFileBrowser
        } else if key == Key::from_char('v') {
            Message::LoadSelected
        } else if key == Key::from_char('d') {
            Message::DeleteSelected
        } else if key == Key::from_char('m') {
            Message::SendEmail
        } else if key == Key::from_char('z') {
            Message::Undo
        } else if key == Key::from_char('t') {
            Message::ToggleThemePicker
        } else if key == Key::from_char('h') {
            Message::ToggleHelp
        } else if key == Key::from_char('q') {
            Message::Quit
        } else if key == Key::from_char('=') || key == Key::from_char('+') {
            Message::IncreaseFont
        } else if key == Key::from_char('-') {
            Message::DecreaseFont
        } else {
            return false;
        };

        sender.send(msg);
        true
    });
}
