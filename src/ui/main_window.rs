use fltk::{
    browser::HoldBrowser,
    enums::{Align, CallbackTrigger, FrameType},
    frame::Frame,
    group::Flex,
    input::Input,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use fltk::app::Sender;

use crate::app::messages::Message;

pub const HELP_TEXT: &str = "\
Ctrl+H: Toggle Help
Ctrl+S: Save
Ctrl+N: New File
Ctrl+B: Toggle Bold
Ctrl+E: Edit File Name
Ctrl+F: File Browser
Ctrl+V: Load File (in browser)
Ctrl+D: Delete File (in browser)
Ctrl+M: Email Current Text
Ctrl+Z: Undo
Ctrl+Plus/Minus: Change Font Size
Ctrl+T: Toggle Theme Selector
Ctrl+F1: Reset Focus
Ctrl+Alt+Shift+S: Shutdown";

pub const HELP_PANEL_HEIGHT: i32 = 240;
pub const THEME_PANEL_HEIGHT: i32 = 140;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub top_row: Flex,
    pub file_label: Frame,
    pub filename_input: Input,
    pub help_hint: Frame,
    pub word_count: Frame,
    pub char_count: Frame,
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    pub help_view: Frame,
    pub theme_browser: HoldBrowser,
    pub file_browser: HoldBrowser,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 1024, 600, "Cyber Writer");
    wind.set_xclass("CyberWriter");

    let mut flex = Flex::new(0, 0, 1024, 600, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_margin(5);

    // Top row: filename field plus the hint and counter labels
    let mut top_row = Flex::new(0, 0, 0, 0, None);
    top_row.set_type(fltk::group::FlexType::Row);
    flex.fixed(&top_row, 40);

    let file_label = Frame::default().with_label("File Name:");
    top_row.fixed(&file_label, 90);

    let mut filename_input = Input::default();
    filename_input.set_readonly(true);
    filename_input.set_trigger(CallbackTrigger::EnterKey);
    {
        let s = *sender;
        filename_input.set_callback(move |_| s.send(Message::FinishFilenameEdit));
    }

    let help_hint = Frame::default().with_label("Ctrl+H for help");
    top_row.fixed(&help_hint, 120);
    let word_count = Frame::default().with_label("Words: 0");
    top_row.fixed(&word_count, 90);
    let char_count = Frame::default().with_label("Chars: 0");
    top_row.fixed(&char_count, 90);

    top_row.end();

    let buffer = TextBuffer::default();
    let mut editor = TextEditor::new(0, 0, 0, 0, "");
    editor.set_buffer(buffer.clone());
    editor.wrap_mode(WrapMode::AtBounds, 0);

    // Bottom info panel: hosts the help text or the theme picker,
    // collapsed to zero height in Normal mode
    let mut help_view = Frame::default();
    help_view.set_label(HELP_TEXT);
    help_view.set_align(Align::Left | Align::Inside | Align::Top);
    help_view.set_frame(FrameType::FlatBox);
    help_view.hide();
    flex.fixed(&help_view, 0);

    let mut theme_browser = HoldBrowser::new(0, 0, 0, 0, "");
    theme_browser.hide();
    flex.fixed(&theme_browser, 0);

    flex.end();
    wind.resizable(&flex);

    // File browser overlays the editor near the top-right corner,
    // outside the flex so it doesn't participate in the column layout
    let mut file_browser = HoldBrowser::new(1024 - 280, 70, 250, 200, "");
    file_browser.hide();

    wind.end();

    MainWidgets {
        wind,
        flex,
        top_row,
        file_label,
        filename_input,
        help_hint,
        word_count,
        char_count,
        editor,
        buffer,
        help_view,
        theme_browser,
        file_browser,
    }
}
