/// All messages that can be sent through the FLTK channel.
/// Each key binding sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    // Document
    Save,
    NewFile,
    Undo,

    // Filename field
    EditFilename,
    FinishFilenameEdit,

    // Panels (mutually exclusive)
    ToggleHelp,
    ToggleThemePicker,
    ToggleFileBrowser,

    // Selection handling in the open panel
    ConfirmSelection,
    CancelThemePicker,
    LoadSelected,
    DeleteSelected,

    // Appearance
    ToggleBold,
    IncreaseFont,
    DecreaseFont,

    // Email
    SendEmail,

    // Counters
    BufferModified,

    // Host
    ForceFocusReset,
    Shutdown,
    Quit,
}
