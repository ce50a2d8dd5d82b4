pub mod main_window;
pub mod shortcuts;
pub mod theme;
