//! Cyber Writer: a minimalist distraction-free journaling pad.
//!
//! The `app` module holds the testable core (document store, themes,
//! session state machine, email); `ui` holds the FLTK widget layer.

pub mod app;
pub mod ui;
