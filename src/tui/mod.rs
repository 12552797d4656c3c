//! Interactive terminal interface
//!
//! Event-driven ratatui application: a key event runs to completion (any
//! mutation persists the store) before the next frame redraws everything
//! from the current collection.

pub mod app;
pub mod dialogs;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use terminal::run_tui;
