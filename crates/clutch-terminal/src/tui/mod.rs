//! Terminal user interface: shell, screens, widgets and styling.

pub mod app;
pub mod components;
pub mod input;
pub mod screens;
pub mod styles;

pub use app::{AppEvent, TuiApp};
