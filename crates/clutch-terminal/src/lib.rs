//! Terminal frontend for Clutch Club.
//!
//! Wraps the headless [`clutch_app`] core in a ratatui interface: a sign-in
//! gate followed by five screens behind a number-key navigation bar. All
//! state changes go through [`clutch_app::Intent`] values produced by the
//! screens, so the interface layer stays a thin view over the core.

pub mod config;
pub mod location;
pub mod tui;
