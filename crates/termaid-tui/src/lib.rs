//! termaid-tui - Terminal UI for termaid
//!
//! Renders the terminal and chat panes with ratatui, turns crossterm events
//! into app messages, and drives the session loop from termaid-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::{run, run_with_backend};
