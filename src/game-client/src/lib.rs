//! Screens, input and the fixed-rate loop that plays a match in the terminal.

pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod render;
pub mod runner;
pub mod scene;
pub mod terminal;
