//! Terminal UI components.
//!
//! This module contains all rendering code:
//! - the body text with the terminal cursor placed on the active text area
//! - the prompt line, toasts and the bottom status bar

mod render;
mod status;

pub use render::{footer_rows, render};
pub use status::status_line;
