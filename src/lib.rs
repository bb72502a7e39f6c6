// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::TextBuffer)
    clippy::module_name_repetitions
)]

//! # Bytepad
//!
//! A minimal terminal byte editor.
//!
//! Bytepad edits a raw byte buffer with a cursor that is tracked both as a
//! `(row, col)` pair and as a byte offset, and keeps a second single-line
//! buffer for command prompts.
//!
//! ## Architecture
//!
//! Bytepad uses The Elm Architecture (TEA) pattern:
//! - **Model**: Session state (body and status text areas)
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`editor`]: Byte buffer and cursor model
//! - [`input`]: Control byte classification
//! - [`ui`]: Terminal UI components
//! - [`config`]: Persisted default flags
//! - [`perf`]: Timing and debug event log

pub mod app;
pub mod config;
pub mod editor;
pub mod input;
pub mod perf;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::{Cursor, TextArea, TextBuffer};
}
