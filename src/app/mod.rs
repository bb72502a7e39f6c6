//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete session state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Focus, Model, Prompt, ToastLevel};
pub use update::{Message, update};

/// Default body buffer capacity in bytes.
pub const DEFAULT_BODY_CAPACITY: usize = 128;
/// Default status line buffer capacity in bytes.
pub const DEFAULT_STATUS_CAPACITY: usize = 32;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    body_capacity: usize,
    status_capacity: usize,
}

impl App {
    /// Create an application with default buffer capacities.
    pub const fn new() -> Self {
        Self {
            body_capacity: DEFAULT_BODY_CAPACITY,
            status_capacity: DEFAULT_STATUS_CAPACITY,
        }
    }

    /// Set the initial capacity of the body buffer.
    pub const fn with_body_capacity(mut self, capacity: usize) -> Self {
        self.body_capacity = capacity;
        self
    }

    /// Set the initial capacity of the status line buffer.
    pub const fn with_status_capacity(mut self, capacity: usize) -> Self {
        self.status_capacity = capacity;
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
