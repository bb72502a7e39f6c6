use std::time::{Duration, Instant};

use crate::editor::{BufferError, TextArea};

/// Which text area receives typed bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Body,
    Status,
}

/// What the status line is collecting input for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Find,
    Open,
}

impl Prompt {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Find => "find: ",
            Self::Open => "open: ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete editing session state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug)]
pub struct Model {
    /// The multi-line document
    pub body: TextArea,
    /// The single-line command input
    pub status: TextArea,
    /// Text area receiving input
    pub focus: Focus,
    /// Active prompt while the status line has focus
    pub prompt: Option<Prompt>,
    /// Last reported terminal size as (columns, rows).
    ///
    /// Kept current by `Message::Resize`; drawing lays out from the
    /// frame area it is handed instead.
    pub dimensions: (u16, u16),
    /// Whether the session should end
    pub should_quit: bool,
    toast: Option<Toast>,
}

impl Model {
    /// Create a session with freshly allocated body and status buffers.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfMemory`] if either buffer cannot be
    /// allocated.
    pub fn new(
        body_capacity: usize,
        status_capacity: usize,
        dimensions: (u16, u16),
    ) -> Result<Self, BufferError> {
        Ok(Self {
            body: TextArea::new(body_capacity, true)?,
            status: TextArea::new(status_capacity, false)?,
            focus: Focus::Body,
            prompt: None,
            dimensions,
            should_quit: false,
            toast: None,
        })
    }

    /// The text area that currently has focus.
    pub const fn active(&self) -> &TextArea {
        match self.focus {
            Focus::Body => &self.body,
            Focus::Status => &self.status,
        }
    }

    pub const fn active_mut(&mut self) -> &mut TextArea {
        match self.focus {
            Focus::Body => &mut self.body,
            Focus::Status => &mut self.status,
        }
    }

    /// Combined buffer capacity of both text areas, in bytes.
    pub const fn heap_bytes(&self) -> usize {
        self.body.capacity() + self.status.capacity()
    }

    /// Focus the status line with an empty prompt.
    pub(super) fn open_prompt(&mut self, prompt: Prompt) {
        self.status.clear();
        self.prompt = Some(prompt);
        self.focus = Focus::Status;
    }

    /// Return focus to the body, discarding the prompt input.
    pub(super) fn close_prompt(&mut self) {
        self.status.clear();
        self.prompt = None;
        self.focus = Focus::Body;
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self {
            body: TextArea::empty(true),
            status: TextArea::empty(false),
            focus: Focus::Body,
            prompt: None,
            dimensions: (80, 24),
            should_quit: false,
            toast: None,
        }
    }
}
