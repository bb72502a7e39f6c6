//! Byte-oriented editing core.
//!
//! Provides a growable byte buffer and a text area that keeps a
//! `(row, col)` cursor and a byte offset in step across edits. No I/O
//! happens here; the application layer drives it and reads its state.

mod buffer;
mod textarea;

pub use buffer::{BufferError, TextBuffer};
pub use textarea::{Cursor, Direction, TextArea};
