use crate::app::Model;
use crate::app::model::{Focus, Prompt, ToastLevel};
use crate::editor::Direction;
use crate::input::{Command, UserInput};

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Type a byte into the active text area
    TypeByte(u8),
    /// Delete the byte before the cursor (Backspace)
    RemoveByte,
    /// Move cursor in a direction
    MoveCursor(Direction),
    /// Move cursor to beginning of line (Home)
    MoveHome,
    /// Move cursor to end of line (End)
    MoveEnd,

    // Prompt
    /// Start a find prompt on the status line
    Find,
    /// Start an open-file prompt on the status line
    Open,
    /// Submit the status line input
    SubmitPrompt,
    /// Abandon the prompt and return to the body
    Cancel,

    // File
    /// Save the body buffer
    Save,

    // Window
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Quit the application
    Quit,
}

impl Message {
    /// Turn a classified input byte into a message for the given focus.
    ///
    /// Enter on the status line submits the prompt instead of typing.
    pub const fn from_input(input: UserInput, focus: Focus) -> Self {
        match input {
            UserInput::Byte(b'\n') if matches!(focus, Focus::Status) => Self::SubmitPrompt,
            UserInput::Byte(byte) => Self::TypeByte(byte),
            UserInput::Command(Command::Quit) => Self::Quit,
            UserInput::Command(Command::Open) => Self::Open,
            UserInput::Command(Command::Save) => Self::Save,
            UserInput::Command(Command::RemoveByte) => Self::RemoveByte,
            UserInput::Command(Command::Find) => Self::Find,
            UserInput::Command(Command::Cancel) => Self::Cancel,
        }
    }
}

/// Pure state transition: apply a message to the model.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::TypeByte(byte) => {
            if let Err(err) = model.active_mut().type_byte(byte) {
                tracing::error!(%err, byte, "edit rejected");
                model.show_toast(ToastLevel::Error, format!("Edit failed: {err}"));
            }
        }
        Message::RemoveByte => {
            model.active_mut().remove_byte();
        }
        Message::MoveCursor(dir) => {
            model.active_mut().move_cursor(dir);
        }
        Message::MoveHome => {
            model.active_mut().move_home();
        }
        Message::MoveEnd => {
            model.active_mut().move_end();
        }

        Message::Find => model.open_prompt(Prompt::Find),
        Message::Open => model.open_prompt(Prompt::Open),
        Message::SubmitPrompt => {
            if let Some(prompt) = model.prompt {
                let input = String::from_utf8_lossy(model.status.as_bytes()).into_owned();
                let what = match prompt {
                    Prompt::Find => "Search",
                    Prompt::Open => "Opening files",
                };
                tracing::info!(?prompt, %input, "prompt submitted to unsupported command");
                model.show_toast(ToastLevel::Warning, format!("{what} is not supported yet"));
            }
            model.close_prompt();
        }
        Message::Cancel => model.close_prompt(),

        Message::Save => {
            tracing::info!(bytes = model.body.len(), "save requested but not supported");
            model.show_toast(ToastLevel::Warning, "Saving is not supported yet");
        }

        Message::Resize(width, height) => {
            model.dimensions = (width, height);
        }

        Message::Quit => {
            model.should_quit = true;
        }
    }
    model
}
