use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::{App, Message, Model};
use crate::editor::Direction;
use crate::input::{classify_byte, key_to_byte};

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Resize(w, h) => {
                crate::perf::log_event("event.resize", format!("width={w} height={h}"));
                Some(Message::Resize(*w, *h))
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        // Navigation keys have no byte encoding
        match key.code {
            KeyCode::Left => return Some(Message::MoveCursor(Direction::Left)),
            KeyCode::Right => return Some(Message::MoveCursor(Direction::Right)),
            KeyCode::Up => return Some(Message::MoveCursor(Direction::Up)),
            KeyCode::Down => return Some(Message::MoveCursor(Direction::Down)),
            KeyCode::Home => return Some(Message::MoveHome),
            KeyCode::End => return Some(Message::MoveEnd),
            _ => {}
        }

        let byte = key_to_byte(key)?;
        Some(Message::from_input(classify_byte(byte), model.focus))
    }
}
