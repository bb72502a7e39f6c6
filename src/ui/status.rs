use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

/// Text of the bottom status bar.
///
/// Body size, combined buffer capacity, and the active text area's line,
/// column and byte offset.
pub fn status_line(model: &Model) -> String {
    let active = model.active();
    format!(
        "File: {} B | Heap: {} B | Ln: {}, Col: {} | Index: {}",
        model.body.len(),
        model.heap_bytes(),
        active.row(),
        active.col(),
        active.current_offset()
    )
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let status_bar = Paragraph::new(status_line(model))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(status_bar, area);
}

pub fn render_prompt_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some(prompt) = model.prompt else {
        return;
    };
    let text = format!(
        "{}{}",
        prompt.label(),
        String::from_utf8_lossy(model.status.as_bytes())
    );
    let bar = Paragraph::new(text).style(Style::default().bg(Color::Blue).fg(Color::White));
    frame.render_widget(bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        crate::app::ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        crate::app::ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        crate::app::ToastLevel::Error => {
            ("[error]", Style::default().bg(Color::Red).fg(Color::White))
        }
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
