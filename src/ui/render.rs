use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Focus, Model};

use super::status;

/// Rows reserved below the body for prompt, toast and status bar.
pub fn footer_rows(model: &Model) -> u16 {
    1 + u16::from(model.prompt.is_some()) + u16::from(model.active_toast().is_some())
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    if area.height == 0 {
        return;
    }

    let body_area = Rect {
        height: area.height.saturating_sub(footer_rows(model)),
        ..area
    };
    // Footer bars stack upwards from the bottom row.
    let mut footer_y = area.y + area.height - 1;
    let status_area = Rect {
        y: footer_y,
        height: 1,
        ..area
    };
    let prompt_area = model.prompt.map(|_| {
        footer_y = footer_y.saturating_sub(1);
        Rect {
            y: footer_y,
            height: 1,
            ..area
        }
    });
    let toast_area = model.active_toast().map(|_| Rect {
        y: footer_y.saturating_sub(1),
        height: 1,
        ..area
    });

    render_body(model, frame, body_area);
    if let Some(toast_area) = toast_area {
        status::render_toast_bar(model, frame, toast_area);
    }
    if let Some(prompt_area) = prompt_area {
        status::render_prompt_bar(model, frame, prompt_area);
    }
    status::render_status_bar(model, frame, status_area);

    match (model.focus, prompt_area) {
        (Focus::Status, Some(prompt_area)) => {
            let label = model.prompt.map_or(0, |p| p.label().len());
            let x = prompt_area
                .x
                .saturating_add(to_cells(label + model.status.col() - 1));
            frame.set_cursor_position(Position::new(x, prompt_area.y));
        }
        _ => place_body_cursor(model, frame, body_area),
    }
}

fn render_body(model: &Model, frame: &mut Frame, area: Rect) {
    let visible = model.body.row_count().min(area.height as usize);
    let lines: Vec<Line> = (1..=visible)
        .map(|row| Line::raw(String::from_utf8_lossy(model.body.line(row)).into_owned()))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn place_body_cursor(model: &Model, frame: &mut Frame, area: Rect) {
    let cursor = model.body.cursor();
    // Past the end of its line the cursor has no cell to sit on.
    if cursor.col > model.body.line_length(cursor.row) + 1 {
        return;
    }
    let (dx, dy) = (to_cells(cursor.col - 1), to_cells(cursor.row - 1));
    if dx < area.width && dy < area.height {
        frame.set_cursor_position(Position::new(area.x + dx, area.y + dy));
    }
}

fn to_cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
