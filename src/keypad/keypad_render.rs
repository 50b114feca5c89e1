use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::{ButtonKind, KEYPAD_COLUMNS, KEYPAD_ROWS, KeypadButton};
use crate::calculator::Action;
use crate::layout::LayoutRegions;

/// Render the keypad grid and record each button's area for mouse clicks
///
/// `pressed` highlights the button for the most recent action.
pub fn render_keypad(
    frame: &mut Frame,
    area: Rect,
    regions: &mut LayoutRegions,
    pressed: Option<Action>,
) {
    let rows = Layout::vertical(vec![Constraint::Ratio(1, KEYPAD_ROWS.len() as u32); KEYPAD_ROWS.len()])
        .split(area);

    for (row, row_area) in KEYPAD_ROWS.iter().zip(rows.iter()) {
        let cells = Layout::horizontal(vec![
            Constraint::Ratio(1, KEYPAD_COLUMNS as u32);
            KEYPAD_COLUMNS
        ])
        .split(*row_area);

        for (button, cell) in row.iter().zip(cells.iter()) {
            render_button(frame, *cell, button, pressed == Some(button.action));
            regions.add_button(*cell, button.action);
        }
    }
}

fn button_color(kind: ButtonKind) -> Color {
    match kind {
        ButtonKind::Number => Color::White,
        ButtonKind::Operator => Color::Yellow,
        ButtonKind::Function => Color::Cyan,
        ButtonKind::Control => Color::Red,
        ButtonKind::Compute => Color::Green,
    }
}

fn render_button(frame: &mut Frame, area: Rect, button: &KeypadButton, pressed: bool) {
    let color = button_color(button.kind());

    let (border_style, label_style) = if pressed {
        (
            Style::default().fg(color),
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    // Center the label vertically inside the border
    let inner = block.inner(area);
    let padding = inner.height.saturating_sub(1) / 2;
    let mut lines = vec![ratatui::text::Line::default(); padding as usize];
    lines.push(ratatui::text::Line::styled(button.label, label_style));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}
