//! Help popup rendering

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::help::{HELP_FOOTER, help_sections};
use crate::widgets::popup;

pub const HELP_POPUP_WIDTH: u16 = 56;

pub fn render_popup(app: &mut App, frame: &mut Frame) {
    let frame_area = frame.area();
    if frame_area.width < 20 || frame_area.height < 8 {
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for section in help_sections(&app.config.keys) {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                section.title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        for (key, desc) in section.entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<14}", key),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(desc, Style::default().fg(Color::White)),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("  {HELP_FOOTER}"),
        Style::default().fg(Color::DarkGray),
    ));

    // Content plus top and bottom border
    let content_height = lines.len() as u16;
    let popup_area = popup::centered_popup(frame_area, HELP_POPUP_WIDTH, content_height + 2);
    app.help
        .update_bounds(content_height, popup_area.height.saturating_sub(2));

    let popup = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keyboard Shortcuts ")
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .scroll((app.help.scroll(), 0));

    popup::clear_area(frame, popup_area);
    frame.render_widget(popup, popup_area);
}
