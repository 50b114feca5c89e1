use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::App;

/// Render the key hint line at the bottom of the screen
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let keys = &app.config.keys;
    let help_text = format!(
        " F1/?: Help | {}: √ | {}: x² | {}: ± | Ctrl+Y: Copy | Esc: Clear | q: Quit",
        keys.square_root, keys.square, keys.toggle_sign
    );

    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
