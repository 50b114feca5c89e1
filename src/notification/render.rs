use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::NotificationState;
use crate::widgets::popup;

/// Draw the current notification in the top-right corner
///
/// Expired notifications are cleared first, so nothing is drawn for them.
pub fn render_notification(frame: &mut Frame, state: &mut NotificationState) {
    state.clear_if_expired();

    let Some(notification) = state.current() else {
        return;
    };

    // Message plus borders and one space of padding on each side
    let width = (notification.message.width() as u16).saturating_add(4);
    let area = popup::top_right_popup(frame.area(), width, 3);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let paragraph = Paragraph::new(format!(" {} ", notification.message))
        .style(Style::default().fg(Color::Yellow))
        .block(block);

    popup::clear_area(frame, area);
    frame.render_widget(paragraph, area);
}
