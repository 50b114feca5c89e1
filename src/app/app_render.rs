use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::app_state::App;
use crate::keypad::render_keypad;
use crate::notification::render_notification;

const ELLIPSIS: char = '…';

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let [expression_area, entry_area, keypad_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_expression(frame, expression_area);
        self.render_entry(frame, entry_area);

        render_keypad(
            frame,
            keypad_area,
            &mut self.layout_regions,
            self.last_action,
        );

        crate::help::help_line_render::render_line(self, frame, help_area);

        if self.help.visible {
            crate::help::help_popup_render::render_popup(self, frame);
        }

        render_notification(frame, &mut self.notification);
    }

    fn render_expression(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner_width = block.inner(area).width as usize;

        let text = fit_right(&self.display().expression, inner_width);
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::Gray))
            .block(block);

        frame.render_widget(paragraph, area);
        self.layout_regions.expression_display = Some(area);
    }

    fn render_entry(&mut self, frame: &mut Frame, area: Rect) {
        let color = if self.calculator().is_error() {
            Color::Red
        } else {
            Color::White
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner_width = block.inner(area).width as usize;

        let text = fit_right(&self.display().entry, inner_width);
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Right)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(block);

        frame.render_widget(paragraph, area);
        self.layout_regions.entry_display = Some(area);
    }
}

/// Keep the right end of `text` within `width` columns
///
/// Long expressions are cut on the left and marked with an ellipsis, so the
/// most recent input stays visible.
pub(super) fn fit_right(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - ELLIPSIS.width().unwrap_or(1);
    let mut used = 0;
    let mut tail: Vec<char> = Vec::new();
    for ch in text.chars().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        tail.push(ch);
    }

    std::iter::once(ELLIPSIS).chain(tail.into_iter().rev()).collect()
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
