use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::time::Duration;

use super::app_state::App;
use super::mouse_click;
use crate::clipboard;
use crate::keymap;
use crate::layout::region_at;

/// Redraw at least this often so notifications can expire
const POLL_INTERVAL: Duration = Duration::from_millis(100);

impl App {
    /// Wait briefly for one terminal event and apply it
    pub fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(POLL_INTERVAL)? {
            return Ok(());
        }

        match event::read()? {
            // Press only, release/repeat events would double every key
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        if clipboard::handle_clipboard_key(self, key) {
            return;
        }

        if let Some(action) = keymap::action_for_key(key, &self.config.keys) {
            self.dispatch(action);
        }
    }

    /// Keys that are not calculator input. Returns true if handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // The help popup swallows everything else while open
        if self.help.visible {
            match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.help.close();
                }
                KeyCode::Char('j') | KeyCode::Down => self.help.scroll_down(),
                KeyCode::Char('k') | KeyCode::Up => self.help.scroll_up(),
                _ => {}
            }
            return true;
        }

        match key.code {
            KeyCode::F(1) | KeyCode::Char('?') => {
                self.help.toggle();
                true
            }
            KeyCode::Char('q') if key.modifiers.is_empty() => {
                self.should_quit = true;
                true
            }
            _ => false,
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if self.help.visible {
            self.help.close();
            return;
        }

        let region = region_at(&self.layout_regions, mouse.column, mouse.row);
        mouse_click::handle_click(self, region);
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
