use ratatui::layout::Rect;

use crate::calculator::Action;

/// A clickable or displayed part of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    ExpressionDisplay,
    EntryDisplay,
    Button(Action),
}

/// Where each component was drawn in the last frame
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub expression_display: Option<Rect>,
    pub entry_display: Option<Rect>,
    pub buttons: Vec<(Rect, Action)>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame before rendering a new one
    pub fn clear(&mut self) {
        self.expression_display = None;
        self.entry_display = None;
        self.buttons.clear();
    }

    pub fn add_button(&mut self, area: Rect, action: Action) {
        self.buttons.push((area, action));
    }

    pub fn button_area(&self, action: Action) -> Option<Rect> {
        self.buttons
            .iter()
            .find(|(_, bound)| *bound == action)
            .map(|(area, _)| *area)
    }
}
