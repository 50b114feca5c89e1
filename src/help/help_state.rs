#[derive(Debug, Clone, Default)]
pub struct HelpPopupState {
    pub visible: bool,
    scroll: u16,
    max_scroll: u16,
}

impl HelpPopupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        self.scroll = 0;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.scroll = 0;
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Record how far the popup can scroll for the last rendered size
    pub fn update_bounds(&mut self, content_height: u16, visible_height: u16) {
        self.max_scroll = content_height.saturating_sub(visible_height);
        self.scroll = self.scroll.min(self.max_scroll);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = (self.scroll + 1).min(self.max_scroll);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}
