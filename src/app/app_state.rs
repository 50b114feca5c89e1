use crate::calculator::{Action, Calculator, DisplayBuffer, Session};
use crate::config::Config;
use crate::help::HelpPopupState;
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;

/// Terminal front end state
///
/// The session's render sink is the [`DisplayBuffer`] the UI draws from, so
/// the screen only ever shows what the calculator last pushed to it.
pub struct App {
    pub session: Session<DisplayBuffer>,
    pub config: Config,
    pub help: HelpPopupState,
    pub notification: NotificationState,
    pub layout_regions: LayoutRegions,
    pub last_action: Option<Action>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            session: Session::new(DisplayBuffer::default()),
            config: config.clone(),
            help: HelpPopupState::new(),
            notification: NotificationState::new(),
            layout_regions: LayoutRegions::new(),
            last_action: None,
            should_quit: false,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        self.session.calculator()
    }

    /// What the render sink last received
    pub fn display(&self) -> &DisplayBuffer {
        self.session.sink()
    }

    /// Feed one action to the calculator, from a key or a keypad click
    pub fn dispatch(&mut self, action: Action) {
        log::debug!("dispatch {action}");
        let was_error = self.calculator().is_error();
        self.session.dispatch(action);
        self.last_action = Some(action);

        // Report a failure caused by this action, not one left on screen
        let failed = self.calculator().is_error() && (!was_error || action == Action::Compute);
        if failed && let Some(err) = self.session.calculator().last_error() {
            self.notification.show(&format!("Error: {err}"));
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
