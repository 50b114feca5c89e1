//! Mouse click handling

use super::app_state::App;
use crate::layout::Region;

/// Handle a left click on `region`
///
/// Keypad buttons dispatch their action; the displays are not clickable.
pub fn handle_click(app: &mut App, region: Option<Region>) {
    if let Some(Region::Button(action)) = region {
        app.dispatch(action);
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
