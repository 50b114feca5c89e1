//! Key binding help: popup table and the hint line under the keypad

mod help_content;
pub mod help_line_render;
pub mod help_popup_render;
mod help_state;

pub use help_content::{HELP_FOOTER, HelpSection, help_sections};
pub use help_state::HelpPopupState;
