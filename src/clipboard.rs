//! Copying the current entry to the clipboard

mod backend;
mod clipboard_events;
mod osc52;
mod system;

pub use backend::{ClipboardError, ClipboardResult, copy_to_clipboard};
pub use clipboard_events::handle_clipboard_key;
pub use osc52::encode_osc52;
