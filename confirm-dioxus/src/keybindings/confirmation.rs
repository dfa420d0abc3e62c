//! Confirmation dialog keybindings.
//!
//! Handles keyboard input while a confirmation dialog has focus. Enter is left
//! to the focused button, which is the reject control after `show`.

use dioxus::prelude::Key;

use crate::controller::{DialogCommand, DismissReason};

/// Map a key press inside a dialog to a command.
#[must_use]
pub fn handle_dialog_key(key: &Key) -> Option<DialogCommand> {
    match key {
        Key::Escape => Some(DialogCommand::Dismiss(DismissReason::Escape)),
        _ => None,
    }
}
