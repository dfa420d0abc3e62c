//! Keyboard handling for dialogs.

mod confirmation;

pub use confirmation::handle_dialog_key;
