//! Dialog UI components.

mod confirmation;

pub use confirmation::ConfirmationDialog;
