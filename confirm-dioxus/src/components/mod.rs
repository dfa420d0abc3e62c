//! UI Components for confirm-dioxus.
//!
//! This module contains the Dioxus components that render confirmation dialogs.

mod dialog;
mod icon;
mod modal_overlay;
mod outlet;

pub use dialog::ConfirmationDialog;
pub use icon::DialogIcon;
pub use modal_overlay::ModalOverlay;
pub use outlet::ConfirmOutlet;
