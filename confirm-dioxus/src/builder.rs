//! Dialog view construction.
//!
//! `build_dialog` turns resolved [`ConfirmOptions`] into a [`DialogView`]
//! tree. Each interactive control carries a typed [`DialogRole`], so event
//! wiring never has to search the rendered markup.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::options::{ConfirmOptions, ConfirmVariant};

static DIALOG_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Unique identifier of a mounted dialog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DialogId(String);

impl DialogId {
    /// Generate a fresh id from the current time.
    ///
    /// A process-wide sequence number is appended so dialogs created within
    /// the same millisecond stay distinct.
    #[must_use]
    pub fn generate() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis());
        let sequence = DIALOG_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("confirm-modal-{millis}-{sequence}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role marker of an interactive control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogRole {
    Confirm,
    Cancel,
    Close,
    ConfirmText,
}

impl DialogRole {
    /// Marker attribute name and value as rendered in the markup.
    #[must_use]
    pub const fn marker(self) -> (&'static str, &'static str) {
        match self {
            Self::Confirm => ("data-action", "confirm"),
            Self::Cancel => ("data-action", "cancel"),
            Self::Close => ("data-action", "close"),
            Self::ConfirmText => ("data-behavior", "confirm-text"),
        }
    }
}

/// Icon shown inside a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Trash can, shown on danger accept buttons.
    Warning,
    /// Cross, shown on the close button.
    Close,
}

/// A clickable control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub role: DialogRole,
    pub label: String,
    pub icon: Option<Icon>,
}

/// The accept control, whose styling follows the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptView {
    pub button: ButtonView,
    pub variant: ConfirmVariant,
    /// Whether the control starts disabled pending typed confirmation.
    pub initially_disabled: bool,
}

/// The typed-confirmation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmInputView {
    pub role: DialogRole,
    /// Exact phrase the user must type.
    pub required: String,
    pub label: String,
    pub placeholder: String,
}

/// Complete view tree of one dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    pub id: DialogId,
    pub message: String,
    pub description: Option<String>,
    pub confirm_input: Option<ConfirmInputView>,
    pub close: ButtonView,
    pub reject: ButtonView,
    pub accept: AcceptView,
}

/// Build the view tree for `options`.
#[must_use]
pub fn build_dialog(id: DialogId, options: &ConfirmOptions) -> DialogView {
    let confirm_input = options
        .confirm_text
        .as_deref()
        .filter(|text| !text.is_empty())
        .map(confirm_input);
    let accept = accept_button(options, confirm_input.is_some());

    DialogView {
        id,
        message: options.message.clone(),
        description: options
            .description
            .as_ref()
            .filter(|description| !description.is_empty())
            .cloned(),
        confirm_input,
        close: ButtonView {
            role: DialogRole::Close,
            label: "Close modal".to_string(),
            icon: Some(Icon::Close),
        },
        reject: ButtonView {
            role: DialogRole::Cancel,
            label: options.reject_label.clone(),
            icon: None,
        },
        accept,
    }
}

fn confirm_input(required: &str) -> ConfirmInputView {
    ConfirmInputView {
        role: DialogRole::ConfirmText,
        required: required.to_string(),
        label: format!("Please type \"{required}\" to confirm."),
        placeholder: required.to_string(),
    }
}

fn accept_button(options: &ConfirmOptions, gated: bool) -> AcceptView {
    let icon = match options.variant {
        ConfirmVariant::Brand => None,
        ConfirmVariant::Danger => Some(Icon::Warning),
    };

    AcceptView {
        button: ButtonView {
            role: DialogRole::Confirm,
            label: options.accept_label.clone(),
            icon,
        },
        variant: options.variant,
        initially_disabled: gated,
    }
}
