//! Confirmation strategies.
//!
//! A [`ConfirmMethod`] is asked to confirm a pending action before a form
//! submission proceeds. [`ModalConfirm`] answers by mounting a dialog into a
//! [`DialogHost`] and returning a decision that settles when it closes.

use crate::builder::{build_dialog, DialogId};
use crate::controller::{DialogController, ModalOptions};
use crate::decision::{decision_channel, PendingDecision};
use crate::host::DialogHost;
use crate::options::{ConfirmOptions, ElementAttributes, OptionDefaults};

/// Pluggable confirmation step of a submission pipeline.
pub trait ConfirmMethod {
    /// Ask for confirmation of `message`.
    ///
    /// `element` carries the confirmation configuration; `button`, when the
    /// submission came from a specific control, may override it.
    fn confirm(
        &self,
        message: &str,
        element: &ElementAttributes,
        button: Option<&ElementAttributes>,
    ) -> PendingDecision;
}

/// Confirmation through a modal dialog.
#[derive(Debug, Clone)]
pub struct ModalConfirm {
    host: DialogHost,
    defaults: OptionDefaults,
    modal: ModalOptions,
}

impl ModalConfirm {
    #[must_use]
    pub fn new(host: DialogHost) -> Self {
        Self {
            host,
            defaults: OptionDefaults::default(),
            modal: ModalOptions::default(),
        }
    }

    /// Override the labels and variant used when attributes are absent.
    #[must_use]
    pub fn with_defaults(mut self, defaults: OptionDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    #[must_use]
    pub fn with_modal_options(mut self, modal: ModalOptions) -> Self {
        self.modal = modal;
        self
    }

    #[must_use]
    pub fn host(&self) -> &DialogHost {
        &self.host
    }
}

impl ConfirmMethod for ModalConfirm {
    fn confirm(
        &self,
        message: &str,
        element: &ElementAttributes,
        button: Option<&ElementAttributes>,
    ) -> PendingDecision {
        let options = ConfirmOptions::resolve(message, element, button, &self.defaults);
        let view = build_dialog(DialogId::generate(), &options);
        let (resolver, pending) = decision_channel();

        tracing::debug!(
            id = %view.id,
            variant = %options.variant,
            gated = options.requires_typed_confirmation(),
            "requesting confirmation"
        );
        self.host
            .open(DialogController::new(view, self.modal, resolver));
        pending
    }
}
