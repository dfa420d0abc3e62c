//! Per-dialog state machine.
//!
//! A [`DialogController`] moves through `Created → Mounted → Shown → Hidden`.
//! Every dismissal path (accept, reject, close, backdrop, escape) converges on
//! the same hide transition, which hands out a [`Teardown`] exactly once.

use serde::Deserialize;

use crate::builder::{DialogId, DialogRole, DialogView};
use crate::decision::DecisionResolver;

/// How the modal reacts to clicks outside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backdrop {
    /// Clicking the backdrop dismisses the modal.
    #[default]
    Dynamic,
    /// Backdrop clicks are ignored.
    Static,
}

/// Modal widget configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModalOptions {
    pub backdrop: Backdrop,
    /// Whether Escape closes the modal.
    pub closable: bool,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            backdrop: Backdrop::Dynamic,
            closable: true,
        }
    }
}

/// Lifecycle phase of a dialog instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    Created,
    Mounted,
    Shown,
    /// Terminal. The instance never reopens.
    Hidden,
}

/// Dismissals that do not go through a dialog control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Backdrop,
    Escape,
}

/// Which path triggered the hide transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideReason {
    Accept,
    Reject,
    Close,
    Backdrop,
    Escape,
}

impl From<DismissReason> for HideReason {
    fn from(reason: DismissReason) -> Self {
        match reason {
            DismissReason::Backdrop => Self::Backdrop,
            DismissReason::Escape => Self::Escape,
        }
    }
}

/// User interactions a dialog responds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogCommand {
    Accept,
    Reject,
    Close,
    Dismiss(DismissReason),
    /// New value of the confirm-text input.
    Input(String),
}

impl DialogCommand {
    /// Command issued by activating the control with `role`.
    ///
    /// The confirm-text input issues [`DialogCommand::Input`] on change instead.
    #[must_use]
    pub fn for_role(role: DialogRole) -> Option<Self> {
        match role {
            DialogRole::Confirm => Some(Self::Accept),
            DialogRole::Cancel => Some(Self::Reject),
            DialogRole::Close => Some(Self::Close),
            DialogRole::ConfirmText => None,
        }
    }
}

/// Outcome of the hide transition, carrying the resolver to settle.
#[derive(Debug)]
#[must_use = "a teardown must be settled to deliver the decision"]
pub struct Teardown {
    pub id: DialogId,
    pub reason: HideReason,
    pub confirmed: bool,
    resolver: DecisionResolver,
}

impl Teardown {
    /// Deliver the recorded decision to the awaiting caller.
    pub fn settle(self) {
        tracing::debug!(
            id = %self.id,
            reason = ?self.reason,
            confirmed = self.confirmed,
            "settling confirmation"
        );
        self.resolver.resolve(self.confirmed);
    }
}

/// Render state of a dialog, as consumed by the components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogSnapshot {
    pub view: DialogView,
    pub modal: ModalOptions,
    pub input: String,
    pub accept_enabled: bool,
    pub focused: Option<DialogRole>,
}

/// State machine for one dialog instance.
#[derive(Debug)]
pub struct DialogController {
    view: DialogView,
    modal: ModalOptions,
    phase: DialogPhase,
    confirmed: bool,
    input: String,
    accept_enabled: bool,
    focused: Option<DialogRole>,
    resolver: Option<DecisionResolver>,
}

impl DialogController {
    /// Create a controller in the `Created` phase.
    ///
    /// When the view carries a confirm-text input the accept control starts
    /// disabled.
    pub fn new(view: DialogView, modal: ModalOptions, resolver: DecisionResolver) -> Self {
        let accept_enabled = !view.accept.initially_disabled;
        Self {
            view,
            modal,
            phase: DialogPhase::Created,
            confirmed: false,
            input: String::new(),
            accept_enabled,
            focused: None,
            resolver: Some(resolver),
        }
    }

    #[must_use]
    pub fn id(&self) -> &DialogId {
        &self.view.id
    }

    #[must_use]
    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    #[must_use]
    pub fn accept_enabled(&self) -> bool {
        self.accept_enabled
    }

    #[must_use]
    pub fn focused(&self) -> Option<DialogRole> {
        self.focused
    }

    /// `Created → Mounted`.
    pub fn mount(&mut self) {
        if self.phase == DialogPhase::Created {
            self.phase = DialogPhase::Mounted;
            tracing::debug!(id = %self.view.id, "dialog mounted");
        }
    }

    /// `Mounted → Shown`, moving focus to the reject control.
    pub fn show(&mut self) {
        if self.phase == DialogPhase::Mounted {
            self.phase = DialogPhase::Shown;
            self.focused = Some(self.view.reject.role);
            tracing::debug!(id = %self.view.id, gated = !self.accept_enabled, "dialog shown");
        }
    }

    /// Apply a user interaction. Returns the teardown when it hid the dialog.
    pub fn apply(&mut self, command: DialogCommand) -> Option<Teardown> {
        if self.phase != DialogPhase::Shown {
            tracing::debug!(id = %self.view.id, phase = ?self.phase, ?command, "ignoring command");
            return None;
        }

        match command {
            DialogCommand::Input(value) => {
                self.input(value);
                None
            }
            DialogCommand::Accept => {
                if !self.accept_enabled {
                    return None;
                }
                self.confirmed = true;
                self.hide(HideReason::Accept)
            }
            DialogCommand::Reject => self.hide(HideReason::Reject),
            DialogCommand::Close => self.hide(HideReason::Close),
            DialogCommand::Dismiss(reason) => {
                let allowed = match reason {
                    DismissReason::Backdrop => self.modal.backdrop == Backdrop::Dynamic,
                    DismissReason::Escape => self.modal.closable,
                };
                if allowed {
                    self.hide(reason.into())
                } else {
                    None
                }
            }
        }
    }

    fn input(&mut self, value: String) {
        let Some(required) = self.view.confirm_input.as_ref().map(|input| &input.required) else {
            return;
        };
        let matches = value == *required;
        if matches != self.accept_enabled {
            tracing::debug!(id = %self.view.id, enabled = matches, "accept gating changed");
        }
        self.accept_enabled = matches;
        self.input = value;
    }

    /// `Shown → Hidden`. Yields the teardown only on the first call.
    fn hide(&mut self, reason: HideReason) -> Option<Teardown> {
        self.phase = DialogPhase::Hidden;
        self.focused = None;
        let resolver = self.resolver.take()?;
        Some(Teardown {
            id: self.view.id.clone(),
            reason,
            confirmed: self.confirmed,
            resolver,
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> DialogSnapshot {
        DialogSnapshot {
            view: self.view.clone(),
            modal: self.modal,
            input: self.input.clone(),
            accept_enabled: self.accept_enabled,
            focused: self.focused,
        }
    }
}
