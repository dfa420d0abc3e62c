//! Confirmation dialog component.
//!
//! Renders a [`DialogSnapshot`] and turns clicks, input changes and key
//! presses into [`DialogCommand`]s for the owning [`DialogHost`].

use dioxus::prelude::*;

use crate::builder::{ButtonView, DialogId, DialogRole};
use crate::components::{DialogIcon, ModalOverlay};
use crate::controller::{DialogCommand, DialogSnapshot, DismissReason};
use crate::hooks::use_dialog_host;
use crate::keybindings::handle_dialog_key;
use crate::options::ConfirmVariant;

/// Confirmation dialog component.
#[component]
pub fn ConfirmationDialog(dialog: DialogSnapshot) -> Element {
    let host = use_dialog_host();
    let view = dialog.view;
    let id = view.id.clone();

    let dispatch = {
        let id = id.clone();
        move |command: DialogCommand| {
            host.dispatch(&id, command);
        }
    };

    let accept_class = match (view.accept.variant, dialog.accept_enabled) {
        (ConfirmVariant::Brand, true) => "confirmation-btn confirmation-btn-brand",
        (ConfirmVariant::Brand, false) => "confirmation-btn confirmation-btn-brand confirmation-btn-disabled",
        (ConfirmVariant::Danger, true) => "confirmation-btn confirmation-btn-danger",
        (ConfirmVariant::Danger, false) => "confirmation-btn confirmation-btn-danger confirmation-btn-disabled",
    };

    rsx! {
        ModalOverlay {
            id: "{id}",
            class: "confirmation-dialog",
            on_backdrop_click: {
                let dispatch = dispatch.clone();
                move |_| dispatch(DialogCommand::Dismiss(DismissReason::Backdrop))
            },
            on_keydown: {
                let dispatch = dispatch.clone();
                move |evt: KeyboardEvent| {
                    if let Some(command) = handle_dialog_key(&evt.key()) {
                        evt.prevent_default();
                        dispatch(command);
                    }
                }
            },

            DialogButton {
                dialog_id: id.clone(),
                button: view.close.clone(),
                class: "confirmation-close",
                focused: false,
                disabled: false,
            }

            // Message
            h3 {
                class: "confirmation-dialog-title",
                "{view.message}"
            }

            // Description (optional)
            if let Some(ref description) = view.description {
                p {
                    class: "confirmation-dialog-message",
                    "{description}"
                }
            }

            // Typed confirmation (optional)
            if let Some(ref input) = view.confirm_input {
                div {
                    class: "confirmation-dialog-input",
                    label { "{input.label}" }
                    input {
                        r#type: "text",
                        "data-behavior": input.role.marker().1,
                        placeholder: "{input.placeholder}",
                        value: "{dialog.input}",
                        oninput: {
                            let dispatch = dispatch.clone();
                            move |evt: FormEvent| dispatch(DialogCommand::Input(evt.value()))
                        },
                    }
                }
            }

            // Buttons
            div {
                class: "confirmation-dialog-buttons",

                DialogButton {
                    dialog_id: id.clone(),
                    button: view.reject.clone(),
                    class: "confirmation-btn confirmation-btn-secondary",
                    focused: dialog.focused == Some(view.reject.role),
                    disabled: false,
                }

                DialogButton {
                    dialog_id: id.clone(),
                    button: view.accept.button.clone(),
                    class: accept_class,
                    focused: dialog.focused == Some(view.accept.button.role),
                    disabled: !dialog.accept_enabled,
                }
            }
        }
    }
}

/// A dialog control wired to the command of its role.
#[component]
fn DialogButton(
    dialog_id: DialogId,
    button: ButtonView,
    class: &'static str,
    focused: bool,
    disabled: bool,
) -> Element {
    let host = use_dialog_host();
    let role = button.role;
    let label_class = if role == DialogRole::Close { "sr-only" } else { "confirmation-btn-label" };

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            "data-action": role.marker().1,
            disabled: disabled,
            onmounted: move |evt: MountedEvent| async move {
                if focused {
                    let _ = evt.set_focus(true).await;
                }
            },
            onclick: move |evt| {
                evt.stop_propagation();
                if let Some(command) = DialogCommand::for_role(role) {
                    host.dispatch(&dialog_id, command);
                }
            },
            if let Some(icon) = button.icon {
                DialogIcon { icon }
            }
            span { class: "{label_class}", "{button.label}" }
        }
    }
}
