//! Mount point for confirmation dialogs.

use dioxus::core::schedule_update;
use dioxus::prelude::*;

use crate::components::ConfirmationDialog;
use crate::hooks::use_dialog_host;

/// Renders every dialog mounted in the [`DialogHost`](crate::DialogHost),
/// in mount order, and re-renders whenever the host changes.
///
/// Place it once, after the rest of the page content.
#[component]
pub fn ConfirmOutlet() -> Element {
    let host = use_dialog_host();

    let subscription = use_hook({
        let host = host.clone();
        move || host.subscribe(schedule_update())
    });
    use_drop({
        let host = host.clone();
        move || host.unsubscribe(subscription)
    });

    let dialogs = host.snapshots();

    rsx! {
        for dialog in dialogs {
            ConfirmationDialog {
                key: "{dialog.view.id}",
                dialog: dialog.clone(),
            }
        }
    }
}
