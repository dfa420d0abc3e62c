//! Custom Dioxus hooks for confirm-dioxus components.

use dioxus::prelude::*;

use crate::host::DialogHost;

/// Read the dialog host provided through context.
///
/// The application must provide a [`DialogHost`] with `use_context_provider`
/// or `LaunchBuilder::with_context` before any dialog component renders.
#[must_use]
pub fn use_dialog_host() -> DialogHost {
    use_context::<DialogHost>()
}
