//! Confirm Dioxus - confirmation dialogs for guarded form submissions
//!
//! A submission pipeline asks a pluggable [`ConfirmMethod`] to confirm a
//! pending action. [`ModalConfirm`] answers by mounting a modal dialog into a
//! shared [`DialogHost`]; the returned [`PendingDecision`] settles once the
//! user accepts, rejects or dismisses it.
//!
//! ## Quick Start
//!
//! ```no_run
//! use confirm_dioxus::ConfirmConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ConfirmConfig::load_default()?;
//!     confirm_dioxus::launch(config)
//! }
//! ```
//!
//! ## Architecture
//!
//! 1. `options` resolves display parameters: button attributes, then element
//!    attributes, then configured defaults
//! 2. `builder` turns them into a typed view tree
//! 3. `controller` runs one dialog's lifecycle and hands out its teardown once
//! 4. `host` is the document: it owns mounted dialogs and settles decisions
//!    after removing them
//! 5. `components` render the host and feed user input back as commands

// Public library modules
pub mod builder;
pub mod components;
pub mod config;
pub mod controller;
pub mod decision;
pub mod error;
pub mod hooks;
pub mod host;
pub mod intercept;
pub mod keybindings;
pub mod options;
pub mod pipeline;

// Internal modules
mod app;

#[cfg(test)]
mod integration_tests;

use anyhow::Result;

// Convenience re-exports
pub use builder::{build_dialog, DialogId, DialogRole, DialogView};
pub use config::ConfirmConfig;
pub use controller::{DialogCommand, DialogController, ModalOptions};
pub use decision::{decision_channel, DecisionResolver, PendingDecision};
pub use error::ConfigError;
pub use host::DialogHost;
pub use intercept::{ConfirmMethod, ModalConfirm};
pub use options::{ConfirmOptions, ConfirmVariant, ElementAttributes};
pub use pipeline::{FormPipeline, Submission};

/// Stylesheet injected into the webview head.
const STYLESHEET: &str = include_str!("../assets/confirm.css");

/// Application state shared with Dioxus through context.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: FormPipeline<ModalConfirm>,
    pub title: String,
}

/// Launch the Dioxus desktop demo.
///
/// Dialog defaults and modal behaviour come from `config`. The host is
/// provided as context so components can reach it through
/// [`hooks::use_dialog_host`].
pub fn launch(config: ConfirmConfig) -> Result<()> {
    let host = DialogHost::new();
    let confirm = ModalConfirm::new(host.clone())
        .with_defaults(config.dialog.clone())
        .with_modal_options(config.modal);

    let app_state = AppState {
        pipeline: FormPipeline::new(confirm),
        title: config.window.title.clone(),
    };

    let custom_head = format!("<style>{STYLESHEET}</style>");

    tracing::info!(title = %config.window.title, "launching confirm demo");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(&config.window.title)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            config.window.width,
                            config.window.height,
                        )),
                )
                .with_custom_head(custom_head),
        )
        .with_context(host)
        .with_context(app_state)
        .launch(app::App);

    Ok(())
}
