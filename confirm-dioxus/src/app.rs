//! Demo application component.
//!
//! Renders a few guarded actions, each submitted through the shared
//! [`FormPipeline`], and the outlet their confirmation dialogs mount into.

use dioxus::prelude::*;

use crate::components::ConfirmOutlet;
use crate::options::{
    ElementAttributes, ATTR_ACCEPT, ATTR_DESCRIPTION, ATTR_MESSAGE, ATTR_REJECT, ATTR_TEXT,
    ATTR_VARIANT,
};
use crate::pipeline::Submission;
use crate::AppState;

/// A guarded action shown in the demo.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoAction {
    pub label: &'static str,
    pub form: ElementAttributes,
    pub submitter: Option<ElementAttributes>,
}

/// The actions listed by the demo window.
#[must_use]
pub fn demo_actions() -> Vec<DemoAction> {
    vec![
        DemoAction {
            label: "Archive",
            form: ElementAttributes::new().with(ATTR_MESSAGE, "Are you sure?"),
            submitter: None,
        },
        DemoAction {
            label: "Delete record",
            form: ElementAttributes::new()
                .with(ATTR_MESSAGE, "Are you sure?")
                .with(
                    ATTR_DESCRIPTION,
                    "This will delete your record. Enter the record name to confirm.",
                )
                .with(ATTR_TEXT, "record name")
                .with(ATTR_ACCEPT, "Yes, delete it")
                .with(ATTR_REJECT, "No, keep it"),
            submitter: None,
        },
        DemoAction {
            label: "Publish",
            form: ElementAttributes::new()
                .with(ATTR_MESSAGE, "Publish this page?")
                .with(ATTR_VARIANT, "brand"),
            submitter: Some(ElementAttributes::new().with(ATTR_ACCEPT, "Publish")),
        },
        DemoAction {
            label: "Save draft",
            form: ElementAttributes::new(),
            submitter: None,
        },
    ]
}

/// Main application component.
#[component]
pub fn App() -> Element {
    let app_state = use_context::<AppState>();
    let mut status = use_signal(|| "No submission yet".to_string());

    rsx! {
        document::Title { "{app_state.title}" }

        div {
            class: "app-container",

            h1 { class: "app-title", "{app_state.title}" }

            div {
                class: "demo-actions",

                for action in demo_actions() {
                    button {
                        key: "{action.label}",
                        r#type: "button",
                        class: "demo-action",
                        onclick: {
                            let pipeline = app_state.pipeline.clone();
                            let action = action.clone();
                            move |_| {
                                let pipeline = pipeline.clone();
                                let action = action.clone();
                                spawn(async move {
                                    let outcome = pipeline
                                        .submit(&action.form, action.submitter.as_ref())
                                        .await;
                                    log::info!("{} -> {outcome:?}", action.label);
                                    status.set(describe(action.label, outcome));
                                });
                            }
                        },
                        "{action.label}"
                    }
                }
            }

            p { class: "demo-status", "{status}" }
        }

        ConfirmOutlet {}
    }
}

fn describe(label: &str, outcome: Submission) -> String {
    match outcome {
        Submission::Proceeded => format!("{label}: submitted"),
        Submission::Cancelled => format!("{label}: cancelled"),
    }
}
