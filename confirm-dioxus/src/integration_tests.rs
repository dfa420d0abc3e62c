//! End-to-end confirmation flows.
//!
//! These tests submit forms through a [`FormPipeline`] backed by
//! [`ModalConfirm`], drive the mounted dialogs the way the components do, and
//! check what the submitting caller observes.

use std::future::Future;
use std::pin::Pin;

use futures::executor::block_on;
use futures::FutureExt;

use crate::builder::{DialogId, DialogRole, Icon};
use crate::controller::{DialogCommand, DismissReason};
use crate::host::DialogHost;
use crate::intercept::{ConfirmMethod, ModalConfirm};
use crate::options::{
    ConfirmVariant, ElementAttributes, ATTR_ACCEPT, ATTR_MESSAGE, ATTR_TEXT,
};
use crate::pipeline::{FormPipeline, Submission};

fn pipeline() -> (DialogHost, FormPipeline<ModalConfirm>) {
    let host = DialogHost::new();
    let pipeline = FormPipeline::new(ModalConfirm::new(host.clone()));
    (host, pipeline)
}

/// Poll `submission` once so its dialog mounts, and return the new dialog id.
fn start<'a>(
    host: &DialogHost,
    submission: &mut Pin<Box<dyn Future<Output = Submission> + 'a>>,
) -> DialogId {
    let before = host.ids();
    assert_eq!(submission.as_mut().now_or_never(), None, "submission should wait for the user");
    host.ids()
        .into_iter()
        .find(|id| !before.contains(id))
        .expect("a new dialog should be mounted")
}

// --- Scenario A: plain confirmation ---

#[test]
fn scenario_a_defaults_and_accept() {
    let (host, pipeline) = pipeline();
    let form = ElementAttributes::new().with(ATTR_MESSAGE, "Are you sure?");

    let mut submission: Pin<Box<dyn Future<Output = Submission>>> =
        Box::pin(pipeline.submit(&form, None));
    let id = start(&host, &mut submission);

    let dialog = host.snapshot(&id).expect("mounted");
    assert_eq!(dialog.view.message, "Are you sure?");
    assert_eq!(dialog.view.accept.variant, ConfirmVariant::Danger);
    assert_eq!(dialog.view.accept.button.icon, Some(Icon::Warning));
    assert_eq!(dialog.view.accept.button.label, "Confirm");
    assert_eq!(dialog.view.reject.label, "Cancel");
    assert_eq!(dialog.focused, Some(DialogRole::Cancel));
    assert!(dialog.accept_enabled);

    host.dispatch(&id, DialogCommand::Accept);
    assert_eq!(block_on(submission), Submission::Proceeded);
    assert!(!host.contains(&id));
}

// --- Scenario B: typed confirmation ---

#[test]
fn scenario_b_typed_confirmation() {
    let (host, pipeline) = pipeline();
    let form = ElementAttributes::new()
        .with(ATTR_MESSAGE, "Delete project")
        .with(ATTR_TEXT, "my-project")
        .with(ATTR_ACCEPT, "Yes, delete it");

    let mut submission: Pin<Box<dyn Future<Output = Submission>>> =
        Box::pin(pipeline.submit(&form, None));
    let id = start(&host, &mut submission);

    let dialog = host.snapshot(&id).expect("mounted");
    assert_eq!(dialog.view.accept.button.label, "Yes, delete it");
    assert!(!dialog.accept_enabled);

    host.dispatch(&id, DialogCommand::Input("my-projec".to_string()));
    assert!(!host.snapshot(&id).expect("mounted").accept_enabled);
    host.dispatch(&id, DialogCommand::Accept);
    assert!(host.contains(&id), "disabled accept must not close the dialog");

    host.dispatch(&id, DialogCommand::Input("my-project".to_string()));
    assert!(host.snapshot(&id).expect("mounted").accept_enabled);

    host.dispatch(&id, DialogCommand::Accept);
    assert_eq!(block_on(submission), Submission::Proceeded);
    assert!(host.is_empty());
}

#[test]
fn every_dismissal_path_cancels_even_with_accept_enabled() {
    let commands = [
        DialogCommand::Reject,
        DialogCommand::Close,
        DialogCommand::Dismiss(DismissReason::Backdrop),
        DialogCommand::Dismiss(DismissReason::Escape),
    ];

    for command in commands {
        let (host, pipeline) = pipeline();
        let form = ElementAttributes::new()
            .with(ATTR_MESSAGE, "Delete project")
            .with(ATTR_TEXT, "my-project");

        let mut submission: Pin<Box<dyn Future<Output = Submission>>> =
            Box::pin(pipeline.submit(&form, None));
        let id = start(&host, &mut submission);
        host.dispatch(&id, DialogCommand::Input("my-project".to_string()));
        assert!(host.snapshot(&id).expect("mounted").accept_enabled);

        host.dispatch(&id, command.clone());
        assert_eq!(block_on(submission), Submission::Cancelled, "{command:?}");
        assert!(host.is_empty());
    }
}

#[test]
fn teardown_runs_once_across_repeated_dismissals() {
    let (host, _pipeline) = pipeline();
    let strategy = ModalConfirm::new(host.clone());
    let mut decision = strategy.confirm("Are you sure?", &ElementAttributes::new(), None);
    let id = host.ids().pop().expect("mounted");

    assert!(host.dispatch(&id, DialogCommand::Close));
    assert!(!host.dispatch(&id, DialogCommand::Accept));
    assert!(!host.dispatch(&id, DialogCommand::Dismiss(DismissReason::Escape)));
    assert_eq!((&mut decision).now_or_never(), Some(false));
}

// --- Scenario C: overlapping confirmations ---

#[tokio::test]
async fn scenario_c_concurrent_dialogs_resolve_independently() {
    let (host, pipeline) = pipeline();
    let local = tokio::task::LocalSet::new();

    local
        .run_until(async move {
            let first_form = ElementAttributes::new().with(ATTR_MESSAGE, "Delete first?");
            let second_form = ElementAttributes::new().with(ATTR_MESSAGE, "Delete second?");

            let first = tokio::task::spawn_local({
                let pipeline = pipeline.clone();
                async move { pipeline.submit(&first_form, None).await }
            });
            let second = tokio::task::spawn_local({
                let pipeline = pipeline.clone();
                async move { pipeline.submit(&second_form, None).await }
            });

            // Let both submissions mount their dialogs.
            while host.len() < 2 {
                tokio::task::yield_now().await;
            }

            let ids = host.ids();
            let (first_id, second_id) = match ids.as_slice() {
                [a, b] => (a.clone(), b.clone()),
                other => panic!("expected two dialogs, got {other:?}"),
            };
            assert_ne!(first_id, second_id);

            let message_of = |id: &DialogId| host.snapshot(id).expect("mounted").view.message;
            let (accept_id, reject_id) = if message_of(&first_id) == "Delete first?" {
                (first_id, second_id)
            } else {
                (second_id, first_id)
            };

            host.dispatch(&reject_id, DialogCommand::Reject);
            assert!(host.contains(&accept_id));
            host.dispatch(&accept_id, DialogCommand::Accept);

            assert_eq!(first.await.expect("first task"), Submission::Proceeded);
            assert_eq!(second.await.expect("second task"), Submission::Cancelled);
            assert!(host.is_empty());
        })
        .await;
}
