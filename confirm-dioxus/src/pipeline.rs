//! Form submission guarded by a confirmation step.

use crate::intercept::ConfirmMethod;
use crate::options::{lookup, ElementAttributes, ATTR_MESSAGE};

/// Result of a guarded submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// No confirmation was needed, or the user accepted.
    Proceeded,
    /// The user rejected or dismissed the confirmation.
    Cancelled,
}

impl Submission {
    #[must_use]
    pub fn proceeded(self) -> bool {
        self == Self::Proceeded
    }
}

/// Submission pipeline with an injected confirmation strategy.
#[derive(Debug, Clone)]
pub struct FormPipeline<C> {
    confirm: C,
}

impl<C: ConfirmMethod> FormPipeline<C> {
    pub fn new(confirm: C) -> Self {
        Self { confirm }
    }

    #[must_use]
    pub fn confirm_method(&self) -> &C {
        &self.confirm
    }

    /// Submit `form`, optionally from a specific `submitter` control.
    ///
    /// The confirmation message is read from the submitter first, then the
    /// form. Without a message the submission proceeds immediately.
    pub async fn submit(
        &self,
        form: &ElementAttributes,
        submitter: Option<&ElementAttributes>,
    ) -> Submission {
        let Some(message) = lookup(submitter, form, ATTR_MESSAGE) else {
            return Submission::Proceeded;
        };

        if self.confirm.confirm(message, form, submitter).await {
            tracing::debug!(prompt = message, "submission confirmed");
            Submission::Proceeded
        } else {
            tracing::debug!(prompt = message, "submission cancelled");
            Submission::Cancelled
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::controller::DialogCommand;
    use crate::decision::PendingDecision;
    use crate::host::DialogHost;
    use crate::intercept::ModalConfirm;
    use crate::options::ATTR_TEXT;

    /// Records every request and answers with a fixed decision.
    struct Scripted {
        answer: bool,
        requests: RefCell<Vec<String>>,
    }

    impl ConfirmMethod for Scripted {
        fn confirm(
            &self,
            message: &str,
            _element: &ElementAttributes,
            _button: Option<&ElementAttributes>,
        ) -> PendingDecision {
            self.requests.borrow_mut().push(message.to_string());
            PendingDecision::ready(self.answer)
        }
    }

    fn scripted(answer: bool) -> FormPipeline<Scripted> {
        FormPipeline::new(Scripted {
            answer,
            requests: RefCell::new(Vec::new()),
        })
    }

    #[test]
    fn form_without_message_skips_confirmation() {
        let pipeline = scripted(false);
        let outcome = block_on(pipeline.submit(&ElementAttributes::new(), None));
        assert_eq!(outcome, Submission::Proceeded);
        assert!(pipeline.confirm_method().requests.borrow().is_empty());
    }

    #[test]
    fn submitter_message_wins_over_form_message() {
        let pipeline = scripted(true);
        let form = ElementAttributes::new().with(ATTR_MESSAGE, "Submit form?");
        let button = ElementAttributes::new().with(ATTR_MESSAGE, "Delete record?");

        let outcome = block_on(pipeline.submit(&form, Some(&button)));
        assert!(outcome.proceeded());
        assert_eq!(
            *pipeline.confirm_method().requests.borrow(),
            vec!["Delete record?".to_string()]
        );
    }

    #[test]
    fn rejected_confirmation_cancels() {
        let pipeline = scripted(false);
        let form = ElementAttributes::new().with(ATTR_MESSAGE, "Are you sure?");
        assert_eq!(block_on(pipeline.submit(&form, None)), Submission::Cancelled);
    }

    #[test]
    fn modal_confirmation_waits_for_the_user() {
        let host = DialogHost::new();
        let pipeline = FormPipeline::new(ModalConfirm::new(host.clone()));
        let form = ElementAttributes::new()
            .with(ATTR_MESSAGE, "Delete project")
            .with(ATTR_TEXT, "my-project");

        let outcome = block_on(async {
            let mut submission = Box::pin(pipeline.submit(&form, None));
            assert!(futures::poll!(submission.as_mut()).is_pending());

            let id = host.ids().pop().expect("dialog should be mounted");
            host.dispatch(&id, DialogCommand::Accept);
            assert!(futures::poll!(submission.as_mut()).is_pending());

            host.dispatch(&id, DialogCommand::Input("my-project".to_string()));
            host.dispatch(&id, DialogCommand::Accept);
            submission.await
        });

        assert_eq!(outcome, Submission::Proceeded);
        assert!(host.is_empty());
    }
}
