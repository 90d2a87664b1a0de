use tokio::sync::Mutex;
use validator::Validate;
use valdeci_shared::{Notification, Notifier};

use crate::{ContactRequest, Field, IntakeClient};

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Pending,
}

/// Result of one `FormController::submit` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A required field is empty, nothing was sent.
    Invalid,
    /// Another submission is still in flight, nothing was sent.
    Busy,
    Sent,
    Failed,
}

#[derive(Default)]
struct FormState {
    draft: ContactRequest,
    status: Status,
}

/// Holds a contact draft and runs its submission flow against an intake
/// endpoint, reporting outcomes through the injected notifier.
///
/// At most one submission is in flight per controller. The lock is never held
/// while waiting on the intake endpoint.
pub struct FormController<C, N> {
    client: C,
    notifier: N,
    state: Mutex<FormState>,
}

impl<C: IntakeClient, N: Notifier> FormController<C, N> {
    pub fn new(client: C, notifier: N) -> Self {
        Self::with_draft(ContactRequest::default(), client, notifier)
    }

    pub fn with_draft(draft: ContactRequest, client: C, notifier: N) -> Self {
        Self {
            client,
            notifier,
            state: Mutex::new(FormState {
                draft,
                status: Status::Idle,
            }),
        }
    }

    pub async fn set_field(&self, field: Field, value: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.draft = state.draft.with(field, value);
    }

    pub async fn draft(&self) -> ContactRequest {
        self.state.lock().await.draft.clone()
    }

    pub async fn status(&self) -> Status {
        self.state.lock().await.status
    }

    pub async fn validate(&self) -> bool {
        self.state.lock().await.draft.validate().is_ok()
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let draft = {
            let mut state = self.state.lock().await;

            if state.status == Status::Pending {
                tracing::debug!("contact submission already pending");

                return SubmitOutcome::Busy;
            }

            if state.draft.validate().is_err() {
                tracing::debug!(
                    missing = ?state.draft.missing_fields(),
                    "contact submission blocked by missing fields"
                );
                self.notifier.notify(Notification::missing_required_fields());

                return SubmitOutcome::Invalid;
            }

            state.status = Status::Pending;
            state.draft.clone()
        };

        let result = self.client.submit(&draft).await;

        let mut state = self.state.lock().await;
        state.status = Status::Idle;

        match result {
            Ok(_) => {
                tracing::info!(service_type = %draft.service_type, "contact request sent");
                state.draft = ContactRequest::default();
                self.notifier.notify(Notification::request_sent());

                SubmitOutcome::Sent
            }
            Err(err) => {
                tracing::warn!(err = %err, "contact request failed");
                self.notifier.notify(Notification::request_failed());

                SubmitOutcome::Failed
            }
        }
    }
}
