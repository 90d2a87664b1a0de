use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use tokio::sync::{
    Notify,
    mpsc::{UnboundedReceiver, UnboundedSender},
};
use valdeci_contact::{ContactRequest, Field, FormController, IntakeClient};
use valdeci_shared::Notification;

pub type Controller = FormController<Arc<FakeIntake>, UnboundedSender<Notification>>;

#[derive(Default)]
pub struct FakeIntake {
    calls: Mutex<Vec<ContactRequest>>,
    failing: AtomicBool,
    gate: Option<Arc<Notify>>,
}

#[allow(dead_code)]
impl FakeIntake {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        let intake = Self::default();
        intake.failing.store(true, Ordering::SeqCst);

        Arc::new(intake)
    }

    /// Holds every request until the gate is notified.
    pub fn gated(gate: Arc<Notify>) -> Arc<Self> {
        Arc::new(Self {
            gate: Some(gate),
            ..Default::default()
        })
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<ContactRequest> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

#[async_trait]
impl IntakeClient for FakeIntake {
    async fn submit(&self, request: &ContactRequest) -> valdeci_shared::Result<serde_json::Value> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(request.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if self.failing.load(Ordering::SeqCst) {
            valdeci_shared::bail!("intake unavailable");
        }

        Ok(serde_json::json!({ "ok": true }))
    }
}

#[allow(dead_code)]
pub fn controller(
    draft: ContactRequest,
    intake: Arc<FakeIntake>,
) -> (Controller, UnboundedReceiver<Notification>) {
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();

    (FormController::with_draft(draft, intake, tx), rx)
}

#[allow(dead_code)]
pub fn drain(rx: &mut UnboundedReceiver<Notification>) -> Vec<Notification> {
    let mut notifications = vec![];
    while let Ok(notification) = rx.try_recv() {
        notifications.push(notification);
    }

    notifications
}

#[allow(dead_code)]
pub fn maria() -> ContactRequest {
    ContactRequest::default()
        .with(Field::Name, "Maria")
        .with(Field::Phone, "98999999999")
        .with(Field::Email, "a@b.com")
        .with(Field::ServiceType, "outros")
}

/// Serves `router` on an ephemeral local port and returns its base url.
#[allow(dead_code)]
pub async fn serve(router: axum::Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(format!("http://{addr}"))
}
