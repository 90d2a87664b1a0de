use serde::Serialize;
use strum::{AsRefStr, Display};
use tokio::sync::mpsc::UnboundedSender;

#[derive(Display, AsRefStr, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient, user-visible message. Never persisted.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn missing_required_fields() -> Self {
        Self::new(
            NotificationKind::Error,
            "Campos obrigatórios",
            "Por favor, preencha todos os campos obrigatórios.",
        )
    }

    pub fn request_sent() -> Self {
        Self::new(
            NotificationKind::Success,
            "Sucesso!",
            "Sua solicitação foi enviada. Entraremos em contato em breve.",
        )
    }

    pub fn request_failed() -> Self {
        Self::new(
            NotificationKind::Error,
            "Erro",
            "Erro ao enviar mensagem. Tente novamente.",
        )
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl Notifier for UnboundedSender<Notification> {
    fn notify(&self, notification: Notification) {
        if let Err(err) = self.send(notification) {
            tracing::warn!(title = %err.0.title, "notification dropped, receiver closed");
        }
    }
}
