use std::time::Duration;

use async_trait::async_trait;

use crate::ContactRequest;

/// External service receiving completed contact requests.
#[async_trait]
pub trait IntakeClient: Send + Sync {
    /// Delivers one request. `Ok` carries the parsed response body, which only
    /// signals success.
    async fn submit(&self, request: &ContactRequest) -> valdeci_shared::Result<serde_json::Value>;
}

#[async_trait]
impl<C: IntakeClient + ?Sized> IntakeClient for std::sync::Arc<C> {
    async fn submit(&self, request: &ContactRequest) -> valdeci_shared::Result<serde_json::Value> {
        (**self).submit(request).await
    }
}

/// Intake endpoint reached over HTTP with a JSON body.
#[derive(Clone, Debug)]
pub struct HttpIntake {
    http: reqwest::Client,
    url: String,
}

impl HttpIntake {
    /// No timeout is applied unless one is given; the request then runs until
    /// the network layer gives up.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> valdeci_shared::Result<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            valdeci_shared::bail!("intake url is empty");
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("valdeci/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            url,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl IntakeClient for HttpIntake {
    #[tracing::instrument(skip_all, fields(url = %self.url))]
    async fn submit(&self, request: &ContactRequest) -> valdeci_shared::Result<serde_json::Value> {
        let body = self
            .http
            .post(&self.url)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        tracing::debug!("contact request accepted by intake");

        Ok(body)
    }
}
