use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode, header},
    routing::post,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use valdeci::config::{
    Config, ContactConfig, IntakeConfig, ObservabilityConfig, ServerConfig, SiteConfig,
    SuccessBehavior,
};
use valdeci_contact::{ContactRequest, Field};

/// Intake address nothing listens on, for tests that never submit.
#[allow(dead_code)]
pub const UNUSED_INTAKE: &str = "http://127.0.0.1:9/api/contact";

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

type Received = Arc<Mutex<Vec<Value>>>;

/// Fake intake endpoint answering every request with `status`.
#[allow(dead_code)]
pub struct FakeIntake {
    pub url: String,
    received: Received,
}

#[allow(dead_code)]
impl FakeIntake {
    pub async fn start(status: StatusCode) -> anyhow::Result<Self> {
        let received = Received::default();
        let router = Router::new()
            .route(
                "/api/contact",
                post(
                    move |State(received): State<Received>, Json(body): Json<Value>| async move {
                        received.lock().expect("received lock poisoned").push(body);

                        (status, Json(json!({ "message": "Contact request created" })))
                    },
                ),
            )
            .with_state(received.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self {
            url: format!("http://{addr}/api/contact"),
            received,
        })
    }

    pub fn received(&self) -> Vec<Value> {
        self.received.lock().expect("received lock poisoned").clone()
    }
}

pub fn config(intake_url: &str, on_success: SuccessBehavior) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        intake: IntakeConfig {
            url: intake_url.to_string(),
            timeout_secs: Some(5),
        },
        contact: ContactConfig { on_success },
        site: SiteConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn app(config: Config) -> anyhow::Result<Router> {
    Ok(valdeci::cli::app(valdeci::AppState::new(config)?))
}

async fn send(app: Router, request: Request<Body>) -> anyhow::Result<TestResponse> {
    let response = app.oneshot(request).await?;
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec())?,
    })
}

#[allow(dead_code)]
pub async fn get(app: Router, path: &str) -> anyhow::Result<TestResponse> {
    send(app, Request::builder().uri(path).body(Body::empty())?).await
}

#[allow(dead_code)]
pub async fn post_contact(app: Router, form: &ContactRequest) -> anyhow::Result<TestResponse> {
    let request = Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(form)?))?;

    send(app, request).await
}

#[allow(dead_code)]
pub fn maria() -> ContactRequest {
    ContactRequest::default()
        .with(Field::Name, "Maria")
        .with(Field::Phone, "98999999999")
        .with(Field::Email, "a@b.com")
        .with(Field::ServiceType, "outros")
}
