use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};

use crate::template::{NotFoundTemplate, Template};

mod assets;
mod contact;
mod health;
mod index;
mod success;

pub use assets::AssetsService;
pub use contact::ContactFormTemplate;

pub const SUCCESS_PATH: &str = "/sucesso";

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub intake: valdeci_contact::HttpIntake,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> valdeci_shared::Result<Self> {
        let intake = valdeci_contact::HttpIntake::new(&config.intake.url, config.intake.timeout())?;

        Ok(Self { config, intake })
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (
        axum::http::StatusCode::NOT_FOUND,
        template.render(NotFoundTemplate),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route(SUCCESS_PATH, get(success::page))
        .route("/contact", post(contact::action))
        .fallback(fallback)
        .nest_service("/static", AssetsService::new())
        .with_state(app_state)
}
