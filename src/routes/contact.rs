use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use strum::VariantArray;
use tokio::sync::mpsc;
use valdeci_contact::{ContactRequest, FormController, ServiceType, SubmitOutcome};
use valdeci_shared::Notification;

use crate::{
    config::SuccessBehavior,
    routes::{AppState, SUCCESS_PATH},
    template::{Template, toast},
};

#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate {
    pub draft: ContactRequest,
    pub service_types: &'static [ServiceType],
}

impl ContactFormTemplate {
    pub fn new(draft: ContactRequest) -> Self {
        Self {
            draft,
            service_types: ServiceType::VARIANTS,
        }
    }
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<ContactRequest>,
) -> Response {
    crate::try_response!(
        sync: input.check(),
        template,
        Some(ContactFormTemplate::new(input.clone()))
    );

    let (tx, mut rx) = mpsc::unbounded_channel::<Notification>();
    let controller = FormController::with_draft(input, app.intake.clone(), tx);
    let outcome = controller.submit().await;

    let mut notification = None;
    while let Ok(next) = rx.try_recv() {
        notification = Some(next);
    }

    if outcome == SubmitOutcome::Sent
        && app.config.contact.on_success == SuccessBehavior::Redirect
    {
        return (StatusCode::OK, [("ts-location", SUCCESS_PATH)]).into_response();
    }

    let form = template.to_string(ContactFormTemplate::new(controller.draft().await));

    match notification {
        Some(notification) => toast(&template, Some(&form), &notification),
        None => Html(form).into_response(),
    }
}
