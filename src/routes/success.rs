use axum::response::IntoResponse;

use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "success.html")]
pub struct SuccessTemplate {
    pub company: &'static str,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(SuccessTemplate {
        company: crate::content::COMPANY,
    })
}
