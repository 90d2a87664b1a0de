use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};

pub const SERVER_ERROR_MESSAGE: &str = "Algo deu errado, tente novamente mais tarde";

pub(crate) mod filters {
    #[askama::filter_fn]
    pub fn asset(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let base_url = askama::get_value::<String>(values, "assets_base_url")
            .expect("Unable to get assets_base_url from askama::get_value");

        Ok(format!("{base_url}/{}", value.trim_start_matches('/')))
    }

    #[askama::filter_fn]
    pub fn copyright(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let year = askama::get_value::<i32>(values, "year")
            .expect("Unable to get year from askama::get_value");

        Ok(format!("© {year} {value}. Todos os direitos reservados."))
    }
}

pub struct Template {
    config: crate::config::Config,
    year: i32,
}

impl Template {
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config,
            year: time::OffsetDateTime::now_utc().year(),
        }
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert(
            "assets_base_url",
            Box::new(self.config.site.assets_base_url.to_owned()),
        );
        values.insert("year", Box::new(self.year));

        template.render_with_values(&values)
    }

    pub fn to_string<T: askama::Template>(&self, template: T) -> String {
        match self.render_with_values(template) {
            Ok(html) => html,
            Err(err) => format!("Failed to render template. Error: {err}"),
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(err = %err, "failed to render template");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template::new(state.config.clone()))
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "partials/toast.html")]
pub struct ToastTemplate<'a> {
    pub original: Option<&'a str>,
    pub notification: &'a valdeci_shared::Notification,
}

/// Renders a toast, preceded by an optional html fragment that replaces the
/// request target.
pub fn toast(
    template: &Template,
    original: Option<&str>,
    notification: &valdeci_shared::Notification,
) -> Response {
    template.render(ToastTemplate {
        original,
        notification,
    })
}

#[macro_export]
macro_rules! try_response {
    // Result<T, Error>, rendering `$fallback` above the error toast
    (sync: $result:expr, $template:expr, $fallback:expr) => {
        match $result {
            Ok(r) => r,
            Err(err) => {
                let message = match &err {
                    valdeci_shared::Error::Validate(_) => {
                        valdeci_shared::Notification::missing_required_fields()
                    }
                    valdeci_shared::Error::Server(message) => valdeci_shared::Notification::new(
                        valdeci_shared::NotificationKind::Error,
                        "Erro",
                        message.as_str(),
                    ),
                    valdeci_shared::Error::Unknown(_) => {
                        tracing::error!("{err}");
                        valdeci_shared::Notification::new(
                            valdeci_shared::NotificationKind::Error,
                            "Erro",
                            $crate::template::SERVER_ERROR_MESSAGE,
                        )
                    }
                };

                let original = $fallback.map(|t| $template.to_string(t));

                return $crate::template::toast(&$template, original.as_deref(), &message);
            }
        }
    };
}
