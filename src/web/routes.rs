//! Route handlers.

use askama::Template;
use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::Serialize;
use serde_json::json;

use crate::prep::{MeetingForm, ValidationError};
use crate::web::state::AppState;
use crate::{PrepError, VERSION};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    version: &'static str,
    llm_configured: bool,
    search_configured: bool,
}

#[derive(Serialize)]
pub struct PrepareResponse {
    pub result: String,
    pub html_result: String,
}

impl IntoResponse for PrepError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::info!("Request rejected: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        PrepError::from(self).into_response()
    }
}

/// Meeting form read from either a urlencoded or a multipart body.
pub struct MeetingFormBody(pub MeetingForm);

impl<S> FromRequest<S> for MeetingFormBody
where
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("multipart/form-data"));

        if !is_multipart {
            let Form(form) = Form::<MeetingForm>::from_request(req, state)
                .await
                .map_err(|e| ValidationError::MalformedForm(e.body_text()))?;
            return Ok(Self(form));
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ValidationError::MalformedForm(e.body_text()))?;
        let mut form = MeetingForm::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ValidationError::MalformedForm(e.body_text()))?
        {
            // uploads are not form values
            if field.file_name().is_some() {
                continue;
            }
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            let value = field
                .text()
                .await
                .map_err(|e| ValidationError::MalformedForm(e.body_text()))?;
            form.set_field(&name, value);
        }
        Ok(Self(form))
    }
}

/// GET / - Serve the meeting form.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, PrepError> {
    let template = IndexTemplate {
        version: VERSION,
        llm_configured: !state.settings.llm.api_key.trim().is_empty(),
        search_configured: !state.settings.search.api_key.trim().is_empty(),
    };

    template
        .render()
        .map(Html)
        .map_err(|e| PrepError::Unexpected(e.to_string()))
}

/// GET /health - Report whether both credentials are configured.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let missing = state.settings.missing_keys();
    let status = if missing.is_empty() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(json!({ "status": state.settings.health_status() })))
}

/// POST /prepare_meeting - Run a full preparation from form data.
pub async fn prepare_meeting(
    State(state): State<AppState>,
    form: Result<MeetingFormBody, ValidationError>,
) -> Result<Json<PrepareResponse>, PrepError> {
    let missing = state.settings.missing_keys();
    if !missing.is_empty() {
        return Err(PrepError::MissingKeys(missing));
    }

    let orchestrator = state
        .orchestrator
        .as_ref()
        .ok_or_else(|| PrepError::Config("meeting providers are not initialised".to_string()))?;

    let MeetingFormBody(form) = form?;

    let brief = orchestrator.run(&form).await?;

    Ok(Json(PrepareResponse {
        result: brief.markdown,
        html_result: brief.html,
    }))
}
