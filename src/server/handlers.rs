use super::{
    page::{self, Outcome},
    types::{ErrorResponse, TranslateForm, TranslateRequest, TranslateResponse},
};
use crate::agent::{Agent, Runner};
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, Json},
};
use std::sync::Arc;
use tracing::{debug, error, info};

#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<Agent>,
}

impl AppState {
    pub fn new(agent: Agent) -> Self {
        Self {
            agent: Arc::new(agent),
        }
    }
}

pub async fn index() -> Html<String> {
    page::render("", None)
}

pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<TranslateForm>,
) -> Html<String> {
    if form.text.is_empty() {
        debug!("Empty submission, nothing to translate");
        return page::render("", None);
    }

    info!("Received translation request ({} chars)", form.text.len());

    let outcome = match Runner::run(&state.agent, &form.text).await {
        Ok(output) => Outcome::Translation(output),
        Err(e) => {
            error!("Translation failed: {}", e);
            Outcome::Failure(Outcome::error_message(&e))
        }
    };

    page::render(&form.text, Some(&outcome))
}

pub async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.input.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "input must not be empty".to_string(),
            }),
        ));
    }

    info!("Received API translation request ({} chars)", request.input.len());

    match Runner::run(&state.agent, &request.input).await {
        Ok(output) => Ok(Json(TranslateResponse { output })),
        Err(e) => {
            error!("Translation failed: {}", e);
            let status = if e.is_model_failure() {
                StatusCode::BAD_GATEWAY
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            Err((
                status,
                Json(ErrorResponse {
                    error: Outcome::error_message(&e),
                }),
            ))
        }
    }
}
