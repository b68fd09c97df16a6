use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    http::StatusCode,
    response::Html,
    Form, Json,
};
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppError;
use crate::factcheck::invoker::check;
use crate::factcheck::models::{CheckRequest, CheckResponse};
use crate::factcheck::page::{render_page, PageOutcome};
use crate::llm_client::MODEL;
use crate::state::AppState;

/// Pre-invocation checks, credential first, then the claim.
/// The invoker is only reached when both pass.
pub fn validate_request(config: &Config, req: &CheckRequest) -> Result<(), AppError> {
    if !config.has_credential() {
        return Err(AppError::missing_credential());
    }
    if req.is_blank() {
        return Err(AppError::empty_claim());
    }
    Ok(())
}

async fn run_check(state: &AppState, claim: &str) -> CheckResponse {
    let check_id = Uuid::new_v4();
    info!(
        "Fact-check {check_id} started ({} chars)",
        claim.chars().count()
    );

    let result = check(claim, state.generator.as_ref()).await;
    info!(
        "Fact-check {check_id} finished: {}",
        if result.is_failed() { "failed" } else { "completed" }
    );

    CheckResponse::new(check_id, MODEL, result)
}

/// POST /api/v1/fact-check
pub async fn handle_fact_check(
    State(state): State<AppState>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Result<Json<CheckResponse>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    validate_request(&state.config, &req)?;
    Ok(Json(run_check(&state, &req.claim).await))
}

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(render_page("", None))
}

/// POST /
/// Form submission from the page; always answers with the re-rendered page.
pub async fn handle_form_submit(
    State(state): State<AppState>,
    payload: Result<Form<CheckRequest>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let req = match payload {
        Ok(Form(req)) => req,
        Err(e) => {
            let message = e.body_text();
            return (
                StatusCode::BAD_REQUEST,
                Html(render_page("", Some(PageOutcome::Warning(&message)))),
            );
        }
    };

    if let Err(e) = validate_request(&state.config, &req) {
        let outcome = match &e {
            AppError::Validation(msg) => PageOutcome::Warning(msg),
            other => PageOutcome::Error(other.user_message()),
        };
        return (e.status_code(), Html(render_page(&req.claim, Some(outcome))));
    }

    let response = run_check(&state, &req.claim).await;
    (
        StatusCode::OK,
        Html(render_page(
            &req.claim,
            Some(PageOutcome::Result(&response.display_text)),
        )),
    )
}
