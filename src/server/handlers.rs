use super::error::{ApiError, ApiResult};
use super::page::render_index;
use super::AppState;
use crate::verdict::Verdict;
use axum::{
    extract::{rejection::FormRejection, rejection::JsonRejection, State},
    response::{Html, IntoResponse},
    Form, Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct UrlRequest {
    pub url: Option<String>,
}

fn require_url(req: UrlRequest) -> ApiResult<String> {
    req.url.ok_or_else(|| ApiError::missing_field("url"))
}

/// Inference is synchronous; keep it off the async workers.
async fn analyze(state: &AppState, url: String) -> ApiResult<Verdict> {
    let analyzer = state.analyzer.clone();
    let verdict = tokio::task::spawn_blocking(move || analyzer.analyze(&url))
        .await
        .map_err(|e| ApiError::internal(format!("classification task failed: {e}")))??;
    Ok(verdict)
}

/// Serves the static form
pub async fn index_handler() -> Html<String> {
    Html(render_index(None))
}

/// Form post: renders the verdict message into the page, or `{"error": ..}`
pub async fn predict_handler(
    State(state): State<Arc<AppState>>,
    form: Result<Form<UrlRequest>, FormRejection>,
) -> ApiResult<Html<String>> {
    let Form(req) = form.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let url = require_url(req)?;
    let verdict = analyze(&state, url).await?;
    Ok(Html(render_index(Some(&verdict.message()))))
}

/// JSON variant returning the full verdict including features
pub async fn classify_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<UrlRequest>, JsonRejection>,
) -> ApiResult<Json<Verdict>> {
    let Json(req) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let url = require_url(req)?;
    Ok(Json(analyze(&state, url).await?))
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "model_loaded": state.analyzer.model_loaded(),
    }))
}
