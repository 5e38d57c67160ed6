use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use serde_json::json;

use super::error::ApiError;
use super::state::AppState;
use crate::render::render_page;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state.view.state()))
}

/// The loaded report, or `202 Accepted` while the fetch is outstanding.
pub async fn leaderboard(State(state): State<AppState>) -> Response {
    match state.view.state().report() {
        Some(report) => Json(report).into_response(),
        None => (StatusCode::ACCEPTED, Json(json!({ "status": "loading" }))).into_response(),
    }
}

pub async fn schema() -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(crate::schema::report_schema()?))
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
