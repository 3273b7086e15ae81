use axum::{
    extract::{Query, State},
    middleware,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{resolve_repo_access, IssueSuggestionResponse, ViewerAccess},
    app_state::AppState,
};

use super::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub q: String,
}

#[instrument(name = "GET /repos/:repo_id/issues/suggestions", skip(app_state))]
async fn issue_suggestions(
    State(app_state): State<AppState>,
    ViewerAccess(access): ViewerAccess,
    Query(query): Query<SuggestionQuery>,
) -> Result<Json<Vec<IssueSuggestionResponse>>, ApiError> {
    let suggestions = app_state
        .suggestion_service
        .suggest(&query.q, &access)
        .await?;
    Ok(Json(suggestions.into_iter().map(Into::into).collect()))
}

pub fn router(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/repos/:repo_id/issues/suggestions", get(issue_suggestions))
        .route_layer(middleware::from_fn_with_state(app_state, resolve_repo_access))
}
