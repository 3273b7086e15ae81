//! Composition root: the only place that names concrete outbound adapters.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    adapters::outbound::postgres::{
        PostgresIssueIndex, PostgresIssueStore, PostgresRepoAccessResolver,
    },
    app_state::AppState,
    config::SuggestionSettings,
    domain::services::IssueSuggestionServiceImpl,
};

/// Wire Postgres-backed adapters into the suggestion service.
pub fn build_app_state(pool: PgPool, settings: &SuggestionSettings) -> AppState {
    let index = PostgresIssueIndex::new(pool.clone());
    let store = PostgresIssueStore::new(pool.clone());
    let service = IssueSuggestionServiceImpl::new(
        Arc::new(index),
        Arc::new(store),
        settings.work_in_progress_prefixes.clone(),
    );

    AppState::new(
        Arc::new(service),
        Arc::new(PostgresRepoAccessResolver::new(pool)),
    )
}
