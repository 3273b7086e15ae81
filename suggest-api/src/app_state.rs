use std::sync::Arc;

use crate::domain::ports::{inbound::IssueSuggestionService, outbound::RepoAccessResolver};

#[derive(Clone)]
pub struct AppState {
    pub suggestion_service: Arc<dyn IssueSuggestionService>,
    pub repo_access: Arc<dyn RepoAccessResolver>,
}

impl AppState {
    pub fn new(
        suggestion_service: Arc<dyn IssueSuggestionService>,
        repo_access: Arc<dyn RepoAccessResolver>,
    ) -> Self {
        Self {
            suggestion_service,
            repo_access,
        }
    }
}
