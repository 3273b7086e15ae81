use async_trait::async_trait;

use crate::domain::{
    models::{IssueSuggestion, RepoAccess},
    SuggestionError,
};

/// Inbound port for issue/pull request autocomplete.
///
/// HTTP handlers call this with the raw keyword and the viewer's
/// precomputed access to the target repository.
#[async_trait]
pub trait IssueSuggestionService: Send + Sync + 'static {
    /// Up to five suggestions, most recently updated first.
    async fn suggest(
        &self,
        keyword: &str,
        access: &RepoAccess,
    ) -> Result<Vec<IssueSuggestion>, SuggestionError>;
}
