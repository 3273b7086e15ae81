use async_trait::async_trait;

use crate::domain::{
    models::{IssueSearchHits, IssueSearchOptions},
    SuggestionError,
};

/// Outbound port for the keyword issue index.
///
/// Implementations own tokenization and ranking. They must honor the
/// repository scope, kind filter, paging and sort order in `options`.
#[async_trait]
pub trait IssueIndex: Send + Sync + 'static {
    /// Ordered ids of matching issues plus the total match count.
    ///
    /// Fails with [`SuggestionError::Index`] when the backend cannot run the query.
    async fn search_issues(
        &self,
        options: &IssueSearchOptions,
    ) -> Result<IssueSearchHits, SuggestionError>;
}
