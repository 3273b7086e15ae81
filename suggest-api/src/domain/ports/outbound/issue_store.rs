use async_trait::async_trait;

use crate::domain::{
    models::{Issue, IssueId, PullRequest},
    SuggestionError,
};

/// Outbound port for loading issue records.
#[async_trait]
pub trait IssueStore: Send + Sync + 'static {
    /// Load issues by id.
    ///
    /// With `keep_order` the result follows the order of `ids`. Ids without a
    /// row (e.g. deleted after indexing) are left out rather than failing.
    async fn get_issues_by_ids(
        &self,
        ids: &[IssueId],
        keep_order: bool,
    ) -> Result<Vec<Issue>, SuggestionError>;

    /// Load the pull request attached to an issue, if any.
    async fn load_pull_request(
        &self,
        issue_id: IssueId,
    ) -> Result<Option<PullRequest>, SuggestionError>;
}
