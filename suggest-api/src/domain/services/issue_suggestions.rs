use std::sync::Arc;

use async_trait::async_trait;
use futures::future::try_join_all;
use tracing::instrument;

use crate::domain::{
    models::{
        Issue, IssueSearchOptions, IssueSuggestion, PullRequest, PullRequestSuggestion,
        RepoAccess,
    },
    ports::{
        inbound::IssueSuggestionService,
        outbound::{IssueIndex, IssueStore},
    },
    SuggestionError,
};

/// Implementation of the IssueSuggestionService inbound port.
///
/// Builds a bounded index query from the viewer's access, loads the hits in
/// ranked order and projects each one into a suggestion. Any collaborator
/// failure fails the whole call.
pub struct IssueSuggestionServiceImpl<I: IssueIndex, S: IssueStore> {
    index: Arc<I>,
    store: Arc<S>,
    work_in_progress_prefixes: Vec<String>,
}

impl<I: IssueIndex, S: IssueStore> IssueSuggestionServiceImpl<I, S> {
    pub fn new(index: Arc<I>, store: Arc<S>, work_in_progress_prefixes: Vec<String>) -> Self {
        Self {
            index,
            store,
            work_in_progress_prefixes,
        }
    }
}

#[async_trait]
impl<I: IssueIndex, S: IssueStore> IssueSuggestionService for IssueSuggestionServiceImpl<I, S> {
    #[instrument(
        name = "suggest_issues",
        skip(self, access),
        fields(repository_id = %access.repository_id)
    )]
    async fn suggest(
        &self,
        keyword: &str,
        access: &RepoAccess,
    ) -> Result<Vec<IssueSuggestion>, SuggestionError> {
        let options = IssueSearchOptions::for_suggestions(
            keyword,
            access.repository_id,
            access.is_pull_filter(),
        );

        let hits = self.index.search_issues(&options).await?;
        let mut ids = hits.ids;
        ids.truncate(options.paginator.page_size);

        if ids.is_empty() {
            return Ok(vec![]);
        }

        let issues = self.store.get_issues_by_ids(&ids, true).await?;
        tracing::debug!(
            total = hits.total,
            requested = ids.len(),
            loaded = issues.len(),
            "loaded suggestion candidates"
        );

        // try_join_all keeps input order regardless of completion order
        try_join_all(
            issues.into_iter().map(|issue| {
                project_issue(
                    self.store.as_ref(),
                    issue,
                    &self.work_in_progress_prefixes,
                )
            }),
        )
        .await
    }
}

/// Project a loaded issue into a suggestion.
///
/// Pull requests get their merged/draft state from an extra lookup. A pull
/// request without a stored linkage gets no `pull_request` field at all.
async fn project_issue<S: IssueStore + ?Sized>(
    store: &S,
    issue: Issue,
    work_in_progress_prefixes: &[String],
) -> Result<IssueSuggestion, SuggestionError> {
    let pull_request = if issue.is_pull {
        let linkage = store
            .load_pull_request(issue.id)
            .await
            .map_err(|err| match err {
                SuggestionError::Linkage { .. } => err,
                other => SuggestionError::linkage(issue.id, other.to_string()),
            })?;

        linkage.map(|pr| PullRequestSuggestion {
            merged: pr.has_merged,
            draft: PullRequest::is_work_in_progress(&issue.title, work_in_progress_prefixes),
        })
    } else {
        None
    };

    Ok(IssueSuggestion {
        id: issue.id,
        state: issue.state(),
        title: issue.title,
        pull_request,
    })
}
