//! HTTP response types for issue suggestion endpoints.

use serde::Serialize;

use crate::domain::models::{IssueState, IssueSuggestion, PullRequestSuggestion};

/// One autocomplete entry.
///
/// `pull_request` is omitted entirely for plain issues.
#[derive(Debug, Serialize)]
pub struct IssueSuggestionResponse {
    pub id: i64,
    pub title: String,
    pub state: IssueState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequestSuggestionResponse>,
}

#[derive(Debug, Serialize)]
pub struct PullRequestSuggestionResponse {
    pub merged: bool,
    pub draft: bool,
}

impl From<IssueSuggestion> for IssueSuggestionResponse {
    fn from(suggestion: IssueSuggestion) -> Self {
        Self {
            id: suggestion.id.as_i64(),
            title: suggestion.title,
            state: suggestion.state,
            pull_request: suggestion.pull_request.map(Into::into),
        }
    }
}

impl From<PullRequestSuggestion> for PullRequestSuggestionResponse {
    fn from(pr: PullRequestSuggestion) -> Self {
        Self {
            merged: pr.merged,
            draft: pr.draft,
        }
    }
}
