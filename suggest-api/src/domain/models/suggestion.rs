use super::{IssueId, IssueState};

/// Minimal projection of an issue or pull request for autocomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueSuggestion {
    pub id: IssueId,
    pub title: String,
    pub state: IssueState,
    /// Present only for pull requests.
    pub pull_request: Option<PullRequestSuggestion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestSuggestion {
    pub merged: bool,
    pub draft: bool,
}
