use serde::Serialize;
use strum::Display;
use time::OffsetDateTime;

use super::{IssueId, RepositoryId};

/// Whether an issue or pull request is open or closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IssueState {
    Open,
    Closed,
}

/// An issue row as stored. Pull requests are issues with `is_pull` set.
///
/// `repo_id`, `index` and `updated_at` are carried for index adapters and are
/// not part of a suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub id: IssueId,
    #[allow(dead_code)]
    pub repo_id: RepositoryId,
    /// Per-repository number, shown to users as `#N`.
    #[allow(dead_code)]
    pub index: i64,
    pub title: String,
    pub is_closed: bool,
    pub is_pull: bool,
    #[allow(dead_code)]
    pub updated_at: OffsetDateTime,
}

impl Issue {
    pub fn state(&self) -> IssueState {
        if self.is_closed {
            IssueState::Closed
        } else {
            IssueState::Open
        }
    }
}

/// Pull-request specific state attached to an issue with `is_pull` set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    #[allow(dead_code)]
    pub id: i64,
    pub issue_id: IssueId,
    pub has_merged: bool,
}

impl PullRequest {
    /// A pull request is a draft when its title starts with one of the
    /// work-in-progress prefixes, ignoring ASCII case.
    pub fn is_work_in_progress(title: &str, prefixes: &[String]) -> bool {
        let title = title.to_ascii_uppercase();
        prefixes
            .iter()
            .filter(|prefix| !prefix.is_empty())
            .any(|prefix| title.starts_with(&prefix.to_ascii_uppercase()))
    }
}

/// Prefixes marking a pull request title as work in progress.
pub fn default_work_in_progress_prefixes() -> Vec<String> {
    vec!["WIP:".to_string(), "[WIP]".to_string()]
}
