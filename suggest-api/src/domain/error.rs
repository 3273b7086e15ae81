use thiserror::Error;

use super::models::{IssueId, RepositoryId};

/// Errors that can occur while building issue suggestions.
///
/// Every variant aborts the whole request; there is no partial result.
#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("issue search failed: {0}")]
    Index(String),
    #[error("loading records failed: {0}")]
    Load(String),
    #[error("loading pull request for issue {issue_id} failed: {message}")]
    Linkage { issue_id: IssueId, message: String },
    #[error("resolving access to repository {repository_id} failed: {message}")]
    Access {
        repository_id: RepositoryId,
        message: String,
    },
}

impl SuggestionError {
    pub fn index(msg: impl Into<String>) -> Self {
        Self::Index(msg.into())
    }

    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    pub fn linkage(issue_id: IssueId, msg: impl Into<String>) -> Self {
        Self::Linkage {
            issue_id,
            message: msg.into(),
        }
    }

    pub fn access(repository_id: RepositoryId, msg: impl Into<String>) -> Self {
        Self::Access {
            repository_id,
            message: msg.into(),
        }
    }
}
