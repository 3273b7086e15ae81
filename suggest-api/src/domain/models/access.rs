use super::RepositoryId;

/// Read capabilities of the current viewer on a single repository.
///
/// Computed upstream by the authorization layer and handed to the
/// suggestion service as-is. Nothing here re-checks permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepoAccess {
    pub repository_id: RepositoryId,
    pub can_read_issues: bool,
    pub can_read_pulls: bool,
}

impl RepoAccess {
    pub fn new(repository_id: RepositoryId, can_read_issues: bool, can_read_pulls: bool) -> Self {
        Self {
            repository_id,
            can_read_issues,
            can_read_pulls,
        }
    }

    /// Kind filter for the issue index.
    ///
    /// `Some(true)` restricts to pull requests, `Some(false)` to plain issues.
    /// When both kinds are readable, or neither is, no kind filter is applied.
    pub fn is_pull_filter(&self) -> Option<bool> {
        match (self.can_read_issues, self.can_read_pulls) {
            (false, true) => Some(true),
            (true, false) => Some(false),
            _ => None,
        }
    }
}
