use serde::{Deserialize, Serialize};
use std::fmt;

/// A repository identifier.
///
/// Wraps i64 to match the database BIGSERIAL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryId(i64);

impl RepositoryId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RepositoryId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<RepositoryId> for i64 {
    fn from(id: RepositoryId) -> Self {
        id.0
    }
}

/// A global issue identifier, shared by issues and pull requests.
///
/// This is the row id, not the per-repository `#N` number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueId(i64);

impl IssueId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for IssueId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<IssueId> for i64 {
    fn from(id: IssueId) -> Self {
        id.0
    }
}
