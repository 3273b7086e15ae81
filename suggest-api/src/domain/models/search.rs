use super::{IssueId, RepositoryId};

/// Zero-based page requested from the issue index for suggestions.
pub const SUGGESTION_PAGE: usize = 0;

/// Maximum number of suggestions returned for one keyword.
pub const SUGGESTION_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub page: usize,
    pub page_size: usize,
}

impl ListOptions {
    pub fn offset(&self) -> usize {
        self.page * self.page_size
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    UpdatedDesc,
}

/// Query handed to the issue index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueSearchOptions {
    pub keyword: String,
    pub repo_ids: Vec<RepositoryId>,
    /// `Some(true)` for pull requests only, `Some(false)` for issues only.
    pub is_pull: Option<bool>,
    /// `None` includes both open and closed items.
    pub is_closed: Option<bool>,
    pub paginator: ListOptions,
    pub sort_by: SortBy,
}

impl IssueSearchOptions {
    /// Bounded query for the suggestion dropdown: first page, most recently
    /// updated first, open and closed alike. The keyword is passed through
    /// verbatim; an empty keyword matches everything in scope.
    pub fn for_suggestions(
        keyword: &str,
        repository_id: RepositoryId,
        is_pull: Option<bool>,
    ) -> Self {
        Self {
            keyword: keyword.to_string(),
            repo_ids: vec![repository_id],
            is_pull,
            is_closed: None,
            paginator: ListOptions {
                page: SUGGESTION_PAGE,
                page_size: SUGGESTION_PAGE_SIZE,
            },
            sort_by: SortBy::UpdatedDesc,
        }
    }
}

/// Ordered issue ids returned by the index, plus the unpaged match count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IssueSearchHits {
    pub ids: Vec<IssueId>,
    pub total: i64,
}
