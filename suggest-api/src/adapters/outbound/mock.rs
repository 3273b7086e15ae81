//! In-memory adapters for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use crate::domain::{
    models::{
        Issue, IssueId, IssueSearchHits, IssueSearchOptions, PullRequest, RepoAccess,
        RepositoryId,
    },
    ports::outbound::{IssueIndex, IssueStore, RepoAccessResolver},
    SuggestionError,
};

/// Mock issue index backed by a list of issues.
///
/// Applies the scope, kind and closed filters plus a case-insensitive title
/// match, ordered by `updated_at` descending and paged like a real index.
#[derive(Clone, Default)]
pub struct MockIssueIndex {
    issues: Arc<RwLock<Vec<Issue>>>,
    /// Fixed hits returned verbatim, ignoring filters and paging.
    custom_results: Arc<RwLock<Option<Vec<IssueId>>>>,
    fail: bool,
    last_options: Arc<RwLock<Option<IssueSearchOptions>>>,
}

#[allow(dead_code)]
impl MockIssueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issues(self, issues: Vec<Issue>) -> Self {
        self.issues.write().unwrap().extend(issues);
        self
    }

    pub fn with_search_results(self, ids: Vec<IssueId>) -> Self {
        *self.custom_results.write().unwrap() = Some(ids);
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Options of the most recent search (for test assertions).
    pub fn last_options(&self) -> Option<IssueSearchOptions> {
        self.last_options.read().unwrap().clone()
    }
}

#[async_trait]
impl IssueIndex for MockIssueIndex {
    async fn search_issues(
        &self,
        options: &IssueSearchOptions,
    ) -> Result<IssueSearchHits, SuggestionError> {
        *self.last_options.write().unwrap() = Some(options.clone());

        if self.fail {
            return Err(SuggestionError::index("index unavailable"));
        }

        if let Some(ids) = self.custom_results.read().unwrap().as_ref() {
            return Ok(IssueSearchHits {
                ids: ids.clone(),
                total: ids.len() as i64,
            });
        }

        let keyword = options.keyword.trim().to_lowercase();
        let mut matches: Vec<Issue> = self
            .issues
            .read()
            .unwrap()
            .iter()
            .filter(|issue| options.repo_ids.contains(&issue.repo_id))
            .filter(|issue| options.is_pull.map_or(true, |is_pull| issue.is_pull == is_pull))
            .filter(|issue| {
                options
                    .is_closed
                    .map_or(true, |is_closed| issue.is_closed == is_closed)
            })
            .filter(|issue| keyword.is_empty() || issue.title.to_lowercase().contains(&keyword))
            .cloned()
            .collect();

        matches.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        let total = matches.len() as i64;
        let ids = matches
            .into_iter()
            .skip(options.paginator.offset())
            .take(options.paginator.page_size)
            .map(|issue| issue.id)
            .collect();

        Ok(IssueSearchHits { ids, total })
    }
}

/// Mock issue store backed by HashMaps.
#[derive(Clone, Default)]
pub struct MockIssueStore {
    issues: Arc<RwLock<HashMap<IssueId, Issue>>>,
    pull_requests: Arc<RwLock<HashMap<IssueId, PullRequest>>>,
    fail_loads: bool,
    fail_pull_requests: bool,
    load_calls: Arc<AtomicUsize>,
    pull_request_calls: Arc<AtomicUsize>,
    /// Artificial latency per pull request lookup.
    pull_request_delays: Arc<RwLock<HashMap<IssueId, Duration>>>,
    /// Issue ids in the order their pull request lookups finished.
    completed_pull_requests: Arc<Mutex<Vec<IssueId>>>,
}

#[allow(dead_code)]
impl MockIssueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issues(self, issues: Vec<Issue>) -> Self {
        {
            let mut stored = self.issues.write().unwrap();
            for issue in issues {
                stored.insert(issue.id, issue);
            }
        }
        self
    }

    pub fn with_pull_requests(self, pull_requests: Vec<PullRequest>) -> Self {
        {
            let mut stored = self.pull_requests.write().unwrap();
            for pr in pull_requests {
                stored.insert(pr.issue_id, pr);
            }
        }
        self
    }

    pub fn failing_loads(mut self) -> Self {
        self.fail_loads = true;
        self
    }

    pub fn failing_pull_requests(mut self) -> Self {
        self.fail_pull_requests = true;
        self
    }

    pub fn with_pull_request_delay(self, issue_id: IssueId, delay: Duration) -> Self {
        self.pull_request_delays
            .write()
            .unwrap()
            .insert(issue_id, delay);
        self
    }

    pub fn completed_pull_requests(&self) -> Vec<IssueId> {
        self.completed_pull_requests.lock().unwrap().clone()
    }

    pub fn load_calls(&self) -> usize {
        self.load_calls.load(Ordering::SeqCst)
    }

    pub fn pull_request_calls(&self) -> usize {
        self.pull_request_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IssueStore for MockIssueStore {
    async fn get_issues_by_ids(
        &self,
        ids: &[IssueId],
        keep_order: bool,
    ) -> Result<Vec<Issue>, SuggestionError> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_loads {
            return Err(SuggestionError::load("connection refused"));
        }

        let stored = self.issues.read().unwrap();
        let mut issues: Vec<Issue> = ids
            .iter()
            .filter_map(|id| stored.get(id).cloned())
            .collect();
        if !keep_order {
            issues.sort_by_key(|issue| issue.id);
        }
        Ok(issues)
    }

    async fn load_pull_request(
        &self,
        issue_id: IssueId,
    ) -> Result<Option<PullRequest>, SuggestionError> {
        self.pull_request_calls.fetch_add(1, Ordering::SeqCst);

        let delay = self.pull_request_delays.read().unwrap().get(&issue_id).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_pull_requests {
            return Err(SuggestionError::load("connection reset"));
        }

        self.completed_pull_requests.lock().unwrap().push(issue_id);
        Ok(self.pull_requests.read().unwrap().get(&issue_id).cloned())
    }
}

/// Mock access resolver with a fixed set of repositories.
#[derive(Clone, Default)]
pub struct MockRepoAccessResolver {
    repositories: Arc<RwLock<HashMap<RepositoryId, RepoAccess>>>,
    fail: bool,
}

#[allow(dead_code)]
impl MockRepoAccessResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_access(self, access: RepoAccess) -> Self {
        self.repositories
            .write()
            .unwrap()
            .insert(access.repository_id, access);
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl RepoAccessResolver for MockRepoAccessResolver {
    async fn resolve(
        &self,
        repository_id: RepositoryId,
    ) -> Result<Option<RepoAccess>, SuggestionError> {
        if self.fail {
            return Err(SuggestionError::access(repository_id, "lookup failed"));
        }
        Ok(self.repositories.read().unwrap().get(&repository_id).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::SUGGESTION_PAGE_SIZE;
    use time::{Duration, OffsetDateTime};

    fn make_issue(id: i64, repo: i64, title: &str, is_pull: bool, age_minutes: i64) -> Issue {
        Issue {
            id: IssueId::new(id),
            repo_id: RepositoryId::new(repo),
            index: id,
            title: title.to_string(),
            is_closed: false,
            is_pull,
            updated_at: OffsetDateTime::now_utc() - Duration::minutes(age_minutes),
        }
    }

    #[tokio::test]
    async fn index_scopes_to_repository_and_kind() {
        let index = MockIssueIndex::new().with_issues(vec![
            make_issue(1, 1, "Fix login", false, 1),
            make_issue(2, 1, "Fix logout", true, 2),
            make_issue(3, 2, "Fix login elsewhere", false, 3),
        ]);

        let options =
            IssueSearchOptions::for_suggestions("fix", RepositoryId::new(1), Some(false));
        let hits = index.search_issues(&options).await.unwrap();

        assert_eq!(hits.ids, vec![IssueId::new(1)]);
        assert_eq!(hits.total, 1);
    }

    #[tokio::test]
    async fn index_pages_most_recent_first() {
        let issues = (1..=8)
            .map(|id| make_issue(id, 1, "Same title", false, id))
            .collect();
        let index = MockIssueIndex::new().with_issues(issues);

        let options = IssueSearchOptions::for_suggestions("", RepositoryId::new(1), None);
        let hits = index.search_issues(&options).await.unwrap();

        assert_eq!(hits.ids.len(), SUGGESTION_PAGE_SIZE);
        assert_eq!(hits.ids[0], IssueId::new(1));
        assert_eq!(hits.total, 8);
    }

    #[tokio::test]
    async fn store_omits_missing_ids_and_keeps_order() {
        let store = MockIssueStore::new().with_issues(vec![
            make_issue(1, 1, "one", false, 1),
            make_issue(3, 1, "three", false, 1),
        ]);

        let ids = [IssueId::new(3), IssueId::new(2), IssueId::new(1)];
        let issues = store.get_issues_by_ids(&ids, true).await.unwrap();

        let loaded: Vec<_> = issues.iter().map(|i| i.id).collect();
        assert_eq!(loaded, vec![IssueId::new(3), IssueId::new(1)]);
    }
}
