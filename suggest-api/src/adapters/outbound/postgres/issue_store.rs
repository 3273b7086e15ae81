use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;

use crate::domain::{
    models::{Issue, IssueId, PullRequest, RepositoryId},
    ports::outbound::IssueStore,
    SuggestionError,
};

pub struct PostgresIssueStore {
    pool: PgPool,
}

impl PostgresIssueStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct IssueRow {
    id: i64,
    repo_id: i64,
    issue_index: i64,
    title: String,
    is_closed: bool,
    is_pull: bool,
    updated_at: OffsetDateTime,
}

impl From<IssueRow> for Issue {
    fn from(row: IssueRow) -> Self {
        Self {
            id: IssueId::new(row.id),
            repo_id: RepositoryId::new(row.repo_id),
            index: row.issue_index,
            title: row.title,
            is_closed: row.is_closed,
            is_pull: row.is_pull,
            updated_at: row.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PullRequestRow {
    id: i64,
    issue_id: i64,
    has_merged: bool,
}

#[async_trait]
impl IssueStore for PostgresIssueStore {
    async fn get_issues_by_ids(
        &self,
        ids: &[IssueId],
        keep_order: bool,
    ) -> Result<Vec<Issue>, SuggestionError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw_ids = ids.iter().map(|id| id.as_i64()).collect::<Vec<_>>();

        let rows = sqlx::query_as::<_, IssueRow>(
            r#"
            SELECT id, repo_id, issue_index, title, is_closed, is_pull, updated_at
            FROM issues
            WHERE id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|err| SuggestionError::load(format!("issues {:?}: {}", raw_ids, err)))?;

        let issues = rows.into_iter().map(Issue::from).collect::<Vec<_>>();

        Ok(if keep_order {
            order_by_ids(ids, issues)
        } else {
            issues
        })
    }

    async fn load_pull_request(
        &self,
        issue_id: IssueId,
    ) -> Result<Option<PullRequest>, SuggestionError> {
        let row = sqlx::query_as::<_, PullRequestRow>(
            r#"
            SELECT id, issue_id, has_merged
            FROM pull_requests
            WHERE issue_id = $1
            "#,
        )
        .bind(issue_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| SuggestionError::linkage(issue_id, err.to_string()))?;

        Ok(row.map(|row| PullRequest {
            id: row.id,
            issue_id: IssueId::new(row.issue_id),
            has_merged: row.has_merged,
        }))
    }
}

/// Re-sequence loaded issues into the order of `ids`, dropping ids with no row.
fn order_by_ids(ids: &[IssueId], issues: Vec<Issue>) -> Vec<Issue> {
    let mut by_id: HashMap<IssueId, Issue> =
        issues.into_iter().map(|issue| (issue.id, issue)).collect();

    ids.iter().filter_map(|id| by_id.remove(id)).collect()
}
