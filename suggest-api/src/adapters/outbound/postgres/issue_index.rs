//! Keyword issue search over the `issues` table.
//!
//! A row matches when the keyword is empty, hits the title/body tsvector,
//! appears in the title (case-insensitive), or names the issue number as
//! `N` or `#N`.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{
    models::{IssueId, IssueSearchHits, IssueSearchOptions, SortBy},
    ports::outbound::IssueIndex,
    SuggestionError,
};

pub struct PostgresIssueIndex {
    pool: PgPool,
}

impl PostgresIssueIndex {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SearchHitRow {
    id: i64,
    total: i64,
}

#[async_trait]
impl IssueIndex for PostgresIssueIndex {
    async fn search_issues(
        &self,
        options: &IssueSearchOptions,
    ) -> Result<IssueSearchHits, SuggestionError> {
        let keyword = options.keyword.trim();
        let repo_ids = options
            .repo_ids
            .iter()
            .map(|id| id.as_i64())
            .collect::<Vec<_>>();

        let sql = format!(
            r#"
            SELECT id, COUNT(*) OVER () AS total
            FROM issues
            WHERE repo_id = ANY($1)
              AND ($2::bool IS NULL OR is_pull = $2)
              AND ($3::bool IS NULL OR is_closed = $3)
              AND (
                $4 = ''
                OR search_vector @@ websearch_to_tsquery('simple', $4)
                OR title ILIKE '%' || $5 || '%' ESCAPE '\'
                OR issue_index = $6::bigint
              )
            ORDER BY {}
            LIMIT $7 OFFSET $8
            "#,
            order_by(options.sort_by)
        );

        let rows = sqlx::query_as::<_, SearchHitRow>(&sql)
            .bind(&repo_ids)
            .bind(options.is_pull)
            .bind(options.is_closed)
            .bind(keyword)
            .bind(escape_like(keyword))
            .bind(parse_issue_index(keyword))
            .bind(options.paginator.page_size as i64)
            .bind(options.paginator.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|err| {
                SuggestionError::index(format!(
                    "search for {:?} in repositories {:?}: {}",
                    keyword, repo_ids, err
                ))
            })?;

        let total = rows.first().map(|row| row.total).unwrap_or(0);
        let ids = rows.into_iter().map(|row| IssueId::new(row.id)).collect();

        Ok(IssueSearchHits { ids, total })
    }
}

fn order_by(sort_by: SortBy) -> &'static str {
    match sort_by {
        SortBy::UpdatedDesc => "updated_at DESC, id DESC",
    }
}

/// Issue number referenced by a keyword like `42` or `#42`.
fn parse_issue_index(keyword: &str) -> Option<i64> {
    keyword
        .strip_prefix('#')
        .unwrap_or(keyword)
        .parse::<i64>()
        .ok()
        .filter(|index| *index > 0)
}

fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
