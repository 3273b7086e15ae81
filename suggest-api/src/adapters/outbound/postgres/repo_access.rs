use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{
    models::{RepoAccess, RepositoryId},
    ports::outbound::RepoAccessResolver,
    SuggestionError,
};

/// Access for anonymous viewers.
///
/// Private repositories resolve to `None`, so they look missing. On public
/// repositories a unit is readable when it is enabled in `repo_units`.
pub struct PostgresRepoAccessResolver {
    pool: PgPool,
}

impl PostgresRepoAccessResolver {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RepoUnitsRow {
    id: i64,
    is_private: bool,
    has_issues: bool,
    has_pulls: bool,
}

#[async_trait]
impl RepoAccessResolver for PostgresRepoAccessResolver {
    async fn resolve(
        &self,
        repository_id: RepositoryId,
    ) -> Result<Option<RepoAccess>, SuggestionError> {
        let row = sqlx::query_as::<_, RepoUnitsRow>(
            r#"
            SELECT
                r.id,
                r.is_private,
                EXISTS (
                    SELECT 1 FROM repo_units u
                    WHERE u.repo_id = r.id AND u.unit_type = 'issues'
                ) AS has_issues,
                EXISTS (
                    SELECT 1 FROM repo_units u
                    WHERE u.repo_id = r.id AND u.unit_type = 'pulls'
                ) AS has_pulls
            FROM repositories r
            WHERE r.id = $1
            "#,
        )
        .bind(repository_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| SuggestionError::access(repository_id, err.to_string()))?;

        Ok(row.filter(|row| !row.is_private).map(|row| {
            RepoAccess::new(RepositoryId::new(row.id), row.has_issues, row.has_pulls)
        }))
    }
}
