use async_trait::async_trait;

use crate::domain::{
    models::{RepoAccess, RepositoryId},
    SuggestionError,
};

/// Outbound port resolving which repository units a request may read.
///
/// Used when no upstream layer has attached a [`RepoAccess`] to the request.
#[async_trait]
pub trait RepoAccessResolver: Send + Sync + 'static {
    /// `None` when the repository does not exist.
    async fn resolve(
        &self,
        repository_id: RepositoryId,
    ) -> Result<Option<RepoAccess>, SuggestionError>;
}
