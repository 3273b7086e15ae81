//! Repository access for suggestion requests.
//!
//! A host that already authorized the request can put a [`RepoAccess`] into
//! the request extensions. Otherwise [`resolve_repo_access`] looks it up via
//! the configured [`RepoAccessResolver`](crate::domain::ports::outbound::RepoAccessResolver).

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::{
    app_state::AppState,
    domain::models::{RepoAccess, RepositoryId},
    routes::ApiError,
};

/// Extracts the viewer's [`RepoAccess`] attached earlier in the request.
/// Returns 404 when nothing resolved the repository.
#[derive(Debug, Clone, Copy)]
pub struct ViewerAccess(pub RepoAccess);

#[async_trait]
impl<S> FromRequestParts<S> for ViewerAccess
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RepoAccess>()
            .copied()
            .map(ViewerAccess)
            .ok_or_else(|| ApiError::not_found("repository not found"))
    }
}

/// Middleware attaching [`RepoAccess`] for the `:repo_id` path segment.
///
/// Access attached upstream must belong to the repository in the path.
pub async fn resolve_repo_access(
    State(app_state): State<AppState>,
    Path(repo_id): Path<i64>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let repository_id = RepositoryId::new(repo_id);

    let attached = request
        .extensions()
        .get::<RepoAccess>()
        .map(|access| access.repository_id);

    match attached {
        Some(attached) if attached != repository_id => {
            tracing::debug!(
                "access attached for repository {} does not cover repository {}",
                attached,
                repository_id
            );
            return Err(ApiError::not_found("repository not found"));
        }
        Some(_) => {}
        None => {
            let access = app_state
                .repo_access
                .resolve(repository_id)
                .await
                .map_err(|err| {
                    tracing::error!("{}", err);
                    ApiError::internal("internal server error")
                })?
                .ok_or_else(|| ApiError::not_found("repository not found"))?;
            request.extensions_mut().insert(access);
        }
    }

    Ok(next.run(request).await)
}
