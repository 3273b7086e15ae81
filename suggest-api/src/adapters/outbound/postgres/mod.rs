mod issue_index;
mod issue_store;
mod repo_access;

pub use issue_index::PostgresIssueIndex;
pub use issue_store::PostgresIssueStore;
pub use repo_access::PostgresRepoAccessResolver;
