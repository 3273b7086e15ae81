mod issue_index;
mod issue_store;
mod repo_access;

pub use issue_index::*;
pub use issue_store::*;
pub use repo_access::*;
