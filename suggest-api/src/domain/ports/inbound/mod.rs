mod issue_suggestions;

pub use issue_suggestions::*;
