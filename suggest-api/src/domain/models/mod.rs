mod access;
mod ids;
mod issue;
mod search;
mod suggestion;

pub use access::*;
pub use ids::*;
pub use issue::*;
pub use search::*;
pub use suggestion::*;
