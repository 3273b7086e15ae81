mod access;
mod responses;

pub use access::*;
pub use responses::*;
