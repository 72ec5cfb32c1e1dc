/// Shared application layer patterns
pub mod pagination;

pub use pagination::*;
