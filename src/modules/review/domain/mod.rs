pub mod entities;
pub mod repositories;

pub use entities::Review;
pub use repositories::ReviewRepository;
