pub mod entities;
pub mod repositories;

pub use entities::User;
pub use repositories::UserRepository;
