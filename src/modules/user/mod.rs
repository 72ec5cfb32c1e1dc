pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::UserService;
pub use domain::{User, UserRepository};
