pub mod user;

pub use user::{normalize_username, User};
