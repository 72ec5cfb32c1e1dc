pub mod application;
pub mod domain;

pub use application::ReviewService;
pub use domain::{Review, ReviewRepository};
