pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::MovieService;
pub use domain::{Actor, Director, Genre, Movie, MovieRepository};
