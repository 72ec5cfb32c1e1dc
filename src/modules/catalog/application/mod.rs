pub mod dto;
pub mod service;

pub use dto::{ActorView, DirectorView, FeaturedMovieView, GenreView, MovieView};
pub use service::MovieService;
