pub mod actor;
pub mod director;
pub mod genre;
pub mod movie;

pub use actor::Actor;
pub use director::Director;
pub use genre::Genre;
pub use movie::Movie;
