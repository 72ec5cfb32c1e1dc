pub mod entities;
pub mod repositories;

pub use entities::{WatchList, WatchListSort};
pub use repositories::WatchListRepository;
