pub mod application;
pub mod domain;

pub use application::WatchListService;
pub use domain::{WatchList, WatchListRepository, WatchListSort};
