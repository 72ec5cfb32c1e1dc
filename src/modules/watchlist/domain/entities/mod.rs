pub mod watchlist;

pub use watchlist::{WatchList, WatchListSort};
