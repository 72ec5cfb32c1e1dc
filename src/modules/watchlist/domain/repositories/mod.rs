pub mod watchlist_repository;

pub use watchlist_repository::WatchListRepository;
