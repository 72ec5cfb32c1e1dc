pub mod catalog;
pub mod review;
pub mod user;
pub mod watchlist;
