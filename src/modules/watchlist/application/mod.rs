pub mod dto;
pub mod service;

pub use dto::WatchListView;
pub use service::WatchListService;
