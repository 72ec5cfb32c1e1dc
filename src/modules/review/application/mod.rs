pub mod dto;
pub mod service;

pub use dto::ReviewView;
pub use service::ReviewService;
