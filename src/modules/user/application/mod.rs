pub mod dto;
pub mod service;

pub use dto::UserView;
pub use service::UserService;
