// Shared kernel used by every bounded context

pub mod application; // Pagination
pub mod config; // Environment-driven settings
pub mod errors; // Shared error types
pub mod infrastructure; // In-memory store, seeding
pub mod utils; // Logging, validation

pub use config::AppConfig;
pub use infrastructure::MemoryRepository;
