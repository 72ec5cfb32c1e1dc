/// Shared infrastructure concerns
///
/// The in-memory store backing every bounded context, and its startup seeding.
pub mod memory_repository;
pub mod seed;

pub use memory_repository::MemoryRepository;
