//! In-memory adapters for task storage.

mod repository;

pub use repository::InMemoryTaskRepository;
