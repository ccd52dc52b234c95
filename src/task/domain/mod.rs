//! Domain model for task management.
//!
//! The task domain models a single todo record: an opaque identifier, a
//! validated title, an optional description, and a two-state completion
//! status. All infrastructure concerns stay outside of the domain boundary.

mod error;
mod ids;
mod task;

pub use error::{ParseTaskIdError, ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use task::{Task, TaskStatus};
