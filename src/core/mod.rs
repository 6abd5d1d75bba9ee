//! Core business logic - framework-agnostic habit operations.

/// Habit storage operations on a database connection
pub mod habit;
/// Repository trait used by the API layer
pub mod repository;
/// Request input shapes and their validation
pub mod validation;

pub use repository::{HabitRepository, SeaOrmHabitRepository};
pub use validation::{CreateHabitInput, HabitDraft, UpdateHabitInput};
