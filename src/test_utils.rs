//! Shared test utilities for `HabitForge`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test habits with sensible defaults.

use crate::{
    core::{HabitDraft, SeaOrmHabitRepository, habit},
    entities::{self, Frequency},
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Same as [`setup_test_db`], wrapped in the production repository.
pub async fn setup_test_repository() -> Result<SeaOrmHabitRepository> {
    Ok(SeaOrmHabitRepository::new(setup_test_db().await?))
}

/// Builds an already-validated draft.
#[must_use]
pub fn draft(title: &str, description: Option<&str>, frequency: Frequency) -> HabitDraft {
    HabitDraft {
        title: title.to_string(),
        description: description.map(str::to_string),
        frequency,
    }
}

/// Creates a test habit with sensible defaults.
///
/// # Defaults
/// * `description`: None
/// * `frequency`: daily
pub async fn create_test_habit(
    db: &DatabaseConnection,
    title: &str,
) -> Result<entities::habit::Model> {
    habit::create_habit(db, draft(title, None, Frequency::Daily)).await
}

/// Creates a test habit with custom parameters.
pub async fn create_custom_habit(
    db: &DatabaseConnection,
    title: &str,
    description: Option<&str>,
    frequency: Frequency,
) -> Result<entities::habit::Model> {
    habit::create_habit(db, draft(title, description, frequency)).await
}
