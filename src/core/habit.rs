//! Habit business logic - Handles all habit-related storage operations.
//!
//! This module provides functions for listing, creating, retrieving, replacing and
//! deleting habits. Inputs arrive as validated [`HabitDraft`]s, so these functions
//! only deal with persistence. All functions are async and return Result types.

use crate::{
    core::validation::HabitDraft,
    entities::{Habit, habit},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use uuid::Uuid;

/// Retrieves every habit, oldest first.
///
/// Habits are returned in insertion order (ascending creation time); the client
/// is free to reorder its own copy.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_habits(db: &DatabaseConnection) -> Result<Vec<habit::Model>> {
    Habit::find()
        .order_by_asc(habit::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a habit by its id, returning None if it does not exist.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_habit_by_id(
    db: &DatabaseConnection,
    habit_id: &str,
) -> Result<Option<habit::Model>> {
    Habit::find_by_id(habit_id.to_string())
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new habit with a fresh id and the current timestamp.
///
/// # Errors
/// Returns an error if the database insert operation fails.
pub async fn create_habit(db: &DatabaseConnection, draft: HabitDraft) -> Result<habit::Model> {
    let habit = habit::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        title: Set(draft.title),
        description: Set(draft.description),
        frequency: Set(draft.frequency),
        created_at: Set(chrono::Utc::now()),
    };

    habit.insert(db).await.map_err(Into::into)
}

/// Replaces the title, description and frequency of an existing habit.
///
/// The id and creation time are left untouched. Returns None if no habit has
/// the given id, including when the habit disappears between the lookup and
/// the write; nothing is created in either case.
///
/// # Errors
/// Returns an error if the database lookup or update fails.
pub async fn replace_habit(
    db: &DatabaseConnection,
    habit_id: &str,
    draft: HabitDraft,
) -> Result<Option<habit::Model>> {
    let Some(existing) = get_habit_by_id(db, habit_id).await? else {
        return Ok(None);
    };

    let mut habit: habit::ActiveModel = existing.into();
    habit.title = Set(draft.title);
    habit.description = Set(draft.description);
    habit.frequency = Set(draft.frequency);

    match habit.update(db).await {
        Ok(updated) => Ok(Some(updated)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Permanently deletes a habit, returning whether a record was removed.
///
/// # Errors
/// Returns an error if the database delete operation fails.
pub async fn delete_habit(db: &DatabaseConnection, habit_id: &str) -> Result<bool> {
    let result = Habit::delete_by_id(habit_id.to_string()).exec(db).await?;
    Ok(result.rows_affected > 0)
}
