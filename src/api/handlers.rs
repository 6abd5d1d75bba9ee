//! Habit request handlers.
//!
//! Each handler is a stateless function over the shared [`AppState`]: it parses
//! and validates its input, calls the repository, and returns either a JSON
//! record or a tagged [`Error`] that becomes the HTTP response.

use crate::{
    api::{AppState, MessageBody},
    core::{
        CreateHabitInput, UpdateHabitInput,
        validation::parse_habit_id,
    },
    entities::habit,
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Text returned by `GET /`.
pub const SERVICE_ALIVE_MESSAGE: &str = "Habit Tracker API is running!";

/// Text returned after a successful delete.
pub const HABIT_DELETED_MESSAGE: &str = "Habit deleted successfully";

/// Body of a successful `DELETE /api/habits/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always `true` on success
    pub success: bool,
    /// Confirmation text
    pub message: String,
}

/// `GET /`
pub async fn service_alive() -> Json<MessageBody> {
    Json(MessageBody::new(SERVICE_ALIVE_MESSAGE))
}

/// `GET /api/habits` - every habit, oldest first.
#[instrument(skip(state))]
pub async fn list_habits(State(state): State<AppState>) -> Result<Json<Vec<habit::Model>>> {
    let habits = state.habits.list().await?;
    Ok(Json(habits))
}

/// `POST /api/habits` - validates the body and stores a new habit.
#[instrument(skip(state, payload))]
pub async fn create_habit(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateHabitInput>, JsonRejection>,
) -> Result<(StatusCode, Json<habit::Model>)> {
    let Json(input) = payload?;
    let draft = input.into_draft()?;

    let habit = state.habits.create(draft).await?;
    info!(habit_id = %habit.id, title = %habit.title, "Habit created");

    Ok((StatusCode::CREATED, Json(habit)))
}

/// `PUT /api/habits/:id` - replaces title, description and frequency.
///
/// The id is resolved before the body is validated, so an unknown id is a 404
/// whatever the body contains.
#[instrument(skip(state, payload))]
pub async fn update_habit(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: std::result::Result<Json<UpdateHabitInput>, JsonRejection>,
) -> Result<Json<habit::Model>> {
    let id = parse_habit_id(&raw_id)?;
    let not_found = || Error::HabitNotFound { id: id.clone() };

    if state.habits.find_by_id(&id).await?.is_none() {
        return Err(not_found());
    }

    let Json(input) = payload?;
    let draft = input.into_draft()?;

    // The habit can disappear between the lookup and the write
    let habit = state.habits.update(&id, draft).await?.ok_or_else(not_found)?;
    info!(habit_id = %habit.id, "Habit updated");

    Ok(Json(habit))
}

/// `DELETE /api/habits/:id` - permanently removes a habit.
#[instrument(skip(state))]
pub async fn delete_habit(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let id = parse_habit_id(&raw_id)?;

    if !state.habits.delete(&id).await? {
        return Err(Error::HabitNotFound { id });
    }
    info!(habit_id = %id, "Habit deleted");

    Ok(Json(DeleteResponse {
        success: true,
        message: HABIT_DELETED_MESSAGE.to_string(),
    }))
}
