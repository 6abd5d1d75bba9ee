//! Input validation boundary for habit requests.
//!
//! Request bodies arrive as loosely typed shapes where every field is optional.
//! They are turned into a [`HabitDraft`] here, before anything reaches storage,
//! so the rest of the crate only ever sees trimmed titles and parsed frequencies.
//! The title rules are shared with the client form.

use crate::entities::Frequency;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum title length, in characters, after trimming.
pub const MIN_TITLE_CHARS: usize = 2;

/// Message for a missing or blank title.
pub const TITLE_REQUIRED: &str = "Title is required";

/// Message for a title shorter than [`MIN_TITLE_CHARS`].
pub const TITLE_TOO_SHORT: &str = "Title must be at least 2 characters long";

/// Body of `POST /api/habits`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateHabitInput {
    /// Required; validated by [`validate_title`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Optional free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// One of `daily`, `weekly`, `monthly`; defaults to `daily`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
}

/// Body of `PUT /api/habits/:id`.
///
/// An update replaces the whole editable part of a habit: omitted fields are
/// not carried over from the stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateHabitInput {
    /// Required; validated by [`validate_title`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Cleared when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Reset to `daily` when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
}

/// Validated editable fields of a habit, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitDraft {
    /// Trimmed, at least [`MIN_TITLE_CHARS`] characters
    pub title: String,
    /// Trimmed, `None` when blank
    pub description: Option<String>,
    /// Parsed frequency
    pub frequency: Frequency,
}

impl CreateHabitInput {
    /// Validates the input into a [`HabitDraft`].
    ///
    /// # Errors
    /// Returns [`Error::Validation`] for a missing/short title or an unknown frequency.
    pub fn into_draft(self) -> Result<HabitDraft> {
        build_draft(self.title, self.description, self.frequency)
    }
}

impl UpdateHabitInput {
    /// Validates the input into a [`HabitDraft`] that replaces the stored fields.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] for a missing/short title or an unknown frequency.
    pub fn into_draft(self) -> Result<HabitDraft> {
        build_draft(self.title, self.description, self.frequency)
    }
}

fn build_draft(
    title: Option<String>,
    description: Option<String>,
    frequency: Option<String>,
) -> Result<HabitDraft> {
    let title = validate_title(title.as_deref().unwrap_or_default())?;
    let frequency = parse_frequency(frequency.as_deref())?;

    Ok(HabitDraft {
        title,
        description: normalize_description(description),
        frequency,
    })
}

/// Checks a raw title and returns it trimmed.
///
/// # Errors
/// Returns [`Error::Validation`] with [`TITLE_REQUIRED`] or [`TITLE_TOO_SHORT`].
pub fn validate_title(raw: &str) -> Result<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(Error::validation("title", TITLE_REQUIRED));
    }
    if title.chars().count() < MIN_TITLE_CHARS {
        return Err(Error::validation("title", TITLE_TOO_SHORT));
    }
    Ok(title.to_string())
}

/// Parses an optional frequency; absent or blank means [`Frequency::Daily`].
///
/// # Errors
/// Returns [`Error::Validation`] when the value is not a known frequency.
pub fn parse_frequency(raw: Option<&str>) -> Result<Frequency> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Frequency::default()),
        Some(value) => value
            .parse::<Frequency>()
            .map_err(|message: String| Error::validation("frequency", message)),
    }
}

fn normalize_description(raw: Option<String>) -> Option<String> {
    raw.map(|d| d.trim().to_string()).filter(|d| !d.is_empty())
}

/// Checks that a path id looks like a habit id and returns its canonical form.
///
/// # Errors
/// Returns [`Error::InvalidId`] when the value is not a UUID.
pub fn parse_habit_id(raw: &str) -> Result<String> {
    Uuid::parse_str(raw.trim())
        .map(|id| id.to_string())
        .map_err(|_| Error::InvalidId {
            id: raw.to_string(),
        })
}
