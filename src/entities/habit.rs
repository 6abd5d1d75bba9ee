//! Habit entity - Represents a tracked routine item.
//!
//! Each habit has a title, an optional description, a frequency and a creation
//! timestamp. The id is assigned by the server when the habit is created and the
//! JSON form of the model is what the API returns to clients.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Habit database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "habits")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Server-assigned identifier (UUID v4 text)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Short name of the habit (e.g., "Drink water")
    pub title: String,
    /// Optional motivation or details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// How often the habit should be performed
    pub frequency: Frequency,
    /// When the habit was created
    pub created_at: DateTimeUtc,
}

/// `Habit` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Cadence tag on a habit.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every day
    #[default]
    #[sea_orm(string_value = "daily")]
    Daily,
    /// Once a week
    #[sea_orm(string_value = "weekly")]
    Weekly,
    /// Once a month
    #[sea_orm(string_value = "monthly")]
    Monthly,
}

impl Frequency {
    /// Lowercase wire name of the frequency.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(format!(
                "`{other}` is not a valid frequency (expected daily, weekly or monthly)"
            )),
        }
    }
}
