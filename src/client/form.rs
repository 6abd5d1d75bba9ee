//! New/edit habit form state and client-side validation.

use crate::{
    core::{CreateHabitInput, UpdateHabitInput, validation::validate_title},
    entities::{Frequency, HabitModel},
};
use std::collections::BTreeMap;

/// Editable fields of the habit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    /// Habit title
    Title,
    /// Free-text description
    Description,
    /// Cadence selector
    Frequency,
}

/// Contents of the habit form as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitForm {
    /// Raw title text
    pub title: String,
    /// Raw description text
    pub description: String,
    /// Selected cadence
    pub frequency: Frequency,
}

/// Field-level validation messages, keyed by field.
pub type FieldErrors = BTreeMap<FormField, String>;

impl HabitForm {
    /// Creates a form pre-filled with the given values.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        frequency: Frequency,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            frequency,
        }
    }

    /// Pre-fills the form from an existing habit, for editing.
    #[must_use]
    pub fn from_habit(habit: &HabitModel) -> Self {
        Self::new(
            habit.title.clone(),
            habit.description.clone().unwrap_or_default(),
            habit.frequency,
        )
    }

    /// Runs the same title rules the server enforces.
    ///
    /// Returns an empty map when the form can be submitted.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if let Err(e) = validate_title(&self.title) {
            errors.insert(FormField::Title, e.to_string());
        }
        errors
    }

    /// Request body for creating a habit from this form.
    #[must_use]
    pub fn to_create_input(&self) -> CreateHabitInput {
        CreateHabitInput {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            frequency: Some(self.frequency.to_string()),
        }
    }

    /// Request body for replacing a habit with this form's contents.
    #[must_use]
    pub fn to_update_input(&self) -> UpdateHabitInput {
        UpdateHabitInput {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            frequency: Some(self.frequency.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::{TITLE_REQUIRED, TITLE_TOO_SHORT};

    #[test]
    fn test_validate_title_rules() {
        let form = HabitForm::new("   ", "", Frequency::Daily);
        assert_eq!(
            form.validate().get(&FormField::Title).map(String::as_str),
            Some(TITLE_REQUIRED)
        );

        let form = HabitForm::new("a", "", Frequency::Daily);
        assert_eq!(
            form.validate().get(&FormField::Title).map(String::as_str),
            Some(TITLE_TOO_SHORT)
        );

        let form = HabitForm::new("ab", "", Frequency::Daily);
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_default_form_is_empty_daily() {
        let form = HabitForm::default();
        assert_eq!(form.title, "");
        assert_eq!(form.description, "");
        assert_eq!(form.frequency, Frequency::Daily);
    }

    #[test]
    fn test_inputs_carry_every_field() {
        let form = HabitForm::new("Read", "ten pages", Frequency::Monthly);
        let input = form.to_create_input();
        assert_eq!(input.title.as_deref(), Some("Read"));
        assert_eq!(input.description.as_deref(), Some("ten pages"));
        assert_eq!(input.frequency.as_deref(), Some("monthly"));

        let update = form.to_update_input();
        assert_eq!(update.frequency.as_deref(), Some("monthly"));
    }
}
