//! Client-side habit board.
//!
//! The board keeps an in-memory mirror of the server's habits, the new-habit
//! form with its field errors, and the current notification. Every user action
//! is a single request; responses are applied in the order they complete.

use crate::{
    client::{
        form::{FieldErrors, FormField, HabitForm},
        http::HabitApi,
        notification::{Notification, NotificationKind},
    },
    config::client::DEFAULT_NOTIFICATION_TTL,
    entities::{Frequency, HabitModel},
    errors::Result,
};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Notification text after a successful create.
pub const CREATED_MESSAGE: &str = "Habit created successfully! 🎉";
/// Notification text after a successful update.
pub const UPDATED_MESSAGE: &str = "Habit updated successfully";
/// Notification text after a successful delete.
pub const DELETED_MESSAGE: &str = "Habit deleted successfully";
/// Notification text when the list cannot be fetched.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch habits";
/// Notification text when a create fails.
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create habit";
/// Notification text when an update fails.
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update habit";
/// Notification text when a delete fails.
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete habit";

/// Counts derived from the local habit list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HabitStats {
    /// Every habit
    pub total: usize,
    /// Habits with a daily cadence
    pub daily: usize,
    /// Habits with a weekly cadence
    pub weekly: usize,
    /// Habits with a monthly cadence
    pub monthly: usize,
}

/// State behind the habit list and form.
#[derive(Debug)]
pub struct HabitBoard<A> {
    api: A,
    habits: Vec<HabitModel>,
    loading: bool,
    fetch_failed: bool,
    form: HabitForm,
    errors: FieldErrors,
    notification: Option<Notification>,
    notification_ttl: Duration,
}

impl<A: HabitApi> HabitBoard<A> {
    /// Creates an empty board with the default notification lifetime.
    pub fn new(api: A) -> Self {
        Self::with_notification_ttl(api, DEFAULT_NOTIFICATION_TTL)
    }

    /// Creates an empty board whose notifications last `notification_ttl`.
    pub fn with_notification_ttl(api: A, notification_ttl: Duration) -> Self {
        Self {
            api,
            habits: Vec::new(),
            loading: false,
            fetch_failed: false,
            form: HabitForm::default(),
            errors: FieldErrors::new(),
            notification: None,
            notification_ttl,
        }
    }

    /// The local habit list, in display order.
    pub fn habits(&self) -> &[HabitModel] {
        &self.habits
    }

    /// Whether a request is in flight.
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the loading indicator should replace the (empty) list.
    pub fn is_loading_empty(&self) -> bool {
        self.loading && self.habits.is_empty()
    }

    /// Whether the most recent list fetch failed.
    pub const fn fetch_failed(&self) -> bool {
        self.fetch_failed
    }

    /// The form as currently filled in.
    pub const fn form(&self) -> &HabitForm {
        &self.form
    }

    /// Current validation message for `field`, if any.
    pub fn field_error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Changes a text field; editing a field clears its error.
    pub fn set_text(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Title => self.form.title = value,
            FormField::Description => self.form.description = value,
            FormField::Frequency => match value.parse::<Frequency>() {
                Ok(frequency) => self.form.frequency = frequency,
                Err(message) => {
                    self.errors.insert(field, message);
                    return;
                }
            },
        }
        self.errors.remove(&field);
    }

    /// Selects a cadence in the form.
    pub fn set_frequency(&mut self, frequency: Frequency) {
        self.form.frequency = frequency;
        self.errors.remove(&FormField::Frequency);
    }

    /// Derived counts over the local list.
    pub fn stats(&self) -> HabitStats {
        self.habits.iter().fold(
            HabitStats {
                total: self.habits.len(),
                ..HabitStats::default()
            },
            |mut stats, habit| {
                match habit.frequency {
                    Frequency::Daily => stats.daily += 1,
                    Frequency::Weekly => stats.weekly += 1,
                    Frequency::Monthly => stats.monthly += 1,
                }
                stats
            },
        )
    }

    /// The notification still on screen at `now`.
    pub fn notification_at(&self, now: Instant) -> Option<&Notification> {
        self.notification
            .as_ref()
            .filter(|note| note.is_visible_at(now))
    }

    /// The notification still on screen right now.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification_at(Instant::now())
    }

    /// Drops the notification once it has expired.
    pub fn dismiss_expired(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|note| !note.is_visible_at(now))
        {
            self.notification = None;
        }
    }

    fn notify(&mut self, message: &str, kind: NotificationKind) {
        self.notification = Some(Notification::new(
            message,
            kind,
            Instant::now(),
            self.notification_ttl,
        ));
    }

    /// Marks a list fetch as started.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Applies the outcome of a list fetch.
    ///
    /// On failure the previous list is kept and an error notification is shown.
    /// Returns whether the fetch succeeded.
    pub fn finish_load(&mut self, result: Result<Vec<HabitModel>>) -> bool {
        self.loading = false;
        match result {
            Ok(habits) => {
                debug!(count = habits.len(), "Habit list loaded");
                self.habits = habits;
                self.fetch_failed = false;
            }
            Err(e) => {
                warn!("Error fetching habits: {}", e);
                self.fetch_failed = true;
                self.notify(FETCH_FAILED_MESSAGE, NotificationKind::Error);
            }
        }
        !self.fetch_failed
    }

    /// Fetches the habit list from the server, returning whether it succeeded.
    pub async fn load(&mut self) -> bool {
        self.begin_load();
        let result = self.api.list_habits().await;
        self.finish_load(result)
    }

    /// Validates the form and, if valid, creates the habit.
    ///
    /// Nothing is sent when validation fails; the field errors are set instead.
    /// A created habit is put at the front of the local list and the form is reset.
    pub async fn submit(&mut self) -> Option<HabitModel> {
        self.errors = self.form.validate();
        if !self.errors.is_empty() {
            return None;
        }

        self.loading = true;
        let result = self.api.create_habit(&self.form.to_create_input()).await;
        self.loading = false;

        match result {
            Ok(habit) => {
                self.habits.insert(0, habit.clone());
                self.form = HabitForm::default();
                self.errors.clear();
                self.notify(CREATED_MESSAGE, NotificationKind::Success);
                Some(habit)
            }
            Err(e) => {
                warn!("Error creating habit: {}", e);
                self.notify(CREATE_FAILED_MESSAGE, NotificationKind::Error);
                None
            }
        }
    }

    /// Replaces a habit with the contents of `form`.
    ///
    /// The form is validated with the same rules as [`Self::submit`]; on success
    /// the habit is swapped in place in the local list.
    pub async fn edit(&mut self, id: &str, form: &HabitForm) -> Option<HabitModel> {
        self.errors = form.validate();
        if !self.errors.is_empty() {
            return None;
        }

        self.loading = true;
        let result = self.api.update_habit(id, &form.to_update_input()).await;
        self.loading = false;

        match result {
            Ok(habit) => {
                if let Some(slot) = self.habits.iter_mut().find(|h| h.id == habit.id) {
                    *slot = habit.clone();
                }
                self.notify(UPDATED_MESSAGE, NotificationKind::Success);
                Some(habit)
            }
            Err(e) => {
                warn!("Error updating habit {}: {}", id, e);
                self.notify(UPDATE_FAILED_MESSAGE, NotificationKind::Error);
                None
            }
        }
    }

    /// Deletes a habit and drops it from the local list.
    pub async fn remove(&mut self, id: &str) -> bool {
        self.loading = true;
        let result = self.api.delete_habit(id).await;
        self.loading = false;

        match result {
            Ok(_) => {
                self.habits.retain(|h| h.id != id);
                self.notify(DELETED_MESSAGE, NotificationKind::Success);
                true
            }
            Err(e) => {
                warn!("Error deleting habit {}: {}", id, e);
                self.notify(DELETE_FAILED_MESSAGE, NotificationKind::Error);
                false
            }
        }
    }
}
