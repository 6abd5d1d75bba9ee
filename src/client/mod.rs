//! Client layer - consumes the habit API
//!
//! This module holds everything a front end needs: the HTTP client, the board
//! state (list mirror, form, notifications) and plain-text rendering.

/// Board state and user actions
pub mod board;
/// Form state and client-side validation
pub mod form;
/// HTTP access to the API
pub mod http;
/// Auto-dismissing notifications
pub mod notification;
/// Terminal rendering
pub mod view;

pub use board::{HabitBoard, HabitStats};
pub use form::{FormField, HabitForm};
pub use http::{HabitApi, HabitClient};
pub use notification::{Notification, NotificationKind};
