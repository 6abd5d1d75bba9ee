//! Plain-text rendering of the board for terminal output.

use crate::{
    client::{
        board::{HabitBoard, HabitStats},
        form::FormField,
        http::HabitApi,
        notification::NotificationKind,
    },
    entities::{Frequency, HabitModel},
};
use chrono::{DateTime, Utc};
use std::fmt::Write as _;

/// Icon shown next to a frequency.
#[must_use]
pub const fn frequency_icon(frequency: Frequency) -> &'static str {
    match frequency {
        Frequency::Daily => "🔄",
        Frequency::Weekly => "📅",
        Frequency::Monthly => "🗓️",
    }
}

/// Creation date in the `May 1, 2024` style.
#[must_use]
pub fn format_created(created_at: &DateTime<Utc>) -> String {
    created_at.format("%b %-d, %Y").to_string()
}

/// One habit card.
#[must_use]
pub fn render_habit(habit: &HabitModel) -> String {
    let mut out = format!(
        "{} {} [{}]  ({})\n",
        frequency_icon(habit.frequency),
        habit.title,
        habit.frequency,
        habit.id
    );
    if let Some(description) = &habit.description {
        let _ = writeln!(out, "   {description}");
    }
    let _ = writeln!(out, "   Created {}", format_created(&habit.created_at));
    out
}

/// The stats line.
#[must_use]
pub fn render_stats(stats: &HabitStats) -> String {
    format!(
        "Total Habits: {}  Daily: {}  Weekly: {}  Monthly: {}",
        stats.total, stats.daily, stats.weekly, stats.monthly
    )
}

/// The whole board: notification, stats, form errors and the habit list.
///
/// After a failed fetch with nothing cached, only the notification and field
/// errors are shown.
pub fn render_board<A: HabitApi>(board: &HabitBoard<A>) -> String {
    let mut out = String::new();

    if let Some(note) = board.notification() {
        let marker = match note.kind() {
            NotificationKind::Success => "✔",
            NotificationKind::Error => "✖",
        };
        let _ = writeln!(out, "{marker} {}", note.message());
    }

    for field in [FormField::Title, FormField::Description, FormField::Frequency] {
        if let Some(error) = board.field_error(field) {
            let _ = writeln!(out, "{field:?}: {error}");
        }
    }

    if board.fetch_failed() && board.habits().is_empty() {
        return out;
    }

    let _ = writeln!(out, "{}", render_stats(&board.stats()));

    if board.is_loading_empty() {
        out.push_str("Loading your habits...\n");
    } else if board.habits().is_empty() {
        out.push_str("No habits yet. Create your first habit to get started on your journey!\n");
    } else {
        for habit in board.habits() {
            out.push_str(&render_habit(habit));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{client::http::HabitClient, errors::Error};
    use chrono::TimeZone;

    #[test]
    fn test_render_habit() {
        let habit = HabitModel {
            id: "abc".to_string(),
            title: "Read".to_string(),
            description: Some("ten pages".to_string()),
            frequency: Frequency::Weekly,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap(),
        };

        let text = render_habit(&habit);
        assert_eq!(
            text,
            "📅 Read [weekly]  (abc)\n   ten pages\n   Created May 1, 2024\n"
        );
    }

    #[test]
    fn test_render_stats() {
        let stats = HabitStats {
            total: 3,
            daily: 1,
            weekly: 1,
            monthly: 1,
        };
        assert_eq!(
            render_stats(&stats),
            "Total Habits: 3  Daily: 1  Weekly: 1  Monthly: 1"
        );
    }

    #[test]
    fn test_failed_fetch_hides_empty_state() {
        let mut board = HabitBoard::new(HabitClient::new("http://127.0.0.1:1/api"));
        board.finish_load(Err(Error::Api {
            status: 502,
            message: "unreachable".to_string(),
        }));

        let text = render_board(&board);
        assert_eq!(text, "✖ Failed to fetch habits\n");
    }

    #[test]
    fn test_empty_board_after_successful_fetch() {
        let mut board = HabitBoard::new(HabitClient::new("http://127.0.0.1:1/api"));
        board.finish_load(Ok(Vec::new()));

        let text = render_board(&board);
        assert!(text.starts_with("Total Habits: 0"));
        assert!(text.contains("No habits yet."));
    }
}
