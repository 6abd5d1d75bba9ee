//! Repository abstraction over habit persistence.
//!
//! Request handlers only talk to a [`HabitRepository`], so the storage technology
//! can change without touching handler logic. [`SeaOrmHabitRepository`] is the
//! production implementation and delegates to [`crate::core::habit`].

use crate::{
    core::{habit as habit_ops, validation::HabitDraft},
    entities::habit,
    errors::Result,
};
use async_trait::async_trait;
use sea_orm::DatabaseConnection;

/// Persistence operations for habit records.
#[async_trait]
pub trait HabitRepository: Send + Sync {
    /// Returns every stored habit.
    async fn list(&self) -> Result<Vec<habit::Model>>;

    /// Persists a new habit and returns the stored record.
    async fn create(&self, draft: HabitDraft) -> Result<habit::Model>;

    /// Looks up a habit by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<habit::Model>>;

    /// Replaces the editable fields of a habit; `None` when the id is unknown.
    async fn update(&self, id: &str, draft: HabitDraft) -> Result<Option<habit::Model>>;

    /// Removes a habit; `false` when the id is unknown.
    async fn delete(&self, id: &str) -> Result<bool>;
}

/// [`HabitRepository`] backed by a `SeaORM` connection.
#[derive(Debug)]
pub struct SeaOrmHabitRepository {
    db: DatabaseConnection,
}

impl SeaOrmHabitRepository {
    /// Wraps an open database connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gives back the connection, e.g. to close it on shutdown.
    #[must_use]
    pub fn into_connection(self) -> DatabaseConnection {
        self.db
    }
}

#[async_trait]
impl HabitRepository for SeaOrmHabitRepository {
    async fn list(&self) -> Result<Vec<habit::Model>> {
        habit_ops::get_all_habits(&self.db).await
    }

    async fn create(&self, draft: HabitDraft) -> Result<habit::Model> {
        habit_ops::create_habit(&self.db, draft).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<habit::Model>> {
        habit_ops::get_habit_by_id(&self.db, id).await
    }

    async fn update(&self, id: &str, draft: HabitDraft) -> Result<Option<habit::Model>> {
        habit_ops::replace_habit(&self.db, id, draft).await
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        habit_ops::delete_habit(&self.db, id).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::Frequency;
    use crate::errors::Error;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_repository_through_trait_object() -> Result<()> {
        let db = setup_test_db().await?;
        let repo: Arc<dyn HabitRepository> = Arc::new(SeaOrmHabitRepository::new(db));

        let created = repo.create(draft("Walk the dog", None, Frequency::Daily)).await?;
        assert_eq!(repo.list().await?.len(), 1);

        let found = repo.find_by_id(&created.id).await?.unwrap();
        assert_eq!(found, created);

        let updated = repo
            .update(
                &created.id,
                draft("Walk the dog twice", Some("morning and evening"), Frequency::Daily),
            )
            .await?
            .unwrap();
        assert_eq!(updated.description.as_deref(), Some("morning and evening"));

        assert!(repo.delete(&created.id).await?);
        assert!(repo.find_by_id(&created.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_shared_repository_hands_back_connection() -> Result<()> {
        let repo = Arc::new(setup_test_repository().await?);
        let shared: Arc<dyn HabitRepository> = repo.clone();
        shared.create(draft("Floss", None, Frequency::Daily)).await?;
        drop(shared);

        let db = Arc::try_unwrap(repo).unwrap().into_connection();
        assert_eq!(habit_ops::get_all_habits(&db).await?.len(), 1);
        db.close().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces_as_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = SeaOrmHabitRepository::new(db);

        let err = repo.list().await.unwrap_err();
        assert!(matches!(err, Error::Database(_)));
        assert!(err.to_string().contains("connection reset"));
    }
}
