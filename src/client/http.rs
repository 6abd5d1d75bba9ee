//! HTTP access to the habit API.
//!
//! [`HabitApi`] is the seam the board talks to; [`HabitClient`] implements it
//! with `reqwest` against a running server.

use crate::{
    api::{DeleteResponse, MessageBody},
    config::ClientConfig,
    core::{CreateHabitInput, UpdateHabitInput},
    entities::HabitModel,
    errors::{Error, Result},
};
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// Remote operations on habits.
#[async_trait]
pub trait HabitApi: Send + Sync {
    /// `GET /habits`
    async fn list_habits(&self) -> Result<Vec<HabitModel>>;

    /// `POST /habits`
    async fn create_habit(&self, input: &CreateHabitInput) -> Result<HabitModel>;

    /// `PUT /habits/:id`
    async fn update_habit(&self, id: &str, input: &UpdateHabitInput) -> Result<HabitModel>;

    /// `DELETE /habits/:id`
    async fn delete_habit(&self, id: &str) -> Result<DeleteResponse>;
}

/// `reqwest`-backed [`HabitApi`].
#[derive(Debug, Clone)]
pub struct HabitClient {
    http: reqwest::Client,
    base_url: String,
}

impl HabitClient {
    /// Creates a client for the API rooted at `base_url` (e.g. `http://localhost:5000/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Creates a client from loaded configuration.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    fn habits_url(&self) -> String {
        format!("{}/habits", self.base_url)
    }

    fn habit_url(&self, id: &str) -> String {
        format!("{}/habits/{id}", self.base_url)
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        parse_response(response).await
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return response.json().await.map_err(Into::into);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<MessageBody>(&text)
        .map(|body| body.message)
        .unwrap_or(text);
    debug!(%status, %message, "Habit API returned an error");

    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl HabitApi for HabitClient {
    #[instrument(skip(self))]
    async fn list_habits(&self) -> Result<Vec<HabitModel>> {
        Self::send(self.http.get(self.habits_url())).await
    }

    #[instrument(skip(self))]
    async fn create_habit(&self, input: &CreateHabitInput) -> Result<HabitModel> {
        Self::send(self.http.post(self.habits_url()).json(input)).await
    }

    #[instrument(skip(self))]
    async fn update_habit(&self, id: &str, input: &UpdateHabitInput) -> Result<HabitModel> {
        Self::send(self.http.put(self.habit_url(id)).json(input)).await
    }

    #[instrument(skip(self))]
    async fn delete_habit(&self, id: &str) -> Result<DeleteResponse> {
        Self::send(self.http.delete(self.habit_url(id))).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{api, test_utils::setup_test_repository};
    use std::sync::Arc;

    /// Serves a fresh in-memory API on an ephemeral port and returns its base URL.
    async fn spawn_api() -> String {
        let repo = setup_test_repository().await.unwrap();
        let app = api::router(api::AppState::new(Arc::new(repo)));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/api/")
    }

    #[tokio::test]
    async fn test_client_round_trip_against_server() {
        let client = HabitClient::new(spawn_api().await);
        assert!(client.list_habits().await.unwrap().is_empty());

        let created = client
            .create_habit(&CreateHabitInput {
                title: Some("Drink water".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(created.frequency, crate::entities::Frequency::Daily);

        let updated = client
            .update_habit(
                &created.id,
                &UpdateHabitInput {
                    title: Some("Drink more water".to_string()),
                    frequency: Some("weekly".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Drink more water");

        let deleted = client.delete_habit(&created.id).await.unwrap();
        assert!(deleted.success);
        assert!(client.list_habits().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_client_surfaces_api_errors() {
        let client = HabitClient::new(spawn_api().await);

        let err = client
            .create_habit(&CreateHabitInput::default())
            .await
            .unwrap_err();
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Title is required");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = client
            .delete_habit(&uuid::Uuid::new_v4().to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api { status: 404, .. }));
    }
}
