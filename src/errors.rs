use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Request input failed validation; `message` is shown to the caller as-is.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Habit not found")]
    HabitNotFound { id: String },

    #[error("Cast to habit id failed for value \"{id}\"")]
    InvalidId { id: String },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the habit API, carrying its `{message}` body.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl Error {
    /// Builds a validation error for the given input field.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
