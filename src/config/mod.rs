/// Client settings (API base URL, notification delay)
pub mod client;

/// Database connection and table creation
pub mod database;

/// Server bind address from environment variables
pub mod server;

pub use client::ClientConfig;
pub use server::ServerConfig;
