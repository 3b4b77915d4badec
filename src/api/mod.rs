//! Client for the remote models API.
//!
//! - `models`: wire types for `GET /modelos` and `POST /novomodelo`
//! - `client`: the reqwest-backed [`ApiClient`]
//!
//! The screen talks to the API through the [`ModelsApi`] trait so tests can
//! swap the HTTP client for an in-memory fake.

pub mod client;
pub mod models;

use async_trait::async_trait;
use thiserror::Error;

pub use client::ApiClient;
pub use models::{DraftRecord, ModelRecord, NewModelPayload};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} from {endpoint}")]
    UnexpectedStatus { endpoint: &'static str, status: u16 },
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("invalid auth token header value")]
    InvalidAuthToken,
}

/// Operations the screen needs from the remote models resource.
#[async_trait]
pub trait ModelsApi: Send + Sync {
    /// Fetch every model, in server order.
    async fn list_models(&self) -> Result<Vec<ModelRecord>, ApiError>;

    /// Create a model from the draft. Only a `200` response counts as success.
    async fn create_model(&self, draft: &DraftRecord) -> Result<(), ApiError>;
}
