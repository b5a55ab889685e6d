//! Typed client for the library REST backend.

mod error;

pub use error::ApiError;

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ServerConfig;
use crate::model::{Author, Book, EntityId};

/// Longest error body excerpt carried into an error message.
const ERROR_BODY_LIMIT: usize = 200;

/// GET-only client over the backend's entity endpoints.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client against `server`.
    ///
    /// The connect timeout is the only transport knob. Requests run
    /// without a deadline: a load is one best-effort request that either
    /// settles or waits.
    pub fn new(server: &ServerConfig) -> Self {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(server.connect_timeout_seconds))
            .build()
            .expect("failed to build http client");
        Self {
            http,
            base_url: server.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn book(&self, id: EntityId) -> Result<Book, ApiError> {
        self.get_json(&format!("/api/books/{id}")).await
    }

    pub async fn books(&self) -> Result<Vec<Book>, ApiError> {
        self.get_json("/api/books").await
    }

    pub async fn author(&self, id: EntityId) -> Result<Author, ApiError> {
        self.get_json(&format!("/api/authors/{id}")).await
    }

    pub async fn authors(&self) -> Result<Vec<Author>, ApiError> {
        self.get_json("/api/authors").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Transport { source })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            // The body is best-effort context; an unreadable body must
            // not turn into a second error.
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: truncate(&message, ERROR_BODY_LIMIT),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { source })
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}
