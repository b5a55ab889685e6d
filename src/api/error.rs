use thiserror::Error;

use crate::store::LoadError;

/// Failures a fetch can produce.
///
/// The store boundary collapses every variant into one opaque failure
/// descriptor; the taxonomy exists for the logs and for tests that want
/// to branch on the cause.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection-level failure before any response arrived.
    #[error("request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered 404 for the requested identifier.
    #[error("entity not found")]
    NotFound,

    /// Any other non-success status.
    #[error("server error: {status} - {message}")]
    Server { status: u16, message: String },

    /// The response body did not decode as the expected payload.
    #[error("malformed payload: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Stable label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Transport { .. } => "transport",
            ApiError::NotFound => "not_found",
            ApiError::Server { .. } => "server",
            ApiError::Decode { .. } => "decode",
        }
    }
}

impl From<ApiError> for LoadError {
    fn from(error: ApiError) -> Self {
        LoadError::new(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_stable_labels() {
        assert_eq!(ApiError::NotFound.kind(), "not_found");
        let server = ApiError::Server {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(server.kind(), "server");
    }

    #[test]
    fn server_error_display_carries_status_and_message() {
        let error = ApiError::Server {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(error.to_string(), "server error: 500 - boom");
    }

    #[test]
    fn collapses_into_opaque_load_error() {
        let collapsed: LoadError = ApiError::NotFound.into();
        assert_eq!(collapsed.message(), "entity not found");
    }
}
