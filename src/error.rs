// ============================================================================
// ERRORS - Typed failures for API, store, auth and storage
// ============================================================================

use thiserror::Error;

/// Failure talking to the remote image service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("no access token stored")]
    MissingCredential,

    #[error("unauthorized (HTTP {0})")]
    Unauthorized(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("request build error: {0}")]
    Request(String),
}

impl ApiError {
    /// Map a non-2xx status to the matching error
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => Self::Unauthorized(status),
            _ => Self::Http { status, message: message.into() },
        }
    }

    /// Missing or rejected token; the app drops back to the login view.
    /// Anything else is only logged.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::MissingCredential | Self::Unauthorized(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("an upload is already in progress")]
    UploadInProgress,

    #[error("image store was disposed before the request settled")]
    Disposed,
}

impl StoreError {
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Api(err) if err.is_auth_failure())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,

    #[error("failed to write storage key: {0}")]
    Write(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("no token refresh source configured")]
    RefreshUnavailable,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(ApiError::from_status(401, "nope"), ApiError::Unauthorized(401));
        assert_eq!(ApiError::from_status(403, "nope"), ApiError::Unauthorized(403));
        assert_eq!(
            ApiError::from_status(500, "boom"),
            ApiError::Http { status: 500, message: "boom".to_string() }
        );
    }

    #[test]
    fn test_auth_failures() {
        assert!(ApiError::MissingCredential.is_auth_failure());
        assert!(ApiError::Unauthorized(401).is_auth_failure());
        assert!(!ApiError::Network("offline".into()).is_auth_failure());
        assert!(!ApiError::from_status(404, "missing").is_auth_failure());
        assert!(StoreError::from(ApiError::MissingCredential).is_auth_failure());
        assert!(!StoreError::UploadInProgress.is_auth_failure());
    }

    #[test]
    fn test_store_error_wraps_api_message() {
        let err: StoreError = ApiError::Network("connection refused".into()).into();
        assert_eq!(err.to_string(), "network error: connection refused");
    }
}
