//! Error types for the character catalog core.
//!
//! # Design
//! "No such character" is deliberately absent from `ApiError`: the API
//! answers an unknown id with an empty result set, which the client reports
//! as `CharacterLookup::NotFound`. Everything here means "the request failed".

/// Errors returned by `CharacterClient` parse methods and transports.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The API returned a non-2xx status.
    #[error("character API error ({status}): {body}")]
    Request { status: u16, body: String },

    /// A 2xx response body could not be deserialized into the envelope.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// No response was obtained (connectivity, DNS, TLS, IO).
    #[error("transport failed: {0}")]
    Transport(String),
}

impl ApiError {
    /// Status code of a `Request` error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised by a `Storage` backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("storage lock poisoned")]
    Poisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_display_carries_status_and_body() {
        let err = ApiError::Request {
            status: 409,
            body: r#"{"code":"MissingParameter"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"character API error (409): {"code":"MissingParameter"}"#
        );
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn transport_error_has_no_status() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.status(), None);
    }
}
