//! Error types for the Opttab MCP client.

use thiserror::Error;

/// The main error type for the Opttab MCP client.
#[derive(Error, Debug)]
pub enum Error {
    /// Connection or protocol failure before a response was received.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP {status}: {body}")]
    Http {
        /// Response status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// The server answered with a success status but the body is not JSON.
    #[error("Invalid JSON in HTTP {status} response: {source}")]
    Decode {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors (config file reads and writes)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// HTTP status code carried by the error, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } | Self::Decode { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body carried by the error, if a response was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Http { body, .. } | Self::Decode { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Check if the server rejected the request with an error status.
    pub fn is_http(&self) -> bool {
        matches!(self, Self::Http { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_exposes_status_and_body() {
        let err = Error::Http {
            status: 401,
            body: r#"{"error":"bad key"}"#.to_string(),
        };
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.body(), Some(r#"{"error":"bad key"}"#));
        assert!(err.is_http());
        assert_eq!(err.to_string(), r#"HTTP 401: {"error":"bad key"}"#);
    }

    #[test]
    fn test_decode_error_keeps_raw_body() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = Error::Decode {
            status: 200,
            body: "not json".to_string(),
            source,
        };
        assert_eq!(err.status(), Some(200));
        assert_eq!(err.body(), Some("not json"));
        assert!(!err.is_http());
    }

    #[test]
    fn test_config_error_has_no_status() {
        let err = Error::config("missing");
        assert_eq!(err.status(), None);
        assert_eq!(err.body(), None);
        assert_eq!(err.to_string(), "Configuration error: missing");
    }
}
