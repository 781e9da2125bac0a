use std::fmt;

/// Custom error type for ELIS operations
#[derive(Debug)]
pub enum ElisError {
    /// HTTP transport failed (connection, DNS, TLS...)
    Http(reqwest::Error),
    /// Response status did not match the expected one, or the body could not be decoded
    InvalidResponse { url: String, body: String },
    /// Login was rejected with 401
    InvalidCredentials,
    /// An unambiguous target is needed but was not given
    ParameterRequired(String),
    /// Paginated response is missing a required key
    MalformedEnvelope { url: String, detail: String },
    /// Credential not found in environment nor profile
    MissingCredential { kind: String },
    /// Request issued after the session was logged out
    SessionClosed,
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
    /// Local I/O error
    Io(String),
}

impl ElisError {
    /// Whether this is an API-level problem (the service answered, but not as expected).
    ///
    /// Bulk operations report these per item and carry on; everything else aborts.
    pub fn is_api_error(&self) -> bool {
        matches!(self, ElisError::InvalidResponse { .. })
    }
}

impl fmt::Display for ElisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElisError::Http(e) => write!(f, "HTTP request failed: {}", e),
            ElisError::InvalidResponse { url, body } => {
                write!(f, "Invalid response [{}]: {}", url, body)
            }
            ElisError::InvalidCredentials => {
                write!(f, "Login failed with the provided credentials.")
            }
            ElisError::ParameterRequired(msg) => write!(f, "{}", msg),
            ElisError::MalformedEnvelope { url, detail } => {
                write!(f, "Malformed paginated response [{}]: {}", url, detail)
            }
            ElisError::MissingCredential { kind } => write!(
                f,
                "Provide API credential {}. Either by using `elisctl configure`, or environment variable ELIS_{}.",
                kind,
                kind.to_uppercase()
            ),
            ElisError::SessionClosed => write!(f, "Session already logged out"),
            ElisError::Json(msg) => write!(f, "JSON error: {}", msg),
            ElisError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ElisError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ElisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ElisError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ElisError {
    fn from(err: reqwest::Error) -> Self {
        ElisError::Http(err)
    }
}

impl From<serde_json::Error> for ElisError {
    fn from(err: serde_json::Error) -> Self {
        ElisError::Json(err.to_string())
    }
}

impl From<std::io::Error> for ElisError {
    fn from(err: std::io::Error) -> Self {
        ElisError::Io(err.to_string())
    }
}

/// Result type alias for ELIS operations
pub type Result<T> = std::result::Result<T, ElisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_response_display() {
        let err = ElisError::InvalidResponse {
            url: "https://api.example.com/v1/queues".to_string(),
            body: "{\"detail\":\"Not found.\"}".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid response [https://api.example.com/v1/queues]"));
        assert!(msg.contains("Not found."));
    }

    #[test]
    fn test_invalid_credentials_display() {
        let err = ElisError::InvalidCredentials;
        assert_eq!(
            err.to_string(),
            "Login failed with the provided credentials."
        );
    }

    #[test]
    fn test_missing_credential_display() {
        let err = ElisError::MissingCredential {
            kind: "password".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("password"));
        assert!(msg.contains("ELIS_PASSWORD"));
        assert!(msg.contains("elisctl configure"));
    }

    #[test]
    fn test_is_api_error() {
        let api = ElisError::InvalidResponse {
            url: "u".to_string(),
            body: "b".to_string(),
        };
        assert!(api.is_api_error());
        assert!(!ElisError::InvalidCredentials.is_api_error());
        assert!(!ElisError::Config("x".to_string()).is_api_error());
        assert!(!ElisError::SessionClosed.is_api_error());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ElisError>();
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: ElisError = json_err.into();
        match err {
            ElisError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected ElisError::Json"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ElisError = io_err.into();
        match err {
            ElisError::Io(msg) => assert!(msg.contains("file not found")),
            _ => panic!("Expected ElisError::Io"),
        }
    }

    #[test]
    fn test_error_source_non_http() {
        use std::error::Error;
        let err = ElisError::ParameterRequired("Queue ID must be specified.".to_string());
        assert!(err.source().is_none());
    }
}
