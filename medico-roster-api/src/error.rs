use serde::{Deserialize, Serialize};

/// Unified error type for all doctor API operations.
///
/// All variants are serializable for structured error reporting. The backend
/// reports failures with an optional human-readable `mensaje` field; when it
/// is present it travels inside [`Server`](Self::Server) and can be surfaced
/// to the user via [`server_message`](Self::server_message).
///
/// # Retryable Errors
///
/// [`Network`](Self::Network) and [`Timeout`](Self::Timeout) represent
/// transient failures. The client retries them on read requests with
/// exponential backoff; mutating requests are never retried.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, broken pipe, etc.).
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-success status.
    Server {
        /// HTTP status code of the response.
        status: u16,
        /// Human-readable message from the backend error body, if available.
        mensaje: Option<String>,
    },

    /// Failed to decode a response body.
    Parse {
        /// Details about the decode failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ApiError {
    /// The server-provided human-readable message, if any.
    ///
    /// Screens prefer this text for their failure notifications and fall
    /// back to a hardcoded per-operation message when it is absent.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { mensaje, .. } => mensaje.as_deref(),
            _ => None,
        }
    }

    /// Whether this is expected behavior (a server-side rejection rather
    /// than a broken transport), used for log leveling.
    ///
    /// `true` should log at `warn`, `false` at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Server { .. })
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::Server { status, mensaje } => {
                if let Some(msg) = mensaje {
                    write!(f, "Server error (HTTP {status}): {msg}")
                } else {
                    write!(f, "Server error (HTTP {status})")
                }
            }
            Self::Parse { detail } => write!(f, "Parse error: {detail}"),
            Self::Serialization { detail } => write!(f, "Serialization error: {detail}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ApiError::Network {
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = ApiError::Timeout {
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "Request timeout: 30s elapsed");
    }

    #[test]
    fn display_server_error_with_message() {
        let e = ApiError::Server {
            status: 500,
            mensaje: Some("fallo interno".to_string()),
        };
        assert_eq!(e.to_string(), "Server error (HTTP 500): fallo interno");
    }

    #[test]
    fn display_server_error_without_message() {
        let e = ApiError::Server {
            status: 404,
            mensaje: None,
        };
        assert_eq!(e.to_string(), "Server error (HTTP 404)");
    }

    #[test]
    fn display_parse_error() {
        let e = ApiError::Parse {
            detail: "bad json".to_string(),
        };
        assert_eq!(e.to_string(), "Parse error: bad json");
    }

    #[test]
    fn server_message_present() {
        let e = ApiError::Server {
            status: 400,
            mensaje: Some("campo inválido".to_string()),
        };
        assert_eq!(e.server_message(), Some("campo inválido"));
    }

    #[test]
    fn server_message_absent_for_transport_errors() {
        let e = ApiError::Network {
            detail: "x".to_string(),
        };
        assert_eq!(e.server_message(), None);
    }

    #[test]
    fn expected_classification() {
        let server = ApiError::Server {
            status: 404,
            mensaje: None,
        };
        let network = ApiError::Network {
            detail: "x".to_string(),
        };
        assert!(server.is_expected());
        assert!(!network.is_expected());
    }

    #[test]
    fn serialize_json_round_trip() {
        let e = ApiError::Server {
            status: 422,
            mensaje: Some("faltan campos".to_string()),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"Server\""));
        let back: ApiError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), e.to_string());
    }

    #[test]
    fn deserialize_all_variants() {
        let variants = vec![
            ApiError::Network { detail: "d".into() },
            ApiError::Timeout { detail: "d".into() },
            ApiError::Server {
                status: 500,
                mensaje: None,
            },
            ApiError::Parse { detail: "d".into() },
            ApiError::Serialization { detail: "d".into() },
        ];

        for v in &variants {
            let json = serde_json::to_string(v).unwrap();
            let back: ApiError = serde_json::from_str(&json).unwrap();
            assert_eq!(back.to_string(), v.to_string());
        }
    }
}
