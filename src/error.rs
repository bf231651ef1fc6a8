//! Error types for the observability provider.
//!
//! Two layers: [`ClientError`] is what the gRPC and REST clients return and
//! is passed upward unchanged; [`ProviderError`] is the adapter-level error
//! that the provider surface reports, classified by category.

use thiserror::Error;

use crate::schema::Diagnostic;

/// Errors returned by the platform clients.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured target cannot be dialed (empty or plaintext).
    #[error("invalid target {target:?}: {reason}")]
    InvalidTarget {
        /// The target as configured.
        target: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The API key cannot be carried in request metadata.
    #[error("invalid API key: {0}")]
    InvalidApiKey(String),

    /// Dialing the target failed (malformed endpoint, DNS, TLS or HTTP/2 handshake).
    #[error("failed to connect to {target}: {source}")]
    Connection {
        /// The endpoint that was dialed.
        target: String,
        /// The underlying transport error.
        #[source]
        source: tonic::transport::Error,
    },

    /// The remote service returned a gRPC status.
    #[error("rpc failed: {0}")]
    Rpc(#[from] tonic::Status),

    /// The HTTP request could not be sent or its body could not be read.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The REST endpoint answered with an unexpected status.
    #[error("api error (status {status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A REST payload could not be encoded or decoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// The gRPC code of an [`ClientError::Rpc`] error.
    pub fn code(&self) -> Option<tonic::Code> {
        match self {
            Self::Rpc(status) => Some(status.code()),
            _ => None,
        }
    }

    /// Whether the error means the remote object does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Rpc(status) => status.code() == tonic::Code::NotFound,
            Self::Api { status, .. } => *status == 404,
            _ => false,
        }
    }
}

/// Errors reported by the provider surface.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A validation error occurred.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An internal provider error occurred.
    #[error("Provider error: {0}")]
    Internal(String),

    /// A configuration error occurred.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The requested resource type is unknown.
    #[error("Unknown resource type: {0}")]
    UnknownResource(String),

    /// A serialization/deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Resource already exists (create conflict).
    #[error("Resource already exists: {0}")]
    AlreadyExists(String),

    /// Permission denied (authentication/authorization failure).
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Quota or rate limit exceeded.
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// Service temporarily unavailable.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Operation timed out.
    #[error("Deadline exceeded: {0}")]
    DeadlineExceeded(String),

    /// Operation failed due to current state (precondition not met).
    #[error("Failed precondition: {0}")]
    FailedPrecondition(String),

    /// Operation not implemented.
    #[error("Unimplemented: {0}")]
    Unimplemented(String),

    /// Invalid request from client.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ProviderError {
    /// Get the error message as a string.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(msg) => msg,
            Self::Validation(msg) => msg,
            Self::Internal(msg) => msg,
            Self::Configuration(msg) => msg,
            Self::UnknownResource(msg) => msg,
            Self::Serialization(_err) => "serialization error (see Debug output)",
            Self::AlreadyExists(msg) => msg,
            Self::PermissionDenied(msg) => msg,
            Self::ResourceExhausted(msg) => msg,
            Self::Unavailable(msg) => msg,
            Self::DeadlineExceeded(msg) => msg,
            Self::FailedPrecondition(msg) => msg,
            Self::Unimplemented(msg) => msg,
            Self::InvalidRequest(msg) => msg,
        }
    }

    /// Convert a client error, prefixing the message with what was being done.
    ///
    /// ```
    /// use observability_provider::error::{ClientError, ProviderError};
    ///
    /// let err = ProviderError::from_client(
    ///     "Error creating SLO",
    ///     ClientError::Api { status: 409, body: "duplicate".into() },
    /// );
    /// assert!(matches!(err, ProviderError::AlreadyExists(_)));
    /// assert!(err.message().starts_with("Error creating SLO: "));
    /// ```
    pub fn from_client(summary: &str, err: ClientError) -> Self {
        let message = format!("{}: {}", summary, err);
        match Self::from(err) {
            Self::Serialization(_) => Self::Internal(message),
            classified => classified.with_message(message),
        }
    }

    fn with_message(self, message: String) -> Self {
        match self {
            Self::NotFound(_) => Self::NotFound(message),
            Self::Validation(_) => Self::Validation(message),
            Self::Internal(_) => Self::Internal(message),
            Self::Configuration(_) => Self::Configuration(message),
            Self::UnknownResource(_) => Self::UnknownResource(message),
            Self::Serialization(err) => Self::Serialization(err),
            Self::AlreadyExists(_) => Self::AlreadyExists(message),
            Self::PermissionDenied(_) => Self::PermissionDenied(message),
            Self::ResourceExhausted(_) => Self::ResourceExhausted(message),
            Self::Unavailable(_) => Self::Unavailable(message),
            Self::DeadlineExceeded(_) => Self::DeadlineExceeded(message),
            Self::FailedPrecondition(_) => Self::FailedPrecondition(message),
            Self::Unimplemented(_) => Self::Unimplemented(message),
            Self::InvalidRequest(_) => Self::InvalidRequest(message),
        }
    }

    /// Render as an error diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.to_string())
    }
}

impl From<ClientError> for ProviderError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::InvalidTarget { .. } | ClientError::InvalidApiKey(_) => {
                Self::Configuration(err.to_string())
            },
            ClientError::Connection { .. } => Self::Unavailable(err.to_string()),
            ClientError::Rpc(status) => from_status(status),
            ClientError::Http(e) => {
                if e.is_timeout() {
                    Self::DeadlineExceeded(e.to_string())
                } else {
                    Self::Unavailable(e.to_string())
                }
            },
            ClientError::Api { status, ref body } => {
                let message = format!("status {}: {}", status, body);
                match status {
                    400 | 422 => Self::InvalidRequest(message),
                    401 | 403 => Self::PermissionDenied(message),
                    404 => Self::NotFound(message),
                    409 => Self::AlreadyExists(message),
                    429 => Self::ResourceExhausted(message),
                    500..=599 => Self::Unavailable(message),
                    _ => Self::Internal(message),
                }
            },
            ClientError::Json(e) => Self::Serialization(e),
        }
    }
}

fn from_status(status: tonic::Status) -> ProviderError {
    let msg = status.message().to_string();
    match status.code() {
        tonic::Code::NotFound => ProviderError::NotFound(msg),
        tonic::Code::InvalidArgument | tonic::Code::OutOfRange => {
            ProviderError::InvalidRequest(msg)
        },
        tonic::Code::AlreadyExists | tonic::Code::Aborted => ProviderError::AlreadyExists(msg),
        tonic::Code::PermissionDenied | tonic::Code::Unauthenticated => {
            ProviderError::PermissionDenied(msg)
        },
        tonic::Code::ResourceExhausted => ProviderError::ResourceExhausted(msg),
        tonic::Code::Unavailable => ProviderError::Unavailable(msg),
        tonic::Code::DeadlineExceeded | tonic::Code::Cancelled => {
            ProviderError::DeadlineExceeded(msg)
        },
        tonic::Code::FailedPrecondition => ProviderError::FailedPrecondition(msg),
        tonic::Code::Unimplemented => ProviderError::Unimplemented(msg),
        _ => ProviderError::Internal(format!("{:?}: {}", status.code(), msg)),
    }
}

impl From<ProviderError> for Diagnostic {
    fn from(err: ProviderError) -> Self {
        err.to_diagnostic()
    }
}
