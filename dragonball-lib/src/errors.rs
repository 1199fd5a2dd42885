//! Error types for Dragon Ball API operations.
//!
//! Every failure a client operation can report falls into one of three kinds:
//! the transport could not complete the exchange, the server answered with a
//! status other than 200, or the body did not decode into the expected shape.
//! A request whose headers cannot be encoded fails before it is sent.

use thiserror::Error;

/// Error codes for FFI and mobile integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum DragonBallErrorCode {
    /// Transport/network layer error
    Transport = 2000,
    /// Connection failed
    ConnectionFailed = 2001,
    /// Connection timeout
    ConnectionTimeout = 2002,
    /// A request header could not be encoded
    InvalidHeader = 3000,
    /// Server answered with a non-200 status
    UnexpectedStatus = 4000,
    /// Response body did not match the expected shape
    Decoding = 5002,
    /// Invalid client configuration
    InvalidConfig = 5000,
    /// Internal/unexpected error
    Internal = 9999,
}

/// Error type for Dragon Ball API operations.
#[derive(Clone, Debug, Error)]
pub enum DragonBallError {
    /// Transport/network layer error.
    #[error("transport error: {0}")]
    Transport(String),

    /// Connection failed.
    #[error("connection to {target} failed: {reason}")]
    ConnectionFailed {
        /// Target endpoint or service
        target: String,
        /// Underlying error message
        reason: String,
    },

    /// Connection timeout.
    #[error("{operation} timed out after {timeout_ms}ms")]
    ConnectionTimeout {
        /// Operation that timed out
        operation: String,
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// A request header value could not be encoded.
    #[error("invalid {name} header: {reason}")]
    InvalidHeader {
        /// Header name
        name: String,
        /// Encoder message
        reason: String,
    },

    /// The server answered with a status other than 200.
    #[error("{operation} returned unexpected status {status}")]
    UnexpectedStatus {
        /// Client operation that issued the request
        operation: String,
        /// HTTP status code received
        status: u16,
        /// Response body, lossily decoded, for diagnostics
        body: String,
    },

    /// The response body could not be decoded.
    #[error("failed to decode {operation} response: {reason}")]
    Decoding {
        /// Client operation that issued the request
        operation: String,
        /// Decoder message
        reason: String,
    },

    /// Invalid configuration value.
    #[error("invalid {field}: {reason}")]
    InvalidConfig {
        /// Configuration field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Internal/unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DragonBallError {
    /// Get the error code for FFI/mobile integration.
    pub fn code(&self) -> DragonBallErrorCode {
        match self {
            Self::Transport(_) => DragonBallErrorCode::Transport,
            Self::ConnectionFailed { .. } => DragonBallErrorCode::ConnectionFailed,
            Self::ConnectionTimeout { .. } => DragonBallErrorCode::ConnectionTimeout,
            Self::InvalidHeader { .. } => DragonBallErrorCode::InvalidHeader,
            Self::UnexpectedStatus { .. } => DragonBallErrorCode::UnexpectedStatus,
            Self::Decoding { .. } => DragonBallErrorCode::Decoding,
            Self::InvalidConfig { .. } => DragonBallErrorCode::InvalidConfig,
            Self::Internal(_) => DragonBallErrorCode::Internal,
        }
    }

    /// Get the error message as an owned String (useful for FFI).
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns true if the transport failed before any response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::ConnectionFailed { .. } | Self::ConnectionTimeout { .. }
        )
    }

    /// Returns true if the body did not decode into the expected shape.
    pub fn is_decoding(&self) -> bool {
        matches!(self, Self::Decoding { .. })
    }

    /// Returns true if the server answered with a non-200 status.
    pub fn is_unexpected_status(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { .. })
    }

    /// HTTP status carried by an unexpected-status error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Create a transport error from any error type.
    pub fn transport<E: std::error::Error>(err: E) -> Self {
        Self::Transport(err.to_string())
    }

    /// Create a decoding error for the given operation.
    pub fn decoding(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decoding {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid header error.
    pub fn invalid_header(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an unexpected-status error, keeping the body for diagnostics.
    pub fn unexpected_status(operation: impl Into<String>, status: u16, body: &[u8]) -> Self {
        Self::UnexpectedStatus {
            operation: operation.into(),
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
