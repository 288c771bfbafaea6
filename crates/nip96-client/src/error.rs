//! Error types for nip96-client

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias using nip96-client's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to a NIP-96 server
#[derive(Error, Debug)]
pub enum Error {
    /// Upload rejected with HTTP 413
    #[error("File too large")]
    TooLarge,

    /// Upload rejected with HTTP 400
    #[error("Bad request: missing or invalid fields")]
    BadRequest,

    /// Upload rejected with HTTP 403
    #[error("Forbidden: payload tag does not match requested file")]
    Forbidden,

    /// Upload rejected with HTTP 402
    #[error("Payment required")]
    PaymentRequired,

    /// Upload rejected with any other non-success status
    #[error("Unknown upload error (HTTP {status})")]
    UnknownUpload { status: StatusCode },

    /// Listing rejected with a non-success status
    #[error("Error listing files (HTTP {status})")]
    List { status: StatusCode },

    /// Success status, but the body was not valid JSON
    #[error("Response parse error: {0}")]
    ResponseParse(#[source] serde_json::Error),

    /// Transport failure, passed through from reqwest
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true for failures raised by the HTTP transport rather than
    /// by the server's answer.
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// HTTP status behind a status-derived error, if any.
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::TooLarge => Some(StatusCode::PAYLOAD_TOO_LARGE),
            Self::BadRequest => Some(StatusCode::BAD_REQUEST),
            Self::Forbidden => Some(StatusCode::FORBIDDEN),
            Self::PaymentRequired => Some(StatusCode::PAYMENT_REQUIRED),
            Self::UnknownUpload { status } | Self::List { status } => Some(*status),
            Self::ResponseParse(_) | Self::Http(_) | Self::Io(_) => None,
        }
    }
}
