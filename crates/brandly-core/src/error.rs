// ── Fetch errors ──
//
// Every failure from the catalogue collapses into `FetchError`. Views never
// branch on the variant: they show one fixed message per screen and log
// the error for diagnostics. The kind stays available for logs and the CLI.

use strum::Display;
use thiserror::Error;

/// Unified failure value returned by every `BrandSource` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No HTTP response: DNS, refused connection, TLS, timeout.
    #[error("Transport failure: {reason}")]
    Transport { reason: String },

    /// The server answered with a non-2xx status.
    #[error("Server answered HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// The body was not JSON or did not have the expected shape.
    #[error("Unexpected response: {message}")]
    Decode { message: String },

    /// The id was rejected locally; nothing was sent.
    #[error("Invalid brand id '{id}': {reason}")]
    Validation { id: String, reason: String },
}

/// Coarse classification of a [`FetchError`], used in structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum FetchErrorKind {
    Transport,
    HttpStatus,
    Decode,
    Validation,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Transport { .. } => FetchErrorKind::Transport,
            Self::HttpStatus { .. } => FetchErrorKind::HttpStatus,
            Self::Decode { .. } => FetchErrorKind::Decode,
            Self::Validation { .. } => FetchErrorKind::Validation,
        }
    }

    /// `true` when the server reported the resource as missing (HTTP 404).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::HttpStatus { status: 404, .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<brandly_api::Error> for FetchError {
    fn from(err: brandly_api::Error) -> Self {
        match err {
            brandly_api::Error::Transport(ref e) => {
                let reason = if e.is_timeout() {
                    format!("request timed out: {e}")
                } else if e.is_connect() {
                    format!("connection failed: {e}")
                } else {
                    e.to_string()
                };
                Self::Transport { reason }
            }
            brandly_api::Error::InvalidUrl(e) => Self::Transport {
                reason: format!("invalid URL: {e}"),
            },
            brandly_api::Error::InvalidBaseUrl(url) => Self::Transport {
                reason: format!("base URL cannot carry paths: {url}"),
            },
            brandly_api::Error::Tls(msg) => Self::Transport {
                reason: format!("TLS error: {msg}"),
            },
            brandly_api::Error::HttpStatus { status, body } => Self::HttpStatus {
                status,
                message: body,
            },
            brandly_api::Error::Deserialization { message, body: _ } => Self::Decode { message },
            e @ brandly_api::Error::IdMismatch { .. } => Self::Decode {
                message: e.to_string(),
            },
        }
    }
}
