//! CLI error types with miette diagnostics.
//!
//! Maps `FetchError` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use brandly_config::ConfigError;
use brandly_core::FetchError;

use crate::exit_code;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the catalogue: {reason}")]
    #[diagnostic(
        code(brandly::connection_failed),
        help(
            "Check the base URL and your network connection.\n\
             Override it with --base-url, or raise --timeout for slow servers.\n\
             Use --insecure (-k) for self-signed certificates."
        )
    )]
    ConnectionFailed { reason: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("Brand '{id}' not found")]
    #[diagnostic(
        code(brandly::not_found),
        help("Run: brandly brands list to see available brands")
    )]
    NotFound { id: String },

    #[error("Server answered HTTP {status}: {message}")]
    #[diagnostic(code(brandly::http_status))]
    HttpStatus { status: u16, message: String },

    #[error("Unexpected response from the catalogue: {message}")]
    #[diagnostic(
        code(brandly::protocol),
        help("The server is reachable but did not return brand data. Check the base URL path.")
    )]
    Protocol { message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid brand id '{id}': {reason}")]
    #[diagnostic(
        code(brandly::invalid_id),
        help("The active id policy rejected this id. Switch with --id-policy.")
    )]
    InvalidId { id: String, reason: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(brandly::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(brandly::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: brandly config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration file already exists at {path}")]
    #[diagnostic(
        code(brandly::config_exists),
        help("Pass --force to overwrite it.")
    )]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(code(brandly::config))]
    Config(#[from] ConfigError),

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Protocol { .. } => exit_code::PROTOCOL,
            Self::InvalidId { .. } | Self::Validation { .. } => exit_code::USAGE,
            Self::ProfileNotFound { .. } | Self::ConfigExists { .. } | Self::Config(_) => {
                exit_code::CONFIG
            }
            Self::HttpStatus { .. } | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

// ── FetchError → CliError mapping ────────────────────────────────────

impl From<FetchError> for CliError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Transport { reason } => Self::ConnectionFailed { reason },
            FetchError::HttpStatus { status, message } => Self::HttpStatus { status, message },
            FetchError::Decode { message } => Self::Protocol { message },
            FetchError::Validation { id, reason } => Self::InvalidId { id, reason },
        }
    }
}
