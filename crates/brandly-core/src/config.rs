// ── Runtime client configuration ──
//
// Describes *where* the catalogue lives and how to reach it. Never touches
// disk: the CLI/TUI (via brandly-config) builds a `ClientConfig` and hands
// it to `Catalog::new`.

use std::path::PathBuf;
use std::time::Duration;

use brandly_api::{TlsMode, TransportConfig};
use url::Url;

use crate::model::IdPolicy;

/// Base URL of the public mock catalogue.
pub const DEFAULT_BASE_URL: &str = "https://68978796250b078c20422e42.mockapi.io/api/v1";

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed test servers).
    DangerAcceptInvalid,
}

/// Everything needed to build a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, e.g. `https://host/api/v1`.
    pub base_url: Url,
    pub tls: TlsVerification,
    /// Request timeout. `None` keeps the transport default (unbounded).
    pub timeout: Option<Duration>,
    pub id_policy: IdPolicy,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            tls: TlsVerification::default(),
            timeout: None,
            id_policy: IdPolicy::default(),
        }
    }

    /// Translate into the api crate's transport settings.
    pub fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL"))
    }
}
