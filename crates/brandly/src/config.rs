//! CLI configuration: thin wrapper around `brandly_config` shared types.
//!
//! Adds CLI-specific resolution that applies `GlobalOpts` flag overrides
//! (`--base-url`, `--timeout`, `--insecure`, `--id-policy`) on top of the
//! selected profile.

use std::time::Duration;

use clap::ValueEnum;

use brandly_config::ConfigError;
use brandly_core::{ClientConfig, IdPolicy, TlsVerification};

use crate::cli::{GlobalOpts, IdPolicyArg, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use brandly_config::{Config, config_path, load_config_or_default};

// ── CLI-specific helpers ────────────────────────────────────────────

impl From<IdPolicyArg> for IdPolicy {
    fn from(arg: IdPolicyArg) -> Self {
        match arg {
            IdPolicyArg::Opaque => Self::Opaque,
            IdPolicyArg::Numeric => Self::Numeric,
        }
    }
}

/// Comma-separated profile names for error help text.
pub fn available_profiles(cfg: &Config) -> String {
    let mut names: Vec<_> = cfg.profiles.keys().cloned().collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort();
    names.join(", ")
}

/// Output format: flag > `defaults.output` > table.
pub fn output_format(global: &GlobalOpts, cfg: &Config) -> OutputFormat {
    global.output.unwrap_or_else(|| {
        OutputFormat::from_str(&cfg.defaults.output, true).unwrap_or(OutputFormat::Table)
    })
}

/// Translate the active profile plus global flags into a `ClientConfig`.
///
/// CLI flag overrides take priority over profile values.
pub fn resolve_client_config(global: &GlobalOpts, cfg: &Config) -> Result<ClientConfig, CliError> {
    let (profile_name, mut profile) = match cfg.resolve_profile(global.profile.as_deref()) {
        Ok(resolved) => resolved,
        Err(ConfigError::UnknownProfile { name }) => {
            return Err(CliError::ProfileNotFound {
                name,
                available: available_profiles(cfg),
            });
        }
        Err(e) => return Err(e.into()),
    };
    tracing::debug!(profile = %profile_name, "resolved profile");

    if let Some(ref url) = global.base_url {
        profile.base_url.clone_from(url);
    }

    let mut config =
        brandly_config::profile_to_client_config(&profile, &cfg.defaults).map_err(|e| match e {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            other => other.into(),
        })?;

    if global.insecure {
        config.tls = TlsVerification::DangerAcceptInvalid;
    }
    if let Some(secs) = global.timeout {
        config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
    }
    if let Some(policy) = global.id_policy {
        config.id_policy = policy.into();
    }

    Ok(config)
}
