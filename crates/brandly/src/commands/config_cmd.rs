//! Config subcommand handlers.

use std::path::Path;

use brandly_config::{ConfigError, DEFAULT_PROFILE, Profile};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Starter config for `config init`: the built-in catalogue under the
/// profile named by `--profile` (or `default`), with `--base-url` applied.
fn starter_config(global: &GlobalOpts) -> Config {
    let name = global
        .profile
        .clone()
        .unwrap_or_else(|| DEFAULT_PROFILE.into());
    let mut profile = Profile::default();
    if let Some(ref url) = global.base_url {
        profile.base_url.clone_from(url);
    }

    let mut cfg = Config::default();
    cfg.profiles.clear();
    cfg.profiles.insert(name.clone(), profile);
    cfg.default_profile = Some(name);
    cfg
}

fn write_new_config(cfg: &Config, path: &Path, force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::ConfigExists {
            path: path.display().to_string(),
        });
    }
    brandly_config::save_config_to(cfg, path)?;
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let format = config::output_format(global, &cfg);
            let text = if format == OutputFormat::Table {
                toml::to_string_pretty(&cfg).map_err(ConfigError::from)?
            } else {
                String::new()
            };
            let out = output::render_single(format, &cfg, |_| text.trim_end().to_owned(), |_| {
                "config".into()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Init { force } => {
            let path = config::config_path();
            let cfg = starter_config(global);
            write_new_config(&cfg, &path, force)?;
            tracing::info!(path = %path.display(), "wrote config");
            if !global.quiet {
                eprintln!("✓ Config written to {}", path.display());
            }
            Ok(())
        }
    }
}
