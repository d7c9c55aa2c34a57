//! `brandly-tui`: terminal browser for the brand catalogue.
//!
//! Built on [ratatui](https://ratatui.rs). The list screen shows every brand
//! as a card; `Enter` opens a detail screen with stats, the latest campaign,
//! and a local follow toggle. Each screen owns a view-state controller from
//! `brandly-core` and renders straight from its `watch` receiver.
//!
//! Logs are written to a file (default `<temp dir>/brandly-tui.log`) to
//! avoid corrupting the terminal UI.

mod action;
mod app;
mod component;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use brandly_core::{Catalog, ClientConfig};

use crate::app::App;

/// Terminal browser for the brand catalogue.
#[derive(Parser, Debug)]
#[command(name = "brandly-tui", version, about)]
struct Cli {
    /// Catalogue API root (e.g., https://host/api/v1). Overrides the profile.
    #[arg(short = 'b', long, env = "BRANDLY_BASE_URL")]
    base_url: Option<String>,

    /// Config profile to use
    #[arg(short = 'p', long, env = "BRANDLY_PROFILE")]
    profile: Option<String>,

    /// Log file path (defaults to <temp dir>/brandly-tui.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. Nothing may log to stdout/stderr while the
/// TUI owns the terminal. Hold the returned guard until exit so logs flush.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "brandly_tui={log_level},brandly_core={log_level},brandly_api={log_level}"
        ))
    });

    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("brandly-tui.log"));
    let log_dir = log_file
        .parent()
        .map_or_else(std::env::temp_dir, Path::to_path_buf);
    let log_filename = log_file
        .file_name()
        .map_or_else(|| "brandly-tui.log".into(), std::ffi::OsStr::to_os_string);

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

/// Resolve the client config: profile from the config file, then flags.
fn build_client_config(cli: &Cli) -> Result<ClientConfig> {
    let cfg = brandly_config::load_config_or_default();
    let (profile_name, profile) = cfg.resolve_profile(cli.profile.as_deref())?;
    let mut config = brandly_config::profile_to_client_config(&profile, &cfg.defaults)
        .wrap_err_with(|| format!("profile '{profile_name}' is invalid"))?;

    if let Some(ref url) = cli.base_url {
        config.base_url = url
            .parse()
            .wrap_err_with(|| format!("invalid --base-url '{url}'"))?;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Hooks go in before the terminal switches to raw mode.
    tui::install_hooks()?;

    let _log_guard = setup_tracing(&cli);

    let config = build_client_config(&cli)?;
    info!(base_url = %config.base_url, id_policy = %config.id_policy, "starting brandly-tui");

    let catalog = Catalog::new(&config).wrap_err("failed to build HTTP client")?;
    let mut app = App::new(Arc::new(catalog), config.base_url.to_string());
    app.run().await?;

    Ok(())
}
