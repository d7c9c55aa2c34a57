mod cli;
mod commands;
mod config;
mod error;
mod exit_code;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use brandly_core::Catalog;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose, cli.global.quiet);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8, quiet: bool) {
    let filter = match (quiet, verbosity) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands never touch the network
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "brandly", &mut std::io::stdout());
            Ok(())
        }

        Command::Brands(args) => {
            let cfg = config::load_config_or_default();
            let format = config::output_format(&cli.global, &cfg);
            let client_config = config::resolve_client_config(&cli.global, &cfg)?;
            tracing::debug!(
                base_url = %client_config.base_url,
                id_policy = %client_config.id_policy,
                "dispatching brands command"
            );

            let catalog = Catalog::new(&client_config)?;
            commands::brands::handle(
                &catalog,
                args,
                format,
                cli.global.color,
                cli.global.quiet,
            )
            .await
        }
    }
}
