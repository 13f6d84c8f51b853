mod cli;
mod client;
mod commands;
mod config;
mod error;
mod output;
mod render;
mod sync;
mod types;

use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use client::StudentsClient;
use config::Config;
use error::Result;
use output::TerminalView;
use sync::ListSyncClient;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("students={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    output::set_format(cli.output_format());
    output::set_quiet(cli.quiet);

    match cli.command {
        // Commands that don't talk to the service
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "students", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run().await?;
        }
        command => {
            let config = Config::load()?;
            let client = StudentsClient::new(config.api_url(cli.api_url.as_deref())?);

            if let Commands::Health = command {
                return commands::health::check(&client).await;
            }

            let mut sync = ListSyncClient::new(client, TerminalView);

            match command {
                Commands::List => {
                    commands::students::list(&mut sync).await?;
                }
                Commands::Add(args) => {
                    commands::students::add(&mut sync, args).await?;
                }
                Commands::Update(args) => {
                    commands::students::update(&mut sync, args).await?;
                }
                Commands::Delete { id } => {
                    commands::students::delete(&mut sync, id).await?;
                }
                Commands::Health | Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
