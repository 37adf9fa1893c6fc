//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap. Command dispatch routes to handlers which delegate to the
//! sync service.

use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};

use inbox_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers, init_tracing};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads env-backed args
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command.as_ref() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::from_cli(&cli)?;
    let ctx = bootstrap(config).context("failed to set up the notification client")?;

    match command {
        Commands::List { unread } => {
            handlers::list::execute(&ctx, *unread).await?;
        }
        Commands::Read { ids } => {
            handlers::read::execute(&ctx, ids).await?;
        }
        Commands::ReadAll => {
            handlers::read::execute_all(&ctx).await?;
        }
        Commands::Login { token } => {
            handlers::session::login(&ctx, token).await?;
        }
        Commands::Logout => {
            handlers::session::logout(&ctx).await?;
        }
        Commands::Whoami => {
            println!("{}", handlers::session::whoami(&ctx).await?);
        }
    }

    Ok(())
}
