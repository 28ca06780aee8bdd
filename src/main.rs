//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use nba_streak::{
    cli::{Commands, StreakCli},
    commands::{
        calendar::handle_calendar,
        games::handle_games,
        pick::handle_pick,
        picks::{handle_delete, handle_new_run, handle_picks, handle_runs, handle_swap},
        suggest::handle_suggest,
        CommandContext,
    },
    StreakError,
};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = StreakCli::parse();
    init_tracing(app.verbose);

    let mut ctx = CommandContext::new(app.picks_file, app.verbose);

    let result = match app.command {
        Commands::Games {
            selection,
            refresh,
            json,
        } => handle_games(&ctx, selection, refresh, json).await,

        Commands::Pick {
            team,
            selection,
            refresh,
        } => handle_pick(&mut ctx, &team, selection, refresh).await,

        Commands::Picks { run, json } => handle_picks(&ctx, run, json),

        Commands::Runs { json } => handle_runs(&ctx, json),

        Commands::NewRun => handle_new_run(&ctx),

        Commands::Delete { index } => handle_delete(&mut ctx, index),

        Commands::Swap { index_a, index_b } => handle_swap(&mut ctx, index_a, index_b),

        Commands::Suggest {
            selection,
            refresh,
            json,
        } => handle_suggest(&ctx, selection, refresh, json).await,

        Commands::Calendar { run, month, json } => handle_calendar(&ctx, run, month, json),
    };

    match result {
        Err(StreakError::Rejected(reason)) => {
            eprintln!("✖ {}", reason);
            std::process::exit(1);
        }
        other => other.context("command failed"),
    }
}
