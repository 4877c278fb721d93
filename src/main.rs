//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use ffl_lineup::{
    cli::{Commands, FflLineup},
    commands::{handle_grade, handle_league, handle_lineup, handle_report},
};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = FflLineup::parse();
    init_tracing(app.verbose)?;

    match app.command {
        Commands::Lineup { common, roster } => handle_lineup(common, roster)?,

        Commands::Grade {
            common,
            roster,
            vorp,
        } => handle_grade(common, roster, vorp)?,

        Commands::Report {
            common,
            roster,
            vorp,
            team_name,
        } => handle_report(common, roster, vorp, team_name)?,

        Commands::League {
            common,
            league,
            vorp,
        } => handle_league(common, league, vorp)?,
    }

    Ok(())
}

/// Log to stderr so `--json` output on stdout stays clean.
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose {
        "ffl_lineup=debug,warn"
    } else {
        "ffl_lineup=info,warn"
    };

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
