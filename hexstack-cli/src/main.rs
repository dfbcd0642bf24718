//! HEXSTACK CLI - Command-line interface
//!
//! Commands:
//! - score: Score a board file
//! - place: Place one token on a board
//! - groups: List connected regions of a token type
//! - show: Print every stack and board statistics
//! - random: Generate a random board

use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hexstack_core::{BoardSnapshot, Grid};

mod groups_cmd;
mod place_cmd;
mod random_cmd;
mod score_cmd;
mod show_cmd;

#[derive(Parser)]
#[command(name = "hexstack")]
#[command(about = "HEXSTACK tile-stacking rules and scoring")]
struct Cli {
    /// Random seed (for reproducible boards)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log placements and per-term scoring
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a board file
    Score(score_cmd::ScoreArgs),
    /// Place one token, checking the stacking rules
    Place(place_cmd::PlaceArgs),
    /// List connected regions of one token type
    Groups(groups_cmd::GroupsArgs),
    /// Print every stack and board statistics
    Show(show_cmd::ShowArgs),
    /// Generate a random board
    Random(random_cmd::RandomArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Score(args) => score_cmd::run(args),
        Commands::Place(args) => place_cmd::run(args),
        Commands::Groups(args) => groups_cmd::run(args),
        Commands::Show(args) => show_cmd::run(args),
        Commands::Random(args) => random_cmd::run(args, cli.seed),
    }
}

/// RUST_LOG wins; otherwise info, or debug with --verbose
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load a board file and rebuild its grid
pub(crate) fn load_board(path: &Path) -> Result<(BoardSnapshot, Grid)> {
    let snapshot = BoardSnapshot::load(path)?;
    let grid = snapshot.to_grid()?;
    tracing::info!(
        "Loaded board '{}' from {} ({} cells)",
        snapshot.name,
        path.display(),
        snapshot.cells.len()
    );
    Ok((snapshot, grid))
}
