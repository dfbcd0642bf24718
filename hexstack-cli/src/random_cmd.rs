//! Random command - generate a random board
//!
//! Every empty cell gets a ground token (water, tree, mountain, field or
//! house) with probability `density`. A fixed `--seed` gives the same board.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use hexstack_core::{BoardSnapshot, Grid};

use crate::score_cmd;

#[derive(Args)]
pub struct RandomArgs {
    /// Chance that each cell receives a token (0.0 - 1.0)
    #[arg(long, default_value = "0.5")]
    pub density: f64,

    /// Board name
    #[arg(long, default_value = "random")]
    pub name: String,

    /// Write the board here
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output the score as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RandomArgs, seed: Option<u64>) -> Result<()> {
    if !(0.0..=1.0).contains(&args.density) {
        bail!("Density must be between 0.0 and 1.0, got {}", args.density);
    }

    let mut rng = create_rng(seed);
    let grid = generate(&mut rng, args.density);

    if let Some(path) = &args.output {
        BoardSnapshot::from_grid(&args.name, &grid).save(path)?;
        tracing::info!("Saved board '{}' to {}", args.name, path.display());
    }

    if !args.json {
        print!("{}", grid.render());
    }
    let report = score_cmd::build_report(&args.name, &grid, score_cmd::select_terms(false));
    score_cmd::report_results(&report, args.json)
}

fn generate(rng: &mut ChaCha8Rng, density: f64) -> Grid {
    let mut grid = Grid::new();
    let placed = grid.fill_random(rng, density);
    tracing::info!("Random board: {} tokens at density {:.2}", placed, density);
    grid
}

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}
