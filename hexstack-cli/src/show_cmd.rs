//! Show command - print every stack and board statistics

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use hexstack_core::{GridStats, TokenType};

#[derive(Args)]
pub struct ShowArgs {
    /// Board JSON file
    #[arg(long, value_name = "FILE")]
    pub board: PathBuf,

    /// Output statistics as JSON instead of the text dump
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let (snapshot, grid) = crate::load_board(&args.board)?;
    let stats = grid.stats();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("=== {} ===", snapshot.name);
    print!("{}", grid.render());
    println!();
    print!("{}", format_stats(&stats));
    Ok(())
}

pub(crate) fn format_stats(stats: &GridStats) -> String {
    let counts: Vec<String> = TokenType::ALL
        .iter()
        .filter_map(|t| stats.token_counts.get(t).map(|n| format!("{}={}", t, n)))
        .collect();

    format!(
        "Cells:    {}/{} filled, {} stacked\n\
         Tokens:   {} ({})\n\
         Height:   max {}, avg {:.2}\n",
        stats.filled_cells,
        stats.total_cells,
        stats.stacked_cells,
        stats.total_tokens,
        counts.join(", "),
        stats.max_stack_height,
        stats.average_stack_height,
    )
}
