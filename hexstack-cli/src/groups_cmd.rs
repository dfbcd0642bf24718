//! Groups command - list connected regions of one token type

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use hexstack_core::{find_connected_groups, Grid, Hex, TokenType};

#[derive(Args)]
pub struct GroupsArgs {
    /// Board JSON file
    #[arg(long, value_name = "FILE")]
    pub board: PathBuf,

    /// Token type to group by
    #[arg(long)]
    pub token: TokenType,

    /// Output groups as JSON
    #[arg(long)]
    pub json: bool,
}

/// Regions as plain coordinates
#[derive(Clone, Debug, PartialEq, Serialize)]
struct GroupsReport {
    token: TokenType,
    groups: Vec<Vec<Hex>>,
}

pub fn run(args: GroupsArgs) -> Result<()> {
    let (_, grid) = crate::load_board(&args.board)?;
    let report = collect_groups(&grid, args.token);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text_groups(&report);
    }
    Ok(())
}

fn collect_groups(grid: &Grid, token: TokenType) -> GroupsReport {
    let groups = find_connected_groups(grid, token)
        .iter()
        .map(|group| group.iter().map(|cell| cell.hex()).collect())
        .collect();
    GroupsReport { token, groups }
}

fn print_text_groups(report: &GroupsReport) {
    println!("{}: {} group(s)", report.token, report.groups.len());
    for (i, group) in report.groups.iter().enumerate() {
        let coords: Vec<String> = group.iter().map(Hex::to_string).collect();
        println!("  Group {}: {} cells - {}", i + 1, group.len(), coords.join(", "));
    }
}
