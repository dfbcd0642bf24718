//! Score command - score a board file
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_board(), build_report(), report_results()
//! - Level 3: score selection
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use hexstack_core::{score_breakdown, Grid, ScoreBreakdown, ScoreTerms};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ScoreArgs {
    /// Board JSON file
    #[arg(long, value_name = "FILE")]
    pub board: PathBuf,

    /// Total only water, field and mountain (three-term scoring)
    #[arg(long)]
    pub legacy: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Score of one board
#[derive(Clone, Debug, Serialize)]
pub(crate) struct ScoreReport {
    pub name: String,
    pub terms: &'static str,
    #[serde(flatten)]
    pub breakdown: ScoreBreakdown,
    pub total: u32,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run score command
///
/// 1. Load the board
/// 2. Score it
/// 3. Report results
pub fn run(args: ScoreArgs) -> Result<()> {
    let (snapshot, grid) = crate::load_board(&args.board)?;

    let report = build_report(&snapshot.name, &grid, select_terms(args.legacy));

    tracing::info!("Board '{}' scores {}", report.name, report.total);

    report_results(&report, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

pub(crate) fn build_report(name: &str, grid: &Grid, terms: ScoreTerms) -> ScoreReport {
    let breakdown = score_breakdown(grid);
    ScoreReport {
        name: name.to_string(),
        terms: terms_label(terms),
        breakdown,
        total: breakdown.total_with(terms),
    }
}

pub(crate) fn report_results(report: &ScoreReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print_text_results(report);
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

pub(crate) fn select_terms(legacy: bool) -> ScoreTerms {
    if legacy {
        ScoreTerms::LEGACY
    } else {
        ScoreTerms::ALL
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn terms_label(terms: ScoreTerms) -> &'static str {
    if terms == ScoreTerms::LEGACY {
        "legacy"
    } else if terms == ScoreTerms::ALL {
        "all"
    } else {
        "custom"
    }
}

/// Print results as text
fn print_text_results(report: &ScoreReport) {
    let b = &report.breakdown;

    println!("\n=== Score: {} ===", report.name);
    println!("Water:    {:>3}", b.water);
    println!("Field:    {:>3}", b.field);
    println!("Mountain: {:>3}", b.mountain);
    if report.terms != "legacy" {
        println!("Forest:   {:>3}", b.forest);
        println!("House:    {:>3}", b.house);
    }
    println!("Total:    {:>3} ({} terms)", report.total, report.terms);
}

// ============================================================================
// TESTS
// ============================================================================
