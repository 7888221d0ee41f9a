//! Run projections for every row of an inputs CSV
//!
//! Outputs one summary row per input for side-by-side comparison

use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use pension_projection::input::{load_inputs, ProjectionInput};
use pension_projection::projection::{ProjectionEngine, ProjectionSummary};
use pension_projection::report::format_currency;
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::time::Instant;

/// Summary row written for each input
#[derive(Debug, Serialize)]
struct BatchRow {
    id: String,
    current_age: u32,
    retirement_age: u32,
    strategy: String,
    years: u32,
    total_contributions: f64,
    final_pot_balance: f64,
    final_growth_2pct: f64,
    final_growth_4pct: f64,
    final_growth_6pct: f64,
}

impl BatchRow {
    fn new(id: String, input: &ProjectionInput, summary: ProjectionSummary) -> Self {
        Self {
            id,
            current_age: input.current_age,
            retirement_age: input.retirement_age,
            strategy: format!("{:?}", input.tax_strategy),
            years: summary.years,
            total_contributions: summary.total_contributions,
            final_pot_balance: summary.final_pot_balance,
            final_growth_2pct: summary.final_growth_2pct,
            final_growth_4pct: summary.final_growth_4pct,
            final_growth_6pct: summary.final_growth_6pct,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input_path = args
        .next()
        .ok_or_else(|| anyhow!("usage: run_batch <inputs.csv> [output.csv]"))?;
    let output_path = args.next().unwrap_or_else(|| "batch_projection_output.csv".to_string());

    let start = Instant::now();
    println!("Loading inputs from {}...", input_path);

    let inputs = load_inputs(&input_path)
        .with_context(|| format!("failed to load inputs from {}", input_path))?;
    println!("Loaded {} inputs in {:?}", inputs.len(), start.elapsed());

    let engine = ProjectionEngine::default();

    println!("Running projections...");
    let proj_start = Instant::now();

    // Each projection is independent, so the engine is shared across threads
    let rows: Vec<BatchRow> = inputs
        .par_iter()
        .map(|labelled| {
            let result = engine.project(&labelled.input)?;
            Ok(BatchRow::new(labelled.id.clone(), &labelled.input, result.summary()))
        })
        .collect::<pension_projection::error::Result<Vec<_>>>()?;

    println!("Projections complete in {:?}", proj_start.elapsed());

    let empty = rows.iter().filter(|r| r.years == 0).count();
    if empty > 0 {
        warn!("{} inputs have a retirement age below the current age", empty);
    }

    let file = File::create(&output_path).with_context(|| format!("failed to create {}", output_path))?;
    let mut writer = csv::Writer::from_writer(file);
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!("wrote {} rows to {}", rows.len(), output_path);

    println!("Output written to {}", output_path);

    if let Some(best) = rows
        .iter()
        .max_by(|a, b| a.final_pot_balance.total_cmp(&b.final_pot_balance))
    {
        println!(
            "\nLargest final pot: {} ({})",
            best.id,
            format_currency(best.final_pot_balance)
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
