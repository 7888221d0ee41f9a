//! Pension Projection CLI
//!
//! Command-line interface for running a single pension projection

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use pension_projection::{
    input::TaxStrategy,
    projection::ProjectionEngine,
    report::{format_currency, render_table, write_chart_series, write_csv},
    PolicyLimits, ProjectionError, ProjectionInput,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pension_projection",
    about = "UK pension projection with salary growth, contribution caps and 2/4/6% growth scenarios"
)]
struct Args {
    #[arg(long)]
    current_age: u32,
    #[arg(long)]
    retirement_age: u32,
    #[arg(long, help = "Current salary (£)")]
    current_salary: f64,
    #[arg(long, default_value_t = 0.0, help = "Current pension pot (£)")]
    current_pension_pot: f64,
    #[arg(long, default_value_t = 0.0, help = "Annual salary growth in percent, e.g. 3")]
    salary_growth: f64,
    #[arg(long, help = "Employee contribution in percent of salary")]
    employee_contribution: f64,
    #[arg(long, help = "Employer contribution in percent of salary")]
    employer_contribution: f64,
    #[arg(long, help = "Contribute enough to keep taxable income at the higher-rate threshold")]
    avoid_higher_rate_tax: bool,
    #[arg(long, help = "Contribute enough to keep taxable income at the £100k threshold")]
    avoid_tax_trap: bool,
    #[arg(long, help = "JSON file overriding the contribution allowance and thresholds")]
    limits: Option<PathBuf>,
    #[arg(long, help = "Write yearly records to this CSV file")]
    csv: Option<PathBuf>,
    #[arg(long, help = "Write the age/pot-balance chart series to this CSV file")]
    chart: Option<PathBuf>,
    #[arg(long, help = "Print records and summary as JSON instead of a table")]
    json: bool,
}

impl Args {
    fn to_input(&self) -> pension_projection::error::Result<ProjectionInput> {
        let tax_strategy = TaxStrategy::from_flags(self.avoid_higher_rate_tax, self.avoid_tax_trap)?;
        Ok(ProjectionInput {
            current_age: self.current_age,
            retirement_age: self.retirement_age,
            current_salary: self.current_salary,
            current_pension_pot: self.current_pension_pot,
            salary_growth_rate: self.salary_growth / 100.0,
            employee_contribution_rate: self.employee_contribution / 100.0,
            employer_contribution_rate: self.employer_contribution / 100.0,
            tax_strategy,
        })
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        match e.downcast_ref::<ProjectionError>() {
            Some(err) if err.is_configuration_error() => eprintln!("Configuration Error: {}", err),
            Some(err) => eprintln!("Input Error: {}", err),
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let limits = match &args.limits {
        Some(path) => PolicyLimits::from_json_path(path)
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("failed to load limits from {}", path.display()))?,
        None => PolicyLimits::default(),
    };

    let input = args.to_input()?;
    info!("projecting ages {}..={} with {:?}", input.current_age, input.retirement_age, input.tax_strategy);

    let engine = ProjectionEngine::new(limits);
    let result = engine.project(&input)?;
    let summary = result.summary();

    if args.json {
        let body = serde_json::json!({
            "records": result.records,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print!("{}", render_table(&result));

        println!("\nSummary:");
        println!("  Years projected:        {}", summary.years);
        println!("  Total contributions:    {}", format_currency(summary.total_contributions));
        println!("  Final pot balance:      {}", format_currency(summary.final_pot_balance));
        println!("  Final at 2% growth:     {}", format_currency(summary.final_growth_2pct));
        println!("  Final at 4% growth:     {}", format_currency(summary.final_growth_4pct));
        println!("  Final at 6% growth:     {}", format_currency(summary.final_growth_6pct));
    }

    if let Some(path) = &args.csv {
        let file = File::create(path).with_context(|| format!("unable to create {}", path.display()))?;
        write_csv(&result, BufWriter::new(file)).map_err(|e| anyhow::anyhow!("{}", e))?;
        info!("records written to {}", path.display());
    }

    if let Some(path) = &args.chart {
        let file = File::create(path).with_context(|| format!("unable to create {}", path.display()))?;
        write_chart_series(&result, BufWriter::new(file)).map_err(|e| anyhow::anyhow!("{}", e))?;
        info!("chart series written to {}", path.display());
    }

    Ok(())
}
