//! Property Calculator CLI
//!
//! Runs the investment engine for a single scenario (flags or a named
//! preset) or for a CSV batch of labelled scenarios, and prints a metrics
//! summary plus the 26-year projection.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use property_calculator::{
    analyse, assumptions, Analysis, AnalysisRunner, AssumptionSet, MetricsSnapshot,
    ProjectionSummary, BREAK_EVEN_NEVER,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "property_calculator", version, about)]
struct Args {
    /// Start from a named preset scenario instead of the built-in example
    #[arg(long, conflicts_with = "input")]
    preset: Option<String>,

    /// Purchase price
    #[arg(long)]
    price: Option<f64>,

    /// Cash deposit
    #[arg(long)]
    deposit: Option<f64>,

    /// Annual interest rate in percent (e.g. 4.5)
    #[arg(long)]
    rate: Option<f64>,

    /// Mortgage term in years
    #[arg(long)]
    term: Option<u32>,

    /// Monthly rent
    #[arg(long)]
    rent: Option<f64>,

    /// Monthly running costs
    #[arg(long)]
    expenses: Option<f64>,

    /// Annual property value growth in percent
    #[arg(long)]
    appreciation: Option<f64>,

    /// Annual rent growth in percent
    #[arg(long)]
    rent_increase: Option<f64>,

    /// Run every labelled scenario in a CSV file instead of a single one
    #[arg(long)]
    input: Option<PathBuf>,

    /// Write the projection series to a CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the report as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// List the available presets and exit
    #[arg(long)]
    list_presets: bool,
}

/// JSON report for one analysed scenario
#[derive(Debug, Serialize)]
struct Report<'a> {
    generated_at: DateTime<Utc>,
    label: &'a str,
    assumptions: &'a AssumptionSet,
    metrics: &'a MetricsSnapshot,
    summary: ProjectionSummary,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_presets {
        for name in assumptions::preset_names() {
            println!("{name}");
        }
        return Ok(());
    }

    if let Some(path) = &args.input {
        return run_batch(path, args.json);
    }

    let base = match &args.preset {
        Some(name) => match assumptions::preset(name) {
            Some(a) => a,
            None => bail!(
                "unknown preset '{}' (available: {})",
                name,
                assumptions::preset_names().join(", ")
            ),
        },
        None => AssumptionSet::example(),
    };

    let scenario = AssumptionSet {
        property_price: args.price.unwrap_or(base.property_price),
        deposit_amount: args.deposit.unwrap_or(base.deposit_amount),
        interest_rate: args.rate.unwrap_or(base.interest_rate),
        mortgage_term: args.term.unwrap_or(base.mortgage_term),
        monthly_rent: args.rent.unwrap_or(base.monthly_rent),
        monthly_expenses: args.expenses.unwrap_or(base.monthly_expenses),
        annual_appreciation: args.appreciation.unwrap_or(base.annual_appreciation),
        annual_rent_increase: args.rent_increase.unwrap_or(base.annual_rent_increase),
    };

    let label = args.preset.as_deref().unwrap_or("scenario");
    let analysis = analyse(&scenario);

    if let Some(path) = &args.output {
        write_projection_csv(path, &analysis)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report(label, &analysis))?);
    } else {
        print_analysis(label, &analysis);
        if let Some(path) = &args.output {
            println!("\nFull projection written to: {}", path.display());
        }
    }

    Ok(())
}

fn run_batch(path: &Path, json: bool) -> Result<()> {
    let records = assumptions::load_scenarios(path)
        .with_context(|| format!("loading scenarios from {}", path.display()))?;
    if records.is_empty() {
        bail!("no scenarios found in {}", path.display());
    }

    let scenarios: Vec<AssumptionSet> = records.iter().map(|r| r.assumptions.clone()).collect();
    let runner = AnalysisRunner::new();
    let analyses = runner.run_batch(&scenarios);

    if json {
        let reports: Vec<Report> = records
            .iter()
            .zip(&analyses)
            .map(|(record, analysis)| report(&record.label, analysis))
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!("Analysed {} scenarios from {}\n", analyses.len(), path.display());
    println!(
        "{:<24} {:>12} {:>10} {:>8} {:>8} {:>12} {:>14}",
        "Scenario", "Payment", "CashFlow", "Gross%", "LTV%", "BreakEven", "25y Equity"
    );
    println!("{}", "-".repeat(94));
    for (record, analysis) in records.iter().zip(&analyses) {
        let m = &analysis.metrics;
        println!(
            "{:<24} {:>12.2} {:>10.2} {:>8.2} {:>8.2} {:>12} {:>14.2}",
            record.label,
            m.monthly_payment,
            m.monthly_cash_flow,
            m.gross_yield,
            m.ltv,
            format_break_even(m.break_even_months),
            analysis.projection.summary().final_equity,
        );
    }

    Ok(())
}

fn report<'a>(label: &'a str, analysis: &'a Analysis) -> Report<'a> {
    Report {
        generated_at: Utc::now(),
        label,
        assumptions: &analysis.assumptions,
        metrics: &analysis.metrics,
        summary: analysis.projection.summary(),
    }
}

fn print_analysis(label: &str, analysis: &Analysis) {
    let a = &analysis.assumptions;
    let m = &analysis.metrics;

    println!("Property Calculator v{}", env!("CARGO_PKG_VERSION"));
    println!("========================\n");

    println!("Scenario: {label}");
    println!("  Price: £{:.2}", a.property_price);
    println!("  Deposit: £{:.2} ({:.1}%)", a.deposit_amount, a.deposit_percent());
    println!("  Rate: {:.2}% over {} years", a.interest_rate, a.mortgage_term);
    println!("  Rent: £{:.2}/month, costs £{:.2}/month", a.monthly_rent, a.monthly_expenses);
    println!(
        "  Growth: {:.1}% value, {:.1}% rent per year\n",
        a.annual_appreciation, a.annual_rent_increase
    );

    println!("Metrics:");
    println!("  Loan Amount: £{:.2} (LTV {:.1}%)", m.loan_amount, m.ltv);
    println!("  Monthly Payment: £{:.2}", m.monthly_payment);
    println!("  Total Repayment: £{:.2} (interest £{:.2})", m.total_repayment, m.total_interest);
    println!("  Gross Yield: {:.2}%   Net Yield: {:.2}%", m.gross_yield, m.net_yield);
    println!(
        "  Cash Flow: £{:.2}/month (£{:.2}/year)",
        m.monthly_cash_flow, m.annual_cash_flow
    );
    println!("  First-Year ROI: {:.2}%", m.roi);
    println!("  Break-Even: {}\n", format_break_even(m.break_even_months));

    println!("Projection (years 0-25):");
    println!(
        "{:>4} {:>14} {:>14} {:>14} {:>14} {:>14}",
        "Year", "Value", "Equity", "Balance", "Rent/yr", "CumCashFlow"
    );
    println!("{}", "-".repeat(80));
    for point in &analysis.projection {
        println!(
            "{:>4} {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
            point.year,
            point.property_value,
            point.equity,
            point.mortgage_balance,
            point.annual_rent,
            point.cumulative_cash_flow,
        );
    }

    let summary = analysis.projection.summary();
    println!("\nSummary:");
    println!("  Final Value: £{:.2}", summary.final_property_value);
    println!("  Final Equity: £{:.2}", summary.final_equity);
    println!("  Total Rent Collected: £{:.2}", summary.total_rent_collected);
    println!("  Cumulative Cash Flow: £{:.2}", summary.cumulative_cash_flow);
    match summary.payoff_year {
        Some(year) => println!("  Mortgage Repaid: year {year}"),
        None => println!("  Mortgage Repaid: beyond horizon"),
    }
}

fn format_break_even(months: i64) -> String {
    if months == BREAK_EVEN_NEVER {
        "never".to_string()
    } else {
        format!("{months} months")
    }
}

fn write_projection_csv(path: &Path, analysis: &Analysis) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for point in &analysis.projection {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}
