use analytics::{FuelEfficiencyAnalyzer, WarningLevel, format_mileage};
use chrono::Utc;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use core_types::{FuelLog, FuelLogPage, Vehicle};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// The main entry point for the carlog reporting tool.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Report(args) => {
            if let Err(e) = handle_report(args) {
                eprintln!("Error generating report: {e}");
                std::process::exit(1);
            }
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Fuel-efficiency reporting over a vehicle tracker's fuel-log export.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute efficiency metrics from an exported fuel-log file.
    Report(ReportArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// Path to the fuel-log export (plain JSON array or paginated envelope).
    #[arg(long)]
    input: PathBuf,

    /// Optional vehicle list used to resolve display names in the ranking.
    #[arg(long)]
    vehicles: Option<PathBuf>,

    /// Restrict the report to a single vehicle id.
    #[arg(long)]
    vehicle: Option<i64>,
}

// ==============================================================================
// Report Command Logic
// ==============================================================================

/// Handles the orchestration of the report: load, analyze, render.
fn handle_report(args: ReportArgs) -> anyhow::Result<()> {
    let raw = fs::read_to_string(&args.input)?;
    let page: FuelLogPage = serde_json::from_str(&raw)?;
    let mut logs = page.into_logs();

    if let Some(vehicle_id) = args.vehicle {
        logs.retain(|log| log.vehicle_id() == vehicle_id);
    }

    let names = build_name_index(&logs, args.vehicles.as_deref())?;
    let analyzer = FuelEfficiencyAnalyzer::new();

    // --- Overall figures ---
    let overall = analyzer.average_efficiency(&logs);
    let rating = analyzer.classify(overall);
    println!(
        "Overall efficiency: {} ({})",
        format_mileage(overall),
        rating.label()
    );
    println!("Total distance covered: {} km", analyzer.total_distance(&logs));
    emit_plausibility(&analyzer, overall, "overall average");

    // --- Month over month ---
    let comparison = analyzer.monthly_comparison(&logs, Utc::now());
    println!(
        "This month: {}  |  last month: {}  |  change: {}",
        format_mileage(comparison.current_month),
        format_mileage(comparison.previous_month),
        comparison
            .delta
            .map(format_delta)
            .unwrap_or_else(|| "N/A".to_string()),
    );

    // --- Consumption summary ---
    let summary = analyzer.usage_summary(&logs);
    println!(
        "Fills: {}  |  fuel: {} gal (avg {})  |  spend: {} (avg {})",
        summary.fill_count,
        summary.total_volume,
        summary.avg_volume,
        summary.total_cost,
        summary.avg_cost,
    );

    // --- Per-vehicle ranking ---
    let mut rankings = analyzer.per_vehicle_efficiency(&logs);
    if rankings.is_empty() {
        println!("No vehicle has enough fills for a ranking yet.");
        return Ok(());
    }
    rankings.sort_by(|a, b| b.average_efficiency.cmp(&a.average_efficiency));

    let mut table = Table::new();
    table.set_header(vec!["Vehicle", "Avg km/gal", "Rating", "Fills"]);
    for ranking in &rankings {
        let name = names
            .get(&ranking.vehicle_id)
            .cloned()
            .unwrap_or_else(|| format!("Vehicle #{}", ranking.vehicle_id));
        let rating = analyzer.classify(Some(ranking.average_efficiency));

        table.add_row(vec![
            name.clone(),
            ranking.average_efficiency.to_string(),
            rating.label().to_string(),
            ranking.fill_count.to_string(),
        ]);
        emit_plausibility(&analyzer, Some(ranking.average_efficiency), &name);
    }
    println!("{table}");

    Ok(())
}

/// Maps vehicle ids to display names, from the optional vehicle list plus any
/// vehicle objects embedded in the log records themselves. Name resolution is
/// deliberately a presentation concern; the analytics crate only sees ids.
fn build_name_index(
    logs: &[FuelLog],
    vehicles_path: Option<&std::path::Path>,
) -> anyhow::Result<HashMap<i64, String>> {
    let mut names = HashMap::new();

    for log in logs {
        if let Some(vehicle) = log.vehicle.vehicle() {
            names.insert(vehicle.id, vehicle.display_name());
        }
    }
    if let Some(path) = vehicles_path {
        let vehicles: Vec<Vehicle> = serde_json::from_str(&fs::read_to_string(path)?)?;
        for vehicle in vehicles {
            names.insert(vehicle.id, vehicle.display_name());
        }
    }

    Ok(names)
}

/// Logs the advisory data-quality warnings attached to a mileage figure.
fn emit_plausibility(
    analyzer: &FuelEfficiencyAnalyzer,
    value: Option<Decimal>,
    scope: &str,
) {
    if let Some(warning) = analyzer.check_plausibility(value) {
        match warning.level {
            WarningLevel::Error => tracing::error!("{scope}: {}", warning.message),
            WarningLevel::Warning => tracing::warn!("{scope}: {}", warning.message),
        }
    }
}

fn format_delta(delta: Decimal) -> String {
    if delta > Decimal::ZERO {
        format!("+{delta} km/gal")
    } else {
        format!("{delta} km/gal")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_errors_on_unreadable_input() {
        let args = ReportArgs {
            input: PathBuf::from("/nonexistent/fuel_logs.json"),
            vehicles: None,
            vehicle: None,
        };
        // The error must surface to main, which turns it into exit code 1.
        assert!(handle_report(args).is_err());
    }

    #[test]
    fn report_errors_on_malformed_export() {
        let path = std::env::temp_dir().join("carlog_malformed_export.json");
        fs::write(&path, "{\"results\": 42}").unwrap();

        let args = ReportArgs {
            input: path.clone(),
            vehicles: None,
            vehicle: None,
        };
        assert!(handle_report(args).is_err());
        let _ = fs::remove_file(path);
    }
}
