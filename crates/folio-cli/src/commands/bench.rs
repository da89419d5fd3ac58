//! Bench command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use folio_bench::aggregate::{RegimeSummary, ResultRow, SummaryCards, percent, signed_points};
use folio_bench::{Dataset, Regime};
use tracing::info;

/// Load the dataset file, or the embedded one when no path is given.
pub fn load_dataset(path: Option<&Path>) -> Result<Dataset> {
    let dataset = match path {
        Some(path) => Dataset::from_path(path)
            .with_context(|| format!("Failed to load benchmark data: {}", path.display()))?,
        None => Dataset::embedded()?,
    };
    info!(
        preset = %dataset.metadata().preset,
        records = dataset.all_records().count(),
        "benchmark dataset loaded"
    );
    Ok(dataset)
}

/// Execute the bench command.
pub fn execute(data: Option<&Path>, regime: Option<Regime>, threshold: f64) -> Result<()> {
    anyhow::ensure!(threshold.is_finite(), "Threshold must be a finite number");

    let dataset = load_dataset(data)?;
    let metadata = dataset.metadata();

    println!(
        "{} Routing benchmark: {}-qubit {} topology, {} runs per circuit\n",
        style("Folio").cyan().bold(),
        metadata.device_qubits,
        metadata.topology,
        metadata.runs_per_circuit
    );

    let regimes = regime.map_or_else(|| Regime::ALL.to_vec(), |r| vec![r]);

    for regime in regimes {
        let records = dataset.records(regime);
        let Some(summary) = RegimeSummary::compute(regime, records, threshold) else {
            println!("  {} no records\n", style(regime).bold());
            continue;
        };
        let cards = SummaryCards::compute(records, threshold);

        println!(
            "  {} ({} circuits)",
            style(regime.as_str().to_uppercase()).bold(),
            summary.circuits
        );
        println!(
            "    Subject fidelity:  {}",
            style(percent(cards.avg_subject_fidelity, 1)).green()
        );
        println!(
            "    Baseline fidelity: {}",
            style(percent(cards.avg_baseline_fidelity, 1)).red()
        );
        println!(
            "    Gain:              {} ± {:.2}",
            signed_points(summary.gain.mean, 2),
            summary.gain.std
        );
        println!(
            "    Wins:              {}/{} ({} above {threshold} points)",
            cards.wins,
            cards.total,
            percent(summary.win_rate, 0)
        );
        println!();

        println!(
            "    {:<14} {:>6} {:>6} {:>9} {:>9} {:>7} {:>7} {:>9}",
            "Circuit", "Qubits", "Depth", "Subject", "Baseline", "SWAPs", "Base", "Gain"
        );
        for row in records.iter().map(|r| ResultRow::from_record(r, threshold)) {
            let gain = format!("{:>9}", row.gain);
            println!(
                "    {:<14} {:>6} {:>6} {:>9} {:>9} {:>7} {:>7} {}",
                row.circuit,
                row.num_qubits,
                row.depth,
                row.subject_fidelity,
                row.baseline_fidelity,
                row.subject_swaps,
                row.baseline_swaps,
                if row.win {
                    style(gain).green()
                } else {
                    style(gain).red()
                }
            );
        }
        println!();
    }

    Ok(())
}
