//! Aggregation of benchmark records into display rows and summary statistics.
//!
//! Everything here is pure and synchronous over already-validated records.

use serde::Serialize;

use crate::record::{BenchmarkRecord, Regime};

/// Default gain (percentage points) a circuit must exceed to count as a win.
pub const DEFAULT_WIN_THRESHOLD: f64 = 0.5;

/// Stricter threshold that only filters numerical noise.
pub const NOISE_WIN_THRESHOLD: f64 = 0.01;

/// Relative size of the placeholder error bars drawn on charts.
pub const PLACEHOLDER_ERROR_FRACTION: f64 = 0.06;

/// Mean and population standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spread {
    pub mean: f64,
    pub std: f64,
}

/// Mean and population standard deviation (divides by `N`).
///
/// Returns `None` for an empty slice.
pub fn mean_and_std(values: &[f64]) -> Option<Spread> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Some(Spread {
        mean,
        std: variance.sqrt(),
    })
}

/// Fidelity gain of each run, in percentage points, aligned with `record.runs`.
pub fn per_run_gain(record: &BenchmarkRecord) -> Vec<f64> {
    record
        .runs
        .iter()
        .map(|run| (run.subject - run.baseline) * 100.0)
        .collect()
}

/// Mean per-run gain recomputed from the raw runs.
pub fn gain_from_runs(record: &BenchmarkRecord) -> Option<f64> {
    mean_and_std(&per_run_gain(record)).map(|s| s.mean)
}

/// Win count over a record set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WinTally {
    /// Threshold the gain had to exceed.
    pub threshold: f64,
    /// Records with `fidelity_gain_pct > threshold`.
    pub wins: usize,
    /// Records considered.
    pub total: usize,
    /// `wins / total`, `0.0` for an empty set.
    pub rate: f64,
}

/// Tally records whose stored gain exceeds `threshold`.
pub fn win_tally<'a, I>(records: I, threshold: f64) -> WinTally
where
    I: IntoIterator<Item = &'a BenchmarkRecord>,
{
    let (wins, total) = records.into_iter().fold((0, 0), |(wins, total), r| {
        (wins + usize::from(r.fidelity_gain_pct > threshold), total + 1)
    });
    WinTally {
        threshold,
        wins,
        total,
        rate: if total == 0 {
            0.0
        } else {
            wins as f64 / total as f64
        },
    }
}

/// Fraction of records whose stored gain exceeds `threshold`.
pub fn win_rate(records: &[BenchmarkRecord], threshold: f64) -> f64 {
    win_tally(records, threshold).rate
}

/// Headline numbers shown above the charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryCards {
    /// Average subject fidelity (0-1).
    pub avg_subject_fidelity: f64,
    /// Average baseline fidelity (0-1).
    pub avg_baseline_fidelity: f64,
    /// Average gain in percentage points.
    pub avg_gain: f64,
    /// Circuits won by the subject router.
    pub wins: usize,
    /// Circuits considered.
    pub total: usize,
}

impl SummaryCards {
    /// Compute the cards for a record set.
    pub fn compute(records: &[BenchmarkRecord], threshold: f64) -> Self {
        let avg = |f: fn(&BenchmarkRecord) -> f64| {
            if records.is_empty() {
                0.0
            } else {
                records.iter().map(f).sum::<f64>() / records.len() as f64
            }
        };
        let tally = win_tally(records, threshold);
        Self {
            avg_subject_fidelity: avg(|r: &BenchmarkRecord| r.subject.fidelity.mean),
            avg_baseline_fidelity: avg(|r: &BenchmarkRecord| r.baseline.fidelity.mean),
            avg_gain: avg(|r: &BenchmarkRecord| r.fidelity_gain_pct),
            wins: tally.wins,
            total: tally.total,
        }
    }
}

/// Gain statistics for one fidelity regime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegimeSummary {
    pub regime: Regime,
    /// Number of circuits in the regime.
    pub circuits: usize,
    /// Mean and population std of the per-circuit gains.
    pub gain: Spread,
    /// Win rate at the configured threshold.
    pub win_rate: f64,
}

impl RegimeSummary {
    /// Summarize the records of one regime.
    ///
    /// Returns `None` when the regime has no records.
    pub fn compute(regime: Regime, records: &[BenchmarkRecord], threshold: f64) -> Option<Self> {
        let gains: Vec<f64> = records.iter().map(|r| r.fidelity_gain_pct).collect();
        let gain = mean_and_std(&gains)?;
        Some(Self {
            regime,
            circuits: records.len(),
            gain,
            win_rate: win_rate(records, threshold),
        })
    }
}

/// One display-ready row of the detailed results table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub circuit: String,
    pub family: String,
    pub num_qubits: u32,
    pub depth: u32,
    /// Subject fidelity, e.g. `76.9%`.
    pub subject_fidelity: String,
    /// Baseline fidelity, e.g. `66.6%`.
    pub baseline_fidelity: String,
    /// Mean subject SWAPs, e.g. `2.6`.
    pub subject_swaps: String,
    /// Mean baseline SWAPs.
    pub baseline_swaps: String,
    /// Signed gain, e.g. `+10.35%`.
    pub gain: String,
    /// Whether the gain exceeds the win threshold.
    pub win: bool,
}

impl ResultRow {
    /// Format a record for the results table.
    pub fn from_record(record: &BenchmarkRecord, threshold: f64) -> Self {
        Self {
            circuit: record.circuit.clone(),
            family: record.family().to_string(),
            num_qubits: record.num_qubits,
            depth: record.depth,
            subject_fidelity: percent(record.subject.fidelity.mean, 1),
            baseline_fidelity: percent(record.baseline.fidelity.mean, 1),
            subject_swaps: format!("{:.1}", record.subject.swaps.mean),
            baseline_swaps: format!("{:.1}", record.baseline.swaps.mean),
            gain: signed_points(record.fidelity_gain_pct, 2),
            win: record.fidelity_gain_pct > threshold,
        }
    }
}

/// One bar group of the fidelity and gain charts.
///
/// Error bars are placeholders proportional to the plotted value, not
/// measured spreads; `synthetic` is always set so renderers can label them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub circuit: String,
    pub subject_fidelity: f64,
    pub baseline_fidelity: f64,
    /// Gain in percentage points.
    pub gain: f64,
    pub subject_error: f64,
    pub baseline_error: f64,
    pub gain_error: f64,
    /// Error bars are placeholders.
    pub synthetic: bool,
}

impl ChartRow {
    /// Build a chart row with placeholder error bars.
    pub fn from_record(record: &BenchmarkRecord) -> Self {
        let subject = record.subject.fidelity.mean;
        let baseline = record.baseline.fidelity.mean;
        let gain = record.fidelity_gain_pct;
        Self {
            circuit: record.circuit.clone(),
            subject_fidelity: subject,
            baseline_fidelity: baseline,
            gain,
            subject_error: subject * PLACEHOLDER_ERROR_FRACTION,
            baseline_error: baseline * PLACEHOLDER_ERROR_FRACTION,
            gain_error: (gain.abs() * PLACEHOLDER_ERROR_FRACTION * 2.0).max(0.5),
            synthetic: true,
        }
    }
}

/// Format a `0..1` fraction as a percentage with `decimals` places.
pub fn percent(fraction: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, fraction * 100.0)
}

/// Format percentage points with an explicit sign for positive values.
pub fn signed_points(points: f64, decimals: usize) -> String {
    if points > 0.0 {
        format!("+{points:.decimals$}%")
    } else {
        format!("{points:.decimals$}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{RouterStats, RunSample, Stats};

    fn stats(mean: f64) -> Stats {
        Stats {
            min: mean,
            max: mean,
            mean,
            median: mean,
            std: 0.0,
        }
    }

    pub(crate) fn record(name: &str, gain: f64, runs: &[(f64, f64)]) -> BenchmarkRecord {
        let n = runs.len().max(1) as f64;
        let subject = runs.iter().map(|r| r.0).sum::<f64>() / n;
        let baseline = runs.iter().map(|r| r.1).sum::<f64>() / n;
        BenchmarkRecord {
            circuit: name.to_string(),
            num_qubits: 5,
            depth: 10,
            regime: Regime::Good,
            num_runs: runs.len() as u32,
            subject: RouterStats {
                fidelity: stats(subject),
                swaps: stats(1.0),
            },
            baseline: RouterStats {
                fidelity: stats(baseline),
                swaps: stats(1.0),
            },
            fidelity_gain_pct: gain,
            runs: runs
                .iter()
                .enumerate()
                .map(|(i, &(s, b))| RunSample {
                    seed: i as u64,
                    subject: s,
                    baseline: b,
                    subject_swaps: None,
                    baseline_swaps: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_per_run_gain_scenario() {
        let r = record("GHZ-5", 8.0, &[(0.80, 0.70), (0.78, 0.72)]);
        let gains = per_run_gain(&r);
        assert_eq!(gains.len(), 2);
        assert!((gains[0] - 10.0).abs() < 1e-9);
        assert!((gains[1] - 6.0).abs() < 1e-9);
        assert!((gain_from_runs(&r).unwrap() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_mean_and_std_population() {
        let s = mean_and_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(s.mean, 5.0);
        assert_eq!(s.std, 2.0);
        assert_eq!(mean_and_std(&[]), None);
        assert_eq!(mean_and_std(&[3.5]).unwrap().std, 0.0);
    }

    #[test]
    fn test_win_rate_eleven_of_twelve() {
        let mut records: Vec<_> = (0..11)
            .map(|i| record(&format!("C-{i}"), 3.0 + f64::from(i), &[]))
            .collect();
        records.push(record("VQE-4", -0.01, &[]));
        let rate = win_rate(&records, DEFAULT_WIN_THRESHOLD);
        assert!((rate - 11.0 / 12.0).abs() < 1e-12);
        assert!((rate - 0.9167).abs() < 1e-4);
    }

    #[test]
    fn test_win_rate_threshold_is_strict() {
        let records = vec![record("A-1", 0.5, &[]), record("B-1", 0.51, &[])];
        let tally = win_tally(&records, 0.5);
        assert_eq!(tally.wins, 1);
        assert_eq!(tally.total, 2);
        assert_eq!(win_rate(&[], 0.5), 0.0);
    }

    #[test]
    fn test_summary_cards() {
        let records = vec![
            record("GHZ-5", 10.0, &[(0.8, 0.7)]),
            record("VQE-4", -0.01, &[(0.4, 0.4)]),
        ];
        let cards = SummaryCards::compute(&records, DEFAULT_WIN_THRESHOLD);
        assert!((cards.avg_subject_fidelity - 0.6).abs() < 1e-12);
        assert!((cards.avg_baseline_fidelity - 0.55).abs() < 1e-12);
        assert!((cards.avg_gain - 4.995).abs() < 1e-12);
        assert_eq!((cards.wins, cards.total), (1, 2));
    }

    #[test]
    fn test_regime_summary() {
        let records = vec![record("A-1", 2.0, &[]), record("B-1", 4.0, &[])];
        let s = RegimeSummary::compute(Regime::Good, &records, 0.5).unwrap();
        assert_eq!(s.circuits, 2);
        assert_eq!(s.gain.mean, 3.0);
        assert_eq!(s.gain.std, 1.0);
        assert_eq!(s.win_rate, 1.0);
        assert!(RegimeSummary::compute(Regime::Noisy, &[], 0.5).is_none());
    }

    #[test]
    fn test_result_row_formatting() {
        let r = record("AllToAll-4", 18.73, &[(0.5609, 0.3736)]);
        let row = ResultRow::from_record(&r, DEFAULT_WIN_THRESHOLD);
        assert_eq!(row.family, "AllToAll");
        assert_eq!(row.subject_fidelity, "56.1%");
        assert_eq!(row.baseline_fidelity, "37.4%");
        assert_eq!(row.gain, "+18.73%");
        assert!(row.win);

        let loss = ResultRow::from_record(&record("VQE-4", -0.01, &[]), 0.5);
        assert_eq!(loss.gain, "-0.01%");
        assert!(!loss.win);
    }

    #[test]
    fn test_chart_rows_are_flagged_synthetic() {
        let row = ChartRow::from_record(&record("QFT-4", 13.71, &[(0.3, 0.16)]));
        assert!(row.synthetic);
        assert!(row.subject_error > 0.0);
        assert!(row.gain_error >= 0.5);
    }
}
