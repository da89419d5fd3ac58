//! Benchmark charts, results table and summary cards.
//!
//! Bars are drawn directly as SVG rectangles on a linear y axis. Error bars
//! come from [`ChartRow`] and are placeholders; every chart that draws them
//! carries [`SYNTHETIC_CAPTION`].

use std::fmt::Write;

use folio_bench::aggregate::{percent, signed_points};
use folio_bench::{BenchmarkRecord, ChartRow, ResultRow, SummaryCards};
use folio_topology::{Color, Palette, named};

use crate::svg::{SvgDoc, escape};

/// Legend label of the subject router.
pub const SUBJECT_LABEL: &str = "NACRE";
/// Legend label of the baseline router.
pub const BASELINE_LABEL: &str = "SABRE";

/// Caption attached to charts with placeholder error bars.
pub const SYNTHETIC_CAPTION: &str =
    "Error bars are illustrative placeholders, not measured spreads.";

const CHART_WIDTH: f64 = 720.0;

/// Plot area and y range of one chart.
#[derive(Debug, Clone, Copy)]
struct Frame {
    height: f64,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    lo: f64,
    hi: f64,
}

impl Frame {
    fn plot_width(&self) -> f64 {
        CHART_WIDTH - self.left - self.right
    }

    fn y(&self, value: f64) -> f64 {
        let plot = self.height - self.top - self.bottom;
        let t = (value.clamp(self.lo, self.hi) - self.lo) / (self.hi - self.lo);
        self.top + plot * (1.0 - t)
    }

    fn slot(&self, index: usize, count: usize) -> (f64, f64) {
        let width = self.plot_width() / count.max(1) as f64;
        (self.left + width * index as f64, width)
    }

    fn grid(
        &self,
        doc: &mut SvgDoc,
        palette: &Palette,
        ticks: &[f64],
        label: impl Fn(f64) -> String,
    ) {
        for &tick in ticks {
            let y = self.y(tick);
            doc.dashed_line((self.left, y), (CHART_WIDTH - self.right, y), &palette.grid_line)
                .text(
                    (self.left - 6.0, y + 4.0),
                    &label(tick),
                    &palette.text_secondary,
                    11,
                    r#" text-anchor="end""#,
                );
        }
        let base = self.height - self.bottom;
        doc.line((self.left, self.top), (self.left, base), &palette.border, 1.0)
            .line((self.left, base), (CHART_WIDTH - self.right, base), &palette.border, 1.0);
    }

    fn x_labels(&self, doc: &mut SvgDoc, palette: &Palette, rows: &[ChartRow]) {
        let y = self.height - self.bottom + 14.0;
        for (i, row) in rows.iter().enumerate() {
            let (x, width) = self.slot(i, rows.len());
            let cx = x + width / 2.0;
            doc.text(
                (cx, y),
                &row.circuit,
                &palette.text_secondary,
                11,
                &format!(r#" text-anchor="end" transform="rotate(-45 {cx:.1} {y:.1})""#),
            );
        }
    }
}

/// Round `raw` up to 1, 2 or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn ticks(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

fn error_bar(doc: &mut SvgDoc, frame: &Frame, cx: f64, value: f64, error: f64, stroke: &Color) {
    let (top, bottom) = (frame.y(value + error), frame.y(value - error));
    doc.line((cx, top), (cx, bottom), stroke, 1.5)
        .line((cx - 2.0, top), (cx + 2.0, top), stroke, 1.5)
        .line((cx - 2.0, bottom), (cx + 2.0, bottom), stroke, 1.5);
}

/// Charts and tables for one record set.
#[derive(Debug, Clone)]
pub struct BenchmarkCharts {
    rows: Vec<ChartRow>,
    results: Vec<ResultRow>,
    cards: SummaryCards,
}

impl BenchmarkCharts {
    pub fn new(records: &[BenchmarkRecord], threshold: f64) -> Self {
        Self {
            rows: records.iter().map(ChartRow::from_record).collect(),
            results: records
                .iter()
                .map(|r| ResultRow::from_record(r, threshold))
                .collect(),
            cards: SummaryCards::compute(records, threshold),
        }
    }

    pub fn rows(&self) -> &[ChartRow] {
        &self.rows
    }

    pub fn results(&self) -> &[ResultRow] {
        &self.results
    }

    pub fn cards(&self) -> &SummaryCards {
        &self.cards
    }

    /// Whether any plotted error bar is a placeholder.
    pub fn has_synthetic_errors(&self) -> bool {
        self.rows.iter().any(|r| r.synthetic)
    }

    /// Grouped bars: subject vs. baseline fidelity on a 0-100% axis.
    pub fn fidelity_chart_svg(&self, palette: Palette) -> String {
        let frame = Frame {
            height: 300.0,
            left: 48.0,
            right: 20.0,
            top: 20.0,
            bottom: 60.0,
            lo: 0.0,
            hi: 1.0,
        };
        let mut doc = SvgDoc::new(CHART_WIDTH, frame.height);
        frame.grid(&mut doc, &palette, &ticks(0.0, 1.0, 0.25), |v| {
            format!("{:.0}%", v * 100.0)
        });

        let base = frame.y(0.0);
        for (i, row) in self.rows.iter().enumerate() {
            let (x, width) = frame.slot(i, self.rows.len());
            let bar = (width * 0.35).min(30.0);
            let gap = 2.0;
            let center = x + width / 2.0;
            let bars = [
                (center - gap / 2.0 - bar, row.subject_fidelity, row.subject_error, named::SUBJECT),
                (center + gap / 2.0, row.baseline_fidelity, row.baseline_error, named::BASELINE),
            ];
            for (bx, value, error, fill) in bars {
                let top = frame.y(value);
                doc.rect(bx, top, bar, base - top, 2.0, &fill, None);
                error_bar(&mut doc, &frame, bx + bar / 2.0, value, error, &palette.error_bar);
            }
        }
        frame.x_labels(&mut doc, &palette, &self.rows);
        doc.finish()
    }

    /// Gain bars, green above zero and red otherwise.
    pub fn gain_chart_svg(&self, palette: Palette) -> String {
        let lowest = self
            .rows
            .iter()
            .map(|r| r.gain - r.gain_error)
            .fold(-2.0_f64, f64::min);
        let highest = self
            .rows
            .iter()
            .map(|r| r.gain + r.gain_error)
            .fold(22.0_f64, f64::max);
        let step = nice_step((highest - lowest) / 6.0);
        let frame = Frame {
            height: 280.0,
            left: 48.0,
            right: 10.0,
            top: 20.0,
            bottom: 60.0,
            lo: (lowest / step).floor() * step,
            hi: (highest / step).ceil() * step,
        };
        let mut doc = SvgDoc::new(CHART_WIDTH, frame.height);
        frame.grid(&mut doc, &palette, &ticks(frame.lo, frame.hi, step), |v| {
            let sign = if v > 0.0 { "+" } else { "" };
            format!("{sign}{v:.0}%")
        });

        let zero = frame.y(0.0);
        for (i, row) in self.rows.iter().enumerate() {
            let (x, width) = frame.slot(i, self.rows.len());
            let bar = (width * 0.6).min(40.0);
            let bx = x + (width - bar) / 2.0;
            let y = frame.y(row.gain);
            let fill = if row.gain > 0.0 {
                named::SUBJECT
            } else {
                named::BASELINE
            };
            doc.rect(bx, y.min(zero), bar, (zero - y).abs(), 2.0, &fill, None);
            error_bar(
                &mut doc,
                &frame,
                bx + bar / 2.0,
                row.gain,
                row.gain_error,
                &palette.error_bar,
            );
        }
        frame.x_labels(&mut doc, &palette, &self.rows);
        doc.finish()
    }

    /// Detailed results table.
    pub fn results_table_html(&self, palette: Palette) -> String {
        let mut html = String::new();
        let muted = palette.text_secondary;
        let _ = write!(
            html,
            r#"<table class="results"><thead><tr style="background-color:{bg}"><th style="color:{primary}">Circuit</th><th style="color:{subject}">{SUBJECT_LABEL} Fid</th><th style="color:{baseline}">{BASELINE_LABEL} Fid</th><th style="color:{primary}">Gain</th><th style="color:{subject}">{SUBJECT_LABEL} SWAPs</th><th style="color:{baseline}">{BASELINE_LABEL} SWAPs</th><th style="color:{primary}">Code</th></tr></thead><tbody>"#,
            bg = palette.bg_muted,
            primary = palette.text_primary,
            subject = named::SUBJECT,
            baseline = named::BASELINE,
        );
        for row in &self.results {
            let gain_color = if row.gain.starts_with('+') {
                named::SUBJECT
            } else {
                named::BASELINE
            };
            let _ = write!(
                html,
                r##"<tr style="border-color:{border}"><td style="color:{primary}">{circuit}</td><td style="color:{subject}">{sf}</td><td style="color:{baseline}">{bf}</td><td style="color:{gain_color}">{gain}</td><td style="color:{muted}">{ss}</td><td style="color:{muted}">{bs}</td><td><a href="#family-{family}">View</a></td></tr>"##,
                border = palette.border,
                primary = palette.text_primary,
                subject = named::SUBJECT,
                baseline = named::BASELINE,
                circuit = escape(&row.circuit),
                sf = row.subject_fidelity,
                bf = row.baseline_fidelity,
                gain = row.gain,
                ss = row.subject_swaps,
                bs = row.baseline_swaps,
                family = escape(&row.family),
            );
        }
        html.push_str("</tbody></table>");
        html
    }

    /// The four headline cards.
    pub fn summary_cards_html(&self, palette: Palette) -> String {
        let cards = [
            (
                format!("Avg {SUBJECT_LABEL} Fidelity"),
                percent(self.cards.avg_subject_fidelity, 1),
                named::SUBJECT,
            ),
            (
                format!("Avg {BASELINE_LABEL} Fidelity"),
                percent(self.cards.avg_baseline_fidelity, 1),
                named::BASELINE,
            ),
            (
                "Avg Fidelity Gain".to_string(),
                signed_points(self.cards.avg_gain, 1),
                named::SUBJECT,
            ),
            (
                format!("{SUBJECT_LABEL} Wins"),
                format!("{}/{}", self.cards.wins, self.cards.total),
                named::SUBJECT,
            ),
        ];
        let mut html = String::from(r#"<div class="cards">"#);
        for (label, value, color) in cards {
            let _ = write!(
                html,
                r#"<div class="card" style="background-color:{bg}"><p class="card-label" style="color:{muted}">{label}</p><p class="card-value" style="color:{color}">{value}</p></div>"#,
                bg = palette.bg_subtle,
                muted = palette.text_muted,
            );
        }
        html.push_str("</div>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_bench::{Dataset, Regime};
    use folio_topology::Theme;

    fn charts() -> BenchmarkCharts {
        let dataset = Dataset::embedded().unwrap();
        BenchmarkCharts::new(dataset.records(Regime::Good), 0.5)
    }

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(4.0), 5.0);
        assert_eq!(nice_step(1.5), 2.0);
        assert_eq!(nice_step(0.0), 1.0);
    }

    #[test]
    fn test_ticks_cover_range() {
        assert_eq!(ticks(0.0, 1.0, 0.25), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(ticks(-5.0, 25.0, 5.0).first(), Some(&-5.0));
    }

    #[test]
    fn test_fidelity_chart_has_two_bars_per_circuit() {
        let charts = charts();
        let svg = charts.fidelity_chart_svg(Theme::Dark.palette());
        assert_eq!(svg.matches("<rect").count(), 2 * charts.rows().len());
        assert!(svg.contains("AllToAll-4"));
        assert!(charts.has_synthetic_errors());
    }

    #[test]
    fn test_gain_chart_colors_losses_red() {
        let charts = charts();
        let svg = charts.gain_chart_svg(Theme::Light.palette());
        // VQE-4 is the only loss in the good regime.
        assert_eq!(svg.matches(&format!(r#"fill="{}""#, named::BASELINE)).count(), 1);
        assert!(svg.contains("+20%"));
    }

    #[test]
    fn test_summary_cards() {
        let html = charts().summary_cards_html(Theme::Dark.palette());
        assert!(html.contains("11/12"));
        assert!(html.contains("Avg NACRE Fidelity"));
    }

    #[test]
    fn test_results_table_links_family() {
        let html = charts().results_table_html(Theme::Dark.palette());
        assert_eq!(html.matches("<tr").count(), 13);
        assert!(html.contains(r##"href="#family-QAOA""##));
        assert!(html.contains("+18.73%"));
    }
}
