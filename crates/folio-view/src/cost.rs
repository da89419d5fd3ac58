//! Short path versus high-quality path comparison.
//!
//! Moving a state from Q0 to Q5 on a 6-qubit graph: the two-hop path crosses
//! poor couplings, the four-hop path crosses good ones. Each hop is a SWAP,
//! so its coupling fidelity is cubed.

use folio_topology::fidelity::GATES_PER_SWAP;
use folio_topology::{Color, ColorScale, Palette, Topology, named};
use serde::{Deserialize, Serialize};

use crate::error::ViewResult;
use crate::svg::SvgDoc;

/// Fewest hops from Q0 to Q5.
pub const SHORT_PATH: [u32; 3] = [0, 3, 5];

/// Best couplings from Q0 to Q5.
pub const QUALITY_PATH: [u32; 5] = [0, 1, 2, 4, 5];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathChoice {
    #[default]
    Short,
    Quality,
}

impl PathChoice {
    pub fn path(self) -> &'static [u32] {
        match self {
            PathChoice::Short => &SHORT_PATH,
            PathChoice::Quality => &QUALITY_PATH,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PathChoice::Short => "Short path",
            PathChoice::Quality => "Quality path",
        }
    }

    fn other(self) -> Self {
        match self {
            PathChoice::Short => PathChoice::Quality,
            PathChoice::Quality => PathChoice::Short,
        }
    }
}

/// Summary of one candidate path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSummary {
    pub choice: PathChoice,
    /// `0→3→5`
    pub route: String,
    pub swaps: usize,
    /// Coupling fidelity of each hop.
    pub hop_fidelities: Vec<f64>,
    /// Product of each hop fidelity cubed.
    pub fidelity: f64,
}

impl PathSummary {
    /// `2 SWAPs · fidelities: 88%, 85%`
    pub fn detail(&self) -> String {
        let hops = self
            .hop_fidelities
            .iter()
            .map(|f| format!("{:.0}%", f * 100.0))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} SWAPs · fidelities: {hops}", self.swaps)
    }
}

/// Toggle between the two paths.
#[derive(Debug, Clone)]
pub struct CostComparison {
    topology: Topology,
    choice: PathChoice,
}

impl Default for CostComparison {
    fn default() -> Self {
        Self {
            topology: Topology::cost_example(),
            choice: PathChoice::default(),
        }
    }
}

impl CostComparison {
    pub fn choice(&self) -> PathChoice {
        self.choice
    }

    pub fn select(&mut self, choice: PathChoice) {
        self.choice = choice;
    }

    pub fn summary(&self, choice: PathChoice) -> ViewResult<PathSummary> {
        let path = choice.path();
        let hop_fidelities = path
            .windows(2)
            .filter_map(|pair| self.topology.edge(pair[0], pair[1]).map(|e| e.quality))
            .collect();
        Ok(PathSummary {
            choice,
            route: path
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join("→"),
            swaps: path.len() - 1,
            hop_fidelities,
            fidelity: self.topology.path_fidelity(path, GATES_PER_SWAP)?,
        })
    }

    /// Total fidelity readout and its color for the selected path.
    pub fn readout(&self) -> ViewResult<(String, Color)> {
        let mine = self.summary(self.choice)?.fidelity;
        let other = self.summary(self.choice.other())?.fidelity;
        let color = if mine >= other { named::GOOD } else { named::BAD };
        Ok((format!("{:.0}%", mine * 100.0), color))
    }

    fn on_path(&self, a: u32, b: u32) -> bool {
        self.choice
            .path()
            .windows(2)
            .any(|pair| (pair[0], pair[1]) == (a, b) || (pair[0], pair[1]) == (b, a))
    }

    pub fn render_svg(&self, palette: Palette) -> String {
        let path = self.choice.path();
        let (start, end) = (path[0], path[path.len() - 1]);
        let mut doc = SvgDoc::new(280.0, 120.0);

        for edge in self.topology.edges() {
            let (Some(a), Some(b)) = (self.topology.node(edge.from), self.topology.node(edge.to))
            else {
                continue;
            };
            let on = self.on_path(edge.from, edge.to);
            let stroke = if on { named::ACCENT } else { palette.stroke_muted };
            doc.line_with(
                (a.x, a.y),
                (b.x, b.y),
                &stroke,
                if on { 2.0 } else { 1.0 },
                if on { 1.0 } else { 0.25 },
                "",
            );
        }
        for edge in self.topology.edges() {
            let (Some(a), Some(b)) = (self.topology.node(edge.from), self.topology.node(edge.to))
            else {
                continue;
            };
            let opacity = if self.on_path(edge.from, edge.to) { 0.8 } else { 0.4 };
            doc.text(
                ((a.x + b.x) / 2.0, (a.y + b.y) / 2.0 - 8.0),
                &format!("{:.0}%", edge.quality * 100.0),
                &palette.foreground,
                10,
                &format!(r#" text-anchor="middle" opacity="{opacity}""#),
            );
        }

        let white = Color::rgb(0xff, 0xff, 0xff);
        let scale = ColorScale::topology();
        for node in self.topology.nodes() {
            let endpoint = node.id == start || node.id == end;
            let on = path.contains(&node.id);
            let fill = if endpoint {
                named::ACCENT
            } else if on {
                let quality = self
                    .topology
                    .edges()
                    .iter()
                    .find(|e| e.other(node.id).is_some() && self.on_path(e.from, e.to))
                    .map_or(0.9, |e| e.quality);
                scale.color(quality)
            } else {
                palette.node_idle
            };
            doc.circle(
                (node.x, node.y),
                if endpoint { 13.0 } else { 11.0 },
                &fill,
                if endpoint || on { 1.0 } else { 0.35 },
                "",
            )
            .text(
                (node.x, node.y + 4.0),
                &node.id.to_string(),
                &white,
                10,
                r#" text-anchor="middle" font-weight="500""#,
            );
        }
        doc.finish()
    }
}
