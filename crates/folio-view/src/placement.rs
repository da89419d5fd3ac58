//! Initial placement comparison.
//!
//! The same three-qubit input circuit placed on the sample device twice: on
//! three scattered qubits, and on a coupled high-fidelity triangle. Each
//! placement shows where its logical qubits land and the routed circuit.

use folio_topology::{Color, Palette, Topology, named};

use crate::svg::SvgDoc;
use crate::topology_view::{HEIGHT, WIDTH};

const WIRE_SPACING: f64 = 40.0;
const GATE_SPACING: f64 = 50.0;
const FIRST_GATE_X: f64 = 50.0;

/// Kind of a two-qubit gate in a circuit diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateKind {
    /// Control on the first wire, target on the second.
    Cnot,
    Swap,
}

/// A gate between two wires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircuitGate {
    pub kind: GateKind,
    pub wires: (usize, usize),
    /// Drawn in the accent color.
    pub highlight: bool,
}

impl CircuitGate {
    const fn cnot(control: usize, target: usize) -> Self {
        Self {
            kind: GateKind::Cnot,
            wires: (control, target),
            highlight: false,
        }
    }

    const fn swap(a: usize, b: usize) -> Self {
        Self {
            kind: GateKind::Swap,
            wires: (a, b),
            highlight: true,
        }
    }

    const fn highlighted(self) -> Self {
        Self {
            highlight: true,
            ..self
        }
    }
}

/// Gates drawn left to right on horizontal wires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitDiagram {
    pub wires: usize,
    pub gates: &'static [CircuitGate],
    /// Wire labels, top first. Missing or empty labels are not drawn.
    pub labels: &'static [&'static str],
    pub width: f64,
}

impl CircuitDiagram {
    pub fn height(&self) -> f64 {
        self.wires as f64 * WIRE_SPACING + 20.0
    }

    pub fn gate_count(&self, kind: GateKind) -> usize {
        self.gates.iter().filter(|g| g.kind == kind).count()
    }

    pub fn render_svg(&self, palette: Palette) -> String {
        let mut doc = SvgDoc::new(self.width, self.height());
        let wire_y = |wire: usize| 20.0 + wire as f64 * WIRE_SPACING;

        for wire in 0..self.wires {
            let y = wire_y(wire);
            doc.line((30.0, y), (self.width - 10.0, y), &palette.stroke_dim, 1.0);
            if let Some(label) = self.labels.get(wire).filter(|l| !l.is_empty()) {
                doc.text((8.0, y + 4.0), label, &palette.stroke, 12, "");
            }
        }

        for (i, gate) in self.gates.iter().enumerate() {
            let x = FIRST_GATE_X + i as f64 * GATE_SPACING;
            let stroke = if gate.highlight {
                named::ACCENT
            } else {
                palette.stroke
            };
            let (a, b) = (wire_y(gate.wires.0), wire_y(gate.wires.1));
            doc.open_group(&format!(r#" data-gate="{i}""#));
            match gate.kind {
                GateKind::Cnot => {
                    doc.line((x, a.min(b)), (x, a.max(b)), &stroke, 1.0)
                        .circle((x, a), 3.0, &stroke, 1.0, "")
                        .ring((x, b), 7.0, &stroke)
                        .line((x, b - 7.0), (x, b + 7.0), &stroke, 1.0)
                        .line((x - 7.0, b), (x + 7.0, b), &stroke, 1.0);
                }
                GateKind::Swap => {
                    doc.line((x, a), (x, b), &stroke, 1.0);
                    for y in [a, b] {
                        doc.line((x - 5.0, y - 5.0), (x + 5.0, y + 5.0), &stroke, 1.5)
                            .line((x + 5.0, y - 5.0), (x - 5.0, y + 5.0), &stroke, 1.5);
                    }
                }
            }
            doc.close_group();
        }
        doc.finish()
    }
}

/// A logical-to-physical placement and its routed result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub name: &'static str,
    /// Physical qubit of each logical qubit, `q0` first.
    pub physical: [u32; 3],
    pub routed: CircuitDiagram,
    /// SWAPs the router inserted.
    pub swaps: usize,
    /// Estimated circuit fidelity.
    pub fidelity: f64,
}

impl Placement {
    /// Good placements are drawn in the good color, others in the bad one.
    pub fn is_good(&self) -> bool {
        self.fidelity >= 0.8
    }

    pub fn color(&self) -> Color {
        if self.is_good() {
            named::GOOD
        } else {
            named::BAD
        }
    }

    /// Approximate fidelity, e.g. `~52%`.
    pub fn readout(&self) -> String {
        format!("~{:.0}%", self.fidelity * 100.0)
    }

    /// Logical index placed on `qubit`.
    pub fn logical(&self, qubit: u32) -> Option<usize> {
        self.physical.iter().position(|&q| q == qubit)
    }

    /// The sample device with the placed qubits and their couplings highlighted.
    pub fn render_topology(&self, topology: &Topology, palette: Palette) -> String {
        let mut doc = SvgDoc::new(WIDTH, HEIGHT);

        for edge in topology.edges() {
            let (Some(a), Some(b)) = (topology.node(edge.from), topology.node(edge.to)) else {
                continue;
            };
            let placed = self.logical(edge.from).is_some() && self.logical(edge.to).is_some();
            if placed {
                doc.line_with((a.x, a.y), (b.x, b.y), &named::ACCENT, 2.0, 1.0, "");
            } else {
                doc.line_with((a.x, a.y), (b.x, b.y), &palette.stroke_muted, 1.0, 0.2, "");
            }
        }

        for node in topology.nodes() {
            let center = (node.x, node.y);
            let label_at = (node.x, node.y + 4.0);
            match self.logical(node.id) {
                Some(logical) => {
                    doc.circle(center, 16.0, &named::ACCENT, 1.0, "").text(
                        label_at,
                        &format!("q{logical}"),
                        &Color::rgb(0, 0, 0),
                        12,
                        r#" text-anchor="middle" font-weight="600""#,
                    );
                }
                None => {
                    doc.circle(center, 14.0, &palette.node_idle, 0.4, "").text(
                        label_at,
                        &node.id.to_string(),
                        &palette.foreground,
                        12,
                        r#" text-anchor="middle" opacity="0.6""#,
                    );
                }
            }
        }
        doc.finish()
    }
}

const LABELS: &[&str] = &["q₀", "q₁", "q₂", ""];

/// Three CNOTs; the last one couples `q0` and `q2`.
pub const INPUT_CIRCUIT: CircuitDiagram = CircuitDiagram {
    wires: 3,
    gates: &[
        CircuitGate::cnot(0, 1),
        CircuitGate::cnot(1, 2),
        CircuitGate::cnot(0, 2).highlighted(),
    ],
    labels: LABELS,
    width: 220.0,
};

/// Scattered qubits with no couplings between them.
pub const RANDOM: Placement = Placement {
    name: "Random",
    physical: [0, 3, 10],
    routed: CircuitDiagram {
        wires: 4,
        gates: &[
            CircuitGate::swap(0, 1),
            CircuitGate::cnot(1, 2),
            CircuitGate::swap(1, 2),
            CircuitGate::swap(2, 3),
            CircuitGate::cnot(2, 3),
        ],
        labels: LABELS,
        width: 300.0,
    },
    swaps: 4,
    fidelity: 0.52,
};

/// A fully coupled triangle of high-fidelity qubits.
pub const NOISE_AWARE: Placement = Placement {
    name: "Noise-aware",
    physical: [5, 8, 9],
    routed: CircuitDiagram {
        wires: 3,
        gates: &[
            CircuitGate::cnot(0, 1),
            CircuitGate::cnot(1, 2),
            CircuitGate::swap(0, 1),
            CircuitGate::cnot(1, 2),
        ],
        labels: LABELS,
        width: 260.0,
    },
    swaps: 1,
    fidelity: 0.89,
};

/// Both placements, random first.
pub const PLACEMENTS: [Placement; 2] = [RANDOM, NOISE_AWARE];
