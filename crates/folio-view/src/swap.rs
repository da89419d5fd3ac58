//! SWAP gate decomposition diagram.

use folio_topology::Palette;
use folio_topology::fidelity::{GATES_PER_SWAP, swap_fidelity};

use crate::svg::SvgDoc;

/// Explanation shown under the diagram.
pub const CAPTION: &str = "A SWAP gate exchanges quantum states between two qubits. \
It requires 3 CNOT operations, so each SWAP inherits 3× the two-qubit gate error.";

const TOP_WIRE: f64 = 25.0;
const BOTTOM_WIRE: f64 = 55.0;

/// Collapsible SWAP = 3 × CNOT diagram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwapDiagram {
    expanded: bool,
}

impl SwapDiagram {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Show or hide the CNOT decomposition.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn button_label(&self) -> &'static str {
        if self.expanded {
            "← Collapse"
        } else {
            "Show decomposition →"
        }
    }

    /// Fidelity of one SWAP given the two-qubit gate fidelity.
    pub fn effective_fidelity(gate_fidelity: f64) -> f64 {
        swap_fidelity(gate_fidelity)
    }

    /// The SWAP symbol on two wires.
    pub fn render_symbol(&self, palette: Palette) -> String {
        let stroke = palette.stroke;
        let mut doc = SvgDoc::new(140.0, 80.0);
        doc.line((20.0, TOP_WIRE), (120.0, TOP_WIRE), &stroke, 1.0)
            .line((20.0, BOTTOM_WIRE), (120.0, BOTTOM_WIRE), &stroke, 1.0)
            .text((12.0, 29.0), "q₁", &stroke, 13, r#" text-anchor="end""#)
            .text((12.0, 59.0), "q₂", &stroke, 13, r#" text-anchor="end""#);
        for wire in [TOP_WIRE, BOTTOM_WIRE] {
            doc.line((65.0, wire - 5.0), (75.0, wire + 5.0), &stroke, 1.5)
                .line((75.0, wire - 5.0), (65.0, wire + 5.0), &stroke, 1.5);
        }
        doc.line((70.0, TOP_WIRE + 5.0), (70.0, BOTTOM_WIRE - 5.0), &stroke, 1.0);
        doc.finish()
    }

    /// Collapsed: a `3 × CNOT` label. Expanded: three alternating CNOTs.
    pub fn render_decomposition(&self, palette: Palette) -> String {
        let stroke = palette.stroke;
        let width = if self.expanded { 300.0 } else { 140.0 };
        let mut doc = SvgDoc::new(width, 80.0);
        doc.line((20.0, TOP_WIRE), (width - 20.0, TOP_WIRE), &stroke, 1.0)
            .line((20.0, BOTTOM_WIRE), (width - 20.0, BOTTOM_WIRE), &stroke, 1.0);

        if !self.expanded {
            doc.text(
                (70.0, 44.0),
                &format!("{GATES_PER_SWAP} × CNOT"),
                &palette.stroke_dim,
                13,
                r#" text-anchor="middle""#,
            );
            return doc.finish();
        }

        // Control alternates: bottom, top, bottom.
        for (i, x) in [70.0, 150.0, 230.0].into_iter().enumerate() {
            let (control, target) = if i % 2 == 0 {
                (BOTTOM_WIRE, TOP_WIRE)
            } else {
                (TOP_WIRE, BOTTOM_WIRE)
            };
            doc.circle((x, control), 4.0, &stroke, 1.0, "")
                .line((x, control), (x, target), &stroke, 1.0)
                .ring((x, target), 8.0, &stroke)
                .line((x, target - 8.0), (x, target + 8.0), &stroke, 1.0);
        }
        doc.finish()
    }
}
