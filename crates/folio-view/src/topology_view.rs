//! Interactive topology diagram.
//!
//! Binds the device graph and the quality color scale to pointer events and
//! derives the text shown next to the diagram: the hover tooltip and the
//! connectivity verdict for the current selection.

use folio_topology::{Color, ColorScale, Palette, SwapRoute, Topology, named};
use serde::Serialize;
use tracing::debug;

use crate::error::{ViewError, ViewResult};
use crate::hover::{Hover, HoverTarget};
use crate::selection::{Selection, SelectionState, Toggle};
use crate::svg::SvgDoc;

/// Diagram width in user units.
pub const WIDTH: f64 = 310.0;
/// Diagram height in user units.
pub const HEIGHT: f64 = 170.0;

/// Placeholder shown before anything has been hovered.
pub const HOVER_HINT: &str = "Hover over qubits or edges to see quality";

/// Placeholder shown while nothing is selected.
pub const SELECT_HINT: &str = "Click qubits in the graph to select them";

/// Connectivity verdict for the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Connectivity {
    /// Fewer than two qubits selected.
    Pending,
    /// The selected qubits are coupled.
    Connected,
    /// Two non-adjacent qubits and the SWAPs needed to bring them together.
    NeedsSwaps(SwapRoute),
    /// Not coupled, and no single route describes the gap.
    NeedsSwap,
}

impl Connectivity {
    pub fn is_connected(&self) -> bool {
        matches!(self, Connectivity::Connected)
    }

    /// Status line, `None` while pending.
    pub fn message(&self) -> Option<String> {
        match self {
            Connectivity::Pending => None,
            Connectivity::Connected => Some("Connected".to_string()),
            Connectivity::NeedsSwaps(route) => {
                let via = route
                    .via
                    .iter()
                    .map(|q| format!("Q{q}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                let plural = if route.swaps > 1 { "s" } else { "" };
                Some(format!(
                    "Not connected: needs {} SWAP{plural} (via {via})",
                    route.swaps
                ))
            }
            Connectivity::NeedsSwap => Some("Not connected: needs SWAP".to_string()),
        }
    }

    /// Color of the status line.
    pub fn color(&self) -> Color {
        if self.is_connected() {
            named::GOOD
        } else {
            named::BAD
        }
    }
}

/// Info panel content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    /// Full text, e.g. `Q4: 88% fidelity`.
    pub text: String,
    /// Quality of the described element.
    pub quality: Option<f64>,
    /// Color of the quality value.
    pub color: Option<Color>,
    /// Whether the pointer is over an element right now.
    pub active: bool,
}

/// Targets for the links drawn on a linked diagram.
pub trait DiagramLinks {
    /// URL that selects exactly `qubits`.
    fn select(&self, qubits: &[u32]) -> String;

    /// URL that shows `target` in the info panel.
    fn hover(&self, target: HoverTarget) -> String;
}

/// State and rendering of the interactive device diagram.
#[derive(Debug, Clone)]
pub struct TopologyView {
    topology: Topology,
    scale: ColorScale,
    selection: Selection,
    hover: Hover,
}

impl TopologyView {
    /// Create a view over `topology` allowing `capacity` selected qubits.
    pub fn new(topology: Topology, capacity: usize) -> Self {
        Self {
            topology,
            scale: ColorScale::topology(),
            selection: Selection::with_capacity(capacity),
            hover: Hover::default(),
        }
    }

    /// View over the sample device.
    pub fn sample(capacity: usize) -> Self {
        Self::new(Topology::sample(), capacity)
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn hover(&self) -> &Hover {
        &self.hover
    }

    pub fn state(&self) -> SelectionState {
        self.selection.state()
    }

    /// Click on a qubit.
    pub fn click(&mut self, qubit: u32) -> ViewResult<Toggle> {
        self.require_node(qubit)?;
        let outcome = self.selection.toggle(qubit);
        debug!(qubit, ?outcome, selected = ?self.selection.qubits(), "qubit clicked");
        Ok(outcome)
    }

    /// Click each qubit in turn.
    pub fn select_all(&mut self, qubits: &[u32]) -> ViewResult<Vec<Toggle>> {
        qubits.iter().map(|&q| self.click(q)).collect()
    }

    /// Clear button.
    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Pointer entered (`Some`) or left (`None`) a qubit.
    pub fn hover_node(&mut self, qubit: Option<u32>) -> ViewResult<()> {
        match qubit {
            Some(id) => {
                self.require_node(id)?;
                self.hover.enter(HoverTarget::Node { id });
            }
            None => self.hover.leave(),
        }
        Ok(())
    }

    /// Pointer entered (`Some`) or left (`None`) a coupling.
    pub fn hover_edge(&mut self, edge: Option<(u32, u32)>) -> ViewResult<()> {
        match edge {
            Some((from, to)) => {
                let coupling = self
                    .topology
                    .edge(from, to)
                    .ok_or(ViewError::UnknownEdge { from, to })?;
                self.hover.enter(HoverTarget::Edge {
                    from: coupling.from,
                    to: coupling.to,
                });
            }
            None => self.hover.leave(),
        }
        Ok(())
    }

    /// Move the pointer onto `target`, or off the diagram with `None`.
    pub fn hover_target(&mut self, target: Option<HoverTarget>) -> ViewResult<()> {
        match target {
            Some(HoverTarget::Node { id }) => self.hover_node(Some(id)),
            Some(HoverTarget::Edge { from, to }) => self.hover_edge(Some((from, to))),
            None => {
                self.hover.leave();
                Ok(())
            }
        }
    }

    /// Selection a click on `qubit` would produce, `None` if the click is rejected.
    pub fn selection_after_click(&self, qubit: u32) -> Option<Vec<u32>> {
        let mut next = self.selection.clone();
        match next.toggle(qubit) {
            Toggle::Rejected => None,
            Toggle::Added | Toggle::Removed => Some(next.qubits().to_vec()),
        }
    }

    /// Connectivity verdict for the current selection.
    pub fn connectivity(&self) -> Connectivity {
        let selected = self.selection.qubits();
        if selected.len() < 2 {
            return Connectivity::Pending;
        }
        if self.topology.is_connected_set(selected) {
            return Connectivity::Connected;
        }
        if let &[a, b] = selected {
            if let Ok(Some(route)) = self.topology.swap_route(a, b) {
                if route.swaps > 0 {
                    return Connectivity::NeedsSwaps(route);
                }
            }
        }
        Connectivity::NeedsSwap
    }

    /// Selected qubits with their quality, e.g. `Q0 (95%) → Q5 (96%)`.
    pub fn selection_label(&self) -> String {
        if self.selection.is_empty() {
            return SELECT_HINT.to_string();
        }
        self.selection
            .qubits()
            .iter()
            .map(|&q| match self.topology.node(q) {
                Some(node) => format!("Q{q} ({:.0}%)", node.quality * 100.0),
                None => format!("Q{q}"),
            })
            .collect::<Vec<_>>()
            .join(" → ")
    }

    /// Info panel content for the live or last hovered element.
    pub fn tooltip(&self) -> Tooltip {
        let active = self.hover.is_active();
        let described = self.hover.shown().and_then(|target| match target {
            HoverTarget::Node { id } => self
                .topology
                .node(id)
                .map(|n| (format!("Q{id}: {:.0}% fidelity", n.quality * 100.0), n.quality)),
            HoverTarget::Edge { from, to } => self.topology.edge(from, to).map(|e| {
                (
                    format!("Q{from}↔Q{to}: {:.0}% gate fidelity", e.quality * 100.0),
                    e.quality,
                )
            }),
        });
        match described {
            Some((text, quality)) => Tooltip {
                text,
                quality: Some(quality),
                color: Some(self.scale.color(quality)),
                active,
            },
            None => Tooltip {
                text: HOVER_HINT.to_string(),
                quality: None,
                color: None,
                active,
            },
        }
    }

    /// Fill color of a qubit.
    pub fn node_color(&self, qubit: u32) -> Option<Color> {
        let node = self.topology.node(qubit)?;
        Some(if self.selection.contains(qubit) {
            named::ACCENT
        } else {
            self.scale.color(node.quality)
        })
    }

    /// Render the diagram.
    pub fn render_svg(&self, palette: Palette) -> String {
        self.render(palette, None)
    }

    /// Render the diagram with links on every element.
    ///
    /// A qubit links to the selection clicking it would produce; a full
    /// selection leaves new qubits unlinked. A coupling links to its hover
    /// state.
    pub fn render_svg_linked(&self, palette: Palette, links: &dyn DiagramLinks) -> String {
        self.render(palette, Some(links))
    }

    fn render(&self, palette: Palette, links: Option<&dyn DiagramLinks>) -> String {
        let mut doc = SvgDoc::new(WIDTH, HEIGHT);

        for edge in self.topology.edges() {
            let (Some(a), Some(b)) = (self.topology.node(edge.from), self.topology.node(edge.to))
            else {
                continue;
            };
            let selected = self.selection.contains(edge.from) && self.selection.contains(edge.to);
            let hovered = self.hover.is_edge(edge.from, edge.to);
            let stroke = if selected {
                named::ACCENT
            } else {
                self.scale.color(edge.quality)
            };
            let width = if hovered || selected { 2.5 } else { 1.5 };
            let opacity = if selected {
                1.0
            } else if hovered {
                0.9
            } else {
                0.5
            };
            let href = links.map(|l| {
                l.hover(HoverTarget::Edge {
                    from: edge.from,
                    to: edge.to,
                })
            });
            if let Some(href) = &href {
                doc.open_link(href);
            }
            doc.line_with(
                (a.x, a.y),
                (b.x, b.y),
                &stroke,
                width,
                opacity,
                &format!(r#" data-edge="{}-{}""#, edge.from, edge.to),
            );
            if href.is_some() {
                doc.close_link();
            }
        }

        for node in self.topology.nodes() {
            let selected = self.selection.contains(node.id);
            let hovered = self.hover.is_node(node.id);
            let fill = if selected {
                named::ACCENT
            } else {
                self.scale.color(node.quality)
            };
            let r = if hovered || selected { 14.0 } else { 12.0 };
            let opacity = if selected {
                1.0
            } else if hovered {
                0.95
            } else {
                0.85
            };
            let ring = if hovered {
                format!(r#" stroke="{}" stroke-width="1.5""#, palette.stroke)
            } else {
                format!(r#" stroke="{}" stroke-width="1""#, palette.background)
            };
            let href = links.and_then(|l| {
                self.selection_after_click(node.id)
                    .map(|next| l.select(&next))
            });
            if let Some(href) = &href {
                doc.open_link(href);
            }
            doc.open_group(&format!(r#" data-qubit="{}""#, node.id))
                .circle((node.x, node.y), r, &fill, opacity, &ring)
                .text(
                    (node.x, node.y + 4.0),
                    &node.id.to_string(),
                    &palette.foreground,
                    11,
                    r#" text-anchor="middle" font-weight="500" pointer-events="none""#,
                )
                .close_group();
            if href.is_some() {
                doc.close_link();
            }
        }

        let svg = doc.finish();
        debug!(theme = %palette.theme, bytes = svg.len(), "rendered topology");
        svg
    }

    fn require_node(&self, qubit: u32) -> ViewResult<()> {
        if self.topology.contains(qubit) {
            Ok(())
        } else {
            Err(ViewError::UnknownNode(qubit))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_topology::Theme;

    #[test]
    fn test_adjacent_pair_is_connected() {
        let mut view = TopologyView::sample(2);
        view.click(0).unwrap();
        view.click(1).unwrap();
        assert_eq!(view.state(), SelectionState::TwoSelected);
        assert_eq!(view.connectivity(), Connectivity::Connected);
        assert_eq!(view.connectivity().message().unwrap(), "Connected");
    }

    #[test]
    fn test_distant_pair_needs_swaps() {
        let mut view = TopologyView::sample(2);
        view.select_all(&[0, 10]).unwrap();
        let Connectivity::NeedsSwaps(route) = view.connectivity() else {
            panic!("expected a SWAP route");
        };
        assert_eq!(route.swaps, 3);
        assert_eq!(route.via.len(), 3);
        let message = view.connectivity().message().unwrap();
        assert!(message.starts_with("Not connected: needs 3 SWAPs (via Q"));
    }

    #[test]
    fn test_single_hop_message_is_singular() {
        let mut view = TopologyView::sample(2);
        // 0 and 5 share neighbours 1 and 4.
        view.select_all(&[0, 5]).unwrap();
        let message = view.connectivity().message().unwrap();
        assert!(message.contains("needs 1 SWAP (via Q"), "{message}");
    }

    #[test]
    fn test_three_qubit_connectivity() {
        let mut view = TopologyView::sample(3);
        view.select_all(&[4, 5, 8]).unwrap();
        assert!(view.connectivity().is_connected());

        view.clear();
        view.select_all(&[0, 3, 10]).unwrap();
        assert_eq!(view.connectivity(), Connectivity::NeedsSwap);
    }

    #[test]
    fn test_pending_below_two() {
        let mut view = TopologyView::sample(2);
        assert_eq!(view.connectivity(), Connectivity::Pending);
        view.click(3).unwrap();
        assert_eq!(view.connectivity(), Connectivity::Pending);
        assert_eq!(view.selection_label(), "Q3 (91%)");
    }

    #[test]
    fn test_unknown_qubit_rejected() {
        let mut view = TopologyView::sample(2);
        assert_eq!(view.click(42), Err(ViewError::UnknownNode(42)));
        assert_eq!(
            view.hover_edge(Some((0, 10))),
            Err(ViewError::UnknownEdge { from: 0, to: 10 })
        );
    }

    #[test]
    fn test_tooltip_text() {
        let mut view = TopologyView::sample(2);
        assert_eq!(view.tooltip().text, HOVER_HINT);

        view.hover_node(Some(4)).unwrap();
        let tip = view.tooltip();
        assert_eq!(tip.text, "Q4: 88% fidelity");
        assert!(tip.active);

        view.hover_edge(Some((9, 5))).unwrap();
        assert_eq!(view.tooltip().text, "Q5↔Q9: 98% gate fidelity");

        view.hover_edge(None).unwrap();
        let tip = view.tooltip();
        assert!(!tip.active);
        assert_eq!(tip.text, "Q5↔Q9: 98% gate fidelity");
    }

    #[test]
    fn test_hover_does_not_touch_selection() {
        let mut view = TopologyView::sample(2);
        view.click(2).unwrap();
        view.hover_node(Some(7)).unwrap();
        view.hover_node(None).unwrap();
        assert_eq!(view.selection().qubits(), &[2]);
    }

    #[test]
    fn test_selected_nodes_use_accent() {
        let mut view = TopologyView::sample(2);
        view.click(9).unwrap();
        assert_eq!(view.node_color(9), Some(named::ACCENT));
        assert_ne!(view.node_color(10), Some(named::ACCENT));
        assert_eq!(view.node_color(99), None);
    }

    struct QueryLinks;

    impl DiagramLinks for QueryLinks {
        fn select(&self, qubits: &[u32]) -> String {
            let list: Vec<_> = qubits.iter().map(u32::to_string).collect();
            format!("?selected={}", list.join(","))
        }

        fn hover(&self, target: HoverTarget) -> String {
            match target {
                HoverTarget::Node { id } => format!("?hover={id}"),
                HoverTarget::Edge { from, to } => format!("?hover={from}-{to}"),
            }
        }
    }

    #[test]
    fn test_selection_after_click() {
        let mut view = TopologyView::sample(2);
        view.click(0).unwrap();
        assert_eq!(view.selection_after_click(10), Some(vec![0, 10]));
        assert_eq!(view.selection_after_click(0), Some(vec![]));

        view.click(10).unwrap();
        assert_eq!(view.selection_after_click(5), None);
        assert_eq!(view.selection_after_click(10), Some(vec![0]));
        // Asking does not change the selection.
        assert_eq!(view.selection().qubits(), &[0, 10]);
    }

    #[test]
    fn test_hover_target_dispatch() {
        let mut view = TopologyView::sample(2);
        view.hover_target(Some(HoverTarget::Edge { from: 9, to: 5 })).unwrap();
        assert_eq!(view.tooltip().text, "Q5↔Q9: 98% gate fidelity");
        view.hover_target(Some(HoverTarget::Node { id: 3 })).unwrap();
        assert_eq!(view.tooltip().text, "Q3: 91% fidelity");
        view.hover_target(None).unwrap();
        assert!(!view.tooltip().active);
        assert!(view.hover_target(Some(HoverTarget::Edge { from: 0, to: 10 })).is_err());
    }

    #[test]
    fn test_linked_svg_toggles_selection() {
        let mut view = TopologyView::sample(2);
        view.click(0).unwrap();
        let svg = view.render_svg_linked(Theme::Dark.palette(), &QueryLinks);
        // Clicking Q10 adds it, clicking Q0 removes it.
        assert!(svg.contains(r#"<a href="?selected=0,10"><g data-qubit="10">"#));
        assert!(svg.contains(r#"<a href="?selected="><g data-qubit="0">"#));
        assert!(svg.contains(r#"<a href="?hover=5-9"><line"#));
        assert_eq!(svg.matches("<a href").count(), 11 + 17);

        view.click(10).unwrap();
        let svg = view.render_svg_linked(Theme::Dark.palette(), &QueryLinks);
        // Full: only the selected qubits stay clickable.
        assert!(svg.contains(r#"<a href="?selected=10"><g data-qubit="0">"#));
        assert!(!svg.contains(r#""><g data-qubit="5">"#));
        assert_eq!(svg.matches(r#"<a href="?selected"#).count(), 2);
    }

    #[test]
    fn test_labels_follow_palette() {
        let view = TopologyView::sample(2);
        let light = Theme::Light.palette();
        let svg = view.render_svg(light);
        assert!(svg.contains(&format!(r#"fill="{}" font-size="11""#, light.foreground)));
        assert!(!svg.contains(r##"fill="#ffffff" font-size="11""##));
        assert!(!svg.contains("<a href"));
    }

    #[test]
    fn test_svg_has_every_element() {
        let mut view = TopologyView::sample(2);
        view.select_all(&[5, 6]).unwrap();
        let svg = view.render_svg(Theme::Dark.palette());
        assert_eq!(svg.matches("<line").count(), 17);
        assert_eq!(svg.matches("<circle").count(), 11);
        assert!(svg.contains(r#"data-edge="5-6""#));
        assert!(svg.contains(&named::ACCENT.css()));
    }
}
