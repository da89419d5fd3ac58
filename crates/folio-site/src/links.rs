//! Post URLs that carry the figure state.
//!
//! Every control on a post links back to the same page with one key changed,
//! so the theme, the selection and the other figure settings survive a click.
//! URLs are returned unescaped; writers escape them into attributes.

use folio_topology::Theme;
use folio_view::{DiagramLinks, FidelityCalculator, HoverTarget, PathChoice};

use crate::render::Figures;

/// Figure state as it appears in a post URL.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLinks {
    theme: Theme,
    selected: Vec<u32>,
    hover: Option<HoverTarget>,
    path: PathChoice,
    expanded: bool,
    gates: u32,
    fidelity: f64,
}

impl PageLinks {
    /// Links for a post rendered with `figures` in `theme`.
    pub fn new(theme: Theme, figures: &Figures) -> Self {
        Self {
            theme,
            selected: figures.topology.selection().qubits().to_vec(),
            hover: figures.topology.hover().shown(),
            path: figures.cost.choice(),
            expanded: figures.swap.is_expanded(),
            gates: figures.calculator.gate_count(),
            fidelity: figures.calculator.gate_fidelity(),
        }
    }

    pub fn with_theme(&self, theme: Theme) -> Self {
        Self {
            theme,
            ..self.clone()
        }
    }

    pub fn with_selected(&self, qubits: &[u32]) -> Self {
        Self {
            selected: qubits.to_vec(),
            ..self.clone()
        }
    }

    pub fn with_hover(&self, hover: Option<HoverTarget>) -> Self {
        Self {
            hover,
            ..self.clone()
        }
    }

    pub fn with_path(&self, path: PathChoice) -> Self {
        Self {
            path,
            ..self.clone()
        }
    }

    pub fn with_expanded(&self, expanded: bool) -> Self {
        Self {
            expanded,
            ..self.clone()
        }
    }

    /// Query pairs, skipping keys at their default value. The theme is always kept.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("theme", self.theme.to_string())];
        if !self.selected.is_empty() {
            let list: Vec<_> = self.selected.iter().map(u32::to_string).collect();
            pairs.push(("selected", list.join(",")));
        }
        match self.hover {
            Some(HoverTarget::Node { id }) => pairs.push(("hover", id.to_string())),
            Some(HoverTarget::Edge { from, to }) => pairs.push(("hover", format!("{from}-{to}"))),
            None => {}
        }
        if self.path != PathChoice::default() {
            pairs.push(("path", path_key(self.path).to_string()));
        }
        if self.expanded {
            pairs.push(("expanded", "true".to_string()));
        }
        let calculator = FidelityCalculator::default();
        if self.gates != calculator.gate_count() {
            pairs.push(("gates", self.gates.to_string()));
        }
        if self.fidelity != calculator.gate_fidelity() {
            pairs.push(("fidelity", self.fidelity.to_string()));
        }
        pairs
    }

    /// URL of the page in this state, e.g. `?theme=light&selected=0,10`.
    pub fn href(&self) -> String {
        let query: Vec<_> = self
            .pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        format!("?{}", query.join("&"))
    }

    /// URL that additionally jumps the animation to `step` and pauses it.
    pub fn jump_to(&self, step: usize) -> String {
        format!("{}&step={step}", self.href())
    }

    /// URL that additionally starts or pauses the animation.
    pub fn set_playing(&self, playing: bool) -> String {
        format!("{}&playing={playing}", self.href())
    }
}

impl DiagramLinks for PageLinks {
    fn select(&self, qubits: &[u32]) -> String {
        self.with_selected(qubits).href()
    }

    fn hover(&self, target: HoverTarget) -> String {
        self.with_hover(Some(target)).href()
    }
}

fn path_key(choice: PathChoice) -> &'static str {
    match choice {
        PathChoice::Short => "short",
        PathChoice::Quality => "quality",
    }
}
