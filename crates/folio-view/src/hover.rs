//! Pointer hover tracking.
//!
//! Hover is independent of selection. The last hovered element is kept after
//! the pointer leaves so the info panel keeps showing it.

use serde::Serialize;

/// Element under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HoverTarget {
    Node { id: u32 },
    Edge { from: u32, to: u32 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Hover {
    current: Option<HoverTarget>,
    last: Option<HoverTarget>,
}

impl Hover {
    /// Pointer entered `target`.
    pub fn enter(&mut self, target: HoverTarget) {
        self.current = Some(target);
        self.last = Some(target);
    }

    /// Pointer left whatever it was over.
    pub fn leave(&mut self) {
        self.current = None;
    }

    /// What the info panel should describe: the live hover, else the last one.
    pub fn shown(&self) -> Option<HoverTarget> {
        self.current.or(self.last)
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_node(&self, id: u32) -> bool {
        self.current == Some(HoverTarget::Node { id })
    }

    pub fn is_edge(&self, from: u32, to: u32) -> bool {
        let Some(HoverTarget::Edge { from: f, to: t }) = self.current else {
            return false;
        };
        (f, t) == (from, to) || (f, t) == (to, from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_hover_survives_leave() {
        let mut hover = Hover::default();
        assert_eq!(hover.shown(), None);
        hover.enter(HoverTarget::Node { id: 4 });
        hover.leave();
        assert!(!hover.is_active());
        assert_eq!(hover.shown(), Some(HoverTarget::Node { id: 4 }));
    }

    #[test]
    fn test_live_hover_wins() {
        let mut hover = Hover::default();
        hover.enter(HoverTarget::Node { id: 4 });
        hover.enter(HoverTarget::Edge { from: 5, to: 9 });
        assert_eq!(hover.shown(), Some(HoverTarget::Edge { from: 5, to: 9 }));
        assert!(hover.is_edge(9, 5));
        assert!(!hover.is_node(4));
    }
}
