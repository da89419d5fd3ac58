//! Qubit selection state machine.
//!
//! Clicking an unselected qubit adds it, clicking a selected qubit removes
//! it, and `clear` resets to [`SelectionState::Idle`]. A click on a new qubit
//! while the selection is full is rejected: the existing selection is kept.

use serde::Serialize;
use tracing::warn;

/// Default number of qubits that can be selected at once.
pub const DEFAULT_CAPACITY: usize = 2;

/// Largest supported selection capacity.
pub const MAX_CAPACITY: usize = 3;

/// Observable state of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SelectionState {
    Idle,
    OneSelected,
    TwoSelected,
    ThreeSelected,
}

/// Outcome of a click on a qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Toggle {
    /// The qubit was appended to the selection.
    Added,
    /// The qubit was already selected and has been removed.
    Removed,
    /// The selection is full; nothing changed.
    Rejected,
}

/// Ordered selection of qubits, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    capacity: usize,
    qubits: Vec<u32>,
}

impl Default for Selection {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl Selection {
    /// Create an empty selection; `capacity` is clamped to `1..=MAX_CAPACITY`.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_CAPACITY);
        Self {
            capacity,
            qubits: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Selected qubits in click order.
    pub fn qubits(&self) -> &[u32] {
        &self.qubits
    }

    pub fn len(&self) -> usize {
        self.qubits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.qubits.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.qubits.len() >= self.capacity
    }

    pub fn contains(&self, qubit: u32) -> bool {
        self.qubits.contains(&qubit)
    }

    pub fn state(&self) -> SelectionState {
        match self.qubits.len() {
            0 => SelectionState::Idle,
            1 => SelectionState::OneSelected,
            2 => SelectionState::TwoSelected,
            _ => SelectionState::ThreeSelected,
        }
    }

    /// Apply a click on `qubit`.
    pub fn toggle(&mut self, qubit: u32) -> Toggle {
        if let Some(pos) = self.qubits.iter().position(|&q| q == qubit) {
            self.qubits.remove(pos);
            Toggle::Removed
        } else if self.is_full() {
            warn!(qubit, capacity = self.capacity, "selection full, click ignored");
            Toggle::Rejected
        } else {
            self.qubits.push(qubit);
            Toggle::Added
        }
    }

    /// Reset to [`SelectionState::Idle`].
    pub fn clear(&mut self) {
        self.qubits.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walks_through_states() {
        let mut sel = Selection::default();
        assert_eq!(sel.state(), SelectionState::Idle);
        assert_eq!(sel.toggle(3), Toggle::Added);
        assert_eq!(sel.state(), SelectionState::OneSelected);
        assert_eq!(sel.toggle(7), Toggle::Added);
        assert_eq!(sel.state(), SelectionState::TwoSelected);
        assert_eq!(sel.qubits(), &[3, 7]);
    }

    #[test]
    fn test_click_selected_retreats() {
        let mut sel = Selection::default();
        sel.toggle(3);
        sel.toggle(7);
        assert_eq!(sel.toggle(3), Toggle::Removed);
        assert_eq!(sel.qubits(), &[7]);
        assert_eq!(sel.state(), SelectionState::OneSelected);
    }

    #[test]
    fn test_full_selection_rejects_new_qubit() {
        let mut sel = Selection::default();
        sel.toggle(0);
        sel.toggle(1);
        assert_eq!(sel.toggle(2), Toggle::Rejected);
        assert_eq!(sel.qubits(), &[0, 1]);
        // Removing still works while full.
        assert_eq!(sel.toggle(0), Toggle::Removed);
        assert_eq!(sel.toggle(2), Toggle::Added);
        assert_eq!(sel.qubits(), &[1, 2]);
    }

    #[test]
    fn test_capacity_three() {
        let mut sel = Selection::with_capacity(3);
        for q in [4, 5, 8] {
            assert_eq!(sel.toggle(q), Toggle::Added);
        }
        assert_eq!(sel.state(), SelectionState::ThreeSelected);
        assert_eq!(sel.toggle(9), Toggle::Rejected);
    }

    #[test]
    fn test_capacity_is_clamped() {
        assert_eq!(Selection::with_capacity(0).capacity(), 1);
        assert_eq!(Selection::with_capacity(10).capacity(), MAX_CAPACITY);
    }

    #[test]
    fn test_clear_resets() {
        let mut sel = Selection::with_capacity(3);
        sel.toggle(1);
        sel.toggle(2);
        sel.clear();
        assert_eq!(sel.state(), SelectionState::Idle);
        assert!(sel.is_empty());
    }
}
