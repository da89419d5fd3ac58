//! Property tests for the selection state machine.

use folio_view::{Selection, SelectionState, Toggle, TopologyView};
use proptest::prelude::*;

fn clicks() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0_u32..11, 0..40)
}

proptest! {
    #[test]
    fn prop_never_exceeds_capacity(capacity in 1_usize..=3, seq in clicks()) {
        let mut sel = Selection::with_capacity(capacity);
        for q in seq {
            sel.toggle(q);
            prop_assert!(sel.len() <= capacity);
        }
    }

    #[test]
    fn prop_no_duplicates(seq in clicks()) {
        let mut sel = Selection::with_capacity(3);
        for q in seq {
            sel.toggle(q);
        }
        let mut sorted = sel.qubits().to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), sel.len());
    }

    #[test]
    fn prop_double_click_restores(seq in clicks(), extra in 0_u32..11) {
        let mut sel = Selection::with_capacity(3);
        for q in seq {
            sel.toggle(q);
        }
        let before = sel.clone();
        match sel.toggle(extra) {
            Toggle::Rejected => prop_assert_eq!(&sel, &before),
            _ => {
                sel.toggle(extra);
                let mut a = sel.qubits().to_vec();
                let mut b = before.qubits().to_vec();
                a.sort_unstable();
                b.sort_unstable();
                prop_assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn prop_clear_always_idles(seq in clicks()) {
        let mut view = TopologyView::sample(3);
        for q in seq {
            view.click(q).unwrap();
        }
        view.clear();
        prop_assert_eq!(view.state(), SelectionState::Idle);
    }

    #[test]
    fn prop_hover_never_changes_selection(seq in clicks(), hovers in clicks()) {
        let mut view = TopologyView::sample(2);
        for q in seq {
            view.click(q).unwrap();
        }
        let before = view.selection().clone();
        for h in hovers {
            view.hover_node(Some(h)).unwrap();
            view.hover_node(None).unwrap();
        }
        prop_assert_eq!(view.selection(), &before);
    }
}
