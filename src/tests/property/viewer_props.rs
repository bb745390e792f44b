//! Property-based tests for the Detail Viewer
//!
//! Tests invariants:
//! - Once open, next/previous never move the index outside the subset
//! - Zoom stays within [ZOOM_MIN, ZOOM_MAX]
//! - Reconcile always leaves a valid index or a closed viewer

use proptest::prelude::*;

use crate::core::viewer::{Viewer, ViewerCommand, ZOOM_MAX, ZOOM_MIN};

fn arb_command() -> impl Strategy<Value = ViewerCommand> {
    prop_oneof![
        Just(ViewerCommand::Next),
        Just(ViewerCommand::Previous),
        Just(ViewerCommand::ZoomIn),
        Just(ViewerCommand::ZoomOut),
    ]
}

proptest! {
    #[test]
    fn prop_index_stays_in_bounds(
        len in 1usize..30,
        start in 0usize..30,
        commands in prop::collection::vec(arb_command(), 0..60),
    ) {
        let mut viewer = Viewer::new();
        viewer.apply(ViewerCommand::Open(start % len), len);
        for command in commands {
            viewer.apply(command, len);
            let index = viewer.index();
            prop_assert!(index.is_some());
            prop_assert!(index.unwrap_or(usize::MAX) < len);
            prop_assert!((ZOOM_MIN..=ZOOM_MAX).contains(&viewer.zoom()));
        }
    }

    #[test]
    fn prop_reconcile_leaves_valid_state(len in 1usize..30, start in 0usize..30, new_len in 0usize..30) {
        let mut viewer = Viewer::new();
        viewer.apply(ViewerCommand::Open(start % len), len);
        viewer.reconcile(new_len);
        match viewer.index() {
            Some(i) => prop_assert!(i < new_len),
            None => prop_assert_eq!(new_len, 0),
        }
    }

    #[test]
    fn prop_closed_viewer_ignores_keys(key in "[A-Za-z+=-]{1,10}", len in 0usize..10) {
        let mut viewer = Viewer::new();
        prop_assert!(!viewer.handle_key(&key, len));
        prop_assert!(!viewer.is_open());
    }
}
