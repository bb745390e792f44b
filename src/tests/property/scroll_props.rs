//! Property-based tests for the scroll observable
//!
//! Tests invariants:
//! - Listeners are notified exactly once per threshold crossing
//! - The last notification always matches `is_past()`
//! - Unsubscribed listeners are never called

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;

use crate::core::scroll::ScrollWatch;

proptest! {
    #[test]
    fn prop_notifies_on_crossings_only(offsets in prop::collection::vec(0.0f64..800.0, 0..50)) {
        let mut watch = ScrollWatch::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        watch.subscribe(move |past| sink.borrow_mut().push(past));

        let mut expected = Vec::new();
        let mut past = false;
        for offset in &offsets {
            let now = *offset >= watch.threshold();
            if now != past {
                expected.push(now);
                past = now;
            }
            watch.update(*offset);
        }

        prop_assert_eq!(&*seen.borrow(), &expected);
        prop_assert_eq!(watch.is_past(), past);
    }

    #[test]
    fn prop_unsubscribed_listener_silent(offsets in prop::collection::vec(0.0f64..800.0, 0..50)) {
        let mut watch = ScrollWatch::default();
        let calls = Rc::new(RefCell::new(0u32));
        let counter = calls.clone();
        let id = watch.subscribe(move |_| *counter.borrow_mut() += 1);
        prop_assert!(watch.unsubscribe(id));
        prop_assert!(!watch.unsubscribe(id));

        for offset in offsets {
            watch.update(offset);
        }
        prop_assert_eq!(*calls.borrow(), 0);
    }
}
