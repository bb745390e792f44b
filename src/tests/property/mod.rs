//! Property-based tests
//!
//! Invariants checked over generated fixtures with proptest:
//!
//! - `derive_props`: derived subsets are order-preserving subsequences,
//!   derivation is idempotent, and an all-sentinel filter is the identity
//! - `facet_props`: every facet value occurs in some record, with no
//!   duplicates
//! - `viewer_props`: viewer index stays in bounds, zoom stays clamped
//! - `route_props`: route parse/path round trip
//! - `scroll_props`: listeners fire exactly on threshold crossings
//!
//! Run with `PROPTEST_CASES=1000 cargo test property` for a deeper search.

mod derive_props;
mod facet_props;
mod route_props;
mod scroll_props;
mod viewer_props;
