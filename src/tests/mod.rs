//! Crate-level tests over the shared domain library.
//!
//! - `common`: record builders and fixture helpers
//! - `unit`: scenario tests per feature
//! - `property`: proptest suites for the derivation and viewer invariants

mod common;
mod property;
mod unit;
