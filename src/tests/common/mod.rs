//! Common Test Utilities
//!
//! Shared record builders used across test modules. Builders fill every
//! field a test does not care about with plausible defaults.

pub mod builders;

pub use builders::*;
