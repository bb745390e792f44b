pub mod error;
pub mod models;
pub mod fixtures;

// Derived views over the fixtures
pub mod filter;
pub mod facets;
pub mod viewer;
pub mod markers;
pub mod present;

pub mod routes;
pub mod media;
pub mod scroll;

#[cfg(feature = "native")]
pub mod logging;
