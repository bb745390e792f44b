//! Scenario Tests
//!
//! One module per feature, each pinning down the behaviour a visitor sees:
//! - `gallery_tests`: tag and location facets, viewer after filter changes
//! - `timeline_tests`: year/month/kind facets
//! - `guide_tests`: guide lookup, not-found page, detail defaults
//! - `viewer_tests`: zoom clamping, keyboard handling
//! - `media_tests`: image fallback
//! - `map_tests`: marker placement, route polyline, viewport

mod gallery_tests;
mod guide_tests;
mod map_tests;
mod media_tests;
mod timeline_tests;
mod viewer_tests;
