/// Timeless Trips - travel journal
///
/// Domain library shared by the terminal browser and the web frontend:
/// fixture records, filtered views, the photo viewer, map projection,
/// routing and view models.

#[cfg(feature = "native")]
pub mod config;
pub mod core;
#[cfg(feature = "native")]
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
