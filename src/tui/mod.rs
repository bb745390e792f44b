//! Terminal browser over the bundled fixtures.

pub mod app;
pub mod events;
pub mod layout;
pub mod services;
pub mod sidebar;
pub mod theme;
pub mod views;
pub mod widgets;
