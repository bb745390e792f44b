//! Design System Components
//!
//! Small, reusable building blocks shared by the pages.

mod badge;
mod card;
mod fallback_image;
mod filter_chips;
mod markdown;

pub use badge::{Badge, BadgeVariant, TagList};
pub use card::{Card, CardBody};
pub use fallback_image::FallbackImage;
pub use filter_chips::{FilterChips, FilterOption};
pub use markdown::{render_markdown, Markdown};
