//! Terminal palette: pine greens with an amber accent on a night-sky base.
//!
//! Views take colors and styles from here rather than naming `Color`s
//! inline, so the browser can be recolored in one place.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

use crate::core::models::{EntryKind, MarkerKind};

/// Pine, used for focused frames.
pub const PRIMARY: Color = Color::Rgb(0x2E, 0x7D, 0x32);
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x66, 0xBB, 0x6A);
/// Amber. Titles and whatever is selected.
pub const ACCENT: Color = Color::Rgb(0xFF, 0xB3, 0x00);

pub const BG_BASE: Color = Color::Rgb(0x0D, 0x14, 0x1A);
pub const BG_SURFACE: Color = Color::Rgb(0x16, 0x21, 0x2B);

pub const TEXT: Color = Color::Rgb(0xE8, 0xE6, 0xE3);
pub const TEXT_MUTED: Color = Color::Rgb(0x8A, 0x8F, 0x94);
pub const TEXT_DIM: Color = Color::Rgb(0x55, 0x5B, 0x61);

pub const ERROR: Color = Color::Rgb(0xEF, 0x53, 0x50);
pub const SUCCESS: Color = PRIMARY_LIGHT;
pub const WARNING: Color = Color::Rgb(0xFF, 0xA7, 0x26);
pub const INFO: Color = Color::Rgb(0x42, 0xA5, 0xF5);

/// Teal for tag chips, kept apart from the facet chip green.
const TAG: Color = Color::Rgb(0x4D, 0xB6, 0xAC);
/// Trip route on the map canvas.
pub const ROUTE: Color = Color::Rgb(0xFF, 0x70, 0x43);

/// Map marker fill per layer.
pub fn marker_color(kind: MarkerKind) -> Color {
    match kind {
        MarkerKind::Destination => INFO,
        MarkerKind::Guide => ACCENT,
    }
}

/// Timeline rail dot per post type.
pub fn entry_color(kind: EntryKind) -> Color {
    match kind {
        EntryKind::Photo => INFO,
        EntryKind::Video => ROUTE,
        EntryKind::Guide => SUCCESS,
    }
}

fn fg(color: Color) -> Style {
    Style::default().fg(color)
}

fn bold(color: Color) -> Style {
    fg(color).add_modifier(Modifier::BOLD)
}

/// Inverted bold text on `bg`.
fn badge(bg: Color) -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

pub fn title() -> Style {
    bold(ACCENT)
}

pub fn heading() -> Style {
    bold(PRIMARY_LIGHT)
}

/// The row under the cursor.
pub fn highlight() -> Style {
    bold(ACCENT).add_modifier(Modifier::REVERSED)
}

pub fn muted() -> Style {
    fg(TEXT_MUTED)
}

pub fn dim() -> Style {
    fg(TEXT_DIM)
}

/// `[key]` hints in footers and the help modal.
pub fn key_hint() -> Style {
    fg(PRIMARY_LIGHT).add_modifier(Modifier::DIM)
}

pub fn tag() -> Style {
    fg(TAG)
}

pub fn brand_badge() -> Style {
    badge(ACCENT)
}

/// The selected value of a facet bar.
pub fn chip_active() -> Style {
    badge(PRIMARY_LIGHT)
}

fn framed(title: &str, border: Color) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(fg(border))
}

/// Bordered panel that currently owns the keyboard.
pub fn block_focused(title: &str) -> Block<'static> {
    framed(title, PRIMARY)
}

pub fn block_default(title: &str) -> Block<'static> {
    framed(title, TEXT_DIM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_layers_use_different_colors() {
        assert_ne!(
            marker_color(MarkerKind::Destination),
            marker_color(MarkerKind::Guide)
        );
    }

    #[test]
    fn test_entry_kinds_use_different_colors() {
        let colors: Vec<Color> = EntryKind::ALL.into_iter().map(entry_color).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_highlight_differs_from_title() {
        assert_ne!(highlight(), title());
        assert_ne!(chip_active(), brand_badge());
    }
}
