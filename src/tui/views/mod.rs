pub mod destinations;
pub mod guides;
pub mod home;
pub mod map;
pub mod photos;
pub mod timeline;

use crossterm::event::KeyCode;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::theme;

/// DOM key name for a terminal key, as understood by the photo viewer.
pub(crate) fn dom_key(code: KeyCode) -> Option<&'static str> {
    match code {
        KeyCode::Esc => Some("Escape"),
        KeyCode::Right => Some("ArrowRight"),
        KeyCode::Left => Some("ArrowLeft"),
        KeyCode::Char('+') => Some("+"),
        KeyCode::Char('=') => Some("="),
        KeyCode::Char('-') => Some("-"),
        _ => None,
    }
}

pub(crate) fn section_header(lines: &mut Vec<Line<'static>>, title: &str) {
    lines.push(Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(theme::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD),
    )));
}

pub(crate) fn detail_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<12}", label), theme::muted()),
        Span::styled(value.to_string(), Style::default().fg(theme::TEXT)),
    ])
}

/// Clamp a list cursor after the list changed to `len` items.
pub(crate) fn clamp_cursor(cursor: usize, len: usize) -> usize {
    cursor.min(len.saturating_sub(1))
}
