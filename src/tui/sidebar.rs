//! Page sidebar. Mirrors the header navigation and can be pinned to icons.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::events::{AreaFocus, Focus};
use super::layout::SidebarMode;
use super::theme;
use crate::core::routes::Route;

#[derive(Debug, Default)]
pub struct SidebarState {
    /// Ctrl+B: keep the sidebar at icon width even when there is room.
    pub pinned_icons: bool,
    /// Index into [`Focus::ALL`] under the sidebar cursor.
    cursor: usize,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_pinned(&mut self) {
        self.pinned_icons = !self.pinned_icons;
    }

    /// Move the cursor by `delta` items, wrapping at both ends.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = Focus::ALL.len() as isize;
        self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
    }

    pub fn focus_under_cursor(&self) -> Focus {
        Focus::ALL[self.cursor]
    }

    /// Put the cursor on `focus`.
    pub fn follow(&mut self, focus: Focus) {
        if let Some(idx) = Focus::ALL.iter().position(|&f| f == focus) {
            self.cursor = idx;
        }
    }

    fn item_line(
        focus: Focus,
        mode: SidebarMode,
        is_current: bool,
        show_cursor: bool,
        width: u16,
    ) -> Line<'static> {
        let style = if is_current {
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else if show_cursor {
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::TEXT_MUTED)
        };

        let text = match mode {
            SidebarMode::Full => {
                let marker = if show_cursor { "▸" } else { " " };
                format!(
                    "{marker} {} {:<pad$}",
                    focus.icon(),
                    focus.label(),
                    pad = usize::from(width).saturating_sub(4)
                )
            }
            _ => format!(" {}", focus.icon()),
        };
        Line::from(Span::styled(text, style))
    }

    /// Draw the page list. The page showing `current` is highlighted with
    /// the same rule as the web header.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        mode: SidebarMode,
        current: &Route,
        area_focus: AreaFocus,
    ) {
        if mode == SidebarMode::Off {
            return;
        }
        let current_path = current.path();
        let has_focus = area_focus == AreaFocus::Sidebar;

        let title = (mode == SidebarMode::Full)
            .then(|| Line::from(Span::styled(" Explore", theme::heading())));
        let items = Focus::ALL.iter().enumerate().map(|(idx, &focus)| {
            let is_current = Route::is_active(&focus.route().path(), &current_path);
            Self::item_line(focus, mode, is_current, has_focus && idx == self.cursor, area.width)
        });
        let lines: Vec<Line> = title.into_iter().chain(items).collect();

        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(theme::BG_SURFACE)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_starts_on_home() {
        let state = SidebarState::new();
        assert!(!state.pinned_icons);
        assert_eq!(state.focus_under_cursor(), Focus::Home);
    }

    #[test]
    fn test_cursor_wraps_both_ways() {
        let mut state = SidebarState::new();
        state.move_cursor(-1);
        assert_eq!(state.focus_under_cursor(), Focus::Destinations);
        state.move_cursor(1);
        assert_eq!(state.focus_under_cursor(), Focus::Home);
        state.move_cursor(Focus::ALL.len() as isize);
        assert_eq!(state.focus_under_cursor(), Focus::Home);
    }

    #[test]
    fn test_follow_moves_cursor() {
        let mut state = SidebarState::new();
        state.follow(Focus::Photos);
        assert_eq!(state.focus_under_cursor(), Focus::Photos);
    }
}
