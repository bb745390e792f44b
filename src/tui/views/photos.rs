//! Photo gallery with tag/location facets and the fullscreen viewer overlay.

use std::sync::Arc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::super::app::centered_rect;
use super::super::theme;
use super::super::widgets::facet_bar::{facet_line, tag_spans};
use super::{clamp_cursor, detail_line, dom_key};
use crate::core::facets;
use crate::core::filter::{derive, GalleryFilter, RecordFilter, Selection};
use crate::core::fixtures::FixtureStore;
use crate::core::models::GalleryItem;
use crate::core::present::{GalleryStats, PhotoCard};
use crate::core::viewer::{Viewer, ViewerCommand};
use crate::tui::services::Services;

// ── State ──────────────────────────────────────────────────────────────────

pub struct PhotosViewState {
    store: Arc<FixtureStore>,
    filter: GalleryFilter,
    tags: Vec<String>,
    locations: Vec<String>,
    /// Cursor into the filtered subset.
    selected: usize,
    viewer: Viewer,
}

impl PhotosViewState {
    pub fn new(services: &Services) -> Self {
        let store = services.store.clone();
        Self {
            tags: facets::tags(&store.photos),
            locations: facets::locations(&store.photos),
            store,
            filter: GalleryFilter::default(),
            selected: 0,
            viewer: Viewer::new(),
        }
    }

    fn visible(&self) -> Vec<&GalleryItem> {
        derive(&self.store.photos, &self.filter)
    }

    pub fn is_viewer_open(&self) -> bool {
        self.viewer.is_open()
    }

    pub fn handle_input(&mut self, event: &Event) -> bool {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            modifiers,
            ..
        }) = event
        else {
            return false;
        };

        if self.viewer.is_open() {
            return self.handle_viewer_key(*modifiers, *code);
        }

        let len = self.visible().len();
        match (*modifiers, *code) {
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
                if self.selected + 1 < len {
                    self.selected += 1;
                }
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
                self.selected = self.selected.saturating_sub(1);
                true
            }
            (KeyModifiers::NONE, KeyCode::Enter) => {
                self.viewer.apply(ViewerCommand::Open(self.selected), len);
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('t')) => {
                self.filter.tag = self.filter.tag.cycle(&self.tags);
                self.on_filter_changed();
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('l')) => {
                self.filter.location = self.filter.location.cycle(&self.locations);
                self.on_filter_changed();
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('r')) => {
                self.filter = GalleryFilter::default();
                self.on_filter_changed();
                true
            }
            _ => false,
        }
    }

    /// The viewer is modal: every plain key is consumed while it is open.
    fn handle_viewer_key(&mut self, modifiers: KeyModifiers, code: KeyCode) -> bool {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        let len = self.visible().len();
        if let Some(key) = dom_key(code) {
            self.viewer.handle_key(key, len);
        }
        if let Some(index) = self.viewer.index() {
            self.selected = index;
        }
        true
    }

    fn on_filter_changed(&mut self) {
        let len = self.visible().len();
        self.viewer.reconcile(len);
        self.selected = clamp_cursor(self.selected, len);
        tracing::debug!(
            tag = ?self.filter.tag.as_option(),
            location = ?self.filter.location.as_option(),
            visible = len,
            "Gallery filter changed"
        );
    }

    // ── Rendering ──────────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let visible = self.visible();

        let rows = Layout::vertical([Constraint::Length(4), Constraint::Min(1)]).split(area);
        self.render_filters(frame, rows[0], visible.len());

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        self.render_list(frame, cols[0], &visible);
        self.render_preview(frame, cols[1], &visible);

        if let Some(photo) = self.viewer.current(&visible) {
            self.render_viewer(frame, area, photo, visible.len());
        }
    }

    fn render_filters(&self, frame: &mut Frame, area: Rect, visible: usize) {
        let stats = GalleryStats::new(&self.store.photos);
        let lines = vec![
            facet_line('t', "Tag", &self.tags, self.filter.tag.as_option().map(String::as_str)),
            facet_line(
                'l',
                "Location",
                &self.locations,
                self.filter.location.as_option().map(String::as_str),
            ),
            Line::from(vec![
                Span::styled(
                    format!(" Showing {visible} of {} photos", stats.photos),
                    theme::muted(),
                ),
                Span::styled(
                    format!(" · {} tags · {} places", stats.tags, stats.locations),
                    theme::dim(),
                ),
                if self.filter.is_unconstrained() {
                    Span::raw("")
                } else {
                    Span::styled("  [r] reset", theme::key_hint())
                },
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, visible: &[&GalleryItem]) {
        let block = theme::block_focused("Photos");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if visible.is_empty() {
            let lines = vec![
                Line::raw(""),
                Line::from(Span::styled("  No photos match these filters", theme::muted())),
                Line::from(Span::styled("  [r] reset filters", theme::key_hint())),
            ];
            frame.render_widget(Paragraph::new(lines), inner);
            return;
        }

        let mut lines: Vec<Line<'static>> = Vec::new();
        for (i, photo) in visible.iter().enumerate() {
            let card = PhotoCard::new(photo);
            let is_selected = i == self.selected;
            let marker = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                theme::highlight()
            } else {
                Style::default().fg(theme::TEXT)
            };
            lines.push(Line::from(Span::styled(format!("{marker}{}", card.caption), style)));
            let mut meta = vec![Span::styled(
                format!("    📍 {} · {}  ", card.location, card.date),
                theme::muted(),
            )];
            meta.extend(tag_spans(&card.tags));
            lines.push(Line::from(meta));
        }

        // keep the cursor in view; two lines per photo
        let height = inner.height as usize;
        let cursor_line = self.selected * 2 + 1;
        let scroll = cursor_line.saturating_sub(height.saturating_sub(1));
        frame.render_widget(Paragraph::new(lines).scroll((scroll as u16, 0)), inner);
    }

    fn render_preview(&self, frame: &mut Frame, area: Rect, visible: &[&GalleryItem]) {
        let block = theme::block_default("Details");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(photo) = visible.get(self.selected) else {
            return;
        };
        let card = PhotoCard::new(photo);

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(format!("  {}", card.caption), theme::title())),
            Line::raw(""),
            detail_line("Location", &card.location),
            detail_line("Date", &card.date),
            detail_line("Tags", &photo.tags.join(", ")),
        ];
        if let Some(author) = &card.author {
            lines.push(detail_line("Author", author));
        }
        if let Some(description) = &card.description {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                format!("  {description}"),
                Style::default().fg(theme::TEXT),
            )));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  [Enter] view  [t] tag  [l] location  [j/k] select",
            theme::key_hint(),
        )));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }

    fn render_viewer(&self, frame: &mut Frame, area: Rect, photo: &GalleryItem, len: usize) {
        let modal = centered_rect(80, 70, area);
        let card = PhotoCard::new(photo);
        let position = self.viewer.index().map_or(0, |i| i + 1);

        let prev = if self.viewer.has_previous() { "◀ ←" } else { "   " };
        let next = if self.viewer.has_next(len) { "→ ▶" } else { "   " };

        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled(card.caption.clone(), theme::title())),
            Line::from(Span::styled(
                format!("📍 {} · {}", card.location, card.date),
                theme::muted(),
            )),
            Line::raw(""),
            Line::from(Span::styled(card.src.clone(), theme::dim())),
            Line::raw(""),
            Line::from(vec![
                Span::styled(format!("{prev}   "), theme::highlight()),
                Span::styled(
                    format!("{position} / {len}   zoom {}%", self.viewer.zoom_percent()),
                    Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("   {next}"), theme::highlight()),
            ]),
            Line::raw(""),
            Line::from(Span::styled(
                "[←/→] navigate  [+/-] zoom  [Esc] close",
                theme::key_hint(),
            )),
        ];

        let block = theme::block_focused("Viewer").title_alignment(Alignment::Center);
        frame.render_widget(Clear, modal);
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block),
            modal,
        );
    }

    #[cfg(test)]
    fn set_tag(&mut self, tag: &str) {
        self.filter.tag = Selection::Only(tag.to_string());
        self.on_filter_changed();
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
