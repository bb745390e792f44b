//! Trip timeline with year, month and entry-kind facets.

use std::sync::Arc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::super::theme;
use super::super::widgets::facet_bar::{facet_line, tag_spans};
use super::{clamp_cursor, detail_line};
use crate::core::facets::{self, MONTHS};
use crate::core::filter::{derive, RecordFilter, TimelineFilter};
use crate::core::fixtures::FixtureStore;
use crate::core::media::MediaView;
use crate::core::models::{EntryKind, TimelineEntry};
use crate::core::present::TimelineCard;
use crate::tui::services::Services;

pub struct TimelineViewState {
    store: Arc<FixtureStore>,
    filter: TimelineFilter,
    years: Vec<String>,
    months: Vec<String>,
    kinds: Vec<EntryKind>,
    selected: usize,
}

impl TimelineViewState {
    pub fn new(services: &Services) -> Self {
        let store = services.store.clone();
        Self {
            years: facets::years(&store.timeline),
            months: facets::month_values(),
            kinds: facets::entry_kinds(&store.timeline),
            store,
            filter: TimelineFilter::default(),
            selected: 0,
        }
    }

    /// Entries passing the filter, in fixture order.
    fn visible(&self) -> Vec<&TimelineEntry> {
        derive(&self.store.timeline, &self.filter)
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

        match (*modifiers, *code) {
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
                if self.selected + 1 < self.visible().len() {
                    self.selected += 1;
                }
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
                self.selected = self.selected.saturating_sub(1);
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('y')) => {
                self.filter.year = self.filter.year.cycle(&self.years);
                self.on_filter_changed();
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('m')) => {
                self.filter.month = self.filter.month.cycle(&self.months);
                self.on_filter_changed();
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('c')) => {
                self.filter.kind = self.filter.kind.cycle(&self.kinds);
                self.on_filter_changed();
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('r')) => {
                self.filter = TimelineFilter::default();
                self.on_filter_changed();
                true
            }
            _ => false,
        }
    }

    fn on_filter_changed(&mut self) {
        let len = self.visible().len();
        self.selected = clamp_cursor(self.selected, len);
        tracing::debug!(
            year = ?self.filter.year.as_option(),
            month = ?self.filter.month.as_option(),
            kind = ?self.filter.kind.as_option(),
            visible = len,
            "Timeline filter changed"
        );
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let visible = self.visible();

        let rows = Layout::vertical([Constraint::Length(4), Constraint::Min(1)]).split(area);
        self.render_filters(frame, rows[0], visible.len());

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[1]);

        self.render_entries(frame, cols[0], &visible);
        self.render_entry(frame, cols[1], visible.get(self.selected).copied());
    }

    fn render_filters(&self, frame: &mut Frame, area: Rect, visible: usize) {
        let month_labels: Vec<String> = MONTHS.iter().map(|(_, l)| l[..3].to_string()).collect();
        let selected_month = self
            .filter
            .month
            .as_option()
            .and_then(|m| MONTHS.iter().position(|(v, _)| v == m))
            .map(|i| month_labels[i].as_str());
        let kind_labels: Vec<String> = self.kinds.iter().map(|k| k.label().to_string()).collect();

        let lines = vec![
            facet_line('y', "Year", &self.years, self.filter.year.as_option().map(String::as_str)),
            facet_line('m', "Month", &month_labels, selected_month),
            facet_line('c', "Kind", &kind_labels, self.filter.kind.as_option().map(|k| k.label())),
            Line::from(vec![
                Span::styled(format!(" {visible} entries"), theme::muted()),
                if self.filter.is_unconstrained() {
                    Span::raw("")
                } else {
                    Span::styled("  [r] reset", theme::key_hint())
                },
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_entries(&self, frame: &mut Frame, area: Rect, visible: &[&TimelineEntry]) {
        let block = theme::block_focused("Timeline");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if visible.is_empty() {
            frame.render_widget(
                Paragraph::new(vec![
                    Line::raw(""),
                    Line::from(Span::styled("  Nothing posted in this period", theme::muted())),
                ]),
                inner,
            );
            return;
        }

        let mut lines: Vec<Line<'static>> = Vec::new();
        for (i, entry) in visible.iter().enumerate() {
            let card = TimelineCard::new(entry);
            let is_selected = i == self.selected;
            let style = if is_selected {
                theme::highlight()
            } else {
                Style::default().fg(theme::TEXT)
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {:>2} ", card.day_badge),
                    Style::default()
                        .fg(theme::entry_color(entry.kind))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(if is_selected { "▸ " } else { "│ " }, theme::dim()),
                Span::styled(card.title, style),
            ]));
            lines.push(Line::from(vec![
                Span::styled("      ", theme::dim()),
                Span::styled(format!("{} · {}", card.date, card.location), theme::muted()),
            ]));
        }

        let height = inner.height as usize;
        let scroll = (self.selected * 2 + 1).saturating_sub(height.saturating_sub(1));
        frame.render_widget(Paragraph::new(lines).scroll((scroll as u16, 0)), inner);
    }

    fn render_entry(&self, frame: &mut Frame, area: Rect, entry: Option<&TimelineEntry>) {
        let block = theme::block_default("Entry");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(entry) = entry else {
            return;
        };
        let card = TimelineCard::new(entry);

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                format!("  {} {}", card.kind_icon, card.title),
                theme::title(),
            )),
            Line::raw(""),
            detail_line("Date", &card.date),
            detail_line("Location", &card.location),
        ];
        match &card.media {
            MediaView::Image { src, .. } => lines.push(detail_line("Image", src)),
            MediaView::Video { src, poster } => {
                lines.push(detail_line("Video", src));
                lines.push(detail_line("Poster", poster));
            }
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", card.description),
            Style::default().fg(theme::TEXT),
        )));
        lines.push(Line::raw(""));
        let mut tags = vec![Span::raw("  ")];
        tags.extend(tag_spans(&card.tags));
        lines.push(Line::from(tags));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  [y] year  [m] month  [c] kind  [r] reset  [j/k] select",
            theme::key_hint(),
        )));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
