//! Landing page: hero banner, featured routes and gallery totals.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::super::events::{Action, InputResult};
use super::super::theme;
use super::super::widgets::facet_bar::tag_spans;
use crate::core::present::{featured, GalleryStats, GuideCard, GuideOverview};
use crate::core::routes::Route;
use crate::tui::services::Services;

pub struct HomeViewState {
    featured: Vec<GuideCard>,
    stats: GalleryStats,
    overview: GuideOverview,
    timeline_entries: usize,
    selected: usize,
}

impl HomeViewState {
    pub fn new(services: &Services) -> Self {
        let store = &services.store;
        Self {
            featured: featured(&store.guides, services.featured_count),
            stats: GalleryStats::new(&store.photos),
            overview: GuideOverview::new(&store.guides),
            timeline_entries: store.timeline.len(),
            selected: 0,
        }
    }

    pub fn handle_input(&mut self, event: &Event) -> InputResult {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            modifiers,
            ..
        }) = event
        else {
            return InputResult::Ignored;
        };
        if *modifiers != KeyModifiers::NONE {
            return InputResult::Ignored;
        }

        match code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected + 1 < self.featured.len() {
                    self.selected += 1;
                }
                InputResult::Consumed
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                InputResult::Consumed
            }
            KeyCode::Enter => match self.featured.get(self.selected) {
                Some(card) => InputResult::Dispatch(Action::OpenGuide(card.id.clone())),
                None => InputResult::Consumed,
            },
            // "view all" link under the featured list
            KeyCode::Char('a') => InputResult::Dispatch(Action::Navigate(Route::Guides)),
            _ => InputResult::Ignored,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical([
            Constraint::Length(6),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(area);

        self.render_hero(frame, rows[0]);
        self.render_featured(frame, rows[1]);
        self.render_stats(frame, rows[2]);
    }

    fn render_hero(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                "Timeless Trips",
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Road journeys across the grasslands, forests and frozen north",
                Style::default().fg(theme::TEXT),
            )),
            Line::raw(""),
            Line::from(vec![
                Span::styled(" [2] ", theme::key_hint()),
                Span::styled("Explore the map   ", theme::muted()),
                Span::styled(" [5] ", theme::key_hint()),
                Span::styled("Browse guides", theme::muted()),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(Style::default().bg(theme::BG_SURFACE)),
            area,
        );
    }

    fn render_featured(&self, frame: &mut Frame, area: Rect) {
        let block = theme::block_focused("Featured Routes");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.featured.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled("  No guides yet", theme::muted()))),
                inner,
            );
            return;
        }

        let mut lines: Vec<Line<'static>> = Vec::new();
        for (i, card) in self.featured.iter().enumerate() {
            let is_selected = i == self.selected;
            let style = if is_selected {
                theme::highlight()
            } else {
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD)
            };
            lines.push(Line::from(vec![
                Span::styled(if is_selected { "▸ " } else { "  " }, theme::highlight()),
                Span::styled(card.title.clone(), style),
            ]));
            lines.push(Line::from(vec![
                Span::styled(format!("    {}  ", card.meta), theme::muted()),
                Span::styled(card.budget.clone(), Style::default().fg(theme::ACCENT)),
            ]));
            let mut tags = vec![Span::raw("    ")];
            tags.extend(tag_spans(&card.tags));
            lines.push(Line::from(tags));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  [Enter] open guide  [a] view all guides  [j/k] select",
            theme::key_hint(),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect) {
        let stat = |value: String, label: &str| {
            vec![
                Span::styled(
                    value,
                    Style::default()
                        .fg(theme::PRIMARY_LIGHT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {label}    "), theme::muted()),
            ]
        };

        let mut spans = vec![Span::raw(" ")];
        spans.extend(stat(self.overview.routes.to_string(), "routes"));
        spans.extend(stat(format!("{}km", self.overview.total_distance), "driven"));
        spans.extend(stat(self.stats.photos.to_string(), "photos"));
        spans.extend(stat(self.stats.locations.to_string(), "places"));
        spans.extend(stat(self.timeline_entries.to_string(), "journal entries"));

        frame.render_widget(
            Paragraph::new(Line::from(spans)).block(theme::block_default("Journey so far")),
            area,
        );
    }
}
