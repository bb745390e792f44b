//! Travel map: destination and guide markers over the trip polyline.

use std::sync::Arc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Paragraph, Wrap,
    },
    Frame,
};

use super::super::events::{Action, InputResult};
use super::super::theme;
use super::super::widgets::facet_bar::facet_line;
use super::{clamp_cursor, detail_line};
use crate::core::facets;
use crate::core::filter::MarkerFilter;
use crate::core::fixtures::FixtureStore;
use crate::core::markers::{self, Viewport};
use crate::core::models::{GeoPoint, MapMarker, MarkerKind, MarkerSource};
use crate::tui::services::Services;

pub struct MapViewState {
    store: Arc<FixtureStore>,
    filter: MarkerFilter,
    kinds: Vec<MarkerKind>,
    markers: Vec<MapMarker>,
    route: Vec<GeoPoint>,
    selected: usize,
}

impl MapViewState {
    pub fn new(services: &Services) -> Self {
        let store = services.store.clone();
        let filter = MarkerFilter::default();
        let markers = markers::project(&store, &filter);
        Self {
            kinds: facets::marker_kinds(&markers),
            route: markers::route_path(&store.timeline),
            markers,
            store,
            filter,
            selected: 0,
        }
    }

    /// Viewport fitted to every marker and the route, independent of the
    /// filter so toggling a layer does not move the map.
    fn viewport(&self) -> Viewport {
        let all = markers::project(&self.store, &MarkerFilter::default());
        let points: Vec<GeoPoint> = all
            .iter()
            .map(|m| m.coordinates)
            .chain(self.route.iter().copied())
            .collect();
        Viewport::fit(&points)
    }

    fn refresh(&mut self) {
        self.markers = markers::project(&self.store, &self.filter);
        self.selected = clamp_cursor(self.selected, self.markers.len());
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
                if self.selected + 1 < self.markers.len() {
                    self.selected += 1;
                }
                InputResult::Consumed
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                InputResult::Consumed
            }
            KeyCode::Char('f') => {
                self.filter.kind = self.filter.kind.cycle(&self.kinds);
                self.refresh();
                InputResult::Consumed
            }
            KeyCode::Enter => match self.markers.get(self.selected).map(|m| &m.source) {
                Some(MarkerSource::Guide(id)) => InputResult::Dispatch(Action::OpenGuide(id.clone())),
                _ => InputResult::Consumed,
            },
            _ => InputResult::Ignored,
        }
    }

    // ── Rendering ──────────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).split(area);

        let kind_labels: Vec<String> = self.kinds.iter().map(|k| k.label().to_string()).collect();
        let header = vec![
            facet_line('f', "Show", &kind_labels, self.filter.kind.as_option().map(|k| k.label())),
            Line::from(Span::styled(
                format!(" {} markers · {} route points", self.markers.len(), self.route.len()),
                theme::muted(),
            )),
        ];
        frame.render_widget(Paragraph::new(header), rows[0]);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(rows[1]);

        self.render_canvas(frame, cols[0]);
        self.render_markers(frame, cols[1]);
    }

    fn render_canvas(&self, frame: &mut Frame, area: Rect) {
        let viewport = self.viewport();
        // unit square is top-left based; the canvas y axis grows upwards
        let to_canvas = |p: GeoPoint| {
            let (x, y) = viewport.project(p);
            (x, 1.0 - y)
        };

        let route: Vec<(f64, f64)> = self.route.iter().map(|p| to_canvas(*p)).collect();
        let pins: Vec<(f64, f64, &'static str, Style)> = self
            .markers
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let (x, y) = to_canvas(m.coordinates);
                let glyph = match m.kind {
                    MarkerKind::Destination => "●",
                    MarkerKind::Guide => "◆",
                };
                let mut style = Style::default().fg(theme::marker_color(m.kind));
                if i == self.selected {
                    style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                }
                (x, y, glyph, style)
            })
            .collect();

        let canvas = Canvas::default()
            .block(theme::block_focused("Travel Map"))
            .marker(Marker::Braille)
            .x_bounds([0.0, 1.0])
            .y_bounds([0.0, 1.0])
            .paint(move |ctx| {
                for pair in route.windows(2) {
                    ctx.draw(&CanvasLine::new(
                        pair[0].0,
                        pair[0].1,
                        pair[1].0,
                        pair[1].1,
                        theme::ROUTE,
                    ));
                }
                ctx.layer();
                for (x, y, glyph, style) in &pins {
                    ctx.print(*x, *y, Span::styled(*glyph, *style));
                }
            });
        frame.render_widget(canvas, area);
    }

    fn render_markers(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical([Constraint::Min(3), Constraint::Length(7)]).split(area);

        let block = theme::block_default("Markers");
        let inner = block.inner(rows[0]);
        frame.render_widget(block, rows[0]);

        let lines: Vec<Line<'static>> = self
            .markers
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let is_selected = i == self.selected;
                let style = if is_selected {
                    theme::highlight()
                } else {
                    Style::default().fg(theme::TEXT)
                };
                Line::from(vec![
                    Span::styled(
                        if is_selected { "▸ " } else { "  " },
                        Style::default().fg(theme::marker_color(m.kind)),
                    ),
                    Span::styled(m.title.clone(), style),
                ])
            })
            .collect();
        let height = inner.height as usize;
        let scroll = self.selected.saturating_sub(height.saturating_sub(1));
        frame.render_widget(Paragraph::new(lines).scroll((scroll as u16, 0)), inner);

        let block = theme::block_default("Popup");
        let Some(marker) = self.markers.get(self.selected) else {
            frame.render_widget(block, rows[1]);
            return;
        };
        let mut popup = vec![
            Line::from(Span::styled(format!("  {}", marker.title), theme::heading())),
            detail_line(
                "Position",
                &format!("{:.2}, {:.2}", marker.coordinates.lat, marker.coordinates.lng),
            ),
        ];
        if !marker.description.is_empty() {
            popup.push(Line::from(Span::styled(
                format!("  {}", marker.description),
                theme::muted(),
            )));
        }
        let hint = match marker.kind {
            MarkerKind::Guide => "  [Enter] open guide  [f] layers",
            MarkerKind::Destination => "  [f] layers  [j/k] select",
        };
        popup.push(Line::from(Span::styled(hint, theme::key_hint())));
        frame.render_widget(
            Paragraph::new(popup).wrap(Wrap { trim: false }).block(block),
            rows[1],
        );
    }
}
