//! Guides list with tag filter, and the sectioned guide page.
//!
//! The guide page is one parameterised view over `GuideDetailView`; guides
//! without long-form content render the sections they have.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::super::theme;
use super::super::widgets::facet_bar::{facet_line, tag_spans};
use super::{clamp_cursor, detail_line, section_header};
use crate::core::facets;
use crate::core::filter::{derive, GuideFilter, RecordFilter};
use crate::core::fixtures::FixtureStore;
use crate::core::models::Guide;
use crate::core::present::{GuideCard, GuideDetailView, GuideOverview};
use crate::core::routes::{resolve_guide, GuidePage, Route};
use crate::core::scroll::{active_section, ScrollWatch, SectionBounds, SubscriptionId};
use crate::tui::events::NotificationLevel;
use crate::tui::services::Services;

/// Lines scrolled before the back-to-top hint appears.
const BACK_TO_TOP_LINES: f64 = 10.0;
/// Row under the section bar used to decide the active section.
const SECTION_PROBE_LINE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
enum Mode {
    List,
    Detail { id: String, scroll: usize },
}

pub struct GuidesViewState {
    store: Arc<FixtureStore>,
    filter: GuideFilter,
    tags: Vec<String>,
    selected: usize,
    mode: Mode,
    scroll_watch: ScrollWatch,
    back_to_top: Rc<Cell<bool>>,
    subscription: Option<SubscriptionId>,
}

impl GuidesViewState {
    pub fn new(services: &Services) -> Self {
        let store = services.store.clone();
        Self {
            tags: facets::tags(&store.guides),
            store,
            filter: GuideFilter::default(),
            selected: 0,
            mode: Mode::List,
            scroll_watch: ScrollWatch::new(BACK_TO_TOP_LINES),
            back_to_top: Rc::new(Cell::new(false)),
            subscription: None,
        }
    }

    fn visible(&self) -> Vec<&Guide> {
        derive(&self.store.guides, &self.filter)
    }

    /// Route of what is on screen.
    pub fn route(&self) -> Route {
        match &self.mode {
            Mode::List => Route::Guides,
            Mode::Detail { id, .. } => Route::GuideDetail { id: id.clone() },
        }
    }

    /// Show the guide page for `id`. Unknown ids show the not-found page.
    pub fn open_guide(&mut self, id: &str, services: &Services) {
        if let GuidePage::NotFound { id } = resolve_guide(&self.store, id) {
            services.notify(format!("Guide '{id}' not found"), NotificationLevel::Warning);
        }
        self.close_detail();

        let flag = self.back_to_top.clone();
        self.subscription = Some(self.scroll_watch.subscribe(move |past| flag.set(past)));
        self.scroll_watch.update(0.0);
        self.mode = Mode::Detail {
            id: id.to_string(),
            scroll: 0,
        };
    }

    pub fn show_list(&mut self) {
        self.close_detail();
        self.mode = Mode::List;
    }

    fn close_detail(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.scroll_watch.unsubscribe(id);
        }
        self.scroll_watch.update(0.0);
        self.back_to_top.set(false);
    }

    pub fn handle_input(&mut self, event: &Event, services: &Services) -> bool {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            modifiers,
            ..
        }) = event
        else {
            return false;
        };

        match self.mode.clone() {
            Mode::List => self.handle_list(*modifiers, *code, services),
            Mode::Detail { id, scroll } => self.handle_detail(*modifiers, *code, &id, scroll),
        }
    }

    fn handle_list(&mut self, mods: KeyModifiers, code: KeyCode, services: &Services) -> bool {
        let len = self.visible().len();
        match (mods, code) {
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
                let id = self.visible().get(self.selected).map(|g| g.id.clone());
                if let Some(id) = id {
                    self.open_guide(&id, services);
                }
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('t')) => {
                self.filter.tag = self.filter.tag.cycle(&self.tags);
                self.selected = clamp_cursor(self.selected, self.visible().len());
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('r')) => {
                self.filter = GuideFilter::default();
                true
            }
            _ => false,
        }
    }

    fn handle_detail(&mut self, mods: KeyModifiers, code: KeyCode, id: &str, scroll: usize) -> bool {
        let sections = match self.store.guide(id) {
            Some(guide) => guide_document(&GuideDetailView::new(guide)).1,
            None => Vec::new(),
        };

        let new_scroll = match (mods, code) {
            (KeyModifiers::NONE, KeyCode::Esc | KeyCode::Backspace) => {
                self.show_list();
                return true;
            }
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => scroll + 1,
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => scroll.saturating_sub(1),
            (KeyModifiers::NONE, KeyCode::PageDown) => scroll + 10,
            (KeyModifiers::NONE, KeyCode::PageUp) => scroll.saturating_sub(10),
            (KeyModifiers::NONE, KeyCode::Char('g') | KeyCode::Home) => 0,
            (KeyModifiers::NONE, KeyCode::Char('n')) => sections
                .iter()
                .map(|s| s.start)
                .find(|start| *start > scroll)
                .unwrap_or(scroll),
            (KeyModifiers::NONE, KeyCode::Char('p')) => sections
                .iter()
                .rev()
                .map(|s| s.start)
                .find(|start| *start < scroll)
                .unwrap_or(0),
            _ => return false,
        };

        self.scroll_watch.update(new_scroll as f64);
        self.mode = Mode::Detail {
            id: id.to_string(),
            scroll: new_scroll,
        };
        true
    }

    // ── Rendering ──────────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match &self.mode {
            Mode::List => self.render_list(frame, area),
            Mode::Detail { id, scroll } => match resolve_guide(&self.store, id) {
                GuidePage::Found(guide) => self.render_detail(frame, area, guide, *scroll),
                GuidePage::NotFound { id } => render_not_found(frame, area, id),
            },
        }
    }

    fn render_list(&self, frame: &mut Frame, area: Rect) {
        let visible = self.visible();
        let overview = GuideOverview::new(&self.store.guides);

        let rows = Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).split(area);
        let header = vec![
            Line::from(vec![
                Span::styled(" Travel Guides", theme::title()),
                Span::styled(
                    format!(
                        "  {} routes · {} days · {}km",
                        overview.routes, overview.total_days, overview.total_distance
                    ),
                    theme::muted(),
                ),
            ]),
            facet_line('t', "Tag", &self.tags, self.filter.tag.as_option().map(String::as_str)),
            Line::from(Span::styled(
                format!(" {} of {} guides", visible.len(), overview.routes),
                theme::dim(),
            )),
        ];
        frame.render_widget(Paragraph::new(header), rows[0]);

        let block = theme::block_focused("Guides");
        let inner = block.inner(rows[1]);
        frame.render_widget(block, rows[1]);

        let mut lines: Vec<Line<'static>> = Vec::new();
        for (i, guide) in visible.iter().enumerate() {
            let card = GuideCard::new(guide);
            let is_selected = i == self.selected;
            let style = if is_selected {
                theme::highlight()
            } else {
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD)
            };
            lines.push(Line::from(vec![
                Span::styled(if is_selected { "▸ " } else { "  " }, theme::highlight()),
                Span::styled(card.title, style),
                Span::styled(format!("  {}", card.budget), Style::default().fg(theme::ACCENT)),
            ]));
            lines.push(Line::from(Span::styled(format!("    {}", card.meta), theme::muted())));
            lines.push(Line::from(Span::styled(
                format!("    {}", card.excerpt),
                Style::default().fg(theme::TEXT),
            )));
            let mut tags = vec![Span::raw("    ")];
            tags.extend(tag_spans(&card.tags));
            lines.push(Line::from(tags));
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(Span::styled(
            "  [Enter] open  [t] tag  [r] reset  [j/k] select",
            theme::key_hint(),
        )));

        let height = inner.height as usize;
        let scroll = (self.selected * 5 + 4).saturating_sub(height.saturating_sub(1));
        frame.render_widget(Paragraph::new(lines).scroll((scroll as u16, 0)), inner);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, guide: &Guide, scroll: usize) {
        let view = GuideDetailView::new(guide);
        let (lines, sections) = guide_document(&view);

        let bounds: Vec<SectionBounds> = sections
            .iter()
            .map(|s| SectionBounds {
                id: s.id,
                top: s.start as f64 - scroll as f64,
                bottom: s.end as f64 - scroll as f64,
            })
            .collect();
        let active = active_section(&bounds, SECTION_PROBE_LINE);

        let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(area);

        let mut nav = vec![Span::raw(" ")];
        for (id, label) in view.sections() {
            let style = if active == Some(id) {
                theme::chip_active()
            } else {
                theme::dim()
            };
            nav.push(Span::styled(format!(" {label} "), style));
            nav.push(Span::raw(" "));
        }
        if self.back_to_top.get() {
            nav.push(Span::styled(" [g] top ", theme::key_hint()));
        }
        frame.render_widget(Paragraph::new(Line::from(nav)), rows[0]);

        let block = theme::block_focused(&view.card.title);
        let inner = block.inner(rows[1]);
        frame.render_widget(block, rows[1]);
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((scroll as u16, 0)),
            inner,
        );
    }
}

/// Line span of one page section.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SectionSpan {
    id: &'static str,
    start: usize,
    end: usize,
}

/// Lay the guide page out as lines, recording where each section starts.
fn guide_document(view: &GuideDetailView) -> (Vec<Line<'static>>, Vec<SectionSpan>) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut sections = Vec::new();

    for (id, label) in view.sections() {
        let start = lines.len();
        section_header(&mut lines, &label.to_uppercase());

        match id {
            "stats" => {
                for (label, value) in &view.stats {
                    lines.push(detail_line(label, value));
                }
                lines.push(detail_line("Author", &view.author));
                lines.push(detail_line("Published", &view.published));
                let mut tags = vec![Span::raw("  ")];
                tags.extend(tag_spans(&view.card.tags));
                lines.push(Line::from(tags));
            }
            "overview" => {
                push_paragraph(&mut lines, &view.overview);
                if !view.route_description.is_empty() {
                    lines.push(Line::raw(""));
                    push_paragraph(&mut lines, &view.route_description);
                }
            }
            "timeline" => {
                for day in &view.days {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("  Day {} ", day.day),
                            Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(day.title.clone(), Style::default().fg(theme::TEXT)),
                    ]));
                    lines.push(detail_line("Route", &day.route));
                    if let Some(distance) = &day.distance {
                        lines.push(detail_line("Drive", distance));
                    }
                    for item in &day.plan {
                        lines.push(Line::from(Span::styled(format!("    • {item}"), theme::muted())));
                    }
                    lines.push(detail_line("Stay", &day.stay));
                    lines.push(detail_line("Food", &day.food));
                    lines.push(detail_line("Tickets", &day.ticket));
                    lines.push(detail_line("Best time", &day.best_time));
                    lines.push(detail_line("Photo tip", &day.photo_tip));
                    lines.push(detail_line("Notice", &day.notice));
                    lines.push(Line::raw(""));
                }
            }
            "highlights" => {
                for highlight in &view.highlights {
                    lines.push(Line::from(Span::styled(
                        format!("  {} {}", highlight.icon, highlight.title),
                        theme::heading(),
                    )));
                    push_paragraph(&mut lines, &highlight.description);
                    lines.push(Line::from(Span::styled(
                        format!("    {}", highlight.image.current()),
                        theme::dim(),
                    )));
                }
            }
            "budget" => {
                for tier in &view.budget {
                    lines.push(Line::from(vec![
                        Span::styled(format!("  {:<10}", tier.label), theme::heading()),
                        Span::styled(tier.amount.clone(), Style::default().fg(theme::ACCENT)),
                        Span::styled(format!("  {}", tier.suitable_for), theme::muted()),
                    ]));
                    push_paragraph(&mut lines, &tier.description);
                    for item in &tier.items {
                        lines.push(Line::from(Span::styled(format!("    • {item}"), theme::muted())));
                    }
                }
                if !view.money_saving_tips.is_empty() {
                    lines.push(Line::from(Span::styled("  Money-saving tips", theme::heading())));
                    for tip in &view.money_saving_tips {
                        lines.push(Line::from(Span::styled(format!("    ✓ {tip}"), theme::muted())));
                    }
                }
            }
            "tips" => {
                for group in &view.tips {
                    lines.push(Line::from(Span::styled(format!("  {}", group.title), theme::heading())));
                    for item in &group.items {
                        lines.push(Line::from(Span::styled(format!("    • {item}"), theme::muted())));
                    }
                }
            }
            _ => {}
        }

        lines.push(Line::raw(""));
        sections.push(SectionSpan {
            id,
            start,
            end: lines.len(),
        });
    }

    lines.push(Line::from(Span::styled(
        "  [Esc] back  [n/p] next/prev section  [g] top  [j/k] scroll",
        theme::key_hint(),
    )));

    (lines, sections)
}

fn push_paragraph(lines: &mut Vec<Line<'static>>, text: &str) {
    for part in text.lines() {
        lines.push(Line::from(Span::styled(
            format!("  {part}"),
            Style::default().fg(theme::TEXT),
        )));
    }
}

fn render_not_found(frame: &mut Frame, area: Rect, id: &str) {
    let block = theme::block_default("Guide not found");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled("  Guide not found", theme::title())),
        Line::raw(""),
        Line::from(Span::styled(
            format!("  There is no guide with id '{id}'."),
            Style::default().fg(theme::TEXT),
        )),
        Line::raw(""),
        Line::from(Span::styled("  [Esc] back to guides", theme::key_hint())),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn setup() -> (GuidesViewState, Services, mpsc::UnboundedReceiver<crate::tui::events::AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let services = Services::with_store(FixtureStore::bundled().clone(), 3, tx);
        (GuidesViewState::new(&services), services, rx)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_enter_opens_selected_guide() {
        let (mut state, services, _rx) = setup();
        state.handle_input(&key(KeyCode::Enter), &services);
        let first = &FixtureStore::bundled().guides[0].id;
        assert_eq!(state.route(), Route::GuideDetail { id: first.clone() });
        state.handle_input(&key(KeyCode::Esc), &services);
        assert_eq!(state.route(), Route::Guides);
    }

    #[test]
    fn test_unknown_guide_notifies() {
        let (mut state, services, mut rx) = setup();
        state.open_guide("missing", &services);
        assert!(rx.try_recv().is_ok());
        assert_eq!(state.route(), Route::GuideDetail { id: "missing".into() });
    }

    #[test]
    fn test_scroll_subscription_lifecycle() {
        let (mut state, services, _rx) = setup();
        state.open_guide("hulunbuir-loop", &services);
        assert_eq!(state.scroll_watch.subscriber_count(), 1);

        for _ in 0..12 {
            state.handle_input(&key(KeyCode::Char('j')), &services);
        }
        assert!(state.back_to_top.get());

        state.handle_input(&key(KeyCode::Char('g')), &services);
        assert!(!state.back_to_top.get());

        state.open_guide("northeast-loop", &services);
        assert_eq!(state.scroll_watch.subscriber_count(), 1);
        state.show_list();
        assert_eq!(state.scroll_watch.subscriber_count(), 0);
    }

    #[test]
    fn test_next_section_jumps() {
        let (mut state, services, _rx) = setup();
        state.open_guide("hulunbuir-loop", &services);
        state.handle_input(&key(KeyCode::Char('n')), &services);
        let Mode::Detail { scroll, .. } = &state.mode else {
            panic!("expected detail mode");
        };
        assert!(*scroll > 0);
    }

    #[test]
    fn test_document_sections_in_page_order() {
        let guide = FixtureStore::bundled().guide("hulunbuir-loop").unwrap();
        let (_, sections) = guide_document(&GuideDetailView::new(guide));
        let ids: Vec<_> = sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["stats", "overview", "timeline", "highlights", "budget", "tips"]);
        assert!(sections.windows(2).all(|w| w[0].end == w[1].start));
    }
}
