use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{Action, AppEvent, AreaFocus, Focus, InputResult, Notification};
use super::layout::AppLayout;
use super::services::Services;
use super::sidebar::SidebarState;
use super::theme;
use super::views::destinations::DestinationsViewState;
use super::views::guides::GuidesViewState;
use super::views::home::HomeViewState;
use super::views::map::MapViewState;
use super::views::photos::PhotosViewState;
use super::views::timeline::TimelineViewState;
use crate::core::routes::{Route, NAV_ITEMS};

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Page owning the content area.
    pub focus: Focus,
    /// Whether sidebar or main content has input focus.
    pub area_focus: AreaFocus,
    /// Sidebar navigation state.
    pub sidebar: SidebarState,
    /// Set when navigation targeted a path with no page.
    lost: bool,
    pub home: HomeViewState,
    pub map: MapViewState,
    pub timeline: TimelineViewState,
    pub photos: PhotosViewState,
    pub guides: GuidesViewState,
    pub destinations: DestinationsViewState,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Monotonic counter for notification IDs.
    notification_counter: u64,
    /// Whether the help modal is open.
    pub show_help: bool,
    /// Receiver for events pushed by views and services.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Shared fixture handle.
    services: Services,
}

impl AppState {
    pub fn new(
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
        services: Services,
        start: Route,
    ) -> Self {
        let mut state = Self {
            running: true,
            focus: Focus::Home,
            area_focus: AreaFocus::Main,
            sidebar: SidebarState::new(),
            lost: false,
            home: HomeViewState::new(&services),
            map: MapViewState::new(&services),
            timeline: TimelineViewState::new(&services),
            photos: PhotosViewState::new(&services),
            guides: GuidesViewState::new(&services),
            destinations: DestinationsViewState::new(&services),
            notifications: Vec::new(),
            notification_counter: 0,
            show_help: false,
            event_rx,
            services,
        };
        state.navigate(start);
        state
    }

    /// Route of the page on screen.
    pub fn current_route(&self) -> Route {
        if self.lost {
            return Route::NotFound;
        }
        match self.focus {
            Focus::Guides => self.guides.route(),
            other => other.route(),
        }
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.on_tick();
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => {
                // Priority 1: Help modal
                if self.show_help {
                    if let Some(action) = self.map_help_input(&crossterm_event) {
                        self.handle_action(action);
                    }
                    return;
                }

                // Priority 2: Photo viewer overlay
                if self.focus == Focus::Photos
                    && self.photos.is_viewer_open()
                    && self.photos.handle_input(&crossterm_event)
                {
                    return;
                }

                // Priority 3: Sidebar input (when focused)
                if self.area_focus == AreaFocus::Sidebar
                    && self.handle_sidebar_input(&crossterm_event)
                {
                    return;
                }

                // Priority 4: Focused view
                match self.dispatch_view_input(&crossterm_event) {
                    InputResult::Consumed => return,
                    InputResult::Dispatch(action) => {
                        self.handle_action(action);
                        return;
                    }
                    InputResult::Ignored => {}
                }

                // Priority 5: Global keybindings
                if let Some(action) = self.map_input_to_action(crossterm_event) {
                    self.handle_action(action);
                }
            }
            AppEvent::Action(action) => self.handle_action(action),
            AppEvent::Tick => self.on_tick(),
            AppEvent::Notification(notification) => {
                self.push_notification(notification);
            }
            AppEvent::Quit => {
                self.running = false;
            }
        }
    }

    /// Offer input to the page on screen.
    fn dispatch_view_input(&mut self, event: &Event) -> InputResult {
        if self.lost {
            return self.handle_not_found_input(event);
        }
        match self.focus {
            Focus::Home => self.home.handle_input(event),
            Focus::Map => self.map.handle_input(event),
            Focus::Timeline => InputResult::from_consumed(self.timeline.handle_input(event)),
            Focus::Photos => InputResult::from_consumed(self.photos.handle_input(event)),
            Focus::Guides => {
                InputResult::from_consumed(self.guides.handle_input(event, &self.services))
            }
            Focus::Destinations => InputResult::Ignored,
        }
    }

    fn handle_not_found_input(&self, event: &Event) -> InputResult {
        match event {
            Event::Key(KeyEvent {
                code: KeyCode::Enter,
                kind: KeyEventKind::Press,
                ..
            }) => InputResult::Dispatch(Action::Navigate(Route::Home)),
            _ => InputResult::Ignored,
        }
    }

    /// Handle sidebar-specific input. Returns true if consumed.
    fn handle_sidebar_input(&mut self, event: &Event) -> bool {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return false;
        };

        match (*modifiers, *code) {
            (KeyModifiers::NONE, KeyCode::Char('j')) | (KeyModifiers::NONE, KeyCode::Down) => {
                self.sidebar.move_cursor(1);
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('k')) | (KeyModifiers::NONE, KeyCode::Up) => {
                self.sidebar.move_cursor(-1);
                true
            }
            (KeyModifiers::NONE, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                let focus = self.sidebar.focus_under_cursor();
                self.handle_action(focus.to_action());
                self.area_focus = AreaFocus::Main;
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('h')) => {
                self.sidebar.pinned_icons = true;
                self.area_focus = AreaFocus::Main;
                true
            }
            (KeyModifiers::NONE, KeyCode::Esc) => {
                self.area_focus = AreaFocus::Main;
                true
            }
            _ => false,
        }
    }

    // ── Input mapping ───────────────────────────────────────────────────

    fn map_help_input(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };
        match code {
            KeyCode::Esc | KeyCode::Char('?') => Some(Action::CloseHelp),
            _ => None,
        }
    }

    fn map_input_to_action(&self, event: Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match (modifiers, code) {
            (KeyModifiers::CONTROL, KeyCode::Char('b')) => Some(Action::ToggleSidebar),
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, _) => match code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('?') => Some(Action::ShowHelp),
                KeyCode::Tab => Some(Action::TabNext),
                KeyCode::BackTab => Some(Action::TabPrev),
                // Number keys follow header order
                KeyCode::Char(c @ '1'..='6') => {
                    let idx = c as usize - '1' as usize;
                    Focus::ALL.get(idx).map(|f| f.to_action())
                }
                _ => None,
            },
            _ => None,
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::Navigate(route) => self.navigate(route),
            Action::OpenGuide(id) => self.navigate(Route::GuideDetail { id }),
            Action::TabNext => self.navigate(self.focus.next().route()),
            Action::TabPrev => self.navigate(self.focus.prev().route()),
            Action::ToggleSidebar => {
                self.sidebar.toggle_pinned();
                if !self.sidebar.pinned_icons {
                    self.area_focus = AreaFocus::Sidebar;
                    self.sidebar.follow(self.focus);
                }
            }
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
        }
    }

    /// Show the page for `route`. Paths without a page show the not-found
    /// page and keep the previous focus for Tab navigation.
    fn navigate(&mut self, route: Route) {
        tracing::debug!(route = %route, "Navigate");
        let Some(focus) = Focus::for_route(&route) else {
            self.lost = true;
            return;
        };
        self.lost = false;
        self.set_focus(focus);

        match route {
            Route::GuideDetail { id } => self.guides.open_guide(&id, &self.services),
            Route::Guides => self.guides.show_list(),
            _ => {}
        }
    }

    /// Set focus and sync sidebar selection.
    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.sidebar.follow(focus);
        self.area_focus = AreaFocus::Main;
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, notification: Notification) {
        if self
            .notifications
            .iter()
            .any(|n| n.message == notification.message)
        {
            return;
        }

        self.notification_counter += 1;
        self.notifications.push(Notification {
            id: self.notification_counter,
            ..notification
        });

        while self.notifications.len() > 3 {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs, dismiss expired.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let route = self.current_route();

        let layout = AppLayout::split(area, self.sidebar.pinned_icons);

        if let Some(nav_area) = layout.nav {
            self.render_header(frame, nav_area, &route);
        }

        if let Some(sidebar_area) = layout.sidebar {
            self.sidebar
                .render(frame, sidebar_area, layout.sidebar_mode, &route, self.area_focus);
        }

        self.render_content(frame, layout.page);
        self.render_status_bar(frame, layout.status, &route);

        // Overlays
        self.render_notifications(frame, area);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    /// Brand and navigation row, highlighted like the web header.
    fn render_header(&self, frame: &mut Frame, area: Rect, route: &Route) {
        let current = route.path();
        let mut spans = vec![
            Span::styled(" Timeless Trips ", theme::brand_badge()),
            Span::raw("  "),
        ];
        for (i, item) in NAV_ITEMS.iter().enumerate() {
            let style = if Route::is_active(item.path, &current) {
                theme::chip_active()
            } else {
                theme::muted()
            };
            spans.push(Span::styled(format!("{}", i + 1), theme::dim()));
            spans.push(Span::styled(format!(" {} ", item.label), style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::BG_SURFACE)),
            area,
        );
    }

    fn render_content(&self, frame: &mut Frame, area: Rect) {
        if self.lost {
            self.render_not_found(frame, area);
            return;
        }
        match self.focus {
            Focus::Home => self.home.render(frame, area),
            Focus::Map => self.map.render(frame, area),
            Focus::Timeline => self.timeline.render(frame, area),
            Focus::Photos => self.photos.render(frame, area),
            Focus::Guides => self.guides.render(frame, area),
            Focus::Destinations => self.destinations.render(frame, area),
        }
    }

    fn render_not_found(&self, frame: &mut Frame, area: Rect) {
        let block = theme::block_focused("404").title_alignment(Alignment::Center);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::raw(""),
            Line::styled("Page not found", theme::title()),
            Line::raw(""),
            Line::styled("This road does not lead anywhere.", theme::muted()),
            Line::raw(""),
            Line::styled("[Enter] back home", theme::key_hint()),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, route: &Route) {
        let mut spans = vec![
            Span::styled(" TRIPS ", theme::brand_badge()),
            Span::raw(" "),
            Span::styled(route.title(), theme::heading()),
            Span::styled(format!(" {route}"), theme::dim()),
            Span::raw(" │"),
        ];
        for (key, what) in STATUS_HINTS {
            spans.push(Span::styled(format!(" {key}"), theme::key_hint()));
            spans.push(Span::raw(format!(":{what}")));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Toasts stack under the header at the right edge, newest last.
    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }
        let width = area.width.saturating_sub(2).min(50);
        let toasts = Rect::new(
            area.width.saturating_sub(width + 1),
            1,
            width,
            self.notifications.len() as u16,
        )
        .intersection(area);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (glyph, color) = n.level.glyph();
                Line::from(vec![
                    Span::styled(format!(" {glyph} "), Style::default().fg(color).bold()),
                    Span::raw(&n.message),
                ])
            })
            .collect();

        frame.render_widget(Clear, toasts);
        frame.render_widget(Paragraph::new(lines), toasts);
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 80, area);
        let section_style = theme::title();
        let key_style = theme::heading();

        let mut lines = vec![Line::raw("")];
        for (section, bindings) in HELP_SECTIONS {
            lines.push(Line::from(Span::styled(format!("  {section}"), section_style)));
            lines.extend(bindings.iter().map(|(keys, what)| {
                Line::from(vec![
                    Span::styled(format!("    {keys:<20}"), key_style),
                    Span::raw(*what),
                ])
            }));
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("?", key_style),
            Span::raw(" / "),
            Span::styled("Esc", key_style),
            Span::raw(" close"),
        ]));

        let block = theme::block_focused("Keys");
        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

const STATUS_HINTS: [(&str, &str); 5] = [
    ("Tab", "nav"),
    ("1-6", "page"),
    ("Ctrl+B", "sidebar"),
    ("?", "help"),
    ("q", "quit"),
];

type KeyHelp = (&'static str, &'static [(&'static str, &'static str)]);

const HELP_SECTIONS: &[KeyHelp] = &[
    (
        "Anywhere",
        &[
            ("1-6", "Jump to page"),
            ("Tab / Shift+Tab", "Next / previous page"),
            ("Ctrl+B", "Pin sidebar to icons"),
            ("?", "This help"),
            ("q / Ctrl+C", "Quit"),
        ],
    ),
    (
        "Sidebar",
        &[
            ("j / k", "Move"),
            ("Enter / l", "Open page"),
            ("h", "Shrink to icons"),
            ("Esc", "Back to page"),
        ],
    ),
    ("Home", &[("Enter", "Open featured guide"), ("a", "All guides")]),
    ("Map", &[("f", "Cycle layers"), ("Enter", "Open guide at marker")]),
    (
        "Timeline",
        &[("y / m / c", "Cycle year / month / kind"), ("r", "Reset filters")],
    ),
    (
        "Photos",
        &[
            ("t / l", "Cycle tag / place"),
            ("Enter", "Open viewer"),
            ("← / →", "Previous / next photo"),
            ("+ / -", "Zoom"),
            ("Esc", "Close viewer"),
        ],
    ),
    (
        "Guides",
        &[
            ("t", "Cycle tag"),
            ("Enter", "Open guide"),
            ("n / p", "Next / previous section"),
            ("g", "Back to top"),
            ("Esc", "Back to list"),
        ],
    ),
];

/// A `percent_x` by `percent_y` rect centered in `area`.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::events::NotificationLevel;
    use crate::core::fixtures::FixtureStore;
    use ratatui::backend::TestBackend;

    fn app(start: Route) -> AppState {
        let (tx, rx) = mpsc::unbounded_channel();
        let services = Services::with_store(FixtureStore::bundled().clone(), 3, tx);
        AppState::new(rx, services, start)
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    /// Deliver events the views queued on the channel.
    fn drain(app: &mut AppState) {
        while let Ok(event) = app.event_rx.try_recv() {
            app.handle_event(event);
        }
    }

    #[test]
    fn test_starts_on_configured_route() {
        assert_eq!(app(Route::Photos).current_route(), Route::Photos);
        assert_eq!(app(Route::Home).focus, Focus::Home);
    }

    #[test]
    fn test_number_keys_follow_header_order() {
        let mut app = app(Route::Home);
        app.handle_event(key(KeyCode::Char('3')));
        assert_eq!(app.current_route(), Route::Timeline);
        app.handle_event(key(KeyCode::Char('6')));
        assert_eq!(app.current_route(), Route::Destinations);
    }

    #[test]
    fn test_tab_cycles_pages() {
        let mut app = app(Route::Destinations);
        app.handle_event(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Home);
        app.handle_event(key(KeyCode::BackTab));
        assert_eq!(app.focus, Focus::Destinations);
    }

    #[test]
    fn test_open_guide_from_home() {
        let mut app = app(Route::Home);
        app.handle_event(key(KeyCode::Enter));
        let first = FixtureStore::bundled().guides[0].id.clone();
        assert_eq!(app.current_route(), Route::GuideDetail { id: first });
        assert_eq!(app.sidebar.focus_under_cursor(), Focus::Guides);
    }

    #[test]
    fn test_unknown_guide_shows_notification() {
        let mut app = app(Route::GuideDetail {
            id: "nowhere".into(),
        });
        drain(&mut app);
        assert_eq!(app.notifications.len(), 1);
        assert_eq!(app.notifications[0].level, NotificationLevel::Warning);
    }

    #[test]
    fn test_unknown_route_renders_not_found() {
        let mut app = app(Route::NotFound);
        assert_eq!(app.current_route(), Route::NotFound);
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.current_route(), Route::Home);
    }

    #[test]
    fn test_viewer_captures_quit_key() {
        let mut app = app(Route::Photos);
        app.handle_event(key(KeyCode::Enter));
        assert!(app.photos.is_viewer_open());
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.running);
        app.handle_event(key(KeyCode::Esc));
        app.handle_event(key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_help_modal_blocks_navigation() {
        let mut app = app(Route::Home);
        app.handle_event(key(KeyCode::Char('?')));
        assert!(app.show_help);
        app.handle_event(key(KeyCode::Char('2')));
        assert_eq!(app.focus, Focus::Home);
        app.handle_event(key(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn test_notifications_dedup_and_expire() {
        let mut app = app(Route::Home);
        let note = Notification {
            id: 0,
            message: "hi".into(),
            level: NotificationLevel::Info,
            ttl_ticks: 2,
        };
        app.push_notification(note.clone());
        app.push_notification(note);
        assert_eq!(app.notifications.len(), 1);
        app.on_tick();
        app.on_tick();
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn test_every_page_renders() {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut routes: Vec<Route> = Focus::ALL.iter().map(|f| f.route()).collect();
        routes.push(Route::GuideDetail {
            id: "hulunbuir-loop".into(),
        });
        routes.push(Route::GuideDetail {
            id: "harbin-weekend".into(),
        });
        routes.push(Route::NotFound);

        for route in routes {
            let app = app(route);
            terminal.draw(|frame| app.render(frame)).unwrap();
        }
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let centered = centered_rect(50, 50, area);
        assert!(centered.x > 0);
        assert!(centered.y > 0);
        assert!(centered.width > 0);
        assert!(centered.height > 0);
        assert!(centered.x + centered.width <= area.width);
        assert!(centered.y + centered.height <= area.height);
    }
}
