use ratatui::style::Color;

use super::theme;
use crate::core::routes::Route;

/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick for notification TTLs.
    Tick,
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// A resolved action to execute.
    Action(Action),
    /// Notification to display to the user.
    Notification(Notification),
    /// Request to quit the application.
    Quit,
}

/// High-level actions dispatched by the input mapper or by views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Navigate(Route),
    OpenGuide(String),
    TabNext,
    TabPrev,
    ToggleSidebar,

    // Modals
    ShowHelp,
    CloseHelp,

    // Application
    Quit,
}

/// Outcome of offering an input event to a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// Not handled; fall through to global bindings.
    Ignored,
    Consumed,
    /// Handled, and the app should perform `Action`.
    Dispatch(Action),
}

impl InputResult {
    pub fn from_consumed(consumed: bool) -> Self {
        if consumed {
            InputResult::Consumed
        } else {
            InputResult::Ignored
        }
    }
}

/// Which top-level page has focus. One per header navigation item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Home,
    Map,
    Timeline,
    Photos,
    Guides,
    Destinations,
}

/// Whether the sidebar or the main content has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaFocus {
    Sidebar,
    Main,
}

impl Focus {
    pub const ALL: [Focus; 6] = [
        Focus::Home,
        Focus::Map,
        Focus::Timeline,
        Focus::Photos,
        Focus::Guides,
        Focus::Destinations,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Focus::Home => "Home",
            Focus::Map => "Map",
            Focus::Timeline => "Timeline",
            Focus::Photos => "Photos",
            Focus::Guides => "Guides",
            Focus::Destinations => "Destinations",
        }
    }

    /// Single-width glyph used by the collapsed sidebar.
    pub fn icon(self) -> &'static str {
        match self {
            Focus::Home => "⌂",
            Focus::Map => "◎",
            Focus::Timeline => "≡",
            Focus::Photos => "▣",
            Focus::Guides => "✎",
            Focus::Destinations => "⚑",
        }
    }

    pub fn route(self) -> Route {
        match self {
            Focus::Home => Route::Home,
            Focus::Map => Route::Map,
            Focus::Timeline => Route::Timeline,
            Focus::Photos => Route::Photos,
            Focus::Guides => Route::Guides,
            Focus::Destinations => Route::Destinations,
        }
    }

    /// Page owning `route`. Unknown routes have no page.
    pub fn for_route(route: &Route) -> Option<Focus> {
        match route {
            Route::Home => Some(Focus::Home),
            Route::Map => Some(Focus::Map),
            Route::Timeline => Some(Focus::Timeline),
            Route::Photos => Some(Focus::Photos),
            Route::Guides | Route::GuideDetail { .. } => Some(Focus::Guides),
            Route::Destinations => Some(Focus::Destinations),
            Route::NotFound => None,
        }
    }

    pub fn to_action(self) -> Action {
        Action::Navigate(self.route())
    }

    pub fn next(self) -> Focus {
        let idx = Focus::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Focus::ALL[(idx + 1) % Focus::ALL.len()]
    }

    pub fn prev(self) -> Focus {
        let idx = Focus::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Focus::ALL[(idx + Focus::ALL.len() - 1) % Focus::ALL.len()]
    }
}

/// Notification level for the overlay system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    /// Prefix glyph and its color.
    pub fn glyph(self) -> (&'static str, Color) {
        match self {
            NotificationLevel::Info => ("ℹ", theme::INFO),
            NotificationLevel::Success => ("✓", theme::SUCCESS),
            NotificationLevel::Warning => ("⚠", theme::WARNING),
            NotificationLevel::Error => ("✗", theme::ERROR),
        }
    }
}

/// A timed notification shown in the overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks remaining before auto-dismiss.
    pub ttl_ticks: u32,
}
