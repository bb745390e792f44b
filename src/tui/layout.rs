//! Frame regions: navigation row, page sidebar, page body and status line.

use ratatui::layout::{Constraint, Layout, Rect};

/// Terminals narrower than this get the icon-only sidebar.
pub const FULL_SIDEBAR_MIN_WIDTH: u16 = 60;
/// Terminals narrower than this get no sidebar at all.
pub const SIDEBAR_MIN_WIDTH: u16 = 20;
/// Terminals shorter than this lose the navigation row.
pub const NAV_ROW_MIN_HEIGHT: u16 = 8;

/// How much room the page sidebar gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarMode {
    /// Icon and page label.
    Full,
    /// Icons only.
    Icons,
    Off,
}

impl SidebarMode {
    /// Mode for a terminal `width`. `pinned_icons` is the Ctrl+B toggle and
    /// only ever shrinks the sidebar.
    pub fn for_width(width: u16, pinned_icons: bool) -> Self {
        match width {
            w if w < SIDEBAR_MIN_WIDTH => SidebarMode::Off,
            w if w < FULL_SIDEBAR_MIN_WIDTH || pinned_icons => SidebarMode::Icons,
            _ => SidebarMode::Full,
        }
    }

    pub fn width(self) -> u16 {
        match self {
            SidebarMode::Full => 18,
            SidebarMode::Icons => 3,
            SidebarMode::Off => 0,
        }
    }
}

/// Regions of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub nav: Option<Rect>,
    pub sidebar: Option<Rect>,
    pub page: Rect,
    pub status: Rect,
    pub sidebar_mode: SidebarMode,
}

impl AppLayout {
    pub fn split(area: Rect, pinned_icons: bool) -> Self {
        let sidebar_mode = SidebarMode::for_width(area.width, pinned_icons);
        let nav_height = u16::from(area.height >= NAV_ROW_MIN_HEIGHT);

        let [nav, body, status] = Layout::vertical([
            Constraint::Length(nav_height),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let (sidebar, page) = match sidebar_mode {
            SidebarMode::Off => (None, body),
            mode => {
                let [sidebar, page] =
                    Layout::horizontal([Constraint::Length(mode.width()), Constraint::Min(1)])
                        .areas(body);
                (Some(sidebar), page)
            }
        };

        Self {
            nav: (nav_height > 0).then_some(nav),
            sidebar,
            page,
            status,
            sidebar_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(120, false, SidebarMode::Full)]
    #[case(120, true, SidebarMode::Icons)]
    #[case(55, false, SidebarMode::Icons)]
    #[case(18, false, SidebarMode::Off)]
    #[case(18, true, SidebarMode::Off)]
    fn test_sidebar_mode_for_width(
        #[case] width: u16,
        #[case] pinned_icons: bool,
        #[case] expected: SidebarMode,
    ) {
        assert_eq!(SidebarMode::for_width(width, pinned_icons), expected);
    }

    #[test]
    fn test_full_layout_rows() {
        let layout = AppLayout::split(Rect::new(0, 0, 120, 40), false);
        assert_eq!(layout.nav.map(|r| r.height), Some(1));
        assert_eq!(layout.sidebar.map(|r| r.width), Some(SidebarMode::Full.width()));
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.page.height, 38);
    }

    #[test]
    fn test_sidebar_off_gives_page_full_width() {
        let layout = AppLayout::split(Rect::new(0, 0, 18, 40), false);
        assert!(layout.sidebar.is_none());
        assert_eq!(layout.page.width, 18);
    }

    #[test]
    fn test_short_terminal_drops_nav_row() {
        let layout = AppLayout::split(Rect::new(0, 0, 100, 6), false);
        assert!(layout.nav.is_none());
        assert_eq!(layout.page.height, 5);
    }

    #[test]
    fn test_sidebar_and_page_share_width() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = AppLayout::split(area, false);
        let sidebar = layout.sidebar.map_or(0, |s| s.width);
        assert_eq!(sidebar + layout.page.width, area.width);
    }
}
