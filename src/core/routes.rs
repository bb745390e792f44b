//! Page routes and header navigation.

use std::fmt;

use super::fixtures::FixtureStore;
use super::models::Guide;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Map,
    Timeline,
    Photos,
    Guides,
    GuideDetail { id: String },
    Destinations,
    NotFound,
}

impl Route {
    /// Parse a URL path. Trailing slashes are ignored.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["map"] => Route::Map,
            ["timeline"] => Route::Timeline,
            ["photos"] => Route::Photos,
            ["guides"] => Route::Guides,
            ["guides", id] => Route::GuideDetail { id: id.to_string() },
            ["destinations"] => Route::Destinations,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Map => "/map".to_string(),
            Route::Timeline => "/timeline".to_string(),
            Route::Photos => "/photos".to_string(),
            Route::Guides => "/guides".to_string(),
            Route::GuideDetail { id } => format!("/guides/{id}"),
            Route::Destinations => "/destinations".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Map => "Travel Map",
            Route::Timeline => "Timeline",
            Route::Photos => "Photos",
            Route::Guides => "Guides",
            Route::GuideDetail { .. } => "Guide",
            Route::Destinations => "Destinations",
            Route::NotFound => "Not Found",
        }
    }

    /// Whether the header item at `nav_path` is highlighted for
    /// `current_path`. Home matches only itself; other items match their
    /// whole subtree.
    pub fn is_active(nav_path: &str, current_path: &str) -> bool {
        if nav_path == "/" {
            return current_path == "/";
        }
        match current_path.strip_prefix(nav_path) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// A header navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { path: "/", label: "Home", icon: "🏠" },
    NavItem { path: "/map", label: "Map", icon: "🗺" },
    NavItem { path: "/timeline", label: "Timeline", icon: "🕒" },
    NavItem { path: "/photos", label: "Photos", icon: "📷" },
    NavItem { path: "/guides", label: "Guides", icon: "📖" },
    NavItem { path: "/destinations", label: "Destinations", icon: "📍" },
];

/// Outcome of looking up a guide by route id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuidePage<'a> {
    Found(&'a Guide),
    NotFound { id: &'a str },
}

pub fn resolve_guide<'a>(store: &'a FixtureStore, id: &'a str) -> GuidePage<'a> {
    match store.guide(id) {
        Some(guide) => GuidePage::Found(guide),
        None => {
            tracing::debug!(id, "Guide not found");
            GuidePage::NotFound { id }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", Route::Home)]
    #[case("", Route::Home)]
    #[case("/map", Route::Map)]
    #[case("/timeline/", Route::Timeline)]
    #[case("/photos", Route::Photos)]
    #[case("/guides", Route::Guides)]
    #[case("/guides/hulunbuir-loop", Route::GuideDetail { id: "hulunbuir-loop".into() })]
    #[case("/destinations", Route::Destinations)]
    #[case("/guides/a/b", Route::NotFound)]
    #[case("/nowhere", Route::NotFound)]
    fn test_parse(#[case] path: &str, #[case] expected: Route) {
        assert_eq!(Route::parse(path), expected);
    }

    #[test]
    fn test_path_round_trips() {
        for route in [
            Route::Home,
            Route::Map,
            Route::Timeline,
            Route::Photos,
            Route::Guides,
            Route::GuideDetail { id: "x".into() },
            Route::Destinations,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[rstest]
    #[case("/", "/", true)]
    #[case("/", "/photos", false)]
    #[case("/guides", "/guides", true)]
    #[case("/guides", "/guides/hulunbuir-loop", true)]
    #[case("/map", "/mapping", false)]
    #[case("/photos", "/", false)]
    fn test_is_active(#[case] nav: &str, #[case] current: &str, #[case] expected: bool) {
        assert_eq!(Route::is_active(nav, current), expected);
    }

    #[test]
    fn test_nav_items_parse_to_pages() {
        for item in NAV_ITEMS {
            assert_ne!(Route::parse(item.path), Route::NotFound, "{}", item.label);
        }
    }

    #[test]
    fn test_resolve_unknown_guide() {
        let store = FixtureStore::bundled();
        assert_eq!(
            resolve_guide(store, "nope"),
            GuidePage::NotFound { id: "nope" }
        );
        assert!(matches!(
            resolve_guide(store, "hulunbuir-loop"),
            GuidePage::Found(g) if g.id == "hulunbuir-loop"
        ));
    }
}
