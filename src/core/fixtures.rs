//! Fixture Store
//!
//! Read-only, ordered record collections per domain. The bundled fixtures
//! are compiled into the binary and parsed once on first access; every view
//! borrows from the same store.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::{FixtureError, FixtureResult};
use super::models::{Destination, GalleryItem, Guide, TimelineEntry};

const PHOTOS_JSON: &str = include_str!("../../data/photos.json");
const TIMELINE_JSON: &str = include_str!("../../data/timeline.json");
const GUIDES_JSON: &str = include_str!("../../data/guides.json");
const DESTINATIONS_JSON: &str = include_str!("../../data/destinations.json");

static BUNDLED: OnceLock<FixtureStore> = OnceLock::new();

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixtureStore {
    pub photos: Vec<GalleryItem>,
    pub timeline: Vec<TimelineEntry>,
    pub guides: Vec<Guide>,
    pub destinations: Vec<Destination>,
}

impl FixtureStore {
    /// The fixtures compiled into the application.
    ///
    /// A domain whose bundled JSON fails to parse is logged and left empty.
    pub fn bundled() -> &'static FixtureStore {
        BUNDLED.get_or_init(Self::load_bundled)
    }

    /// Strictly parse and validate the four fixture documents.
    pub fn from_json(
        photos: &str,
        timeline: &str,
        guides: &str,
        destinations: &str,
    ) -> FixtureResult<Self> {
        let mut store = Self {
            photos: parse("photos", photos)?,
            timeline: parse("timeline", timeline)?,
            guides: parse("guides", guides)?,
            destinations: parse("destinations", destinations)?,
        };
        store.normalize();
        store.validate()?;
        Ok(store)
    }

    /// Load fixtures from `dir`. Domains without a file keep the bundled data.
    #[cfg(feature = "native")]
    pub fn load_dir(dir: &std::path::Path) -> FixtureResult<Self> {
        let bundled = Self::bundled();
        let read = |file: &str| -> FixtureResult<Option<String>> {
            let path = dir.join(file);
            if !path.exists() {
                debug!("No fixture file at {}, keeping bundled data", path.display());
                return Ok(None);
            }
            std::fs::read_to_string(&path)
                .map(Some)
                .map_err(|source| FixtureError::Io { path, source })
        };

        let mut store = Self {
            photos: match read("photos.json")? {
                Some(json) => parse("photos", &json)?,
                None => bundled.photos.clone(),
            },
            timeline: match read("timeline.json")? {
                Some(json) => parse("timeline", &json)?,
                None => bundled.timeline.clone(),
            },
            guides: match read("guides.json")? {
                Some(json) => parse("guides", &json)?,
                None => bundled.guides.clone(),
            },
            destinations: match read("destinations.json")? {
                Some(json) => parse("destinations", &json)?,
                None => bundled.destinations.clone(),
            },
        };
        store.normalize();
        store.validate()?;
        tracing::info!(
            photos = store.photos.len(),
            timeline = store.timeline.len(),
            guides = store.guides.len(),
            destinations = store.destinations.len(),
            "Loaded fixtures from {}",
            dir.display()
        );
        Ok(store)
    }

    pub fn guide(&self, id: &str) -> Option<&Guide> {
        self.guides.iter().find(|g| g.id == id)
    }

    pub fn destination(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
            && self.timeline.is_empty()
            && self.guides.is_empty()
            && self.destinations.is_empty()
    }

    fn load_bundled() -> Self {
        let mut store = Self {
            photos: parse_or_empty("photos", PHOTOS_JSON),
            timeline: parse_or_empty("timeline", TIMELINE_JSON),
            guides: parse_or_empty("guides", GUIDES_JSON),
            destinations: parse_or_empty("destinations", DESTINATIONS_JSON),
        };
        store.normalize();
        if let Err(e) = store.validate() {
            warn!("Bundled fixtures failed validation: {e}");
        }
        store
    }

    /// Repair recoverable inconsistencies in place.
    fn normalize(&mut self) {
        for guide in &mut self.guides {
            if !guide.budget.is_well_formed() {
                warn!(
                    guide = %guide.id,
                    min = guide.budget.min,
                    max = guide.budget.max,
                    "Budget range is reversed, swapping bounds"
                );
                std::mem::swap(&mut guide.budget.min, &mut guide.budget.max);
            }
        }
    }

    fn validate(&self) -> FixtureResult<()> {
        unique_ids("photos", self.photos.iter().map(|p| p.id.as_str()))?;
        unique_ids("timeline", self.timeline.iter().map(|t| t.id.as_str()))?;
        unique_ids("guides", self.guides.iter().map(|g| g.id.as_str()))?;
        unique_ids("destinations", self.destinations.iter().map(|d| d.id.as_str()))?;

        for photo in &self.photos {
            if photo.location.trim().is_empty() {
                return Err(FixtureError::invalid("photos", &photo.id, "location is empty"));
            }
        }
        Ok(())
    }
}

fn parse<T: DeserializeOwned>(domain: &'static str, json: &str) -> FixtureResult<Vec<T>> {
    serde_json::from_str(json).map_err(|source| FixtureError::Parse { domain, source })
}

fn parse_or_empty<T: DeserializeOwned>(domain: &'static str, json: &str) -> Vec<T> {
    match parse(domain, json) {
        Ok(records) => {
            debug!("Parsed {} bundled {domain} fixtures", records.len());
            records
        }
        Err(e) => {
            tracing::error!("{e}; continuing with no {domain}");
            Vec::new()
        }
    }
}

fn unique_ids<'a>(domain: &'static str, ids: impl Iterator<Item = &'a str>) -> FixtureResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FixtureError::invalid(domain, id, "duplicate id"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHOTO: &str = r#"[{"id":"p1","src":"a.jpg","alt":"A","tags":["lake"],"location":"Mohe","date":"2024-10-15"}]"#;

    #[test]
    fn test_bundled_fixtures_parse() {
        let store = FixtureStore::bundled();
        assert!(!store.photos.is_empty());
        assert!(!store.timeline.is_empty());
        assert!(!store.guides.is_empty());
        assert!(!store.destinations.is_empty());
    }

    #[test]
    fn test_bundled_is_shared() {
        let a = FixtureStore::bundled() as *const FixtureStore;
        let b = FixtureStore::bundled() as *const FixtureStore;
        assert_eq!(a, b);
    }

    #[test]
    fn test_bundled_budgets_are_well_formed() {
        for guide in &FixtureStore::bundled().guides {
            assert!(guide.budget.is_well_formed(), "{} budget reversed", guide.id);
        }
    }

    #[test]
    fn test_reversed_budget_is_swapped() {
        let guides = r#"[{"id":"g","title":"T","destination":"D","bestSeason":"S","days":3,
            "budget":{"min":900,"max":100,"currency":"CNY"},"cover":"c.jpg"}]"#;
        let store = FixtureStore::from_json("[]", "[]", guides, "[]").unwrap();
        assert_eq!(store.guides[0].budget.min, 100);
        assert_eq!(store.guides[0].budget.max, 900);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let photos = format!("[{},{}]", &PHOTO[1..PHOTO.len() - 1], &PHOTO[1..PHOTO.len() - 1]);
        let err = FixtureStore::from_json(&photos, "[]", "[]", "[]").unwrap_err();
        assert!(matches!(err, FixtureError::Invalid { domain: "photos", .. }));
    }

    #[test]
    fn test_empty_location_rejected() {
        let photos = PHOTO.replace("Mohe", " ");
        let err = FixtureStore::from_json(&photos, "[]", "[]", "[]").unwrap_err();
        assert!(err.to_string().contains("location is empty"));
    }

    #[test]
    fn test_parse_error_names_domain() {
        let err = FixtureStore::from_json("[]", "not json", "[]", "[]").unwrap_err();
        assert_eq!(err.domain(), Some("timeline"));
    }

    #[test]
    fn test_guide_lookup() {
        let store = FixtureStore::bundled();
        assert!(store.guide("hulunbuir-loop").is_some());
        assert!(store.guide("x").is_none());
        assert!(store.destination("mohe").is_some());
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_load_dir_overrides_single_domain() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("photos.json"), PHOTO).unwrap();

        let store = FixtureStore::load_dir(dir.path()).unwrap();
        assert_eq!(store.photos.len(), 1);
        assert_eq!(store.guides, FixtureStore::bundled().guides);
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_load_dir_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("guides.json"), "{").unwrap();

        let err = FixtureStore::load_dir(dir.path()).unwrap_err();
        assert_eq!(err.domain(), Some("guides"));
    }
}
