use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::core::error::FixtureResult;
use crate::core::fixtures::FixtureStore;

use super::events::{AppEvent, Notification, NotificationLevel};

/// Shared handle given to every view: the fixture store, display settings
/// and a sender for pushing events back into the loop.
#[derive(Clone)]
pub struct Services {
    pub store: Arc<FixtureStore>,
    /// Guides featured on the home page.
    pub featured_count: usize,
    pub event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl Services {
    /// Resolve the fixture source from config.
    ///
    /// A configured fixtures directory that fails to load is fatal; without
    /// one the bundled fixtures are used.
    pub fn init(
        config: &AppConfig,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> FixtureResult<Self> {
        let store = match config.data.fixtures_dir.as_deref() {
            Some(dir) => {
                log::info!("Loading fixtures from {}", dir.display());
                FixtureStore::load_dir(dir)?
            }
            None => FixtureStore::bundled().clone(),
        };

        Ok(Self::with_store(store, config.display.featured_count, event_tx))
    }

    pub fn with_store(
        store: FixtureStore,
        featured_count: usize,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            store: Arc::new(store),
            featured_count,
            event_tx,
        }
    }

    /// Queue a notification for the overlay.
    pub fn notify(&self, message: impl Into<String>, level: NotificationLevel) {
        let _ = self.event_tx.send(AppEvent::Notification(Notification {
            id: 0, // assigned by AppState
            message: message.into(),
            level,
            ttl_ticks: 60,
        }));
    }
}
