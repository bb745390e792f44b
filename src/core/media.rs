//! Media references and load-failure recovery.

use super::models::{EntryKind, TimelineEntry};

/// Placeholder shown when an image fails to load.
pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=300&fit=crop&crop=center";

/// Poster frame for clip posts.
pub const VIDEO_POSTER: &str =
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=300&fit=crop";

/// How a timeline entry's content is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaView {
    Image { src: String, alt: String },
    Video { src: String, poster: String },
}

impl MediaView {
    pub fn for_entry(entry: &TimelineEntry) -> Self {
        match entry.kind {
            EntryKind::Video => MediaView::Video {
                src: entry.content.clone(),
                poster: VIDEO_POSTER.to_string(),
            },
            EntryKind::Photo | EntryKind::Guide => MediaView::Image {
                src: entry.content.clone(),
                alt: entry.title.clone(),
            },
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, MediaView::Video { .. })
    }
}

/// An image reference that degrades to [`FALLBACK_IMAGE`] on error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    src: String,
    failed: bool,
}

impl ImageSource {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            failed: false,
        }
    }

    /// Source for an optional reference; absent references go straight to
    /// the fallback.
    pub fn or_fallback(src: Option<&str>) -> Self {
        match src {
            Some(src) if !src.is_empty() => Self::new(src),
            _ => Self {
                src: FALLBACK_IMAGE.to_string(),
                failed: true,
            },
        }
    }

    pub fn current(&self) -> &str {
        if self.failed {
            FALLBACK_IMAGE
        } else {
            &self.src
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.failed
    }

    /// Record a load failure. Returns whether the displayed source changed;
    /// a failing fallback is left alone.
    pub fn on_error(&mut self) -> bool {
        if self.failed || self.src == FALLBACK_IMAGE {
            return false;
        }
        tracing::debug!(src = %self.src, "Image failed to load, using fallback");
        self.failed = true;
        true
    }
}
