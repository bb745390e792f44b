//! Scroll Observable
//!
//! One observable of "scrolled past the threshold" shared by every view that
//! shows a back-to-top control, plus the active-section probe used by the
//! guide page navigation. Subscribers must unsubscribe when they go away.

use std::fmt;

/// Scroll offset (px) past which the back-to-top control is shown.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Offset (px) from the top of the viewport used to pick the active section.
pub const SECTION_PROBE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(bool)>;

pub struct ScrollWatch {
    threshold: f64,
    past: bool,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl ScrollWatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            past: false,
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether the last reported offset was at or past the threshold.
    pub fn is_past(&self) -> bool {
        self.past
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Register `listener`; it is called with the new state on every
    /// threshold crossing.
    pub fn subscribe(&mut self, listener: impl FnMut(bool) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns whether `id` was subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Report the current scroll offset. Listeners are notified only when
    /// the offset crosses the threshold.
    pub fn update(&mut self, offset: f64) -> bool {
        let past = offset >= self.threshold;
        if past == self.past {
            return false;
        }
        self.past = past;
        for (_, listener) in &mut self.listeners {
            listener(past);
        }
        true
    }
}

impl Default for ScrollWatch {
    fn default() -> Self {
        Self::new(SCROLL_TOP_THRESHOLD)
    }
}

impl fmt::Debug for ScrollWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollWatch")
            .field("threshold", &self.threshold)
            .field("past", &self.past)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}

/// Vertical extent of a page section relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
    pub bottom: f64,
}

/// The first section spanning `probe`.
pub fn active_section<'a>(sections: &[SectionBounds<'a>], probe: f64) -> Option<&'a str> {
    sections
        .iter()
        .find(|s| s.top <= probe && s.bottom >= probe)
        .map(|s| s.id)
}
