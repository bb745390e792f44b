//! Detail Viewer
//!
//! Fullscreen viewer over the current filtered subset of the gallery. The
//! viewer only stores a position into the subset; callers pass the subset
//! length with every command and call [`Viewer::reconcile`] whenever the
//! subset changes under an open viewer.
//!
//! ```text
//! Closed --Open(i), i < len--> Open{i}
//! Open{i} --Next, i+1 < len--> Open{i+1}     (zoom reset)
//! Open{i} --Previous, i >= 1--> Open{i-1}    (zoom reset)
//! Open{i} --ZoomIn/ZoomOut--> Open{i}        (zoom clamped)
//! Open{i} --Close--> Closed
//! ```

use serde::{Deserialize, Serialize};

pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 3.0;
pub const ZOOM_STEP: f32 = 0.5;
pub const ZOOM_DEFAULT: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewerState {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    Open(usize),
    Next,
    Previous,
    ZoomIn,
    ZoomOut,
    Close,
}

impl ViewerCommand {
    /// Map a DOM-style key name to a viewer command.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(ViewerCommand::Close),
            "ArrowRight" => Some(ViewerCommand::Next),
            "ArrowLeft" => Some(ViewerCommand::Previous),
            "+" | "=" => Some(ViewerCommand::ZoomIn),
            "-" => Some(ViewerCommand::ZoomOut),
            _ => None,
        }
    }
}

/// Viewer state plus the zoom factor of the open item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewer {
    state: ViewerState,
    zoom: f32,
}

impl Default for Viewer {
    fn default() -> Self {
        Self {
            state: ViewerState::Closed,
            zoom: ZOOM_DEFAULT,
        }
    }
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ViewerState::Open { .. })
    }

    pub fn index(&self) -> Option<usize> {
        match self.state {
            ViewerState::Open { index } => Some(index),
            ViewerState::Closed => None,
        }
    }

    /// Apply `command` against a subset of `len` items.
    ///
    /// Returns whether the state changed. Refused commands and boundary
    /// navigation are no-ops.
    pub fn apply(&mut self, command: ViewerCommand, len: usize) -> bool {
        let before = *self;
        match (self.state, command) {
            (_, ViewerCommand::Open(i)) => {
                if i < len {
                    self.state = ViewerState::Open { index: i };
                    self.zoom = ZOOM_DEFAULT;
                }
            }
            (ViewerState::Open { index }, ViewerCommand::Next) => {
                if index + 1 < len {
                    self.state = ViewerState::Open { index: index + 1 };
                    self.zoom = ZOOM_DEFAULT;
                }
            }
            (ViewerState::Open { index }, ViewerCommand::Previous) => {
                if index >= 1 {
                    self.state = ViewerState::Open { index: index - 1 };
                    self.zoom = ZOOM_DEFAULT;
                }
            }
            (ViewerState::Open { .. }, ViewerCommand::ZoomIn) => {
                self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
            }
            (ViewerState::Open { .. }, ViewerCommand::ZoomOut) => {
                self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN);
            }
            (ViewerState::Open { .. }, ViewerCommand::Close) => {
                self.state = ViewerState::Closed;
                self.zoom = ZOOM_DEFAULT;
            }
            (ViewerState::Closed, _) => {}
        }
        *self != before
    }

    /// Handle a key press. Keys are ignored while the viewer is closed.
    pub fn handle_key(&mut self, key: &str, len: usize) -> bool {
        if !self.is_open() {
            return false;
        }
        match ViewerCommand::from_key(key) {
            Some(command) => self.apply(command, len),
            None => false,
        }
    }

    pub fn has_next(&self, len: usize) -> bool {
        matches!(self.state, ViewerState::Open { index } if index + 1 < len)
    }

    pub fn has_previous(&self) -> bool {
        matches!(self.state, ViewerState::Open { index } if index >= 1)
    }

    /// Re-validate the position after the subset changed to `len` items.
    ///
    /// Closes on an empty subset, otherwise clamps to the last item.
    pub fn reconcile(&mut self, len: usize) -> bool {
        match self.state {
            ViewerState::Open { .. } if len == 0 => {
                self.state = ViewerState::Closed;
                self.zoom = ZOOM_DEFAULT;
                true
            }
            ViewerState::Open { index } if index >= len => {
                self.state = ViewerState::Open { index: len - 1 };
                self.zoom = ZOOM_DEFAULT;
                true
            }
            _ => false,
        }
    }

    /// The open item of `subset`, if any.
    pub fn current<'a, T>(&self, subset: &'a [T]) -> Option<&'a T> {
        self.index().and_then(|i| subset.get(i))
    }

    /// Zoom as a whole percentage, for display.
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }
}
