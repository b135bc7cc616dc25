//! Input model: annotation tools, logical rectangles, drafts, and the gesture
//! state machine.
//!
//! `ToolKind` captures what the user armed in the toolbar. `GestureState` is
//! the interaction tracked between pointer-down and pointer-up, carrying the
//! context needed to recompute the pan or the rectangle on every move. Pan and
//! draw are separate variants so the two can never be active at once.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;

/// Annotation tool that can be armed in the toolbar.
///
/// With no tool armed, dragging pans the page. With any tool armed, dragging
/// defines the annotation's rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// Free-text comment pinned to a region.
    Comment,
    /// Translucent highlight over a region.
    Highlight,
    /// Dimension check or measured value.
    Measurement,
    /// Approval stamp.
    Stamp,
    /// Arrow callout spanning the region's diagonal.
    Arrow,
    /// Plain rectangle markup.
    Rectangle,
}

impl ToolKind {
    /// All tools in toolbar order.
    pub const ALL: [ToolKind; 6] =
        [Self::Comment, Self::Highlight, Self::Measurement, Self::Stamp, Self::Arrow, Self::Rectangle];

    /// Wire name, matching the review API's annotation `type`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Highlight => "highlight",
            Self::Measurement => "measurement",
            Self::Stamp => "stamp",
            Self::Arrow => "arrow",
            Self::Rectangle => "rectangle",
        }
    }
}

/// An axis-aligned rectangle in logical page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Normalized rectangle spanned by two corners, in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self { x: a.x.min(b.x), y: a.y.min(b.y), width: (b.x - a.x).abs(), height: (b.y - a.y).abs() }
    }

    /// A click with no drag. Only zero in both dimensions counts; a line-thin
    /// rectangle is still a region.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

/// A finished draw gesture awaiting annotation content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DraftRect {
    /// Region in logical coordinates.
    pub rect: Rect,
    /// Page that was active when the gesture began.
    pub page: u32,
    /// Tool that drew the region; becomes the annotation type.
    pub tool: ToolKind,
}

/// Internal state for the gesture state machine.
///
/// Each active variant carries the context captured at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging the page with no tool armed.
    Panning {
        /// Device position at pointer-down.
        start_device: Point,
        /// Pan offset at pointer-down; the drag delta is added to it.
        start_pan: Point,
    },
    /// The user is dragging out an annotation region.
    Drawing {
        /// Logical position at pointer-down.
        start_logical: Point,
        /// Normalized rectangle from `start_logical` to the latest pointer.
        current_rect: Rect,
        /// Page active at pointer-down. Later page changes do not move it.
        page: u32,
        /// Tool armed at pointer-down.
        tool: ToolKind,
    },
}

impl GestureState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Short label for logs and status displays.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Panning { .. } => "panning",
            Self::Drawing { .. } => "drawing",
        }
    }
}
