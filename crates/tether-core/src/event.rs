//! Input events for the widget.
//!
//! The host translates its platform's pointer callbacks (mouse or touch)
//! into these variants and feeds them to the widget synchronously. Only
//! the primary pointer is reported; the drag tracker is single-session.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Pointer pressed
    PointerDown {
        /// Position of press
        position: Point,
    },
    /// Pointer moved
    PointerMove {
        /// New position
        position: Point,
    },
    /// Pointer released
    PointerUp {
        /// Position of release
        position: Point,
    },
    /// Pointer capture lost (e.g. window blur, palm rejection)
    PointerCancel,
    /// Viewport resized
    Resize {
        /// New width
        width: f32,
        /// New height
        height: f32,
    },
}

impl Event {
    /// Position carried by the event, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { position }
            | Self::PointerMove { position }
            | Self::PointerUp { position } => Some(*position),
            Self::PointerCancel | Self::Resize { .. } => None,
        }
    }
}
