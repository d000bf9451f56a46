//! Core types for the Tether floating chat widget.
//!
//! This crate provides the geometry and interaction engine the widget is
//! built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Input events: [`Event`]
//! - The viewport seam: [`ViewportProvider`]
//! - Drag session tracking: [`DragTracker`]
//! - Panel placement solving: [`solve`], [`button_from_panel`]
//!
//! Everything here is pure, synchronous, and free of platform I/O; the
//! host feeds in pointer events and viewport sizes, and renders the
//! positions that come back out.

mod drag;
mod event;
mod geometry;
mod placement;
mod viewport;

pub use drag::{DragConfig, DragOutcome, DragSubject, DragTracker, SessionHooks};
pub use event::Event;
pub use geometry::{Point, Rect, Size};
pub use placement::{
    button_from_panel, fits, panel_from_button, solve, PanelPlacement, PlacementMetrics,
    PlacementOrigin,
};
pub use viewport::{FixedViewport, SharedViewport, ViewportProvider};
