//! Panel placement solving.
//!
//! Given the trigger button's position, the solver evaluates six candidate
//! panel placements in a fixed priority order and returns the first that
//! fits fully inside the viewport (less a small margin). If none fit, the
//! top-ranked candidate is clamped into the viewport instead, so the panel
//! is never off-screen even on surfaces smaller than the panel itself.
//!
//! Placement is pure and O(1): the same `(anchor, viewport)` pair always
//! yields the same candidate and coordinates. The inverse mapping
//! [`button_from_panel`] re-derives the button from a dragged panel so a
//! later re-solve reproduces the same layout instead of drifting.

use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Fixed dimensions and spacing used by the solver.
///
/// One consistent constant set for the whole widget: a 40x40 trigger
/// button, a 320x440 panel, a 16px gap between button and panel, and an
/// 8px margin a candidate must keep from the viewport edges to count as
/// fitting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementMetrics {
    /// Trigger button dimensions.
    pub button_size: Size,
    /// Panel dimensions.
    pub panel_size: Size,
    /// Spacing between the button and the panel edge facing it.
    pub gap: f32,
    /// Margin a fitting candidate must keep from every viewport edge.
    pub fit_margin: f32,
}

impl Default for PlacementMetrics {
    fn default() -> Self {
        Self {
            button_size: Size::new(40.0, 40.0),
            panel_size: Size::new(320.0, 440.0),
            gap: 16.0,
            fit_margin: 8.0,
        }
    }
}

/// The panel corner or edge adjacent to the button.
///
/// Identifies which candidate produced a placement; doubles as the
/// animation transform-origin and as the key for the inverse mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementOrigin {
    /// Panel sits above-left of the button; its bottom-right corner is
    /// nearest the button.
    BottomRight,
    /// Panel sits above-right; bottom-left corner nearest the button.
    BottomLeft,
    /// Panel sits below-left; top-right corner nearest the button.
    TopRight,
    /// Panel sits below-right; top-left corner nearest the button.
    TopLeft,
    /// Panel sits left of the button, vertically centered; right edge
    /// nearest the button.
    RightCenter,
    /// Panel sits right of the button, vertically centered; left edge
    /// nearest the button.
    LeftCenter,
}

impl PlacementOrigin {
    /// Candidate origins in solver priority order.
    pub const RANKED: [Self; 6] = [
        Self::BottomRight,
        Self::BottomLeft,
        Self::TopRight,
        Self::TopLeft,
        Self::RightCenter,
        Self::LeftCenter,
    ];
}

/// A solved panel placement: top-left position plus the origin tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelPlacement {
    /// Top-left corner of the panel.
    pub position: Point,
    /// Which candidate produced this placement.
    pub origin: PlacementOrigin,
}

/// Panel top-left for a candidate origin, anchored at the button.
///
/// Horizontal alignment keeps one button-width of overlap with the
/// button column: the above/below-left candidates align the panel's
/// right edge with the button's right edge, the above/below-right
/// candidates align left edges. The side candidates center vertically
/// on the button.
#[must_use]
pub fn panel_from_button(
    anchor: Point,
    origin: PlacementOrigin,
    metrics: &PlacementMetrics,
) -> Point {
    let button = metrics.button_size;
    let panel = metrics.panel_size;
    let gap = metrics.gap;
    match origin {
        PlacementOrigin::BottomRight => Point::new(
            anchor.x + button.width - panel.width,
            anchor.y - panel.height - gap,
        ),
        PlacementOrigin::BottomLeft => Point::new(anchor.x, anchor.y - panel.height - gap),
        PlacementOrigin::TopRight => Point::new(
            anchor.x + button.width - panel.width,
            anchor.y + button.height + gap,
        ),
        PlacementOrigin::TopLeft => Point::new(anchor.x, anchor.y + button.height + gap),
        PlacementOrigin::RightCenter => Point::new(
            anchor.x - panel.width - gap,
            anchor.y + (button.height - panel.height) / 2.0,
        ),
        PlacementOrigin::LeftCenter => Point::new(
            anchor.x + button.width + gap,
            anchor.y + (button.height - panel.height) / 2.0,
        ),
    }
}

/// Invert [`panel_from_button`]: derive the button position from the
/// panel's top-left and the origin that produced its placement.
///
/// Pure and idempotent: calling it twice for an unmoved panel yields
/// the same button position. The caller clamps the result into the
/// viewport afterwards.
#[must_use]
pub fn button_from_panel(
    panel_pos: Point,
    origin: PlacementOrigin,
    metrics: &PlacementMetrics,
) -> Point {
    let button = metrics.button_size;
    let panel = metrics.panel_size;
    let gap = metrics.gap;
    match origin {
        PlacementOrigin::BottomRight => Point::new(
            panel_pos.x + panel.width - button.width,
            panel_pos.y + panel.height + gap,
        ),
        PlacementOrigin::BottomLeft => Point::new(panel_pos.x, panel_pos.y + panel.height + gap),
        PlacementOrigin::TopRight => Point::new(
            panel_pos.x + panel.width - button.width,
            panel_pos.y - button.height - gap,
        ),
        PlacementOrigin::TopLeft => Point::new(panel_pos.x, panel_pos.y - button.height - gap),
        PlacementOrigin::RightCenter => Point::new(
            panel_pos.x + panel.width + gap,
            panel_pos.y + (panel.height - button.height) / 2.0,
        ),
        PlacementOrigin::LeftCenter => Point::new(
            panel_pos.x - button.width - gap,
            panel_pos.y + (panel.height - button.height) / 2.0,
        ),
    }
}

/// Check whether a panel at `position` fits inside the viewport with
/// the configured margin on every side.
#[must_use]
pub fn fits(position: Point, viewport: Size, metrics: &PlacementMetrics) -> bool {
    let bounds = Rect::at(Point::ORIGIN, viewport).inset(metrics.fit_margin);
    Rect::at(position, metrics.panel_size).inside(&bounds)
}

/// Solve the panel placement for the given anchor and viewport.
///
/// Returns the first fitting candidate in [`PlacementOrigin::RANKED`]
/// order. When no candidate fits (viewport smaller than the panel, or
/// the button cornered so tightly that every side overflows), the
/// top-ranked candidate is clamped into `[0, viewport - panel]` and
/// returned; it may overlap the button but is never off-screen.
#[must_use]
pub fn solve(anchor: Point, viewport: Size, metrics: &PlacementMetrics) -> PanelPlacement {
    for origin in PlacementOrigin::RANKED {
        let position = panel_from_button(anchor, origin, metrics);
        if fits(position, viewport, metrics) {
            return PanelPlacement { position, origin };
        }
    }

    let first = PlacementOrigin::RANKED[0];
    let position = panel_from_button(anchor, first, metrics)
        .clamp_within(viewport, metrics.panel_size);
    PanelPlacement {
        position,
        origin: first,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn metrics() -> PlacementMetrics {
        PlacementMetrics::default()
    }

    #[test]
    fn test_metrics_default() {
        let m = metrics();
        assert_eq!(m.button_size, Size::new(40.0, 40.0));
        assert_eq!(m.panel_size, Size::new(320.0, 440.0));
        assert_eq!(m.gap, 16.0);
        assert_eq!(m.fit_margin, 8.0);
    }

    #[test]
    fn test_ranked_order() {
        assert_eq!(PlacementOrigin::RANKED[0], PlacementOrigin::BottomRight);
        assert_eq!(PlacementOrigin::RANKED[5], PlacementOrigin::LeftCenter);
        assert_eq!(PlacementOrigin::RANKED.len(), 6);
    }

    #[test]
    fn test_bottom_corner_selects_above_left() {
        // Button near the bottom-right of a desktop viewport: the
        // above-left candidate is the first that fits.
        let placement = solve(
            Point::new(1850.0, 1000.0),
            Size::new(1920.0, 1080.0),
            &metrics(),
        );
        assert_eq!(placement.origin, PlacementOrigin::BottomRight);
        assert_eq!(placement.position, Point::new(1570.0, 544.0));
    }

    #[test]
    fn test_top_corner_selects_first_below_candidate() {
        // Button at the top-left: both above candidates overflow the top
        // edge, below-left overflows the left edge, below-right fits.
        let placement = solve(Point::new(10.0, 10.0), Size::new(400.0, 600.0), &metrics());
        assert_eq!(placement.origin, PlacementOrigin::TopLeft);
        assert_eq!(placement.position, Point::new(10.0, 66.0));
    }

    #[test]
    fn test_fallback_clamps_first_candidate() {
        // Viewport smaller than the panel: nothing fits, candidate 1 is
        // clamped. Coordinates must stay non-negative and in bounds.
        let viewport = Size::new(300.0, 300.0);
        let placement = solve(Point::new(150.0, 150.0), viewport, &metrics());
        assert_eq!(placement.origin, PlacementOrigin::BottomRight);
        assert!(placement.position.x >= 0.0);
        assert!(placement.position.y >= 0.0);
        assert!(placement.position.x <= (viewport.width - 320.0).max(0.0));
        assert!(placement.position.y <= (viewport.height - 440.0).max(0.0));
    }

    #[test]
    fn test_side_candidate_when_above_and_below_blocked() {
        // Short, wide viewport: no vertical room above or below, but
        // plenty to the left of a right-edge button.
        let placement = solve(
            Point::new(1800.0, 210.0),
            Size::new(1920.0, 460.0),
            &metrics(),
        );
        assert_eq!(placement.origin, PlacementOrigin::RightCenter);
        assert_eq!(placement.position, Point::new(1464.0, 10.0));
    }

    #[test]
    fn test_fits_respects_margin() {
        let m = metrics();
        let viewport = Size::new(400.0, 600.0);
        // Exactly on the margin fits; one pixel past it does not.
        assert!(fits(Point::new(8.0, 66.0), viewport, &m));
        assert!(!fits(Point::new(7.0, 66.0), viewport, &m));
        assert!(!fits(Point::new(73.0, 66.0), viewport, &m)); // 73+320 > 392
    }

    #[test]
    fn test_inverse_roundtrip_all_origins() {
        let m = metrics();
        let anchor = Point::new(500.0, 400.0);
        for origin in PlacementOrigin::RANKED {
            let panel = panel_from_button(anchor, origin, &m);
            let back = button_from_panel(panel, origin, &m);
            assert!(
                (back.x - anchor.x).abs() < 0.001 && (back.y - anchor.y).abs() < 0.001,
                "origin {origin:?} did not invert: {back:?}"
            );
        }
    }

    #[test]
    fn test_inverse_is_idempotent() {
        let m = metrics();
        let panel_pos = Point::new(120.0, 80.0);
        let once = button_from_panel(panel_pos, PlacementOrigin::TopLeft, &m);
        let twice = button_from_panel(panel_pos, PlacementOrigin::TopLeft, &m);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_placement_serde_roundtrip() {
        let placement = PanelPlacement {
            position: Point::new(100.0, 200.0),
            origin: PlacementOrigin::LeftCenter,
        };
        let json = serde_json::to_string(&placement).expect("serializes");
        let back: PanelPlacement = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, placement);
    }

    proptest! {
        #[test]
        fn prop_solver_is_deterministic(
            bx in 0.0f32..2000.0, by in 0.0f32..2000.0,
            vw in 100.0f32..3000.0, vh in 100.0f32..3000.0
        ) {
            let m = metrics();
            let anchor = Point::new(bx, by);
            let viewport = Size::new(vw, vh);
            let a = solve(anchor, viewport, &m);
            let b = solve(anchor, viewport, &m);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_solution_never_negative(
            bx in 0.0f32..2000.0, by in 0.0f32..2000.0,
            vw in 50.0f32..3000.0, vh in 50.0f32..3000.0
        ) {
            let m = metrics();
            let placement = solve(Point::new(bx, by), Size::new(vw, vh), &m);
            prop_assert!(placement.position.x >= 0.0);
            prop_assert!(placement.position.y >= 0.0);
        }

        #[test]
        fn prop_fitting_solution_inside_viewport(
            bx in 0.0f32..2000.0, by in 0.0f32..2000.0,
            vw in 700.0f32..3000.0, vh in 900.0f32..3000.0
        ) {
            // Viewports comfortably larger than the panel: whichever
            // candidate wins, the panel lies fully inside the viewport.
            let m = metrics();
            let viewport = Size::new(vw, vh);
            let placement = solve(Point::new(bx, by), viewport, &m);
            let panel = Rect::at(placement.position, m.panel_size);
            prop_assert!(panel.bottom_right().x <= vw);
            prop_assert!(panel.bottom_right().y <= vh);
        }

        #[test]
        fn prop_inverse_roundtrip(
            bx in -500.0f32..2500.0, by in -500.0f32..2500.0
        ) {
            let m = metrics();
            let anchor = Point::new(bx, by);
            for origin in PlacementOrigin::RANKED {
                let panel = panel_from_button(anchor, origin, &m);
                let back = button_from_panel(panel, origin, &m);
                prop_assert!((back.x - anchor.x).abs() < 0.01);
                prop_assert!((back.y - anchor.y).abs() < 0.01);
            }
        }
    }
}
