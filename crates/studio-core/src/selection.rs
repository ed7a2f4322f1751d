//! Move and resize math, and the state of an in-progress drag.

use kurbo::{Point, Vec2};

use crate::geometry::{CanvasViewport, MIN_WIDGET_SIZE, WidgetRect, round_unit};
use crate::input::CaptureGuard;
use crate::widget::{Corner, WidgetId};

/// Apply a drag delta (in virtual units) to a widget's starting geometry.
///
/// With no handle the whole widget moves. With a corner handle each axis is
/// handled independently: dragging the left or top edge keeps the opposite
/// edge fixed and stops `MIN_WIDGET_SIZE` short of it, dragging the right or
/// bottom edge only changes the size. Every field of the result is rounded
/// to whole units.
pub fn apply_manipulation(original: WidgetRect, handle: Option<Corner>, delta: Vec2) -> WidgetRect {
    let ix = original.x as f64;
    let iy = original.y as f64;
    let iw = original.width as f64;
    let ih = original.height as f64;
    let floor = MIN_WIDGET_SIZE as f64;

    let Some(corner) = handle else {
        return WidgetRect {
            x: round_unit(ix + delta.x),
            y: round_unit(iy + delta.y),
            ..original
        };
    };

    let (mut x, mut y, mut width, mut height) = (ix, iy, iw, ih);

    if corner.moves_left() {
        x = (ix + delta.x).min(ix + iw - floor);
        width = (iw - delta.x).max(floor);
    }
    if corner.moves_right() {
        width = (iw + delta.x).max(floor);
    }
    if corner.moves_top() {
        y = (iy + delta.y).min(iy + ih - floor);
        height = (ih - delta.y).max(floor);
    }
    if corner.moves_bottom() {
        height = (ih + delta.y).max(floor);
    }

    WidgetRect {
        x: round_unit(x),
        y: round_unit(y),
        width: round_unit(width),
        height: round_unit(height),
    }
}

/// State of an active drag on one widget.
///
/// Holds the pointer capture for as long as it lives.
#[derive(Debug)]
pub struct DragSession {
    /// The widget being dragged.
    pub widget_id: WidgetId,
    /// The handle being dragged (None = moving the whole widget).
    pub handle: Option<Corner>,
    /// Pointer position at drag start, in screen pixels.
    pub start_pointer: Point,
    /// Virtual units per screen pixel, measured once at drag start.
    pub scale: Vec2,
    /// Widget geometry at drag start.
    pub original: WidgetRect,
    capture: CaptureGuard,
}

impl DragSession {
    pub fn new(
        widget_id: WidgetId,
        handle: Option<Corner>,
        start_pointer: Point,
        viewport: &CanvasViewport,
        original: WidgetRect,
        capture: CaptureGuard,
    ) -> Self {
        Self {
            widget_id,
            handle,
            start_pointer,
            scale: viewport.scale(),
            original,
            capture,
        }
    }

    /// Pointer movement since drag start, in virtual units.
    pub fn delta(&self, pointer: Point) -> Vec2 {
        let moved = pointer - self.start_pointer;
        Vec2::new(moved.x * self.scale.x, moved.y * self.scale.y)
    }

    /// Geometry for the widget with the pointer at `pointer`.
    pub fn geometry_at(&self, pointer: Point) -> WidgetRect {
        apply_manipulation(self.original, self.handle, self.delta(pointer))
    }

    /// Whether this session still holds the pointer capture.
    pub fn holds_capture(&self) -> bool {
        self.capture.is_held()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerCapture;
    use kurbo::Rect;

    fn rect() -> WidgetRect {
        WidgetRect::new(100, 100, 200, 150)
    }

    #[test]
    fn test_move_rounds_position() {
        let result = apply_manipulation(rect(), None, Vec2::new(10.4, -3.6));
        assert_eq!(result, WidgetRect::new(110, 96, 200, 150));
    }

    #[test]
    fn test_top_left_resize() {
        let result = apply_manipulation(rect(), Some(Corner::TopLeft), Vec2::new(-30.0, 10.0));
        assert_eq!(result, WidgetRect::new(70, 110, 230, 140));
    }

    #[test]
    fn test_left_edge_stops_short_of_right_edge() {
        let result = apply_manipulation(rect(), Some(Corner::BottomLeft), Vec2::new(500.0, 0.0));
        assert_eq!(result.x, 280);
        assert_eq!(result.width, MIN_WIDGET_SIZE);
        // Right edge unchanged.
        assert_eq!(result.x + result.width, 300);
    }

    #[test]
    fn test_top_edge_stops_short_of_bottom_edge() {
        let result = apply_manipulation(rect(), Some(Corner::TopRight), Vec2::new(0.0, 1000.0));
        assert_eq!(result.y, 230);
        assert_eq!(result.height, MIN_WIDGET_SIZE);
    }

    #[test]
    fn test_bottom_right_resize_floor() {
        let result = apply_manipulation(rect(), Some(Corner::BottomRight), Vec2::new(-400.0, -400.0));
        assert_eq!(result, WidgetRect::new(100, 100, MIN_WIDGET_SIZE, MIN_WIDGET_SIZE));
    }

    #[test]
    fn test_resize_never_below_floor() {
        let deltas = [-1000.0, -250.5, -33.3, 0.0, 17.7, 149.5, 199.9, 500.0, 4000.0];
        for corner in Corner::ALL {
            for &dx in &deltas {
                for &dy in &deltas {
                    let result = apply_manipulation(rect(), Some(corner), Vec2::new(dx, dy));
                    assert!(result.width >= MIN_WIDGET_SIZE, "{corner:?} {dx} {dy}");
                    assert!(result.height >= MIN_WIDGET_SIZE, "{corner:?} {dx} {dy}");
                }
            }
        }
    }

    #[test]
    fn test_drag_session_scales_pointer() {
        let capture = PointerCapture::new();
        let id = WidgetId::new();
        let viewport = CanvasViewport::new(Rect::new(0.0, 0.0, 960.0, 540.0));
        let session = DragSession::new(
            id,
            None,
            Point::new(200.0, 200.0),
            &viewport,
            rect(),
            capture.acquire(id),
        );

        assert!(session.holds_capture());
        let geometry = session.geometry_at(Point::new(210.0, 195.0));
        assert_eq!(geometry, WidgetRect::new(120, 90, 200, 150));

        drop(session);
        assert!(!capture.is_captured());
    }
}
