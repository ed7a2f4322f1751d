//! Corner resize handles.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::geometry::WidgetRect;

/// One of the four corner resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Dragging moves the left edge.
    pub fn moves_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    /// Dragging moves the right edge.
    pub fn moves_right(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight)
    }

    /// Dragging moves the top edge.
    pub fn moves_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    /// Dragging moves the bottom edge.
    pub fn moves_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::BottomRight)
    }
}

/// A resize handle with its position in virtual coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Handle {
    pub corner: Corner,
    pub position: Point,
}

impl Handle {
    pub fn new(corner: Corner, position: Point) -> Self {
        Self { corner, position }
    }

    /// Check if a point hits this handle within a square tolerance.
    pub fn hit_test(&self, point: Point, tolerance_x: f64, tolerance_y: f64) -> bool {
        (point.x - self.position.x).abs() <= tolerance_x
            && (point.y - self.position.y).abs() <= tolerance_y
    }
}

/// The four corner handles of a widget.
pub fn corner_handles(rect: WidgetRect) -> [Handle; 4] {
    let bounds = rect.to_rect();
    [
        Handle::new(Corner::TopLeft, Point::new(bounds.x0, bounds.y0)),
        Handle::new(Corner::TopRight, Point::new(bounds.x1, bounds.y0)),
        Handle::new(Corner::BottomLeft, Point::new(bounds.x0, bounds.y1)),
        Handle::new(Corner::BottomRight, Point::new(bounds.x1, bounds.y1)),
    ]
}

/// Find the handle under a virtual-space point.
///
/// Tolerances are in virtual units; callers scale the screen-pixel hit
/// radius per axis since the canvas scale can differ between x and y.
pub fn hit_test_handle(
    rect: WidgetRect,
    point: Point,
    tolerance_x: f64,
    tolerance_y: f64,
) -> Option<Corner> {
    corner_handles(rect)
        .into_iter()
        .find(|h| h.hit_test(point, tolerance_x, tolerance_y))
        .map(|h| h.corner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_edges() {
        assert!(Corner::TopLeft.moves_left() && Corner::TopLeft.moves_top());
        assert!(!Corner::TopLeft.moves_right() && !Corner::TopLeft.moves_bottom());
        assert!(Corner::BottomRight.moves_right() && Corner::BottomRight.moves_bottom());
    }

    #[test]
    fn test_handle_positions() {
        let handles = corner_handles(WidgetRect::new(100, 100, 200, 150));
        assert_eq!(handles[0].position, Point::new(100.0, 100.0));
        assert_eq!(handles[3].position, Point::new(300.0, 250.0));
    }

    #[test]
    fn test_hit_test_handle() {
        let rect = WidgetRect::new(100, 100, 200, 150);
        assert_eq!(
            hit_test_handle(rect, Point::new(298.0, 103.0), 5.0, 5.0),
            Some(Corner::TopRight)
        );
        assert_eq!(hit_test_handle(rect, Point::new(200.0, 175.0), 5.0, 5.0), None);
    }
}
