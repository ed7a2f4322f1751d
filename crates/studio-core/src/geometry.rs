//! Virtual canvas geometry and the screen-to-canvas transform.
//!
//! Widgets live in a fixed 1920x1080 logical space. The canvas is rendered at
//! whatever size the window allows, so pointer input has to be scaled back
//! into virtual units before it can move or resize anything.

use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Width of the virtual broadcast frame.
pub const VIRTUAL_WIDTH: f64 = 1920.0;
/// Height of the virtual broadcast frame.
pub const VIRTUAL_HEIGHT: f64 = 1080.0;
/// Smallest width or height a widget can be resized to.
pub const MIN_WIDGET_SIZE: i32 = 20;

/// Round to the nearest whole unit, with halves rounding up.
pub fn round_unit(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Widget geometry in virtual canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl WidgetRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// As a kurbo rectangle (x0, y0, x1, y1).
    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.x as f64,
            self.y as f64,
            (self.x + self.width) as f64,
            (self.y + self.height) as f64,
        )
    }

    /// Whether a virtual-space point falls inside the widget.
    pub fn contains(self, point: Point) -> bool {
        self.to_rect().contains(point)
    }

    /// Position and size as percentages of the virtual frame.
    ///
    /// The view places widgets with these so the layout survives any
    /// rendered canvas size.
    pub fn percent(self) -> (f64, f64, f64, f64) {
        (
            self.x as f64 / VIRTUAL_WIDTH * 100.0,
            self.y as f64 / VIRTUAL_HEIGHT * 100.0,
            self.width as f64 / VIRTUAL_WIDTH * 100.0,
            self.height as f64 / VIRTUAL_HEIGHT * 100.0,
        )
    }

    /// Read one field.
    pub fn get(self, field: RectField) -> i32 {
        match field {
            RectField::X => self.x,
            RectField::Y => self.y,
            RectField::Width => self.width,
            RectField::Height => self.height,
        }
    }

    /// Return a copy with one field replaced.
    pub fn with(mut self, field: RectField, value: i32) -> Self {
        match field {
            RectField::X => self.x = value,
            RectField::Y => self.y = value,
            RectField::Width => self.width = value,
            RectField::Height => self.height = value,
        }
        self
    }
}

/// A single editable geometry field in the properties form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RectField {
    X,
    Y,
    Width,
    Height,
}

impl RectField {
    pub const ALL: [RectField; 4] = [Self::X, Self::Y, Self::Width, Self::Height];

    /// Form label.
    pub fn label(self) -> &'static str {
        match self {
            Self::X => "X 위치",
            Self::Y => "Y 위치",
            Self::Width => "너비 (Width)",
            Self::Height => "높이 (Height)",
        }
    }

    /// Whether the field is a size (subject to the minimum floor).
    pub fn is_size(self) -> bool {
        matches!(self, Self::Width | Self::Height)
    }
}

/// Where the virtual canvas is currently drawn on screen.
///
/// Converts between screen pixels and virtual units. Equivalent to a camera
/// with independent x/y zoom and no pan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasViewport {
    /// The rendered canvas bounds in screen pixels.
    pub screen: Rect,
}

impl Default for CanvasViewport {
    fn default() -> Self {
        Self {
            screen: Rect::new(0.0, 0.0, VIRTUAL_WIDTH, VIRTUAL_HEIGHT),
        }
    }
}

impl CanvasViewport {
    pub fn new(screen: Rect) -> Self {
        Self { screen }
    }

    /// The largest 16:9 rectangle centered in `available`.
    pub fn fit(available: Rect) -> Self {
        let aspect = VIRTUAL_WIDTH / VIRTUAL_HEIGHT;
        let mut size = Size::new(available.width(), available.width() / aspect);
        if size.height > available.height() {
            size = Size::new(available.height() * aspect, available.height());
        }
        Self {
            screen: Rect::from_center_size(available.center(), size),
        }
    }

    /// Virtual units per screen pixel on each axis.
    pub fn scale(&self) -> Vec2 {
        Vec2::new(
            VIRTUAL_WIDTH / self.screen.width().max(1.0),
            VIRTUAL_HEIGHT / self.screen.height().max(1.0),
        )
    }

    /// Convert a screen-space movement into virtual units.
    pub fn screen_delta_to_virtual(&self, delta: Vec2) -> Vec2 {
        let scale = self.scale();
        Vec2::new(delta.x * scale.x, delta.y * scale.y)
    }

    /// Convert a screen point into virtual canvas coordinates.
    pub fn screen_to_virtual(&self, point: Point) -> Point {
        let offset = self.screen_delta_to_virtual(point - self.screen.origin());
        Point::new(offset.x, offset.y)
    }

    /// Convert a virtual point into screen coordinates.
    pub fn virtual_to_screen(&self, point: Point) -> Point {
        let scale = self.scale();
        self.screen.origin() + Vec2::new(point.x / scale.x, point.y / scale.y)
    }

    /// Screen rectangle for a widget, placed by its percentage offsets.
    pub fn widget_to_screen(&self, rect: WidgetRect) -> Rect {
        let (left, top, width, height) = rect.percent();
        let x0 = self.screen.x0 + self.screen.width() * left / 100.0;
        let y0 = self.screen.y0 + self.screen.height() * top / 100.0;
        Rect::new(
            x0,
            y0,
            x0 + self.screen.width() * width / 100.0,
            y0 + self.screen.height() * height / 100.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_unit_halves_round_up() {
        assert_eq!(round_unit(2.5), 3);
        assert_eq!(round_unit(-2.5), -2);
        assert_eq!(round_unit(-2.6), -3);
        assert_eq!(round_unit(7.49), 7);
    }

    #[test]
    fn test_scale_half_size_canvas() {
        let viewport = CanvasViewport::new(Rect::new(0.0, 0.0, 960.0, 540.0));
        let scale = viewport.scale();
        assert!((scale.x - 2.0).abs() < f64::EPSILON);
        assert!((scale.y - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_to_virtual_with_offset() {
        let viewport = CanvasViewport::new(Rect::new(100.0, 50.0, 580.0, 320.0));
        let point = viewport.screen_to_virtual(Point::new(340.0, 185.0));
        assert!((point.x - 960.0).abs() < 1e-9);
        assert!((point.y - 540.0).abs() < 1e-9);
    }

    #[test]
    fn test_roundtrip_conversion() {
        let viewport = CanvasViewport::new(Rect::new(32.0, 18.0, 1312.0, 738.0));
        let original = Point::new(123.0, 456.0);
        let back = viewport.virtual_to_screen(viewport.screen_to_virtual(original));
        assert!((back.x - original.x).abs() < 1e-9);
        assert!((back.y - original.y).abs() < 1e-9);
    }

    #[test]
    fn test_fit_letterboxes_wide_area() {
        let viewport = CanvasViewport::fit(Rect::new(0.0, 0.0, 2000.0, 540.0));
        assert!((viewport.screen.width() - 960.0).abs() < 1e-9);
        assert!((viewport.screen.height() - 540.0).abs() < 1e-9);
        assert!((viewport.screen.x0 - 520.0).abs() < 1e-9);
    }

    #[test]
    fn test_widget_to_screen_uses_percentages() {
        let viewport = CanvasViewport::new(Rect::new(0.0, 0.0, 960.0, 540.0));
        let rect = viewport.widget_to_screen(WidgetRect::new(320, 180, 640, 360));
        assert!((rect.x0 - 160.0).abs() < 1e-9);
        assert!((rect.y0 - 90.0).abs() < 1e-9);
        assert!((rect.width() - 320.0).abs() < 1e-9);
        assert!((rect.height() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_rect_field_access() {
        let rect = WidgetRect::new(1, 2, 3, 4).with(RectField::Height, 40);
        assert_eq!(rect.get(RectField::Height), 40);
        assert_eq!(rect.get(RectField::X), 1);
        assert!(RectField::Width.is_size());
        assert!(!RectField::Y.is_size());
    }
}
