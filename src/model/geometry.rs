//! Geometry primitives shared by layout, hit-testing, and mask math.
//!
//! Plain `f32` value types. The coordinate space is the control's own
//! bounds: x grows rightward, y grows downward, origin at the top-left
//! corner of the control.

/// A point in control-local coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// Create a size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent.
    pub size: Size,
}

impl Rect {
    /// Create a rectangle from origin and size components.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Leftmost x coordinate.
    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    /// Rightmost x coordinate.
    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Whether `x` falls within `[min_x, max_x]` (both edges inclusive,
    /// matching closed-range segment hit-testing).
    pub fn contains_x(&self, x: f32) -> bool {
        (self.min_x()..=self.max_x()).contains(&x)
    }
}
