//! Value types for positions, sizes, and bounding rectangles.
//!
//! Coordinates are `f32` throughout. The diagram model uses a y-up unit
//! space; the SVG exporter maps it into a y-down pixel space. Both spaces
//! share these types.

/// A point in 2D space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns a new point translated by the given deltas
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Converts a point and size into a bounds rectangle
    ///
    /// The point is treated as the center of the bounds, and the size
    /// is distributed equally in all directions around that center.
    pub fn to_bounds(self, size: Size) -> Bounds {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;

        Bounds {
            min_x: self.x - half_width,
            min_y: self.y - half_height,
            max_x: self.x + half_width,
            max_y: self.y + half_height,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Multiplies both dimensions by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// An axis-aligned bounding rectangle.
///
/// Interpretation of min/max follows the containing coordinate space: in the
/// diagram's y-up space `min_y` is the bottom edge, in pixel space the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// An empty bounds that any union will replace.
    ///
    /// `min` starts at positive infinity and `max` at negative infinity, so
    /// the first included point or rectangle defines the bounds outright.
    pub fn empty() -> Self {
        Self {
            min_x: f32::INFINITY,
            min_y: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            max_y: f32::NEG_INFINITY,
        }
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the size spanned by these bounds
    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Grows the bounds to include the given point
    pub fn include_point(self, point: Point) -> Self {
        Self {
            min_x: self.min_x.min(point.x()),
            min_y: self.min_y.min(point.y()),
            max_x: self.max_x.max(point.x()),
            max_y: self.max_y.max(point.y()),
        }
    }

    /// Returns the union of this bounds with another
    pub fn union(self, other: Bounds) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Expands the bounds outward by the given amount on every side
    pub fn expand(self, amount: f32) -> Self {
        Self {
            min_x: self.min_x - amount,
            min_y: self.min_y - amount,
            max_x: self.max_x + amount,
            max_y: self.max_y + amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_to_bounds_centers_the_size() {
        let bounds = Point::new(5.0, 5.0).to_bounds(Size::new(4.0, 2.0));
        assert_eq!(bounds, Bounds::new(3.0, 4.0, 7.0, 6.0));
    }

    #[test]
    fn empty_bounds_collapse_to_first_inclusion() {
        let bounds = Bounds::empty().include_point(Point::new(2.0, 3.0));
        assert_eq!(bounds.min_x(), 2.0);
        assert_eq!(bounds.max_x(), 2.0);
        assert_eq!(bounds.min_y(), 3.0);
        assert_eq!(bounds.max_y(), 3.0);
    }

    #[test]
    fn union_and_expand_grow_bounds() {
        let a = Bounds::new(0.0, 0.0, 2.0, 2.0);
        let b = Bounds::new(1.0, -1.0, 4.0, 1.0);
        let joined = a.union(b);
        assert_eq!(joined, Bounds::new(0.0, -1.0, 4.0, 2.0));

        let expanded = joined.expand(0.5);
        assert_eq!(expanded, Bounds::new(-0.5, -1.5, 4.5, 2.5));
        assert_eq!(expanded.width(), 5.0);
        assert_eq!(expanded.height(), 4.0);
    }
}
