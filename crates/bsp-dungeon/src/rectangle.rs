//! Axis-aligned integer rectangles used for partitions and rooms.

use nalgebra::{Point2, Vector2};

/// Orientation of the cut line used to split a rectangle in two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitAxis {
    /// The cut line runs horizontally: children are stacked top and bottom,
    /// the split offset is measured along `y`.
    Horizontal,
    /// The cut line runs vertically: children sit left and right,
    /// the split offset is measured along `x`.
    Vertical,
}

/// An axis-aligned rectangle on the cell grid.
///
/// The rectangle covers the half-open ranges `x..x + width` and
/// `y..y + height`, with the origin in the top-left corner and `y` growing
/// downwards. Width and height are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    origin: Point2<i32>,
    size: Vector2<i32>,
}

impl Rectangle {
    /// Creates a rectangle from its top-left corner and extents.
    ///
    /// # Panics (debug builds only)
    /// Panics if `width` or `height` is not positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        debug_assert!(
            width > 0 && height > 0,
            "Rectangle extents must be positive, got {width}x{height}"
        );
        Self {
            origin: Point2::new(x, y),
            size: Vector2::new(width, height),
        }
    }

    /// Creates a rectangle from an origin point and a size vector.
    pub fn from_origin_size(origin: Point2<i32>, size: Vector2<i32>) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.origin.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.origin.y
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// Returns the top-left corner.
    #[inline]
    pub fn origin(&self) -> Point2<i32> {
        self.origin
    }

    /// Returns the extents as a vector `(width, height)`.
    #[inline]
    pub fn size(&self) -> Vector2<i32> {
        self.size
    }

    /// One past the right-most column.
    #[inline]
    pub fn right(&self) -> i32 {
        self.origin.x + self.size.x
    }

    /// One past the bottom-most row.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.origin.y + self.size.y
    }

    /// Returns the center cell.
    ///
    /// Uses integer division, so for even extents the center leans towards
    /// the top-left corner.
    pub fn center(&self) -> Point2<i32> {
        Point2::new(
            self.origin.x + self.size.x / 2,
            self.origin.y + self.size.y / 2,
        )
    }

    /// Number of cells covered.
    pub fn area(&self) -> i64 {
        i64::from(self.size.x) * i64::from(self.size.y)
    }

    /// Returns `true` if the cell lies inside this rectangle.
    pub fn contains_point(&self, point: Point2<i32>) -> bool {
        point.x >= self.x() && point.x < self.right() && point.y >= self.y() && point.y < self.bottom()
    }

    /// Returns `true` if `other` lies entirely inside this rectangle.
    pub fn contains(&self, other: &Rectangle) -> bool {
        other.x() >= self.x()
            && other.y() >= self.y()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Returns `true` if the two rectangles share at least one cell.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.x() < other.right()
            && other.x() < self.right()
            && self.y() < other.bottom()
            && other.y() < self.bottom()
    }

    /// Returns the extent measured along the split offset direction.
    ///
    /// That is the height for a horizontal cut and the width for a vertical one.
    pub fn extent_along(&self, axis: SplitAxis) -> i32 {
        match axis {
            SplitAxis::Horizontal => self.height(),
            SplitAxis::Vertical => self.width(),
        }
    }

    /// Cuts the rectangle in two at `offset` cells from its origin.
    ///
    /// Returns `(first, second)` where `first` holds the origin corner. The
    /// two halves are disjoint and together cover `self` exactly.
    ///
    /// # Panics (debug builds only)
    /// Panics if `offset` does not leave both halves non-empty.
    pub fn split(&self, axis: SplitAxis, offset: i32) -> (Rectangle, Rectangle) {
        debug_assert!(
            offset > 0 && offset < self.extent_along(axis),
            "split offset {offset} out of range for {self:?}"
        );
        match axis {
            SplitAxis::Horizontal => (
                Rectangle::new(self.x(), self.y(), self.width(), offset),
                Rectangle::new(self.x(), self.y() + offset, self.width(), self.height() - offset),
            ),
            SplitAxis::Vertical => (
                Rectangle::new(self.x(), self.y(), offset, self.height()),
                Rectangle::new(self.x() + offset, self.y(), self.width() - offset, self.height()),
            ),
        }
    }

    /// Iterates over every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Point2<i32>> + '_ {
        (self.y()..self.bottom())
            .flat_map(move |y| (self.x()..self.right()).map(move |x| Point2::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let rect = Rectangle::new(3, 4, 10, 6);
        assert_eq!(rect.x(), 3);
        assert_eq!(rect.y(), 4);
        assert_eq!(rect.width(), 10);
        assert_eq!(rect.height(), 6);
        assert_eq!(rect.right(), 13);
        assert_eq!(rect.bottom(), 10);
        assert_eq!(rect.area(), 60);
    }

    #[test]
    fn center_truncates_towards_origin() {
        assert_eq!(Rectangle::new(0, 0, 8, 8).center(), Point2::new(4, 4));
        assert_eq!(Rectangle::new(0, 0, 9, 9).center(), Point2::new(4, 4));
        assert_eq!(Rectangle::new(10, 2, 1, 3).center(), Point2::new(10, 3));
    }

    #[test]
    fn horizontal_split_stacks_children() {
        let rect = Rectangle::new(2, 3, 20, 17);
        let (top, bottom) = rect.split(SplitAxis::Horizontal, 8);

        assert_eq!(top, Rectangle::new(2, 3, 20, 8));
        assert_eq!(bottom, Rectangle::new(2, 11, 20, 9));
        assert!(!top.intersects(&bottom));
        assert_eq!(top.area() + bottom.area(), rect.area());
    }

    #[test]
    fn vertical_split_places_children_side_by_side() {
        let rect = Rectangle::new(0, 0, 40, 10);
        let (left, right) = rect.split(SplitAxis::Vertical, 15);

        assert_eq!(left, Rectangle::new(0, 0, 15, 10));
        assert_eq!(right, Rectangle::new(15, 0, 25, 10));
        assert!(rect.contains(&left));
        assert!(rect.contains(&right));
    }

    #[test]
    fn containment_and_intersection() {
        let outer = Rectangle::new(0, 0, 10, 10);
        let inner = Rectangle::new(2, 2, 8, 8);
        let overhang = Rectangle::new(5, 5, 6, 2);
        let apart = Rectangle::new(10, 0, 3, 3);

        assert!(outer.contains(&inner));
        assert!(!outer.contains(&overhang));
        assert!(outer.intersects(&overhang));
        assert!(!outer.intersects(&apart));
        assert!(outer.contains_point(Point2::new(9, 9)));
        assert!(!outer.contains_point(Point2::new(10, 9)));
    }

    #[test]
    fn cells_are_row_major() {
        let rect = Rectangle::new(1, 1, 2, 2);
        let cells: Vec<_> = rect.cells().collect();
        assert_eq!(
            cells,
            vec![
                Point2::new(1, 1),
                Point2::new(2, 1),
                Point2::new(1, 2),
                Point2::new(2, 2),
            ]
        );
    }
}
