//! The cell grid all rooms and corridors are carved into.

use nalgebra::Point2;

use crate::Rectangle;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Solid rock, not yet excavated.
    #[default]
    Wall,
    /// Excavated, walkable cell.
    Floor,
}

/// A fixed-size, row-major grid of cells.
///
/// The grid starts out as solid wall and only ever changes by carving floor
/// into it. Its dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid of the given size filled with [`Cell::Wall`].
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Wall; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the rectangle covering the whole grid.
    ///
    /// Returns `None` for a grid with a zero dimension or one too large to be
    /// addressed with `i32` coordinates.
    pub fn bounds(&self) -> Option<Rectangle> {
        let width = i32::try_from(self.width).ok().filter(|w| *w > 0)?;
        let height = i32::try_from(self.height).ok().filter(|h| *h > 0)?;
        Some(Rectangle::new(0, 0, width, height))
    }

    /// Maps a cell coordinate to its index in the backing vector.
    fn index(&self, point: Point2<i32>) -> Option<usize> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Returns the cell at `point`, or `None` if it lies outside the grid.
    pub fn get(&self, point: Point2<i32>) -> Option<Cell> {
        self.index(point).map(|i| self.cells[i])
    }

    /// Returns `true` if `point` is inside the grid and has been carved.
    pub fn is_floor(&self, point: Point2<i32>) -> bool {
        self.get(point) == Some(Cell::Floor)
    }

    /// Turns a single cell into floor.
    ///
    /// Returns `true` if the cell changed. Carving a cell that is already
    /// floor, or one outside the grid, leaves the grid untouched.
    pub fn carve(&mut self, point: Point2<i32>) -> bool {
        match self.index(point) {
            Some(i) if self.cells[i] == Cell::Wall => {
                self.cells[i] = Cell::Floor;
                true
            }
            _ => false,
        }
    }

    /// Carves every cell of `rect`. Returns the number of cells that changed.
    pub fn carve_rect(&mut self, rect: &Rectangle) -> usize {
        rect.cells().filter(|p| self.carve(*p)).count()
    }

    /// Carves row `y` from `x1` to `x2`, both ends inclusive, in either order.
    pub fn carve_horizontal(&mut self, y: i32, x1: i32, x2: i32) -> usize {
        (x1.min(x2)..=x1.max(x2))
            .filter(|x| self.carve(Point2::new(*x, y)))
            .count()
    }

    /// Carves column `x` from `y1` to `y2`, both ends inclusive, in either order.
    pub fn carve_vertical(&mut self, x: i32, y1: i32, y2: i32) -> usize {
        (y1.min(y2)..=y1.max(y2))
            .filter(|y| self.carve(Point2::new(x, *y)))
            .count()
    }

    /// Number of floor cells.
    pub fn floor_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Floor).count()
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // `chunks` panics on zero, an empty grid simply has no rows.
        self.cells.chunks(self.width.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_wall() {
        let grid = Grid::new(5, 3);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.floor_count(), 0);
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(|row| row.len() == 5));
    }

    #[test]
    fn bounds_cover_grid() {
        assert_eq!(Grid::new(80, 25).bounds(), Some(Rectangle::new(0, 0, 80, 25)));
        assert_eq!(Grid::new(0, 25).bounds(), None);
    }

    #[test]
    fn carve_is_idempotent() {
        let mut grid = Grid::new(4, 4);
        let p = Point2::new(1, 2);

        assert!(grid.carve(p));
        let snapshot = grid.clone();
        assert!(!grid.carve(p));

        assert_eq!(grid, snapshot);
        assert_eq!(grid.floor_count(), 1);
        assert!(grid.is_floor(p));
    }

    #[test]
    fn carve_outside_is_ignored() {
        let mut grid = Grid::new(4, 4);
        assert!(!grid.carve(Point2::new(-1, 0)));
        assert!(!grid.carve(Point2::new(4, 0)));
        assert!(!grid.carve(Point2::new(0, 4)));
        assert_eq!(grid.floor_count(), 0);
        assert_eq!(grid.get(Point2::new(4, 0)), None);
    }

    #[test]
    fn carve_rect_counts_new_cells() {
        let mut grid = Grid::new(10, 10);
        assert_eq!(grid.carve_rect(&Rectangle::new(1, 1, 3, 2)), 6);
        // Overlapping rectangle only adds the cells not carved yet.
        assert_eq!(grid.carve_rect(&Rectangle::new(2, 1, 3, 2)), 2);
        assert_eq!(grid.floor_count(), 8);
    }

    #[test]
    fn runs_are_inclusive_in_both_directions() {
        let mut grid = Grid::new(10, 10);
        assert_eq!(grid.carve_horizontal(3, 7, 2), 6);
        assert!(grid.is_floor(Point2::new(2, 3)));
        assert!(grid.is_floor(Point2::new(7, 3)));

        assert_eq!(grid.carve_vertical(5, 0, 5), 5);
        assert!(grid.is_floor(Point2::new(5, 0)));
        assert!(grid.is_floor(Point2::new(5, 5)));
        assert_eq!(grid.floor_count(), 11);
    }
}
