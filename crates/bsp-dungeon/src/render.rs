//! Plain-text rendering of a grid.

use std::fmt;

use crate::{Cell, Glyphs, Grid};

/// Display adapter that prints a grid one row per line.
///
/// Every row is exactly `width` symbols followed by `'\n'`. Nothing else is
/// written: no header, no separators, no summary.
#[derive(Debug, Clone, Copy)]
pub struct AsciiMap<'a> {
    grid: &'a Grid,
    glyphs: Glyphs,
}

impl<'a> AsciiMap<'a> {
    pub fn new(grid: &'a Grid, glyphs: Glyphs) -> Self {
        Self { grid, glyphs }
    }

    fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Wall => self.glyphs.wall,
            Cell::Floor => self.glyphs.floor,
        }
    }
}

impl fmt::Display for AsciiMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = String::with_capacity(self.grid.width() + 1);
        for row in self.grid.rows() {
            line.clear();
            line.extend(row.iter().map(|cell| self.glyph(*cell)));
            line.push('\n');
            f.write_str(&line)?;
        }
        Ok(())
    }
}

/// Renders `grid` to a string.
pub fn render(grid: &Grid, glyphs: Glyphs) -> String {
    AsciiMap::new(grid, glyphs).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rectangle;

    #[test]
    fn all_wall_grid() {
        let grid = Grid::new(3, 2);
        assert_eq!(render(&grid, Glyphs::default()), "###\n###\n");
    }

    #[test]
    fn carved_cells_use_floor_glyph() {
        let mut grid = Grid::new(4, 3);
        grid.carve_rect(&Rectangle::new(1, 1, 2, 1));
        assert_eq!(render(&grid, Glyphs::default()), "####\n#..#\n####\n");
    }

    #[test]
    fn custom_glyphs() {
        let mut grid = Grid::new(2, 2);
        grid.carve_rect(&Rectangle::new(0, 0, 1, 2));
        let glyphs = Glyphs { wall: 'X', floor: ' ' };
        assert_eq!(render(&grid, glyphs), " X\n X\n");
    }

    #[test]
    fn line_shape_matches_grid() {
        let grid = Grid::new(80, 25);
        let text = render(&grid, Glyphs::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 25);
        assert!(lines.iter().all(|l| l.chars().count() == 80));
        assert!(text.ends_with('\n'));
    }
}
