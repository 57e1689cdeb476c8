//! Shared drawing utilities for the dungeon viewer.

use std::hash::{Hash, Hasher};

use bsp_dungeon::{BspNode, Cell, Corridor, Grid, LeafVisitor, Rectangle};
use macroquad::prelude::*;
use nalgebra::Point2;

pub mod navigator;
pub use navigator::TreeNavigator;

pub const WALL_COLOR: Color = Color::new(0.12, 0.12, 0.16, 1.0);
pub const FLOOR_COLOR: Color = Color::new(0.78, 0.74, 0.62, 1.0);

/// Generates a deterministic color from a rectangle using hashing.
/// This keeps a partition's color stable across frames.
pub fn area_color(area: &Rectangle) -> Color {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    area.hash(&mut hasher);
    let hash = hasher.finish();

    // Extract RGB from hash bytes
    let r = ((hash >> 16) & 0xFF) as u8;
    let g = ((hash >> 8) & 0xFF) as u8;
    let b = (hash & 0xFF) as u8;

    // Ensure colors aren't too dark by adding a minimum brightness
    let r = r.max(60);
    let g = g.max(60);
    let b = b.max(60);

    Color::from_rgba(r, g, b, 255)
}

/// Maps grid cells to screen pixels.
#[derive(Debug, Clone, Copy)]
pub struct MapLayout {
    /// Screen position of the grid's top-left corner.
    pub origin: Vec2,
    /// Side length of one cell in pixels.
    pub cell: f32,
}

impl MapLayout {
    /// Fits `grid` into the screen region starting at `origin` with the given
    /// available size, keeping cells square.
    pub fn fit(grid: &Grid, origin: Vec2, available: Vec2) -> Self {
        let cell_w = available.x / grid.width().max(1) as f32;
        let cell_h = available.y / grid.height().max(1) as f32;
        Self {
            origin,
            cell: cell_w.min(cell_h).max(1.0),
        }
    }

    /// Returns the screen rectangle `(x, y, w, h)` covering `area`.
    pub fn screen_rect(&self, area: &Rectangle) -> (f32, f32, f32, f32) {
        (
            self.origin.x + area.x() as f32 * self.cell,
            self.origin.y + area.y() as f32 * self.cell,
            area.width() as f32 * self.cell,
            area.height() as f32 * self.cell,
        )
    }

    /// Returns the screen position of the center of a cell.
    pub fn cell_center(&self, point: Point2<i32>) -> Vec2 {
        vec2(
            self.origin.x + (point.x as f32 + 0.5) * self.cell,
            self.origin.y + (point.y as f32 + 0.5) * self.cell,
        )
    }

    /// Returns the cell under a screen position, if it lies on the grid.
    pub fn cell_at(&self, grid: &Grid, screen: Vec2) -> Option<Point2<i32>> {
        let local = (screen - self.origin) / self.cell;
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let point = Point2::new(local.x as i32, local.y as i32);
        grid.get(point).map(|_| point)
    }
}

/// Draws every cell of the grid.
pub fn draw_grid(grid: &Grid, layout: &MapLayout) {
    for (y, row) in grid.rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let color = match cell {
                Cell::Wall => WALL_COLOR,
                Cell::Floor => FLOOR_COLOR,
            };
            draw_rectangle(
                layout.origin.x + x as f32 * layout.cell,
                layout.origin.y + y as f32 * layout.cell,
                layout.cell,
                layout.cell,
                color,
            );
        }
    }
}

/// Draws the path of each corridor through its bend.
pub fn draw_corridors(corridors: &[Corridor], layout: &MapLayout) {
    for corridor in corridors {
        let start = layout.cell_center(corridor.start);
        let bend = layout.cell_center(corridor.bend());
        let end = layout.cell_center(corridor.end);
        draw_line(start.x, start.y, bend.x, bend.y, 2.0, ORANGE);
        draw_line(bend.x, bend.y, end.x, end.y, 2.0, ORANGE);
        draw_circle(bend.x, bend.y, 3.0, RED);
    }
}

/// Draws the outline of a partition.
pub fn draw_area_outline(area: &Rectangle, layout: &MapLayout, thickness: f32, color: Color) {
    let (x, y, w, h) = layout.screen_rect(area);
    draw_rectangle_lines(x, y, w, h, thickness, color);
}

/// Visitor that outlines every leaf partition in its own color.
pub struct RenderVisitor<'a> {
    pub layout: &'a MapLayout,
}

impl LeafVisitor for RenderVisitor<'_> {
    fn visit(&mut self, leaf: &BspNode) {
        draw_area_outline(leaf.area(), self.layout, 2.0, area_color(leaf.area()));
    }
}
