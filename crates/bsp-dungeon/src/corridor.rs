//! L-shaped corridors between room centers.

use log::debug;
use nalgebra::Point2;
use rand::Rng;

use crate::{Grid, Rectangle, RoomId};

/// Which leg of an L-shaped corridor is dug first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Along the start row first, then down the end column.
    /// The bend is at `(end.x, start.y)`.
    HorizontalFirst,
    /// Along the start column first, then across the end row.
    /// The bend is at `(start.x, end.y)`.
    VerticalFirst,
}

/// A two-leg orthogonal corridor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corridor {
    pub from: RoomId,
    pub to: RoomId,
    pub start: Point2<i32>,
    pub end: Point2<i32>,
    pub orientation: Orientation,
}

impl Corridor {
    /// Builds the corridor joining the centers of two rooms.
    pub fn between(
        (from, a): (RoomId, &Rectangle),
        (to, b): (RoomId, &Rectangle),
        orientation: Orientation,
    ) -> Self {
        Self {
            from,
            to,
            start: a.center(),
            end: b.center(),
            orientation,
        }
    }

    /// Returns the cell where the two legs meet.
    pub fn bend(&self) -> Point2<i32> {
        match self.orientation {
            Orientation::HorizontalFirst => Point2::new(self.end.x, self.start.y),
            Orientation::VerticalFirst => Point2::new(self.start.x, self.end.y),
        }
    }

    /// Number of distinct cells on the corridor, bend counted once.
    pub fn cell_count(&self) -> usize {
        let dx = (self.end.x - self.start.x).unsigned_abs() as usize;
        let dy = (self.end.y - self.start.y).unsigned_abs() as usize;
        dx + dy + 1
    }

    /// Carves both legs into `grid`, endpoints inclusive.
    ///
    /// Returns the number of cells that were still wall.
    pub fn carve(&self, grid: &mut Grid) -> usize {
        let (start, end) = (self.start, self.end);
        match self.orientation {
            Orientation::HorizontalFirst => {
                grid.carve_horizontal(start.y, start.x, end.x)
                    + grid.carve_vertical(end.x, start.y, end.y)
            }
            Orientation::VerticalFirst => {
                grid.carve_vertical(start.x, start.y, end.y)
                    + grid.carve_horizontal(end.y, start.x, end.x)
            }
        }
    }
}

/// Picks one of the two orientations with equal probability.
pub fn random_orientation<R: Rng + ?Sized>(rng: &mut R) -> Orientation {
    if rng.gen_bool(0.5) {
        Orientation::HorizontalFirst
    } else {
        Orientation::VerticalFirst
    }
}

/// Chains `rooms` together in list order: room 0 to room 1, room 1 to
/// room 2, and so on.
///
/// Rooms are linked purely by their position in the list, never by
/// distance, so a corridor may run straight through unrelated rooms.
/// Returns the `rooms.len() - 1` corridors that were carved.
pub fn connect_rooms<R: Rng + ?Sized>(
    rooms: &[Rectangle],
    grid: &mut Grid,
    rng: &mut R,
) -> Vec<Corridor> {
    rooms
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let corridor = Corridor::between(
                (RoomId(i), &pair[0]),
                (RoomId(i + 1), &pair[1]),
                random_orientation(&mut *rng),
            );
            let fresh = corridor.carve(grid);
            debug!(
                "corridor {} -> {} {:?} via {:?}, {} new cells",
                i,
                i + 1,
                corridor.orientation,
                corridor.bend(),
                fresh
            );
            corridor
        })
        .collect()
}
