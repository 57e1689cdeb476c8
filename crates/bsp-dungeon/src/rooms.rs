//! Room placement inside partition leaves.

use log::{debug, warn};
use nalgebra::{Point2, Vector2};
use rand::Rng;

use crate::{BspTree, Grid, Rectangle};

/// Index of a room in the room list, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

/// A room sized and positioned inside one leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedRoom {
    pub rect: Rectangle,
    /// `true` if the leaf was smaller than the minimum room size along at
    /// least one axis and the room had to shrink to fit.
    pub clamped: bool,
}

/// Sizes and positions one room inside `leaf`.
///
/// Width and height are drawn independently from `min_size..=extent`, then
/// the offset inside the leaf from `0..=extent - size`, in that order.
///
/// A leaf narrower than `min_size` would make the size range empty. Such a
/// leaf gets its lower bound lowered to the leaf's own extent, so the room
/// fills it along that axis, and the result is marked as clamped.
pub fn place_room<R: Rng + ?Sized>(leaf: &Rectangle, min_size: i32, rng: &mut R) -> PlacedRoom {
    let min_w = min_size.min(leaf.width());
    let min_h = min_size.min(leaf.height());
    let clamped = min_w < min_size || min_h < min_size;

    let width = rng.gen_range(min_w..=leaf.width());
    let height = rng.gen_range(min_h..=leaf.height());
    let dx = rng.gen_range(0..=leaf.width() - width);
    let dy = rng.gen_range(0..=leaf.height() - height);

    PlacedRoom {
        rect: Rectangle::from_origin_size(
            leaf.origin() + Vector2::new(dx, dy),
            Vector2::new(width, height),
        ),
        clamped,
    }
}

/// Rooms produced for a whole tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomPlacement {
    /// One room per leaf, in leaf traversal order.
    pub rooms: Vec<Rectangle>,
    /// Number of leaves whose room had to be clamped.
    pub clamped_leaves: usize,
}

/// Places one room in every leaf of `tree` and carves it into `grid`.
///
/// Each leaf is tagged with the [`RoomId`] of its room. The returned list is
/// the only owner of the room rectangles.
pub fn place_rooms<R: Rng + ?Sized>(
    tree: &mut BspTree,
    grid: &mut Grid,
    min_size: i32,
    rng: &mut R,
) -> RoomPlacement {
    let mut placement = RoomPlacement::default();

    tree.for_each_leaf_mut(|leaf| {
        let placed = place_room(leaf.area(), min_size, &mut *rng);
        if placed.clamped {
            warn!(
                "leaf {:?} is smaller than the minimum room size {}; room clamped to {:?}",
                leaf.area(),
                min_size,
                placed.rect
            );
            placement.clamped_leaves += 1;
        }

        let id = RoomId(placement.rooms.len());
        grid.carve_rect(&placed.rect);
        leaf.set_room(id);
        debug!("room {} at {:?}", id.0, placed.rect);
        placement.rooms.push(placed.rect);
    });

    placement
}

/// Returns the room whose area contains `point`, if any.
pub fn room_at(rooms: &[Rectangle], point: Point2<i32>) -> Option<RoomId> {
    rooms
        .iter()
        .position(|room| room.contains_point(point))
        .map(RoomId)
}
