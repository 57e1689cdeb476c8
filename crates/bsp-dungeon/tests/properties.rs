//! Invariants that must hold for every seed and every valid configuration.

use std::collections::VecDeque;

use bsp_dungeon::{BspNode, Dungeon, DungeonConfig, Grid, RatioMode};
use nalgebra::Point2;
use proptest::prelude::*;

/// Checks that every internal node is tiled exactly by its two children.
fn assert_tiling(node: &BspNode) -> Result<(), TestCaseError> {
    if let Some((left, right)) = node.children() {
        let (parent, a, b) = (node.area(), left.area(), right.area());
        prop_assert!(!a.intersects(b), "children overlap: {:?} {:?}", a, b);
        prop_assert!(parent.contains(a) && parent.contains(b));
        prop_assert_eq!(a.area() + b.area(), parent.area());
        assert_tiling(left)?;
        assert_tiling(right)?;
    }
    Ok(())
}

/// Counts the floor cells reachable from `start` through 4-neighbours.
fn reachable_floor(grid: &Grid, start: Point2<i32>) -> usize {
    let mut seen = vec![false; grid.width() * grid.height()];
    let mut queue = VecDeque::from([start]);
    let mut count = 0;
    while let Some(p) = queue.pop_front() {
        if !grid.is_floor(p) {
            continue;
        }
        let index = p.y as usize * grid.width() + p.x as usize;
        if seen[index] {
            continue;
        }
        seen[index] = true;
        count += 1;
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            queue.push_back(Point2::new(p.x + dx, p.y + dy));
        }
    }
    count
}

fn config_strategy() -> impl Strategy<Value = DungeonConfig> {
    (16usize..=100, 16usize..=50, 3usize..=10, any::<u64>(), any::<bool>()).prop_map(
        |(width, height, min_room_size, seed, exact)| {
            let ratio_mode = if exact {
                RatioMode::Exact
            } else {
                RatioMode::Truncating
            };
            DungeonConfig::default()
                .with_size(width, height)
                .with_min_room_size(min_room_size)
                .with_seed(seed)
                .with_ratio_mode(ratio_mode)
        },
    )
}

proptest! {
    #[test]
    fn children_tile_their_parent(config in config_strategy()) {
        let dungeon = Dungeon::generate(&config).unwrap();
        assert_tiling(dungeon.tree().root())?;
    }

    #[test]
    fn leaves_respect_minimum_size(config in config_strategy()) {
        let dungeon = Dungeon::generate(&config).unwrap();
        let min = config.min_room_size as i32;
        for leaf in dungeon.tree().leaves() {
            prop_assert!(leaf.width() >= min && leaf.height() >= min, "{:?}", leaf);
        }
        prop_assert_eq!(dungeon.stats().clamped_leaves, 0);
    }

    #[test]
    fn rooms_stay_inside_their_leaves(config in config_strategy()) {
        let dungeon = Dungeon::generate(&config).unwrap();
        let leaves = dungeon.tree().leaves();
        prop_assert_eq!(leaves.len(), dungeon.rooms().len());
        let min = config.min_room_size as i32;
        for (leaf, room) in leaves.iter().zip(dungeon.rooms()) {
            prop_assert!(leaf.contains(room), "{:?} not in {:?}", room, leaf);
            prop_assert!(room.width() >= min && room.height() >= min);
        }
    }

    #[test]
    fn floor_forms_one_component(config in config_strategy()) {
        let dungeon = Dungeon::generate(&config).unwrap();
        let grid = dungeon.grid();
        let start = dungeon.rooms()[0].center();
        prop_assert_eq!(reachable_floor(grid, start), grid.floor_count());
        prop_assert_eq!(dungeon.corridors().len(), dungeon.rooms().len() - 1);
    }

    #[test]
    fn corridors_link_consecutive_centers(config in config_strategy()) {
        let dungeon = Dungeon::generate(&config).unwrap();
        let rooms = dungeon.rooms();
        for (i, corridor) in dungeon.corridors().iter().enumerate() {
            prop_assert_eq!(corridor.from.0, i);
            prop_assert_eq!(corridor.to.0, i + 1);
            prop_assert_eq!(corridor.start, rooms[i].center());
            prop_assert_eq!(corridor.end, rooms[i + 1].center());
            prop_assert!(dungeon.grid().is_floor(corridor.bend()));
        }
    }

    #[test]
    fn restamping_changes_nothing(config in config_strategy()) {
        let dungeon = Dungeon::generate(&config).unwrap();
        let mut grid = dungeon.grid().clone();
        for room in dungeon.rooms() {
            prop_assert_eq!(grid.carve_rect(room), 0);
        }
        for corridor in dungeon.corridors() {
            prop_assert_eq!(corridor.carve(&mut grid), 0);
        }
        prop_assert_eq!(&grid, dungeon.grid());
    }

    #[test]
    fn output_shape_matches_config(config in config_strategy()) {
        let text = Dungeon::generate(&config).unwrap().render();
        let lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(lines.len(), config.height);
        for line in lines {
            prop_assert_eq!(line.chars().count(), config.width);
            prop_assert!(line.chars().all(|c| c == config.wall_char || c == config.floor_char));
        }
    }

    #[test]
    fn same_seed_same_output(config in config_strategy()) {
        let first = Dungeon::generate(&config).unwrap().render();
        let second = Dungeon::generate(&config).unwrap().render();
        prop_assert_eq!(first, second);
    }
}
