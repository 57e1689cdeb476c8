//! End-to-end dungeon generation.

use std::fmt;

use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::bsp::{RandomSplit, SplitPolicy};
use crate::corridor::{connect_rooms, Corridor};
use crate::render::AsciiMap;
use crate::rooms::place_rooms;
use crate::{BspTree, ConfigError, DungeonConfig, DungeonError, Glyphs, Grid, Rectangle};

/// Summary of a generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Seed the generator was started from, when known.
    pub seed: Option<u64>,
    pub leaves: usize,
    pub rooms: usize,
    pub corridors: usize,
    /// Leaves too small for a minimum-size room.
    pub clamped_leaves: usize,
    /// Depth of the partition tree.
    pub depth: usize,
    pub floor_cells: usize,
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(seed) = self.seed {
            write!(f, "seed {seed}, ")?;
        }
        write!(
            f,
            "{} leaves (depth {}), {} rooms, {} corridors, {} floor cells",
            self.leaves, self.depth, self.rooms, self.corridors, self.floor_cells
        )?;
        if self.clamped_leaves > 0 {
            write!(f, ", {} clamped leaves", self.clamped_leaves)?;
        }
        Ok(())
    }
}

/// A generated dungeon: the carved grid plus everything that shaped it.
#[derive(Debug, Clone)]
pub struct Dungeon {
    grid: Grid,
    tree: BspTree,
    rooms: Vec<Rectangle>,
    corridors: Vec<Corridor>,
    glyphs: Glyphs,
    stats: GenerationStats,
}

impl Dungeon {
    /// Generates a dungeon from `config`.
    ///
    /// Uses the configured seed, or draws a fresh one when none is set. The
    /// seed in use is logged and reported in [`Dungeon::stats`], so any run
    /// can be replayed.
    pub fn generate(config: &DungeonConfig) -> Result<Self, DungeonError> {
        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let policy = RandomSplit::new(config.ratio_mode);

        let mut dungeon = Self::generate_with(config, &policy, &mut rng)?;
        dungeon.stats.seed = Some(seed);
        info!("generated dungeon: {}", dungeon.stats);
        Ok(dungeon)
    }

    /// Generates a dungeon with a caller-supplied split policy and random
    /// source.
    ///
    /// Runs the full pipeline: an all-wall grid, a partition tree over the
    /// whole grid, one room per leaf, and a corridor between each pair of
    /// consecutive rooms.
    pub fn generate_with<S, R>(
        config: &DungeonConfig,
        policy: &S,
        rng: &mut R,
    ) -> Result<Self, DungeonError>
    where
        S: SplitPolicy,
        R: Rng + ?Sized,
    {
        config.validate()?;

        let mut grid = Grid::new(config.width, config.height);
        let bounds = grid.bounds().ok_or(ConfigError::GridTooLarge {
            width: config.width,
            height: config.height,
        })?;
        // Validation guarantees the minimum is below both grid dimensions.
        let min_size = i32::try_from(config.min_room_size).map_err(|_| {
            ConfigError::MinRoomSizeTooLarge {
                min_room_size: config.min_room_size,
                dimension: "width",
                size: config.width,
            }
        })?;

        let mut tree = BspTree::build(bounds, min_size, policy, rng);
        let placement = place_rooms(&mut tree, &mut grid, min_size, rng);
        let corridors = connect_rooms(&placement.rooms, &mut grid, rng);

        let stats = GenerationStats {
            seed: None,
            leaves: tree.leaf_count(),
            rooms: placement.rooms.len(),
            corridors: corridors.len(),
            clamped_leaves: placement.clamped_leaves,
            depth: tree.depth(),
            floor_cells: grid.floor_count(),
        };

        Ok(Self {
            grid,
            tree,
            rooms: placement.rooms,
            corridors,
            glyphs: config.glyphs(),
            stats,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn tree(&self) -> &BspTree {
        &self.tree
    }

    /// Rooms in generation order. A leaf's [`RoomId`](crate::RoomId) indexes
    /// into this slice.
    #[inline]
    pub fn rooms(&self) -> &[Rectangle] {
        &self.rooms
    }

    /// Corridors in carving order.
    #[inline]
    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    #[inline]
    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// Returns a display adapter printing the grid with the configured symbols.
    pub fn ascii(&self) -> AsciiMap<'_> {
        AsciiMap::new(&self.grid, self.glyphs)
    }

    /// Renders the grid to a string with the configured symbols.
    pub fn render(&self) -> String {
        self.ascii().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, RoomId};

    #[test]
    fn default_config_generates_a_chain() {
        let dungeon = Dungeon::generate(&DungeonConfig::default().with_seed(1)).unwrap();
        let stats = dungeon.stats();

        assert_eq!(stats.seed, Some(1));
        assert!(stats.leaves >= 2);
        assert_eq!(stats.rooms, stats.leaves);
        assert_eq!(stats.corridors, stats.rooms - 1);
        assert_eq!(stats.clamped_leaves, 0);
        assert_eq!(stats.floor_cells, dungeon.grid().floor_count());
    }

    #[test]
    fn invalid_config_fails_fast() {
        let err = Dungeon::generate(&DungeonConfig::default().with_size(0, 0)).unwrap_err();
        assert_eq!(
            err,
            DungeonError::Config(ConfigError::EmptyGrid { width: 0, height: 0 })
        );
    }

    #[test]
    fn leaves_index_their_rooms() {
        let dungeon = Dungeon::generate(&DungeonConfig::default().with_seed(17)).unwrap();
        let leaves = dungeon.tree().leaves();
        let mut seen = Vec::new();
        dungeon
            .tree()
            .walk_leaves(&mut crate::bsp::FnVisitor::new(|leaf: &crate::BspNode| {
                seen.push(leaf.room())
            }));

        for (i, (room, leaf)) in seen.iter().zip(&leaves).enumerate() {
            let RoomId(index) = room.unwrap();
            assert_eq!(index, i);
            assert!(leaf.contains(&dungeon.rooms()[index]));
        }
    }

    #[test]
    fn room_cells_are_floor() {
        let dungeon = Dungeon::generate(&DungeonConfig::default().with_seed(3)).unwrap();
        for room in dungeon.rooms() {
            assert!(room.cells().all(|p| dungeon.grid().get(p) == Some(Cell::Floor)));
        }
    }

    #[test]
    fn rendered_output_uses_configured_glyphs() {
        let config = DungeonConfig::default().with_glyphs('X', ' ').with_seed(5);
        let text = Dungeon::generate(&config).unwrap().render();
        assert!(text.chars().all(|c| c == 'X' || c == ' ' || c == '\n'));
        assert_eq!(text.lines().count(), 25);
    }

    #[test]
    fn stats_display() {
        let stats = GenerationStats {
            seed: Some(9),
            leaves: 4,
            rooms: 4,
            corridors: 3,
            clamped_leaves: 0,
            depth: 3,
            floor_cells: 500,
        };
        assert_eq!(
            stats.to_string(),
            "seed 9, 4 leaves (depth 3), 4 rooms, 3 corridors, 500 floor cells"
        );
    }
}
