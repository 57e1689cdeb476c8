//! BSP (Binary Space Partitioning) dungeon generator.
//!
//! A grid is recursively partitioned into leaves, one room is carved inside
//! every leaf, and consecutive rooms are joined by L-shaped corridors:
//!
//! ```
//! use bsp_dungeon::{Dungeon, DungeonConfig};
//!
//! let dungeon = Dungeon::generate(&DungeonConfig::default().with_seed(42)).unwrap();
//! let map = dungeon.render();
//! assert_eq!(map.lines().count(), 25);
//! ```

pub mod bsp;
mod config;
mod corridor;
mod dungeon;
mod error;
mod grid;
mod rectangle;
mod render;
mod rooms;

pub use bsp::{
    BspNode, BspTree, CollectingVisitor, FnVisitor, LeafVisitor, RandomSplit, RatioMode, SplitPolicy,
};
pub use config::{
    DungeonConfig, Glyphs, DEFAULT_FLOOR_CHAR, DEFAULT_HEIGHT, DEFAULT_MIN_ROOM_SIZE,
    DEFAULT_WALL_CHAR, DEFAULT_WIDTH,
};
pub use corridor::{connect_rooms, random_orientation, Corridor, Orientation};
pub use dungeon::{Dungeon, GenerationStats};
pub use error::{ConfigError, DungeonError};
pub use grid::{Cell, Grid};
pub use rectangle::{Rectangle, SplitAxis};
pub use render::{render, AsciiMap};
pub use rooms::{place_room, place_rooms, room_at, PlacedRoom, RoomId, RoomPlacement};
