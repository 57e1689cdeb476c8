//! Error types for dungeon generation.

use thiserror::Error;

/// A configuration that cannot produce a well-formed dungeon.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("grid dimensions {width}x{height} exceed the addressable range")]
    GridTooLarge { width: usize, height: usize },

    #[error("minimum room size must be at least 1")]
    ZeroMinRoomSize,

    #[error("minimum room size {min_room_size} must be smaller than the grid {dimension} ({size})")]
    MinRoomSizeTooLarge {
        min_room_size: usize,
        dimension: &'static str,
        size: usize,
    },

    #[error("wall and floor symbols must differ, both are {0:?}")]
    SameGlyph(char),

    #[error("{role} symbol {glyph:?} is not printable")]
    UnprintableGlyph { role: &'static str, glyph: char },
}

/// Top-level error returned by the generator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DungeonError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
