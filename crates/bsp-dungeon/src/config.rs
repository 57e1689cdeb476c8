//! Generation settings.

use log::warn;

use crate::bsp::RatioMode;
use crate::ConfigError;

/// Default grid width in cells.
pub const DEFAULT_WIDTH: usize = 80;
/// Default grid height in cells.
pub const DEFAULT_HEIGHT: usize = 25;
/// Default minimum leaf and room dimension.
pub const DEFAULT_MIN_ROOM_SIZE: usize = 8;
/// Default symbol for unexcavated cells.
pub const DEFAULT_WALL_CHAR: char = '#';
/// Default symbol for excavated cells.
pub const DEFAULT_FLOOR_CHAR: char = '.';

/// The two symbols used when rendering a grid as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub wall: char,
    pub floor: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            wall: DEFAULT_WALL_CHAR,
            floor: DEFAULT_FLOOR_CHAR,
        }
    }
}

/// Settings for a single generation run.
///
/// ```
/// use bsp_dungeon::DungeonConfig;
///
/// let config = DungeonConfig::default()
///     .with_size(60, 30)
///     .with_min_room_size(6)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DungeonConfig {
    /// Grid columns.
    pub width: usize,
    /// Grid rows.
    pub height: usize,
    /// Minimum leaf and room dimension.
    pub min_room_size: usize,
    /// Symbol for unexcavated cells.
    pub wall_char: char,
    /// Symbol for excavated cells.
    pub floor_char: char,
    /// Seed for the generator. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
    /// How partition aspect ratios are measured when forcing a split axis.
    pub ratio_mode: RatioMode,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            min_room_size: DEFAULT_MIN_ROOM_SIZE,
            wall_char: DEFAULT_WALL_CHAR,
            floor_char: DEFAULT_FLOOR_CHAR,
            seed: None,
            ratio_mode: RatioMode::default(),
        }
    }
}

impl DungeonConfig {
    /// Sets the grid dimensions.
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the minimum leaf and room dimension.
    pub fn with_min_room_size(mut self, min_room_size: usize) -> Self {
        self.min_room_size = min_room_size;
        self
    }

    /// Sets the wall and floor symbols.
    pub fn with_glyphs(mut self, wall: char, floor: char) -> Self {
        self.wall_char = wall;
        self.floor_char = floor;
        self
    }

    /// Fixes the generator seed, making output reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Selects how aspect ratios are measured.
    pub fn with_ratio_mode(mut self, ratio_mode: RatioMode) -> Self {
        self.ratio_mode = ratio_mode;
        self
    }

    /// Returns the rendering symbols.
    pub fn glyphs(&self) -> Glyphs {
        Glyphs {
            wall: self.wall_char,
            floor: self.floor_char,
        }
    }

    /// Checks the configuration, failing on anything that cannot produce a
    /// well-formed dungeon.
    ///
    /// A minimum room size larger than half a grid dimension is accepted but
    /// logged: the grid simply cannot be split along that axis.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        if i32::try_from(width).is_err()
            || i32::try_from(height).is_err()
            || width.checked_mul(height).is_none()
        {
            return Err(ConfigError::GridTooLarge { width, height });
        }
        if self.min_room_size == 0 {
            return Err(ConfigError::ZeroMinRoomSize);
        }
        for (dimension, size) in [("width", width), ("height", height)] {
            if self.min_room_size >= size {
                return Err(ConfigError::MinRoomSizeTooLarge {
                    min_room_size: self.min_room_size,
                    dimension,
                    size,
                });
            }
        }
        if self.wall_char == self.floor_char {
            return Err(ConfigError::SameGlyph(self.wall_char));
        }
        for (role, glyph) in [("wall", self.wall_char), ("floor", self.floor_char)] {
            if glyph.is_control() {
                return Err(ConfigError::UnprintableGlyph { role, glyph });
            }
        }

        let unsplittable: Vec<_> = [("width", width), ("height", height)]
            .into_iter()
            .filter(|(_, size)| self.min_room_size * 2 > *size)
            .map(|(dimension, _)| dimension)
            .collect();
        match unsplittable.as_slice() {
            [] => {}
            [_, _] => warn!(
                "minimum room size {} exceeds half of both grid dimensions ({}x{}): the map will be a single room",
                self.min_room_size, width, height
            ),
            dims => warn!(
                "minimum room size {} exceeds half of the grid {}: no splits along that axis",
                self.min_room_size,
                dims.join(", ")
            ),
        }

        Ok(())
    }
}
