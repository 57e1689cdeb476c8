//! Split strategies for partition tree construction.
//!
//! The strategy decides, for one partition, whether it is split at all and if
//! so along which axis and at which offset. The tree builder only applies the
//! decision, so the shape of the resulting dungeon is entirely up to the
//! strategy.

use rand::Rng;

use crate::{Rectangle, SplitAxis};

/// Width-to-height (or height-to-width) ratio at which the split axis stops
/// being random and is forced across the long side.
pub const ASPECT_LIMIT: f64 = 1.25;

/// A decision to cut a partition in two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    pub axis: SplitAxis,
    /// Distance of the cut from the partition's origin, along `axis`.
    pub offset: i32,
}

/// Strategy for splitting a partition.
pub trait SplitPolicy {
    /// Decides how to split `area`.
    ///
    /// Returns `None` when `area` should stay a leaf. A returned split must
    /// leave both halves at least `min_size` cells deep along the split axis.
    fn choose<R: Rng + ?Sized>(&self, area: &Rectangle, min_size: i32, rng: &mut R)
    -> Option<Split>;
}

/// How the aspect ratio of a partition is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatioMode {
    /// Integer division, truncating. A ratio only reaches the limit once the
    /// long side is at least twice the short side.
    #[default]
    Truncating,
    /// Real-valued division. Elongated partitions are caught earlier, so
    /// forced splits happen more often than in truncating mode.
    Exact,
}

impl RatioMode {
    fn ratio(self, long: i32, short: i32) -> f64 {
        match self {
            RatioMode::Truncating => f64::from(long / short),
            RatioMode::Exact => f64::from(long) / f64::from(short),
        }
    }
}

/// Returns the axis a partition must be split along because of its shape,
/// or `None` if it is square enough for a free choice.
pub fn forced_axis(area: &Rectangle, mode: RatioMode) -> Option<SplitAxis> {
    let (w, h) = (area.width(), area.height());
    if w > h && mode.ratio(w, h) >= ASPECT_LIMIT {
        Some(SplitAxis::Vertical)
    } else if h > w && mode.ratio(h, w) >= ASPECT_LIMIT {
        Some(SplitAxis::Horizontal)
    } else {
        None
    }
}

/// Splits along a coin-flip axis at a uniformly random offset.
///
/// The coin is overridden for elongated partitions (see [`forced_axis`]).
/// The offset is drawn from `min_size..=extent - min_size`; when that range
/// is empty the partition is left whole.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSplit {
    pub ratio: RatioMode,
}

impl RandomSplit {
    pub fn new(ratio: RatioMode) -> Self {
        Self { ratio }
    }
}

impl SplitPolicy for RandomSplit {
    fn choose<R: Rng + ?Sized>(
        &self,
        area: &Rectangle,
        min_size: i32,
        rng: &mut R,
    ) -> Option<Split> {
        // The coin is always drawn, even when the shape overrides it, so the
        // random stream does not depend on the ratio mode.
        let coin = if rng.gen_bool(0.5) {
            SplitAxis::Horizontal
        } else {
            SplitAxis::Vertical
        };
        let axis = forced_axis(area, self.ratio).unwrap_or(coin);

        let max = area.extent_along(axis) - min_size;
        if max < min_size {
            return None;
        }

        Some(Split {
            axis,
            offset: rng.gen_range(min_size..=max),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn wide_area_forces_vertical_split() {
        let area = Rectangle::new(0, 0, 40, 10);
        assert_eq!(forced_axis(&area, RatioMode::Truncating), Some(SplitAxis::Vertical));
        assert_eq!(forced_axis(&area, RatioMode::Exact), Some(SplitAxis::Vertical));
    }

    #[test]
    fn tall_area_forces_horizontal_split() {
        let area = Rectangle::new(0, 0, 10, 30);
        assert_eq!(forced_axis(&area, RatioMode::Truncating), Some(SplitAxis::Horizontal));
    }

    #[test]
    fn truncation_hides_moderate_ratios() {
        // 15 / 10 is 1.5 in reals but 1 after truncation.
        let area = Rectangle::new(0, 0, 15, 10);
        assert_eq!(forced_axis(&area, RatioMode::Truncating), None);
        assert_eq!(forced_axis(&area, RatioMode::Exact), Some(SplitAxis::Vertical));
    }

    #[test]
    fn square_area_is_free() {
        let area = Rectangle::new(0, 0, 20, 20);
        assert_eq!(forced_axis(&area, RatioMode::Truncating), None);
        assert_eq!(forced_axis(&area, RatioMode::Exact), None);
    }

    #[test]
    fn aspect_override_holds_for_every_draw() {
        let area = Rectangle::new(0, 0, 40, 10);
        let policy = RandomSplit::default();
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let split = policy.choose(&area, 8, &mut rng).unwrap();
            assert_eq!(split.axis, SplitAxis::Vertical, "seed {seed}");
            assert!((8..=32).contains(&split.offset), "seed {seed}");
        }
    }

    #[test]
    fn refuses_when_halves_would_be_undersized() {
        let policy = RandomSplit::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..50 {
            assert_eq!(policy.choose(&Rectangle::new(0, 0, 15, 15), 8, &mut rng), None);
        }
    }

    #[test]
    fn exact_double_minimum_splits_in_the_middle() {
        let policy = RandomSplit::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        // 16 wide, 8 high: forced vertical, only offset 8 keeps both halves legal.
        let split = policy.choose(&Rectangle::new(0, 0, 16, 8), 8, &mut rng);
        assert_eq!(split, Some(Split { axis: SplitAxis::Vertical, offset: 8 }));
    }
}
