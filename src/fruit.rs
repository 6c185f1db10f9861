use std::ops::RangeInclusive;

use rand::Rng;

use crate::config::GridSize;
use crate::snake::Position;

/// Tiles trimmed from each edge of the spawn area in easy mode.
pub const EASY_MODE_INSET: u16 = 1;

/// The region fruit may spawn in.
///
/// Easy mode keeps fruit off the outer ring of the grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SpawnArea {
    bounds: GridSize,
    inset: u16,
}

impl SpawnArea {
    #[must_use]
    pub fn new(bounds: GridSize, easy_mode: bool) -> Self {
        Self {
            bounds,
            inset: if easy_mode { EASY_MODE_INSET } else { 0 },
        }
    }

    /// Column range fruit may land in.
    #[must_use]
    pub fn x_range(self) -> RangeInclusive<i32> {
        inset_axis(self.bounds.width, self.inset)
    }

    /// Row range fruit may land in.
    #[must_use]
    pub fn y_range(self) -> RangeInclusive<i32> {
        inset_axis(self.bounds.height, self.inset)
    }

    /// Returns true when `position` lies inside the spawn area.
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        self.x_range().contains(&position.x) && self.y_range().contains(&position.y)
    }

    /// Picks a tile uniformly at random inside the spawn area.
    ///
    /// The snake body is not consulted, so fruit may land underneath it.
    #[must_use]
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> Position {
        Position {
            x: rng.gen_range(self.x_range()),
            y: rng.gen_range(self.y_range()),
        }
    }
}

/// Returns `[inset, len - 1 - inset]`, or the whole axis when `len` is too
/// short to leave any tile after the inset.
pub(crate) fn inset_axis(len: u16, inset: u16) -> RangeInclusive<i32> {
    debug_assert!(len > 0);

    let last = i32::from(len) - 1;
    let inset = i32::from(inset);
    if last - inset >= inset {
        inset..=last - inset
    } else {
        0..=last
    }
}
