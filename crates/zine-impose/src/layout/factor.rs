//! Layout factor: how many logical-page images print on one sheet side
//!
//! Each spread slot holds two facing pages, so the factor is always even.
//! The factor also derives the grid of spread slots used to tile a side.

use crate::types::{ImposeError, Result};

use super::GridShape;

/// Validated N-up factor: logical-page images per physical sheet side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutFactor(usize);

impl LayoutFactor {
    /// Two pages per side: one spread, the classic saddle-stitch layout
    pub const HALF: LayoutFactor = LayoutFactor(2);
    /// Four pages per side: two spreads stacked on each side
    pub const QUARTER: LayoutFactor = LayoutFactor(4);
    /// Eight pages per side: four spreads in a 2x2 grid
    pub const EIGHT_PAGE_MINI: LayoutFactor = LayoutFactor(8);

    /// Create a layout factor. Fails for odd or zero values: every slot
    /// holds a two-page spread, so pages-per-side must be a positive even
    /// number.
    pub fn new(pages_per_side: usize) -> Result<Self> {
        if pages_per_side == 0 || pages_per_side % 2 != 0 {
            return Err(ImposeError::InvalidLayoutFactor(pages_per_side));
        }
        Ok(Self(pages_per_side))
    }

    /// Logical-page images per sheet side
    pub fn pages_per_side(self) -> usize {
        self.0
    }

    /// Spread slots per sheet side
    pub fn spreads_per_side(self) -> usize {
        self.0 / 2
    }

    /// Grid shape used to tile the spread slots on one side.
    ///
    /// Near-square with rows >= cols: `cols` is the largest divisor of the
    /// slot count not exceeding its square root. Satisfies
    /// `rows * cols == spreads_per_side` for every valid factor, including
    /// the single-slot 2-up case.
    pub fn grid(self) -> GridShape {
        let slots = self.spreads_per_side();
        let mut cols = 1;
        let mut candidate = 1;
        while candidate * candidate <= slots {
            if slots % candidate == 0 {
                cols = candidate;
            }
            candidate += 1;
        }
        GridShape {
            rows: slots / cols,
            cols,
        }
    }
}
