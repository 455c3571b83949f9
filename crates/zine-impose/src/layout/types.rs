//! Layout data types for imposition
//!
//! These types describe the computed arrangement: which logical page lands
//! in which spread slot on which side of which physical sheet. They are all
//! plain value types, created once per imposition run and never mutated.

use std::fmt;

/// 1-based index of a logical page in the source document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(usize);

impl PageNumber {
    /// Create a page number. Returns `None` for 0; page numbers are 1-based.
    pub fn new(number: usize) -> Option<Self> {
        if number == 0 { None } else { Some(Self(number)) }
    }

    /// The underlying 1-based index
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Two logical pages placed side by side, as a reader will see them when
/// the bound booklet is opened to that point
///
/// `None` marks a blank inserted to pad a short signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spread {
    /// Left page of the spread (even side after binding)
    pub left: Option<PageNumber>,
    /// Right page of the spread (odd side after binding)
    pub right: Option<PageNumber>,
}

impl Spread {
    pub fn new(left: Option<PageNumber>, right: Option<PageNumber>) -> Self {
        Self { left, right }
    }

    /// A fully blank spread (both halves padding)
    pub fn blank() -> Self {
        Self {
            left: None,
            right: None,
        }
    }

    /// True if neither half carries a source page
    pub fn is_blank(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The non-blank pages of this spread, left first
    pub fn pages(&self) -> impl Iterator<Item = PageNumber> + '_ {
        self.left.into_iter().chain(self.right)
    }
}

/// Grid of spread slots on one sheet side: `rows * cols` slots total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    /// Number of rows (row 0 is at the top)
    pub rows: usize,
    /// Number of columns (column 0 is leftmost)
    pub cols: usize,
}

impl GridShape {
    /// Total number of spread slots in the grid
    pub fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    /// All grid positions in row-major order (left to right, top to bottom)
    pub fn positions(self) -> impl Iterator<Item = GridPosition> {
        let cols = self.cols;
        (0..self.cell_count()).map(move |i| GridPosition::new(i / cols, i % cols))
    }
}

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One printable face of a physical sheet: an ordered grid of spreads
///
/// Spreads are stored in row-major traversal order, matching the order the
/// placement planner walks the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSide {
    /// Grid shape of this side
    pub grid: GridShape,
    /// Spreads in row-major order; length equals `grid.cell_count()`
    pub spreads: Vec<Spread>,
}

impl SheetSide {
    /// The spread at a grid position, or `None` if out of bounds
    pub fn spread_at(&self, pos: GridPosition) -> Option<&Spread> {
        if pos.row >= self.grid.rows || pos.col >= self.grid.cols {
            return None;
        }
        self.spreads.get(pos.row * self.grid.cols + pos.col)
    }

    /// All non-blank pages on this side, in slot order
    pub fn pages(&self) -> impl Iterator<Item = PageNumber> + '_ {
        self.spreads.iter().flat_map(|s| s.left.into_iter().chain(s.right))
    }
}

/// One physical duplex sheet: front and back sides plus its position in
/// the final print order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintSheet {
    /// 0-based position in the emitted sheet sequence
    pub physical_index: usize,
    /// Front side (printed first in duplex)
    pub front: SheetSide,
    /// Back side (printed second in duplex)
    pub back: SheetSide,
}

impl PrintSheet {
    /// Front then back, the order duplex printers emit them
    pub fn sides(&self) -> [&SheetSide; 2] {
        [&self.front, &self.back]
    }

    /// All non-blank pages on this sheet
    pub fn pages(&self) -> impl Iterator<Item = PageNumber> + '_ {
        self.front.pages().chain(self.back.pages())
    }
}

/// A rectangular area in points
///
/// Coordinates follow the host page space: origin at the top-left corner of
/// the sheet, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Area in square points
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Left half of the rectangle (half width, full height)
    pub fn left_half(&self) -> Rect {
        Rect::new(self.x, self.y, self.width / 2.0, self.height)
    }

    /// Right half of the rectangle (half width, full height)
    pub fn right_half(&self) -> Rect {
        Rect::new(self.x + self.width / 2.0, self.y, self.width / 2.0, self.height)
    }
}
