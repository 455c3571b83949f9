//! Placement geometry: spread slots to destination rectangles
//!
//! Converts a built sheet side into concrete destination rectangles on the
//! physical sheet. The usable area inside the margins is divided into the
//! factor's grid of cells, walked row-major from the top-left margin
//! corner; each cell splits in half horizontally for the two pages of its
//! spread. Pure geometry, deterministic for identical inputs.

use crate::types::{Margins, SheetSize};

use super::{GridPosition, GridShape, LayoutFactor, PageNumber, Rect, SheetSide, Spread};

/// Precomputed geometry for one sheet size, margin set, and layout factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGeometry {
    /// Physical sheet dimensions
    pub sheet_size: SheetSize,
    /// Printer-safe margins around the usable area
    pub margins: Margins,
    /// Grid of spread cells derived from the layout factor
    pub grid: GridShape,
    /// Width of one spread cell in points
    pub col_width_pt: f32,
    /// Height of one spread cell in points
    pub row_height_pt: f32,
    /// Scale applied to placed page content
    pub scale: f32,
}

impl SheetGeometry {
    /// Compute cell geometry for a sheet.
    ///
    /// `scale_override` replaces the default `1 / layout_factor` content
    /// scale when given.
    pub fn new(
        sheet_size: SheetSize,
        margins: Margins,
        layout: LayoutFactor,
        scale_override: Option<f32>,
    ) -> Self {
        let grid = layout.grid();
        let usable_width = sheet_size.width_pt - margins.horizontal();
        let usable_height = sheet_size.height_pt - margins.vertical();
        let scale = scale_override.unwrap_or(1.0 / layout.pages_per_side() as f32);

        Self {
            sheet_size,
            margins,
            grid,
            col_width_pt: usable_width / grid.cols as f32,
            row_height_pt: usable_height / grid.rows as f32,
            scale,
        }
    }

    /// Usable width inside the margins
    pub fn usable_width_pt(&self) -> f32 {
        self.col_width_pt * self.grid.cols as f32
    }

    /// Usable height inside the margins
    pub fn usable_height_pt(&self) -> f32 {
        self.row_height_pt * self.grid.rows as f32
    }

    /// Bounds of the spread cell at a grid position
    pub fn cell_bounds(&self, pos: GridPosition) -> Rect {
        Rect::new(
            self.margins.left_pt + pos.col as f32 * self.col_width_pt,
            self.margins.top_pt + pos.row as f32 * self.row_height_pt,
            self.col_width_pt,
            self.row_height_pt,
        )
    }

    /// Place every slot of a sheet side, in row-major order.
    ///
    /// Every slot yields a placement (the cell is real geometry even when
    /// its spread is blank); blank halves simply carry no page target.
    pub fn place_side(&self, side: &SheetSide) -> Vec<SpreadPlacement> {
        side.grid
            .positions()
            .zip(side.spreads.iter())
            .map(|(pos, &spread)| SpreadPlacement {
                spread,
                grid_pos: pos,
                cell: self.cell_bounds(pos),
                scale: self.scale,
            })
            .collect()
    }
}

/// One spread slot resolved to its destination cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadPlacement {
    /// The spread occupying this cell
    pub spread: Spread,
    /// Grid position of the cell
    pub grid_pos: GridPosition,
    /// Destination cell on the sheet
    pub cell: Rect,
    /// Content scale for both pages of the spread
    pub scale: f32,
}

impl SpreadPlacement {
    /// Target rectangle for the left page (left half-width of the cell)
    pub fn left_rect(&self) -> Rect {
        self.cell.left_half()
    }

    /// Target rectangle for the right page (right half-width of the cell)
    pub fn right_rect(&self) -> Rect {
        self.cell.right_half()
    }

    /// Per-page placements for the non-blank halves of the spread
    pub fn pages(&self) -> Vec<PagePlacement> {
        let mut placements = Vec::with_capacity(2);
        if let Some(page) = self.spread.left {
            placements.push(PagePlacement {
                page,
                target: self.left_rect(),
                scale: self.scale,
            });
        }
        if let Some(page) = self.spread.right {
            placements.push(PagePlacement {
                page,
                target: self.right_rect(),
                scale: self.scale,
            });
        }
        placements
    }
}

/// Final placement of one source page on the output sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagePlacement {
    /// Source page to copy
    pub page: PageNumber,
    /// Destination rectangle on the sheet
    pub target: Rect,
    /// Scale factor applied to the page content
    pub scale: f32,
}
