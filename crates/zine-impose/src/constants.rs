//! Shared constants for booklet imposition
//!
//! This module centralizes magic numbers and constants used throughout
//! the imposition process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert inches to points
#[inline]
pub fn in_to_pt(inches: f32) -> f32 {
    inches * POINTS_PER_INCH
}

/// Convert points to inches
#[inline]
pub fn pt_to_in(pt: f32) -> f32 {
    pt / POINTS_PER_INCH
}

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Default Sheet Dimensions
// =============================================================================

/// Default sheet width in points (US Letter: 8.5" × 11")
pub const DEFAULT_SHEET_WIDTH_PT: f32 = 612.0;

/// Default sheet height in points (US Letter)
pub const DEFAULT_SHEET_HEIGHT_PT: f32 = 792.0;

/// Default sheet dimensions as tuple (width, height)
pub const DEFAULT_SHEET_DIMENSIONS: (f32, f32) = (DEFAULT_SHEET_WIDTH_PT, DEFAULT_SHEET_HEIGHT_PT);

// =============================================================================
// Default Margins
// =============================================================================

/// Default top margin in points (0.5")
pub const DEFAULT_MARGIN_TOP_PT: f32 = 36.0;

/// Default right margin in points (0.5")
pub const DEFAULT_MARGIN_RIGHT_PT: f32 = 36.0;

/// Default bottom margin in points (0.5")
pub const DEFAULT_MARGIN_BOTTOM_PT: f32 = 36.0;

/// Default left margin in points (0.75", wider to clear the binding edge)
pub const DEFAULT_MARGIN_LEFT_PT: f32 = 54.0;

// =============================================================================
// Signatures
// =============================================================================

/// Page faces produced by one folded sheet (two per side)
pub const PAGES_PER_FOLDED_SHEET: usize = 4;
