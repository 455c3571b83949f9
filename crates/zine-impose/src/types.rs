use thiserror::Error;

use crate::constants::{
    DEFAULT_MARGIN_BOTTOM_PT, DEFAULT_MARGIN_LEFT_PT, DEFAULT_MARGIN_RIGHT_PT,
    DEFAULT_MARGIN_TOP_PT,
};

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("Invalid layout factor {0}: pages per sheet side must be a positive even number")]
    InvalidLayoutFactor(usize),
    #[error(
        "{total_pages} pages cannot be split into signatures of {pages_per_signature}: \
         {padding_needed} blank pages required but padding is disabled"
    )]
    IncorrectPageCount {
        total_pages: usize,
        pages_per_signature: usize,
        padding_needed: usize,
    },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Imposition invariant violated: {0}")]
    Internal(String),
    #[error("Renderer error: {0}")]
    Renderer(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to impose")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_pt: f32, height_pt: f32 },
}

impl PaperSize {
    /// Get base dimensions in points (always portrait: width < height for standard sizes)
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (841.89, 1190.55),
            PaperSize::A4 => (595.276, 841.89),
            PaperSize::A5 => (419.528, 595.276),
            PaperSize::Letter => (612.0, 792.0),
            PaperSize::Legal => (612.0, 1008.0),
            PaperSize::Tabloid => (792.0, 1224.0),
            PaperSize::Custom {
                width_pt,
                height_pt,
            } => (width_pt, height_pt),
        }
    }

    /// Get the sheet size with orientation applied
    pub fn sheet_size(self, orientation: Orientation) -> SheetSize {
        let (w, h) = self.dimensions_pt();
        match orientation {
            Orientation::Portrait => SheetSize::new(w, h),
            Orientation::Landscape => SheetSize::new(h, w),
        }
    }
}

/// Physical dimensions of one output sheet side, in points
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetSize {
    pub width_pt: f32,
    pub height_pt: f32,
}

impl SheetSize {
    pub fn new(width_pt: f32, height_pt: f32) -> Self {
        Self {
            width_pt,
            height_pt,
        }
    }
}

/// Sheet margins - printer-safe area around the entire output sheet.
/// These margins ensure content stays within the printer's printable area.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    /// Top margin of the sheet
    pub top_pt: f32,
    /// Right margin of the sheet
    pub right_pt: f32,
    /// Bottom margin of the sheet
    pub bottom_pt: f32,
    /// Left margin of the sheet
    pub left_pt: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top_pt: DEFAULT_MARGIN_TOP_PT,
            right_pt: DEFAULT_MARGIN_RIGHT_PT,
            bottom_pt: DEFAULT_MARGIN_BOTTOM_PT,
            left_pt: DEFAULT_MARGIN_LEFT_PT,
        }
    }
}

impl Margins {
    /// Create uniform margins on all sides
    pub fn uniform(margin_pt: f32) -> Self {
        Self {
            top_pt: margin_pt,
            right_pt: margin_pt,
            bottom_pt: margin_pt,
            left_pt: margin_pt,
        }
    }

    /// Combined left and right margin
    pub fn horizontal(&self) -> f32 {
        self.left_pt + self.right_pt
    }

    /// Combined top and bottom margin
    pub fn vertical(&self) -> f32 {
        self.top_pt + self.bottom_pt
    }
}
