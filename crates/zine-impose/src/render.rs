//! Renderer adapter boundary
//!
//! The engine computes what goes where; copying and scaling actual page
//! content is the host application's job, reached through [`PageRenderer`].
//! [`RecordingRenderer`] is an in-memory implementation that captures the
//! plan as a list of records, for inspection and tests.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::layout::{PageNumber, Rect};
use crate::types::SheetSize;

/// Host-application rendering contract consumed by the engine.
///
/// Calls are assumed idempotent enough that a retried `place` re-renders
/// without corrupting prior output; the engine itself never retries.
pub trait PageRenderer {
    /// Handle to a created output sheet page
    type PageHandle;
    /// Handle to placed page content
    type PlacedHandle;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a new output sheet page of the given size
    fn new_sheet_page(&mut self, size: SheetSize) -> std::result::Result<Self::PageHandle, Self::Error>;

    /// Copy a source page's content into `target`, scaled by `scale`
    fn place(
        &mut self,
        page: PageNumber,
        target: Rect,
        scale: f32,
    ) -> std::result::Result<Self::PlacedHandle, Self::Error>;

    /// Persist the assembled output document
    fn save(&mut self, path: &Path) -> std::result::Result<(), Self::Error>;
}

/// A `place` call arrived before any `new_sheet_page`
#[derive(Debug, Error)]
#[error("place called before new_sheet_page")]
pub struct NoOpenPage;

/// One captured `place` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRecord {
    pub page: PageNumber,
    pub target: Rect,
    pub scale: f32,
}

/// One captured output page and the placements made on it
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPage {
    pub size: SheetSize,
    pub placements: Vec<PlacementRecord>,
}

/// In-memory renderer that records every call instead of drawing
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    /// Output pages in creation order
    pub pages: Vec<RecordedPage>,
    /// Path of the last `save` call, if any
    pub saved_to: Option<PathBuf>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total `place` calls across all pages
    pub fn placement_count(&self) -> usize {
        self.pages.iter().map(|p| p.placements.len()).sum()
    }
}

impl PageRenderer for RecordingRenderer {
    type PageHandle = usize;
    type PlacedHandle = ();
    type Error = NoOpenPage;

    fn new_sheet_page(&mut self, size: SheetSize) -> std::result::Result<usize, NoOpenPage> {
        self.pages.push(RecordedPage {
            size,
            placements: Vec::new(),
        });
        Ok(self.pages.len() - 1)
    }

    fn place(
        &mut self,
        page: PageNumber,
        target: Rect,
        scale: f32,
    ) -> std::result::Result<(), NoOpenPage> {
        let current = self.pages.last_mut().ok_or(NoOpenPage)?;
        current.placements.push(PlacementRecord {
            page,
            target,
            scale,
        });
        Ok(())
    }

    fn save(&mut self, path: &Path) -> std::result::Result<(), NoOpenPage> {
        if self.pages.is_empty() {
            return Err(NoOpenPage);
        }
        self.saved_to = Some(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_renderer_captures_calls() {
        let mut renderer = RecordingRenderer::new();
        let size = SheetSize::new(612.0, 792.0);

        let first = renderer.new_sheet_page(size).unwrap();
        assert_eq!(first, 0);

        let page = PageNumber::new(3).unwrap();
        renderer
            .place(page, Rect::new(0.0, 0.0, 100.0, 200.0), 0.5)
            .unwrap();

        assert_eq!(renderer.pages.len(), 1);
        assert_eq!(renderer.placement_count(), 1);
        assert_eq!(renderer.pages[0].placements[0].page, page);
        assert_eq!(renderer.pages[0].placements[0].scale, 0.5);
    }

    #[test]
    fn test_place_without_page_fails() {
        let mut renderer = RecordingRenderer::new();
        let result = renderer.place(
            PageNumber::new(1).unwrap(),
            Rect::new(0.0, 0.0, 1.0, 1.0),
            1.0,
        );
        assert!(result.is_err());
    }
}
