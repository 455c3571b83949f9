//! Imposition orchestration
//!
//! Ties the pieces together:
//! 1. Validate options and plan signatures
//! 2. Build the ordered sheet sequence (center-out pairing)
//! 3. Attach placement geometry
//! 4. Walk the plan against a renderer adapter

use log::debug;

use crate::layout::{
    PrintSheet, SheetGeometry, SignaturePlan, build_sheets, build_signature_sheets, finish_sheets,
};
use crate::options::ImpositionOptions;
use crate::render::PageRenderer;
use crate::types::{ImposeError, Result};

/// A complete, verified imposition: sheets plus the geometry to print them
#[derive(Debug, Clone)]
pub struct ImpositionPlan {
    /// Signature arithmetic the sheets were built from
    pub signature_plan: SignaturePlan,
    /// Sheets in final print order
    pub sheets: Vec<PrintSheet>,
    /// Placement geometry shared by every sheet side
    pub geometry: SheetGeometry,
}

impl ImpositionPlan {
    /// Output pages the renderer will create (front and back per sheet)
    pub fn host_page_count(&self) -> usize {
        self.sheets.len() * 2
    }
}

/// Build a full imposition plan for a document of `total_pages` pages.
pub fn build_plan(options: &ImpositionOptions, total_pages: usize) -> Result<ImpositionPlan> {
    options.validate()?;

    let signature_plan = SignaturePlan::plan(
        total_pages,
        options.signature_sheets,
        options.layout,
        options.allow_padding,
    )?;
    let sheets = build_sheets(&signature_plan)?;
    let geometry = SheetGeometry::new(
        options.sheet_size(),
        options.margins,
        options.layout,
        options.scale,
    );

    debug!(
        "imposition plan: {} pages -> {} sheets of {} spreads per side",
        total_pages,
        sheets.len(),
        options.layout.spreads_per_side()
    );

    Ok(ImpositionPlan {
        signature_plan,
        sheets,
        geometry,
    })
}

/// Build a plan with per-signature sheet building fanned out to blocking
/// tasks.
///
/// Signatures share no page-number pools, so they compute independently;
/// results are awaited in document order and physical indices are assigned
/// only after concatenation.
pub async fn build_plan_concurrent(
    options: &ImpositionOptions,
    total_pages: usize,
) -> Result<ImpositionPlan> {
    options.validate()?;

    let signature_plan = SignaturePlan::plan(
        total_pages,
        options.signature_sheets,
        options.layout,
        options.allow_padding,
    )?;

    let mut tasks = Vec::with_capacity(signature_plan.signature_count);
    for signature in 0..signature_plan.signature_count {
        tasks.push(tokio::task::spawn_blocking(move || {
            build_signature_sheets(&signature_plan, signature)
        }));
    }

    let mut sheets = Vec::new();
    for task in tasks {
        sheets.extend(task.await??);
    }
    let sheets = finish_sheets(&signature_plan, sheets)?;

    let geometry = SheetGeometry::new(
        options.sheet_size(),
        options.margins,
        options.layout,
        options.scale,
    );

    Ok(ImpositionPlan {
        signature_plan,
        sheets,
        geometry,
    })
}

/// Execute a plan against a renderer: one host page per sheet side, front
/// then back, one `place` call per non-blank spread half.
///
/// Renderer failures are wrapped verbatim and never retried; the engine
/// has no knowledge of the host's retry semantics.
pub fn assemble<R: PageRenderer>(renderer: &mut R, plan: &ImpositionPlan) -> Result<()> {
    for sheet in &plan.sheets {
        for side in sheet.sides() {
            renderer
                .new_sheet_page(plan.geometry.sheet_size)
                .map_err(renderer_error)?;

            for placement in plan.geometry.place_side(side) {
                for page in placement.pages() {
                    renderer
                        .place(page.page, page.target, page.scale)
                        .map_err(renderer_error)?;
                }
            }
        }
    }
    Ok(())
}

fn renderer_error<E: std::error::Error + Send + Sync + 'static>(error: E) -> ImposeError {
    ImposeError::Renderer(Box::new(error))
}
