//! Sheet building: the center-out pairing algorithm
//!
//! Within one signature the page numbers split into a front half and a back
//! half. The innermost sheet pairs the highest remaining front-half number
//! with the lowest remaining back-half number (the two pages facing each
//! other at the spine), then the next pair outward goes on the back of the
//! sheet with the back-half page on the left, which is the order duplex
//! printing needs. Sheets are emitted innermost fold first, signatures in
//! document order.

use std::collections::VecDeque;

use log::debug;

use crate::types::{ImposeError, Result};

use super::{PageNumber, PrintSheet, SheetSide, SignaturePlan, Spread};

/// Build the full ordered sheet sequence for a plan.
///
/// Sheets are concatenated per signature in document order and
/// `physical_index` is assigned from the final concatenation, then the
/// whole plan is checked for exact page coverage.
pub fn build_sheets(plan: &SignaturePlan) -> Result<Vec<PrintSheet>> {
    let mut sheets = Vec::new();
    for signature in 0..plan.signature_count {
        sheets.extend(build_signature_sheets(plan, signature)?);
    }
    finish_sheets(plan, sheets)
}

/// Assign physical indices by concatenation order and verify coverage.
pub(crate) fn finish_sheets(
    plan: &SignaturePlan,
    mut sheets: Vec<PrintSheet>,
) -> Result<Vec<PrintSheet>> {
    for (index, sheet) in sheets.iter_mut().enumerate() {
        sheet.physical_index = index;
    }
    verify_page_coverage(plan, &sheets)?;
    debug!(
        "built {} sheets for {} signatures ({} pages, {} padding)",
        sheets.len(),
        plan.signature_count,
        plan.total_pages,
        plan.padding_pages
    );
    Ok(sheets)
}

/// Build the sheets of a single signature, innermost fold first.
///
/// `physical_index` is left at 0; the caller assigns it after all
/// signatures are concatenated in document order.
pub(crate) fn build_signature_sheets(
    plan: &SignaturePlan,
    signature: usize,
) -> Result<Vec<PrintSheet>> {
    let grid = plan.layout.grid();
    let spreads_per_side = plan.layout.spreads_per_side();
    let pages = plan.pages_per_signature;
    let signature_start = signature * pages;

    // Signature-local numbering 1..=P. The front half is popped from its
    // end, the back half from its front, so each pop pair meets at the
    // spine and walks outward.
    let mut front_half: Vec<usize> = (1..=pages / 2).collect();
    let mut back_half: VecDeque<usize> = (pages / 2 + 1..=pages).collect();

    let mut sheets = Vec::new();
    while !front_half.is_empty() || !back_half.is_empty() {
        let mut front_spreads = Vec::with_capacity(spreads_per_side);
        let mut back_spreads = Vec::with_capacity(spreads_per_side);

        for _ in 0..spreads_per_side {
            if front_half.is_empty() && back_half.is_empty() {
                // Halves drained mid-side: remaining slots stay blank
                front_spreads.push(Spread::blank());
                back_spreads.push(Spread::blank());
                continue;
            }

            // Each slot consumes two pages from each half; the halves are
            // equal-sized and even, so a one-sided pop failure here means
            // the numbering invariant broke upstream.
            let front_outer = pop_back(&mut front_half, signature)?;
            let back_inner = pop_front(&mut back_half, signature)?;
            front_spreads.push(Spread::new(
                local_page(plan, signature_start, front_outer),
                local_page(plan, signature_start, back_inner),
            ));

            let back_next = pop_front(&mut back_half, signature)?;
            let front_next = pop_back(&mut front_half, signature)?;
            back_spreads.push(Spread::new(
                local_page(plan, signature_start, back_next),
                local_page(plan, signature_start, front_next),
            ));
        }

        sheets.push(PrintSheet {
            physical_index: 0,
            front: SheetSide {
                grid,
                spreads: front_spreads,
            },
            back: SheetSide {
                grid,
                spreads: back_spreads,
            },
        });
    }

    Ok(sheets)
}

/// Map a signature-local page number to a document page, or a blank when
/// the number falls in the padding range past the source page count.
fn local_page(plan: &SignaturePlan, signature_start: usize, local: usize) -> Option<PageNumber> {
    let absolute = signature_start + local;
    if absolute <= plan.total_pages {
        PageNumber::new(absolute)
    } else {
        None
    }
}

fn pop_back(half: &mut Vec<usize>, signature: usize) -> Result<usize> {
    half.pop().ok_or_else(|| {
        ImposeError::Internal(format!(
            "front half of signature {signature} exhausted before back half"
        ))
    })
}

fn pop_front(half: &mut VecDeque<usize>, signature: usize) -> Result<usize> {
    half.pop_front().ok_or_else(|| {
        ImposeError::Internal(format!(
            "back half of signature {signature} exhausted before front half"
        ))
    })
}

/// Check that every source page appears exactly once across the plan.
///
/// A duplicate or missing page would produce a booklet that reads wrong
/// after folding, so a corrupt plan must never reach the renderer.
pub(crate) fn verify_page_coverage(plan: &SignaturePlan, sheets: &[PrintSheet]) -> Result<()> {
    let mut seen = vec![false; plan.total_pages];
    for sheet in sheets {
        for page in sheet.pages() {
            let index = page.get() - 1;
            if index >= plan.total_pages {
                return Err(ImposeError::Internal(format!(
                    "page {page} is outside the source document of {} pages",
                    plan.total_pages
                )));
            }
            if seen[index] {
                return Err(ImposeError::Internal(format!(
                    "page {page} placed more than once"
                )));
            }
            seen[index] = true;
        }
    }
    if let Some(missing) = seen.iter().position(|&placed| !placed) {
        return Err(ImposeError::Internal(format!(
            "page {} was never placed",
            missing + 1
        )));
    }
    Ok(())
}
