use crate::layout::SignaturePlan;
use crate::options::ImpositionOptions;
use crate::types::Result;

/// Summary of what an imposition run will produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpositionStatistics {
    /// Pages in the source document
    pub source_pages: usize,
    /// Blank pages added to fill the final signature
    pub padding_pages: usize,
    /// Signatures in the bound booklet
    pub signatures: usize,
    /// Folded sheets across all signatures
    pub folded_sheets: usize,
    /// Physical sheets to print (spreads may tile several per sheet side)
    pub physical_sheets: usize,
    /// Host pages the renderer creates (front and back per physical sheet)
    pub host_pages: usize,
}

/// Calculate statistics for an imposition without building the sheets
pub fn calculate_statistics(
    total_pages: usize,
    options: &ImpositionOptions,
) -> Result<ImpositionStatistics> {
    let plan = SignaturePlan::plan(
        total_pages,
        options.signature_sheets,
        options.layout,
        options.allow_padding,
    )?;

    // One spread-pair per folded sheet; a physical sheet side carries
    // spreads_per_side of them, short sides padded with blanks
    let spreads_per_side = options.layout.spreads_per_side();
    let sheets_per_signature = plan.signature_sheets.div_ceil(spreads_per_side);
    let physical_sheets = plan.signature_count * sheets_per_signature;

    Ok(ImpositionStatistics {
        source_pages: plan.total_pages,
        padding_pages: plan.padding_pages,
        signatures: plan.signature_count,
        folded_sheets: plan.signature_count * plan.signature_sheets,
        physical_sheets,
        host_pages: physical_sheets * 2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutFactor;
    use crate::types::ImposeError;

    #[test]
    fn test_statistics_match_built_plan() {
        let options = ImpositionOptions {
            layout: LayoutFactor::QUARTER,
            signature_sheets: 2,
            allow_padding: true,
            ..Default::default()
        };

        let stats = calculate_statistics(20, &options).unwrap();
        let plan = crate::impose::build_plan(&options, 20).unwrap();

        assert_eq!(stats.physical_sheets, plan.sheets.len());
        assert_eq!(stats.host_pages, plan.host_page_count());
        assert_eq!(stats.padding_pages, plan.signature_plan.padding_pages);
    }

    #[test]
    fn test_statistics_no_pages() {
        let options = ImpositionOptions::default();
        assert!(matches!(
            calculate_statistics(0, &options),
            Err(ImposeError::NoPages)
        ));
    }
}
