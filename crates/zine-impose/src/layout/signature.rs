//! Signature planning: page count validation and padding
//!
//! A signature is a group of sheets folded together and bound as one unit.
//! One fold of one sheet yields four page faces, so a signature of S sheets
//! carries `S * 4` pages and the document total must reach a multiple of
//! that, by padding with blanks when the caller allows it.

use crate::constants::PAGES_PER_FOLDED_SHEET;
use crate::types::{ImposeError, Result};

use super::LayoutFactor;

/// Validated plan for splitting a document into signatures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignaturePlan {
    /// Source page count, before padding
    pub total_pages: usize,
    /// Folded sheets per signature
    pub signature_sheets: usize,
    /// N-up factor used to tile spreads onto physical sheets
    pub layout: LayoutFactor,
    /// Page faces carried by one signature (`signature_sheets * 4`)
    pub pages_per_signature: usize,
    /// Number of signatures in the document
    pub signature_count: usize,
    /// Blank pages appended to reach a full final signature
    pub padding_pages: usize,
}

impl SignaturePlan {
    /// Validate a page count against a signature size.
    ///
    /// With `allow_padding` false, a total that is not a multiple of
    /// `signature_sheets * 4` is a fatal configuration error; otherwise the
    /// minimal number of blank pages is added to reach the next multiple.
    pub fn plan(
        total_pages: usize,
        signature_sheets: usize,
        layout: LayoutFactor,
        allow_padding: bool,
    ) -> Result<Self> {
        if total_pages == 0 {
            return Err(ImposeError::NoPages);
        }
        if signature_sheets == 0 {
            return Err(ImposeError::Config(
                "Signature size must be at least one sheet".to_string(),
            ));
        }

        let pages_per_signature = signature_sheets * PAGES_PER_FOLDED_SHEET;
        let remainder = total_pages % pages_per_signature;
        let padding_pages = if remainder == 0 {
            0
        } else if allow_padding {
            pages_per_signature - remainder
        } else {
            return Err(ImposeError::IncorrectPageCount {
                total_pages,
                pages_per_signature,
                padding_needed: pages_per_signature - remainder,
            });
        };

        let signature_count = (total_pages + padding_pages) / pages_per_signature;

        Ok(Self {
            total_pages,
            signature_sheets,
            layout,
            pages_per_signature,
            signature_count,
            padding_pages,
        })
    }

    /// Total page faces including padding blanks
    pub fn padded_pages(&self) -> usize {
        self.total_pages + self.padding_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_multiple() {
        let plan = SignaturePlan::plan(16, 1, LayoutFactor::HALF, false).unwrap();
        assert_eq!(plan.pages_per_signature, 4);
        assert_eq!(plan.signature_count, 4);
        assert_eq!(plan.padding_pages, 0);
        assert_eq!(plan.padded_pages(), 16);
    }

    #[test]
    fn test_divisibility_gate() {
        let result = SignaturePlan::plan(17, 1, LayoutFactor::QUARTER, false);
        match result {
            Err(ImposeError::IncorrectPageCount {
                total_pages,
                pages_per_signature,
                padding_needed,
            }) => {
                assert_eq!(total_pages, 17);
                assert_eq!(pages_per_signature, 4);
                assert_eq!(padding_needed, 3);
            }
            other => panic!("Expected IncorrectPageCount, got {other:?}"),
        }
    }

    #[test]
    fn test_minimal_padding() {
        let plan = SignaturePlan::plan(17, 1, LayoutFactor::QUARTER, true).unwrap();
        assert_eq!(plan.padding_pages, 3);
        assert_eq!(plan.signature_count, 5);
        assert_eq!(plan.padded_pages(), 20);
    }

    #[test]
    fn test_multi_sheet_signature() {
        let plan = SignaturePlan::plan(32, 4, LayoutFactor::HALF, false).unwrap();
        assert_eq!(plan.pages_per_signature, 16);
        assert_eq!(plan.signature_count, 2);

        let plan = SignaturePlan::plan(30, 4, LayoutFactor::HALF, true).unwrap();
        assert_eq!(plan.padding_pages, 2);
        assert_eq!(plan.signature_count, 2);
    }

    #[test]
    fn test_zero_inputs() {
        assert!(matches!(
            SignaturePlan::plan(0, 1, LayoutFactor::HALF, false),
            Err(ImposeError::NoPages)
        ));
        assert!(matches!(
            SignaturePlan::plan(8, 0, LayoutFactor::HALF, false),
            Err(ImposeError::Config(_))
        ));
    }
}
