use zine_impose::constants::{in_to_pt, mm_to_pt, pt_to_in, pt_to_mm};
use zine_impose::*;

#[test]
fn test_paper_size_dimensions() {
    let (w, h) = PaperSize::Letter.dimensions_pt();
    assert_eq!((w, h), (612.0, 792.0));

    let (w, h) = PaperSize::A4.dimensions_pt();
    assert!((w - 595.276).abs() < 0.01);
    assert!((h - 841.89).abs() < 0.01);

    // Standard sizes are portrait: width < height
    for size in [
        PaperSize::A3,
        PaperSize::A4,
        PaperSize::A5,
        PaperSize::Letter,
        PaperSize::Legal,
        PaperSize::Tabloid,
    ] {
        let (w, h) = size.dimensions_pt();
        assert!(w < h, "{size:?} should be portrait");
    }
}

#[test]
fn test_orientation_swaps_dimensions() {
    let portrait = PaperSize::Letter.sheet_size(Orientation::Portrait);
    let landscape = PaperSize::Letter.sheet_size(Orientation::Landscape);

    assert_eq!(portrait.width_pt, landscape.height_pt);
    assert_eq!(portrait.height_pt, landscape.width_pt);
    assert!(landscape.width_pt > landscape.height_pt);
}

#[test]
fn test_custom_paper_size() {
    let size = PaperSize::Custom {
        width_pt: 300.0,
        height_pt: 400.0,
    };
    assert_eq!(size.dimensions_pt(), (300.0, 400.0));
}

#[test]
fn test_default_margins() {
    // 0.5" top/right/bottom, 0.75" left to clear the binding edge
    let margins = Margins::default();
    assert_eq!(margins.top_pt, 36.0);
    assert_eq!(margins.right_pt, 36.0);
    assert_eq!(margins.bottom_pt, 36.0);
    assert_eq!(margins.left_pt, 54.0);
    assert_eq!(margins.horizontal(), 90.0);
    assert_eq!(margins.vertical(), 72.0);
}

#[test]
fn test_uniform_margins() {
    let margins = Margins::uniform(18.0);
    assert_eq!(margins.horizontal(), 36.0);
    assert_eq!(margins.vertical(), 36.0);
}

#[test]
fn test_unit_conversions() {
    assert_eq!(in_to_pt(1.0), 72.0);
    assert_eq!(pt_to_in(36.0), 0.5);
    assert!((mm_to_pt(25.4) - 72.0).abs() < 0.001);
    assert!((pt_to_mm(72.0) - 25.4).abs() < 0.001);
}

#[test]
fn test_layout_factor_grid_table() {
    let cases = [
        (2, 1, 1),
        (4, 2, 1),
        (8, 2, 2),
        (12, 3, 2),
        (18, 3, 3),
    ];
    for (pages, rows, cols) in cases {
        let grid = LayoutFactor::new(pages).unwrap().grid();
        assert_eq!((grid.rows, grid.cols), (rows, cols), "{pages}-up grid");
    }
}

#[test]
fn test_invalid_layout_factor_error() {
    match LayoutFactor::new(5) {
        Err(ImposeError::InvalidLayoutFactor(5)) => {}
        other => panic!("Expected InvalidLayoutFactor, got {other:?}"),
    }
}

#[test]
fn test_sheet_side_lookup() {
    let plan = SignaturePlan::plan(8, 2, LayoutFactor::QUARTER, false).unwrap();
    let sheets = build_sheets(&plan).unwrap();
    let front = &sheets[0].front;

    assert_eq!(
        front.spread_at(GridPosition::new(0, 0)),
        Some(&front.spreads[0])
    );
    assert_eq!(
        front.spread_at(GridPosition::new(1, 0)),
        Some(&front.spreads[1])
    );
    assert_eq!(front.spread_at(GridPosition::new(2, 0)), None);
    assert_eq!(front.spread_at(GridPosition::new(0, 1)), None);
}
