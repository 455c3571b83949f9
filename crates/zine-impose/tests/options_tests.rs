use std::path::PathBuf;

use zine_impose::*;

#[test]
fn test_default_options() {
    let options = ImpositionOptions::default();

    assert_eq!(options.layout, LayoutFactor::QUARTER);
    assert_eq!(options.signature_sheets, 1);
    assert!(!options.allow_padding);
    assert_eq!(options.paper_size, PaperSize::Letter);
    assert_eq!(options.orientation, Orientation::Portrait);
    assert!(options.scale.is_none());

    // Letter portrait with the stock margins
    let size = options.sheet_size();
    assert_eq!(size.width_pt, 612.0);
    assert_eq!(size.height_pt, 792.0);

    assert!(options.validate().is_ok());
}

#[test]
fn test_validate_rejects_zero_signature_sheets() {
    let options = ImpositionOptions {
        signature_sheets: 0,
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(ImposeError::Config(_))));
}

#[test]
fn test_validate_rejects_bad_scale() {
    let options = ImpositionOptions {
        scale: Some(0.0),
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(ImposeError::Config(_))));

    let options = ImpositionOptions {
        scale: Some(-1.0),
        ..Default::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_validate_rejects_oversized_margins() {
    let options = ImpositionOptions {
        margins: Margins::uniform(400.0),
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(ImposeError::Config(_))));
}

#[test]
fn test_validate_rejects_degenerate_custom_paper() {
    let options = ImpositionOptions {
        paper_size: PaperSize::Custom {
            width_pt: 0.0,
            height_pt: 792.0,
        },
        margins: Margins::uniform(0.0),
        ..Default::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_print_file_name_suffix() {
    assert_eq!(
        print_file_name("zine.sla"),
        PathBuf::from("zine-print.sla")
    );
    assert_eq!(
        print_file_name("/work/drafts/issue-04.sla"),
        PathBuf::from("/work/drafts/issue-04-print.sla")
    );
    assert_eq!(print_file_name("notes"), PathBuf::from("notes-print"));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.json");

    let options = ImpositionOptions {
        layout: LayoutFactor::EIGHT_PAGE_MINI,
        signature_sheets: 3,
        allow_padding: true,
        paper_size: PaperSize::A4,
        orientation: Orientation::Landscape,
        margins: Margins::uniform(20.0),
        scale: Some(0.2),
    };

    options.save(&path).await.unwrap();
    let loaded = ImpositionOptions::load(&path).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_rejects_invalid_layout_factor() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.json");

    // An odd factor must fail at deserialize, not later
    let json = serde_json::json!({
        "layout": 3,
        "signature_sheets": 1,
        "allow_padding": false,
        "paper_size": "Letter",
        "orientation": "Portrait",
        "margins": Margins::default(),
        "scale": null,
    });
    tokio::fs::write(&path, json.to_string()).await.unwrap();

    let result = ImpositionOptions::load(&path).await;
    assert!(matches!(result, Err(ImposeError::Config(_))));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_custom_paper_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.json");

    let options = ImpositionOptions {
        paper_size: PaperSize::Custom {
            width_pt: 500.0,
            height_pt: 700.0,
        },
        ..Default::default()
    };

    options.save(&path).await.unwrap();
    let loaded = ImpositionOptions::load(&path).await.unwrap();
    assert_eq!(loaded.paper_size, options.paper_size);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_missing_file() {
    let result = ImpositionOptions::load("/definitely/not/here.json").await;
    assert!(matches!(result, Err(ImposeError::Io(_))));
}
