use std::path::{Path, PathBuf};

use crate::layout::LayoutFactor;
use crate::types::*;

/// Imposition configuration consumed from the CLI/config layer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpositionOptions {
    /// Logical-page images per physical sheet side
    pub layout: LayoutFactor,

    /// Folded sheets per signature
    pub signature_sheets: usize,

    /// Pad short documents with trailing blanks instead of failing
    pub allow_padding: bool,

    /// Output paper
    pub paper_size: PaperSize,
    pub orientation: Orientation,

    /// Printer-safe margins around the sheet
    pub margins: Margins,

    /// Content scale override; `None` means `1 / layout_factor`
    pub scale: Option<f32>,
}

impl Default for ImpositionOptions {
    fn default() -> Self {
        Self {
            layout: LayoutFactor::QUARTER,
            signature_sheets: 1,
            allow_padding: false,
            paper_size: PaperSize::Letter,
            orientation: Orientation::Portrait,
            margins: Margins::default(),
            scale: None,
        }
    }
}

impl ImpositionOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse config: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ImposeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Physical sheet size with orientation applied
    pub fn sheet_size(&self) -> SheetSize {
        self.paper_size.sheet_size(self.orientation)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.signature_sheets == 0 {
            return Err(ImposeError::Config(
                "Signature size must be at least one sheet".to_string(),
            ));
        }

        if let Some(scale) = self.scale
            && scale <= 0.0
        {
            return Err(ImposeError::Config(format!(
                "Scale override must be positive, got {}",
                scale
            )));
        }

        let size = self.sheet_size();
        if size.width_pt <= 0.0 || size.height_pt <= 0.0 {
            return Err(ImposeError::Config(
                "Sheet dimensions must be positive".to_string(),
            ));
        }
        if self.margins.horizontal() >= size.width_pt || self.margins.vertical() >= size.height_pt {
            return Err(ImposeError::Config(format!(
                "Margins leave no usable area on a {} x {} pt sheet",
                size.width_pt, size.height_pt
            )));
        }

        Ok(())
    }
}

/// Derive the output document name by suffixing the file stem with `-print`
pub fn print_file_name(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let mut name = format!("{stem}-print");
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        name.push('.');
        name.push_str(ext);
    }
    path.with_file_name(name)
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Serialize};

    // Manual implementations for types whose invariants must hold on
    // deserialize, or that mix named and custom variants

    impl Serialize for LayoutFactor {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_u64(self.pages_per_side() as u64)
        }
    }

    impl<'de> Deserialize<'de> for LayoutFactor {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let pages = usize::deserialize(deserializer)?;
            LayoutFactor::new(pages).map_err(|e| serde::de::Error::custom(e.to_string()))
        }
    }

    impl Serialize for PaperSize {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            use serde::ser::SerializeStruct;
            match self {
                PaperSize::A3 => serializer.serialize_str("A3"),
                PaperSize::A4 => serializer.serialize_str("A4"),
                PaperSize::A5 => serializer.serialize_str("A5"),
                PaperSize::Letter => serializer.serialize_str("Letter"),
                PaperSize::Legal => serializer.serialize_str("Legal"),
                PaperSize::Tabloid => serializer.serialize_str("Tabloid"),
                PaperSize::Custom {
                    width_pt,
                    height_pt,
                } => {
                    let mut s = serializer.serialize_struct("Custom", 2)?;
                    s.serialize_field("width_pt", width_pt)?;
                    s.serialize_field("height_pt", height_pt)?;
                    s.end()
                }
            }
        }
    }

    impl<'de> Deserialize<'de> for PaperSize {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            use serde::de::{self, MapAccess, Visitor};
            use std::fmt;

            struct PaperSizeVisitor;

            impl<'de> Visitor<'de> for PaperSizeVisitor {
                type Value = PaperSize;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("a paper size")
                }

                fn visit_str<E>(self, value: &str) -> std::result::Result<PaperSize, E>
                where
                    E: de::Error,
                {
                    match value {
                        "A3" => Ok(PaperSize::A3),
                        "A4" => Ok(PaperSize::A4),
                        "A5" => Ok(PaperSize::A5),
                        "Letter" => Ok(PaperSize::Letter),
                        "Legal" => Ok(PaperSize::Legal),
                        "Tabloid" => Ok(PaperSize::Tabloid),
                        _ => Err(de::Error::unknown_variant(
                            value,
                            &["A3", "A4", "A5", "Letter", "Legal", "Tabloid", "Custom"],
                        )),
                    }
                }

                fn visit_map<M>(self, mut map: M) -> std::result::Result<PaperSize, M::Error>
                where
                    M: MapAccess<'de>,
                {
                    let mut width_pt = None;
                    let mut height_pt = None;

                    while let Some(key) = map.next_key::<String>()? {
                        match key.as_str() {
                            "width_pt" => width_pt = Some(map.next_value()?),
                            "height_pt" => height_pt = Some(map.next_value()?),
                            _ => {
                                let _: serde::de::IgnoredAny = map.next_value()?;
                            }
                        }
                    }

                    match (width_pt, height_pt) {
                        (Some(w), Some(h)) => Ok(PaperSize::Custom {
                            width_pt: w,
                            height_pt: h,
                        }),
                        _ => Err(de::Error::missing_field("width_pt or height_pt")),
                    }
                }
            }

            deserializer.deserialize_any(PaperSizeVisitor)
        }
    }
}
