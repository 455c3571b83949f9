//! Layout calculation modules for imposition
//!
//! This module holds all the pure arithmetic of the engine:
//! - Layout factor validation and grid derivation
//! - Signature planning (page count validation, padding)
//! - Sheet building (center-out page pairing per signature)
//! - Placement geometry (spread slots to destination rectangles)

mod factor;
mod placement;
mod sheets;
mod signature;
mod types;

pub use factor::*;
pub use placement::*;
pub use sheets::build_sheets;
pub use signature::*;
pub use types::*;

pub(crate) use sheets::{build_signature_sheets, finish_sheets};
