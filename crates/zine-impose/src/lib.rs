pub mod constants;
pub mod impose;
pub mod layout;
mod options;
mod render;
mod stats;
mod types;

pub use impose::{ImpositionPlan, assemble, build_plan, build_plan_concurrent};
pub use layout::*;
pub use options::*;
pub use render::*;
pub use stats::{ImpositionStatistics, calculate_statistics};
pub use types::*;
