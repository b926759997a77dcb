//! Common types shared by the foot pressure heatmap crates.

pub mod color;
pub mod error;
pub mod outline;
pub mod sample;

pub use color::ColorSpec;
pub use error::{HeatmapError, HeatmapResult};
pub use outline::{canonical_outline, FootOutline, OutlinePoint};
pub use sample::{create_standard_pressure_points, FootSide, Sample};
