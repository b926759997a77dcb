//! Foot pressure heatmap rendering.
//!
//! Pipeline stages:
//! - Surface allocation (`surface`)
//! - Reference frame: grid, foot outline, centerline (`outline`)
//! - Radial heat compositing with a multiply blend (`compositor`)
//! - PNG/JPEG/data URL encoding (`encode`, `png`) and persistence (`persist`)

pub mod compositor;
pub mod distribution;
pub mod encode;
pub mod gradient;
pub mod heatmap;
pub mod legend;
pub mod options;
pub mod outline;
pub mod persist;
pub mod png;
pub mod surface;

pub use distribution::{summarize, FootRegion, LoadDistribution};
pub use encode::{HeatmapOutput, OutputFormat};
pub use gradient::{Color, ColorRamp};
pub use heatmap::{generate_heatmap, render_surface, render_to};
pub use legend::{render_legend, LegendConfig, LegendOrientation};
pub use options::RenderOptions;
pub use persist::{generate_and_save_scan_heatmap, generate_and_save_scan_pair, SavedHeatmap};
pub use surface::{Background, SkiaSurface, Surface};
