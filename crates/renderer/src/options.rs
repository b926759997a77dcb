//! Render configuration.
//!
//! Options are plain data with documented defaults. Every render builds its
//! own `RenderOptions`; nothing is shared or mutated across calls. Files may
//! be JSON or YAML and only need the fields that differ from the defaults.
//! camelCase names (`intensityFactor`, `showGrid`, ...) are accepted too:
//!
//! ```json
//! { "width": 600, "height": 1000, "show_grid": true, "output_format": "jpeg" }
//! ```

use footmap_common::{canonical_outline, ColorSpec, FootOutline, FootSide, HeatmapError, HeatmapResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::encode::OutputFormat;
use crate::gradient::{default_gradient, ColorRamp};

/// Width of persisted scan heatmaps.
pub const SCAN_WIDTH: u32 = 600;

/// Height of persisted scan heatmaps.
pub const SCAN_HEIGHT: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Output width in pixels (default 500)
    pub width: u32,

    /// Output height in pixels (default 800)
    pub height: u32,

    /// Base blob radius in pixels (default 30)
    pub radius: f32,

    /// Multiplier applied to intensity before color lookup (default 0.6)
    #[serde(alias = "intensityFactor")]
    pub intensity_factor: f32,

    /// Colors from low to high intensity (default blue, cyan, green, yellow, red)
    #[serde(alias = "colorGradient")]
    pub color_gradient: Vec<ColorSpec>,

    /// Reference silhouette drawn under the heat layer
    #[serde(alias = "footOutline")]
    pub foot_outline: Option<FootOutline>,

    /// Grid spacing in pixels when `show_grid` is set (default 20)
    #[serde(alias = "gridSize")]
    pub grid_size: f32,

    #[serde(alias = "showGrid")]
    pub show_grid: bool,

    /// Start from a transparent surface instead of white
    #[serde(alias = "transparentBackground")]
    pub transparent_background: bool,

    #[serde(alias = "outputFormat")]
    pub output_format: OutputFormat,

    /// Encoder quality in `[0, 1]` (default 0.92). Only JPEG output changes visually.
    pub quality: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 500,
            height: 800,
            radius: 30.0,
            intensity_factor: 0.6,
            color_gradient: default_gradient(),
            foot_outline: None,
            grid_size: 20.0,
            show_grid: false,
            transparent_background: false,
            output_format: OutputFormat::Png,
            quality: 0.92,
        }
    }
}

impl RenderOptions {
    /// Settings for persisted scan heatmaps: 600x1000 with the canonical
    /// outline for `side`.
    pub fn for_scan(side: FootSide) -> Self {
        Self {
            width: SCAN_WIDTH,
            height: SCAN_HEIGHT,
            foot_outline: Some(canonical_outline(side)),
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn with_outline(mut self, outline: FootOutline) -> Self {
        self.foot_outline = Some(outline);
        self
    }

    pub fn with_grid(mut self, grid_size: f32) -> Self {
        self.show_grid = true;
        self.grid_size = grid_size;
        self
    }

    /// Check the options before any drawing happens.
    pub fn validate(&self) -> HeatmapResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(HeatmapError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }

        if self.color_gradient.is_empty() {
            return Err(HeatmapError::InvalidGradient(
                "gradient must contain at least one color".to_string(),
            ));
        }

        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(HeatmapError::InvalidOptions(format!(
                "radius must be a non-negative number, got {}",
                self.radius
            )));
        }

        if !self.intensity_factor.is_finite() {
            return Err(HeatmapError::InvalidOptions(format!(
                "intensity_factor must be finite, got {}",
                self.intensity_factor
            )));
        }

        if !self.quality.is_finite() {
            return Err(HeatmapError::InvalidOptions(format!(
                "quality must be finite, got {}",
                self.quality
            )));
        }

        if self.show_grid && !(self.grid_size.is_finite() && self.grid_size > 0.0) {
            return Err(HeatmapError::InvalidOptions(format!(
                "grid_size must be positive when show_grid is set, got {}",
                self.grid_size
            )));
        }

        Ok(())
    }

    /// Quality clamped into `[0, 1]`.
    pub fn effective_quality(&self) -> f32 {
        self.quality.clamp(0.0, 1.0)
    }

    pub fn color_ramp(&self) -> HeatmapResult<ColorRamp> {
        ColorRamp::new(&self.color_gradient)
    }

    /// Parse options from a JSON string.
    pub fn from_json(json: &str) -> HeatmapResult<Self> {
        serde_json::from_str(json).map_err(|e| HeatmapError::Config(e.to_string()))
    }

    /// Parse options from a YAML string.
    pub fn from_yaml(yaml: &str) -> HeatmapResult<Self> {
        serde_yaml::from_str(yaml).map_err(|e| HeatmapError::Config(e.to_string()))
    }

    /// Load options from a `.json`, `.yaml` or `.yml` file.
    pub fn from_file(path: impl AsRef<Path>) -> HeatmapResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            Some("json") => Self::from_json(&content),
            other => Err(HeatmapError::Config(format!(
                "unsupported options file extension {:?} for {}",
                other,
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = RenderOptions::default();
        assert_eq!((opts.width, opts.height), (500, 800));
        assert_eq!(opts.radius, 30.0);
        assert_eq!(opts.intensity_factor, 0.6);
        assert_eq!(opts.color_gradient.len(), 5);
        assert_eq!(opts.output_format, OutputFormat::Png);
        assert!(opts.foot_outline.is_none());
        opts.validate().unwrap();
    }

    #[test]
    fn test_for_scan_uses_canonical_outline() {
        let opts = RenderOptions::for_scan(FootSide::Right);
        assert_eq!((opts.width, opts.height), (SCAN_WIDTH, SCAN_HEIGHT));
        assert_eq!(opts.foot_outline.unwrap().side, FootSide::Right);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let opts = RenderOptions::from_json(r#"{"width": 120, "output_format": "dataURL"}"#).unwrap();
        assert_eq!(opts.width, 120);
        assert_eq!(opts.height, 800);
        assert_eq!(opts.output_format, OutputFormat::DataUrl);
    }

    #[test]
    fn test_camel_case_aliases() {
        let opts = RenderOptions::from_json(
            r#"{"intensityFactor": 0.9, "showGrid": true, "gridSize": 25, "outputFormat": "jpeg"}"#,
        )
        .unwrap();
        assert_eq!(opts.intensity_factor, 0.9);
        assert!(opts.show_grid);
        assert_eq!(opts.grid_size, 25.0);
        assert_eq!(opts.output_format, OutputFormat::Jpeg);
    }

    #[test]
    fn test_yaml_options() {
        let yaml = "width: 64\nheight: 96\nshow_grid: true\ngrid_size: 8\ncolor_gradient:\n  - \"#000000\"\n  - white\n";
        let opts = RenderOptions::from_yaml(yaml).unwrap();
        assert_eq!((opts.width, opts.height), (64, 96));
        assert!(opts.show_grid);
        assert_eq!(opts.color_ramp().unwrap().stops().len(), 2);
    }

    #[test]
    fn test_validation_errors() {
        let zero = RenderOptions::default().with_size(0, 10);
        assert!(matches!(zero.validate(), Err(HeatmapError::InvalidDimension { .. })));

        let empty = RenderOptions {
            color_gradient: vec![],
            ..RenderOptions::default()
        };
        assert!(matches!(empty.validate(), Err(HeatmapError::InvalidGradient(_))));

        let bad_grid = RenderOptions::default().with_grid(0.0);
        assert!(matches!(bad_grid.validate(), Err(HeatmapError::InvalidOptions(_))));

        let bad_radius = RenderOptions {
            radius: f32::INFINITY,
            ..RenderOptions::default()
        };
        assert!(matches!(bad_radius.validate(), Err(HeatmapError::InvalidOptions(_))));
    }

    #[test]
    fn test_quality_is_clamped() {
        let opts = RenderOptions {
            quality: 1.7,
            ..RenderOptions::default()
        };
        opts.validate().unwrap();
        assert_eq!(opts.effective_quality(), 1.0);
    }
}
