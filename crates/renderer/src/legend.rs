//! Color ramp legend.

use footmap_common::{ColorSpec, HeatmapResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::gradient::ColorRamp;
use crate::outline::OUTLINE_COLOR;
use crate::png::create_png;
use crate::surface::{Background, StrokeStyle, SkiaSurface, Surface};

/// Legend configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    #[serde(default)]
    pub orientation: LegendOrientation,

    /// Width in pixels
    #[serde(default = "default_legend_width")]
    pub width: u32,

    /// Height in pixels
    #[serde(default = "default_legend_height")]
    pub height: u32,

    /// Draw a 1px frame around the strip
    #[serde(default = "default_border")]
    pub border: bool,
}

fn default_legend_width() -> u32 {
    300
}
fn default_legend_height() -> u32 {
    30
}
fn default_border() -> bool {
    true
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            orientation: LegendOrientation::default(),
            width: default_legend_width(),
            height: default_legend_height(),
            border: default_border(),
        }
    }
}

impl LegendConfig {
    /// A vertical strip of the default size, rotated.
    pub fn vertical() -> Self {
        Self {
            orientation: LegendOrientation::Vertical,
            width: default_legend_height(),
            height: default_legend_width(),
            ..Self::default()
        }
    }
}

/// Horizontal runs low to high left to right; vertical puts low at the bottom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Draw the ramp as a strip, one solid line of pixels per step.
pub fn render_legend_surface<S: Surface>(
    ramp: &ColorRamp,
    config: &LegendConfig,
) -> HeatmapResult<S> {
    let mut surface = S::allocate(config.width, config.height, Background::Transparent)?;
    let (w, h) = (config.width, config.height);

    match config.orientation {
        LegendOrientation::Horizontal => {
            for x in 0..w {
                let color = ramp.color_at(step_fraction(x, w));
                surface.fill_rect(x as f32, 0.0, 1.0, h as f32, color);
            }
        }
        LegendOrientation::Vertical => {
            for y in 0..h {
                let color = ramp.color_at(1.0 - step_fraction(y, h));
                surface.fill_rect(0.0, y as f32, w as f32, 1.0, color);
            }
        }
    }

    if config.border {
        let (wf, hf) = (w as f32 - 0.5, h as f32 - 0.5);
        surface.stroke_path(
            &[(0.5, 0.5), (wf, 0.5), (wf, hf), (0.5, hf)],
            true,
            &StrokeStyle::solid(OUTLINE_COLOR, 1.0),
        );
    }

    Ok(surface)
}

/// Render a legend for `gradient` and encode it as PNG.
pub fn render_legend(gradient: &[ColorSpec], config: &LegendConfig) -> HeatmapResult<Vec<u8>> {
    let ramp = ColorRamp::new(gradient)?;
    let surface: SkiaSurface = render_legend_surface(&ramp, config)?;
    let png = create_png(
        &surface.to_rgba8(),
        surface.width() as usize,
        surface.height() as usize,
    )?;
    debug!(
        width = config.width,
        height = config.height,
        stops = ramp.stops().len(),
        "Legend rendered"
    );
    Ok(png)
}

fn step_fraction(i: u32, len: u32) -> f32 {
    if len <= 1 {
        0.0
    } else {
        i as f32 / (len - 1) as f32
    }
}
