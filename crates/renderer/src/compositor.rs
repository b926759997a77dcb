//! Radial heat compositing.
//!
//! Every sample becomes a radial blob on one offscreen layer. Blobs on the
//! layer accumulate additively, then the finished layer is multiplied onto
//! the base surface in a single pass.

use footmap_common::{HeatmapResult, Sample};
use tracing::{debug, warn};

use crate::gradient::{adjusted_intensity, blob_radius, Color, ColorRamp};
use crate::surface::{Background, RadialStop, Surface};

/// Blob opacity profile as `(offset, alpha)`: 0.8 at the center, 0.5 at half
/// radius, 0 at the edge.
pub const BLOB_PROFILE: [(f32, f32); 3] = [(0.0, 0.8), (0.5, 0.5), (1.0, 0.0)];

/// Parameters shared by every blob in one render.
#[derive(Debug, Clone)]
pub struct HeatParams<'a> {
    pub radius: f32,
    pub intensity_factor: f32,
    pub ramp: &'a ColorRamp,
}

/// Radial stops for a blob of `color`.
pub fn blob_stops(color: Color) -> [RadialStop; 3] {
    BLOB_PROFILE.map(|(offset, alpha)| RadialStop { offset, color, alpha })
}

/// Paint one sample onto the heat layer.
pub fn paint_sample<S: Surface>(layer: &mut S, sample: &Sample, params: &HeatParams<'_>) {
    let px = sample.x * layer.width() as f32;
    let py = sample.y * layer.height() as f32;
    let radius = blob_radius(params.radius, sample.intensity);
    let color = params
        .ramp
        .color_at(adjusted_intensity(sample.intensity, params.intensity_factor));

    layer.fill_radial_gradient(px, py, radius, &blob_stops(color));
}

/// Paint all samples onto a fresh layer and multiply it onto `base`.
///
/// An empty sample list leaves `base` untouched.
pub fn composite_heat<S: Surface>(
    base: &mut S,
    samples: &[Sample],
    params: &HeatParams<'_>,
) -> HeatmapResult<()> {
    if samples.is_empty() {
        debug!("No samples, heat layer skipped");
        return Ok(());
    }

    let out_of_range = samples.iter().filter(|s| !s.is_in_range()).count();
    if out_of_range > 0 {
        warn!(
            out_of_range,
            total = samples.len(),
            "Samples outside the unit range are rendered as-is"
        );
    }

    let mut layer = S::allocate(base.width(), base.height(), Background::Transparent)?;
    for sample in samples {
        paint_sample(&mut layer, sample, params);
    }

    base.composite_multiply(&layer);

    debug!(samples = samples.len(), radius = params.radius, "Heat layer composited");
    Ok(())
}
