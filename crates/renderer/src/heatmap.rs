//! In-memory heatmap rendering.

use footmap_common::{HeatmapResult, Sample};
use tracing::{debug, info_span};

use crate::compositor::{composite_heat, HeatParams};
use crate::encode::{encode_rgba, HeatmapOutput};
use crate::options::RenderOptions;
use crate::outline::draw_reference;
use crate::surface::{Background, SkiaSurface, Surface};

/// Run allocation, reference drawing and heat compositing on any surface
/// backend.
pub fn render_to<S: Surface>(samples: &[Sample], options: &RenderOptions) -> HeatmapResult<S> {
    options.validate()?;
    let ramp = options.color_ramp()?;

    let mut surface = S::allocate(
        options.width,
        options.height,
        Background::from_transparent_flag(options.transparent_background),
    )?;
    debug!(width = options.width, height = options.height, "Surface allocated");

    let grid = options.show_grid.then_some(options.grid_size);
    draw_reference(&mut surface, options.foot_outline.as_ref(), grid);

    let params = HeatParams {
        radius: options.radius,
        intensity_factor: options.intensity_factor,
        ramp: &ramp,
    };
    composite_heat(&mut surface, samples, &params)?;

    Ok(surface)
}

/// Render onto the default `tiny-skia` surface.
pub fn render_surface(samples: &[Sample], options: &RenderOptions) -> HeatmapResult<SkiaSurface> {
    render_to(samples, options)
}

/// Render `samples` and encode the result in `options.output_format`.
///
/// Either a complete image comes back or an error does; nothing is written
/// anywhere.
pub fn generate_heatmap(samples: &[Sample], options: &RenderOptions) -> HeatmapResult<HeatmapOutput> {
    let span = info_span!(
        "generate_heatmap",
        width = options.width,
        height = options.height,
        samples = samples.len(),
        format = %options.output_format,
    );
    let _enter = span.enter();

    let surface = render_surface(samples, options)?;
    let output = encode_rgba(
        &surface.to_rgba8(),
        surface.width(),
        surface.height(),
        options.output_format,
        options.effective_quality(),
    )?;

    debug!(bytes = output.len(), "Heatmap encoded");
    Ok(output)
}
