//! Intensity to color mapping for pressure heatmaps.

use footmap_common::{ColorSpec, HeatmapError, HeatmapResult};

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    pub fn from_spec(spec: &ColorSpec) -> Option<Self> {
        spec.try_to_rgba().map(|(r, g, b, a)| Self::new(r, g, b, a))
    }
}

/// Linear color interpolation, rounding each channel.
pub fn interpolate_color(color1: Color, color2: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let t_inv = 1.0 - t;

    let lerp = |a: u8, b: u8| ((a as f32 * t_inv) + (b as f32 * t)).round() as u8;

    Color::new(
        lerp(color1.r, color2.r),
        lerp(color1.g, color2.g),
        lerp(color1.b, color2.b),
        lerp(color1.a, color2.a),
    )
}

/// Default stops: blue, cyan, green, yellow, red.
pub fn default_gradient() -> Vec<ColorSpec> {
    ["#0000FF", "#00FFFF", "#00FF00", "#FFFF00", "#FF0000"]
        .iter()
        .map(|hex| ColorSpec::hex(hex))
        .collect()
}

/// Ordered color stops spread evenly over `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: Vec<Color>,
}

impl ColorRamp {
    /// Build a ramp from configured colors.
    ///
    /// An empty list or an unparseable color is an
    /// [`HeatmapError::InvalidGradient`]. A single stop is accepted and maps
    /// every intensity to that color.
    pub fn new(specs: &[ColorSpec]) -> HeatmapResult<Self> {
        let stops = specs
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                Color::from_spec(spec).ok_or_else(|| {
                    HeatmapError::InvalidGradient(format!("stop {} is not a valid color: {:?}", i, spec))
                })
            })
            .collect::<HeatmapResult<Vec<_>>>()?;

        Self::from_colors(stops)
    }

    pub fn from_colors(stops: Vec<Color>) -> HeatmapResult<Self> {
        if stops.is_empty() {
            return Err(HeatmapError::InvalidGradient(
                "gradient must contain at least one color".to_string(),
            ));
        }
        Ok(Self { stops })
    }

    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// Color for an adjusted intensity.
    ///
    /// `[0, 1]` is split into `N - 1` equal segments; each channel is
    /// interpolated linearly inside a segment. 0 gives the first stop and 1
    /// the last stop exactly. Out-of-range and NaN inputs clamp.
    pub fn color_at(&self, adjusted: f32) -> Color {
        let n = self.stops.len();
        if n == 1 {
            return self.stops[0];
        }

        let t = if adjusted.is_nan() {
            0.0
        } else {
            adjusted.clamp(0.0, 1.0)
        };

        let scaled = t * (n - 1) as f32;
        let index = (scaled.floor() as usize).min(n - 2);
        let local = scaled - index as f32;

        interpolate_color(self.stops[index], self.stops[index + 1], local)
    }
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self {
            stops: default_gradient()
                .iter()
                .filter_map(Color::from_spec)
                .collect(),
        }
    }
}

/// Blob radius for a sample: half the base radius at zero intensity, the
/// full base radius at intensity 1.
pub fn blob_radius(base_radius: f32, intensity: f32) -> f32 {
    base_radius * (0.5 + intensity * 0.5)
}

/// Intensity used for color lookup, damped by `intensity_factor` and capped at 1.
pub fn adjusted_intensity(intensity: f32, intensity_factor: f32) -> f32 {
    (intensity * intensity_factor).min(1.0)
}
