//! Drawing surfaces for heatmap rendering.
//!
//! The pipeline only talks to the [`Surface`] trait, so any 2D raster backend
//! can stand in. [`SkiaSurface`] is the provided implementation on top of
//! `tiny-skia`.
//!
//! Coordinates passed to a surface are already in pixel space; conversion
//! from normalized sample coordinates happens in the callers.

use footmap_common::{HeatmapError, HeatmapResult};
use tiny_skia::{
    BlendMode, FillRule, GradientStop, Paint, PathBuilder, Pixmap, PixmapPaint, Point,
    RadialGradient, Rect, SpreadMode, Stroke, StrokeDash, Transform,
};

use crate::gradient::Color;

/// Initial fill of a freshly allocated surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Transparent,
    White,
}

impl Background {
    pub fn from_transparent_flag(transparent: bool) -> Self {
        if transparent {
            Background::Transparent
        } else {
            Background::White
        }
    }
}

/// Stroke parameters for paths.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    /// Alternating on/off lengths in pixels; `None` for a solid line.
    pub dash: Option<Vec<f32>>,
}

impl StrokeStyle {
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    pub fn dashed(color: Color, width: f32, pattern: Vec<f32>) -> Self {
        Self {
            color,
            width,
            dash: Some(pattern),
        }
    }
}

/// A stop in a radial gradient. `alpha` is in `[0, 1]` and is scaled by the
/// alpha of `color`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialStop {
    pub offset: f32,
    pub color: Color,
    pub alpha: f32,
}

/// Raster target for one render call.
///
/// A surface is exclusively owned by the render that allocated it.
pub trait Surface: Sized {
    /// Allocate a `width x height` surface filled with `background`.
    ///
    /// Fails with [`HeatmapError::InvalidDimension`] when either side is zero
    /// or the backend cannot hold the requested size.
    fn allocate(width: u32, height: u32, background: Background) -> HeatmapResult<Self>;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Stroke a polyline through `points`, optionally closing it.
    /// Fewer than two points draws nothing.
    fn stroke_path(&mut self, points: &[(f32, f32)], closed: bool, style: &StrokeStyle);

    /// Fill an axis-aligned rectangle with a solid color.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Paint a radial gradient disc centered on `(cx, cy)`.
    ///
    /// Overlapping blobs accumulate additively, so the result does not
    /// depend on paint order. Non-positive or non-finite radii paint nothing.
    fn fill_radial_gradient(&mut self, cx: f32, cy: f32, radius: f32, stops: &[RadialStop]);

    /// Composite `layer` over this surface with a multiply blend.
    fn composite_multiply(&mut self, layer: &Self);

    /// Straight-alpha RGBA of one pixel.
    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]>;

    /// Straight-alpha RGBA bytes, row-major.
    fn to_rgba8(&self) -> Vec<u8>;
}

/// `tiny-skia` backed surface.
pub struct SkiaSurface {
    pixmap: Pixmap,
}

fn solid_paint(color: Color, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = anti_alias;
    paint
}

impl Surface for SkiaSurface {
    fn allocate(width: u32, height: u32, background: Background) -> HeatmapResult<Self> {
        if width == 0 || height == 0 {
            return Err(HeatmapError::InvalidDimension { width, height });
        }

        let mut pixmap =
            Pixmap::new(width, height).ok_or(HeatmapError::InvalidDimension { width, height })?;

        match background {
            Background::Transparent => pixmap.fill(tiny_skia::Color::TRANSPARENT),
            Background::White => pixmap.fill(tiny_skia::Color::WHITE),
        }

        Ok(Self { pixmap })
    }

    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn stroke_path(&mut self, points: &[(f32, f32)], closed: bool, style: &StrokeStyle) {
        if points.len() < 2 {
            return;
        }

        let mut pb = PathBuilder::new();
        pb.move_to(points[0].0, points[0].1);
        for &(x, y) in &points[1..] {
            pb.line_to(x, y);
        }
        if closed {
            pb.close();
        }

        let Some(path) = pb.finish() else {
            return;
        };

        let paint = solid_paint(style.color, true);

        let mut stroke = Stroke {
            width: style.width,
            ..Stroke::default()
        };
        if let Some(pattern) = &style.dash {
            stroke.dash = StrokeDash::new(pattern.clone(), 0.0);
        }

        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        if let Some(rect) = Rect::from_xywh(x, y, width, height) {
            let paint = solid_paint(color, false);
            self.pixmap
                .fill_rect(rect, &paint, Transform::identity(), None);
        }
    }

    fn fill_radial_gradient(&mut self, cx: f32, cy: f32, radius: f32, stops: &[RadialStop]) {
        if !(radius.is_finite() && radius > 0.0) || stops.is_empty() {
            return;
        }

        let gradient_stops: Vec<GradientStop> = stops
            .iter()
            .map(|s| {
                let mut color = tiny_skia::Color::from_rgba8(s.color.r, s.color.g, s.color.b, 255);
                color.set_alpha(s.alpha.clamp(0.0, 1.0) * s.color.a as f32 / 255.0);
                GradientStop::new(s.offset, color)
            })
            .collect();

        let center = Point::from_xy(cx, cy);
        let Some(shader) = RadialGradient::new(
            center,
            center,
            radius,
            gradient_stops,
            SpreadMode::Pad,
            Transform::identity(),
        ) else {
            return;
        };

        let Some(circle) = PathBuilder::from_circle(cx, cy, radius) else {
            return;
        };

        let paint = Paint {
            shader,
            anti_alias: true,
            blend_mode: BlendMode::Plus,
            ..Paint::default()
        };

        self.pixmap
            .fill_path(&circle, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn composite_multiply(&mut self, layer: &Self) {
        // Blend mode lives on the paint, so later draws are source-over again.
        let paint = PixmapPaint {
            blend_mode: BlendMode::Multiply,
            ..PixmapPaint::default()
        };
        self.pixmap
            .draw_pixmap(0, 0, layer.pixmap.as_ref(), &paint, Transform::identity(), None);
    }

    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.data().len());
        for p in self.pixmap.pixels() {
            let c = p.demultiply();
            out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_zero_dimension_fails() {
        let err = SkiaSurface::allocate(0, 10, Background::White).err().unwrap();
        assert!(matches!(
            err,
            HeatmapError::InvalidDimension { width: 0, height: 10 }
        ));
        assert!(SkiaSurface::allocate(10, 0, Background::White).is_err());
    }

    #[test]
    fn test_allocate_backgrounds() {
        let white = SkiaSurface::allocate(4, 3, Background::White).unwrap();
        assert_eq!(white.pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(white.to_rgba8().len(), 4 * 3 * 4);

        let clear = SkiaSurface::allocate(4, 3, Background::Transparent).unwrap();
        assert_eq!(clear.pixel(3, 2).unwrap()[3], 0);
        assert_eq!(clear.pixel(4, 0), None);
    }

    #[test]
    fn test_fill_rect_exact_color() {
        let mut surface = SkiaSurface::allocate(10, 10, Background::Transparent).unwrap();
        surface.fill_rect(2.0, 2.0, 3.0, 3.0, Color::new(10, 20, 30, 255));
        assert_eq!(surface.pixel(3, 3), Some([10, 20, 30, 255]));
        assert_eq!(surface.pixel(0, 0).unwrap()[3], 0);
    }

    #[test]
    fn test_stroke_path_single_point_is_noop() {
        let mut surface = SkiaSurface::allocate(10, 10, Background::White).unwrap();
        let before = surface.to_rgba8();
        surface.stroke_path(&[(5.0, 5.0)], true, &StrokeStyle::solid(Color::new(0, 0, 0, 255), 2.0));
        assert_eq!(surface.to_rgba8(), before);
    }

    #[test]
    fn test_radial_gradient_center_opacity() {
        let mut layer = SkiaSurface::allocate(40, 40, Background::Transparent).unwrap();
        let red = Color::new(255, 0, 0, 255);
        layer.fill_radial_gradient(
            20.0,
            20.0,
            15.0,
            &[
                RadialStop { offset: 0.0, color: red, alpha: 0.8 },
                RadialStop { offset: 1.0, color: red, alpha: 0.0 },
            ],
        );
        let center = layer.pixel(20, 20).unwrap();
        assert!(center[3] > 150, "center alpha too low: {:?}", center);
        assert_eq!(layer.pixel(0, 0).unwrap()[3], 0);
    }

    #[test]
    fn test_radial_gradient_scales_by_stop_color_alpha() {
        let center_alpha = |a: u8| {
            let mut layer = SkiaSurface::allocate(40, 40, Background::Transparent).unwrap();
            let color = Color::new(255, 0, 0, a);
            layer.fill_radial_gradient(
                20.0,
                20.0,
                15.0,
                &[
                    RadialStop { offset: 0.0, color, alpha: 0.8 },
                    RadialStop { offset: 1.0, color, alpha: 0.0 },
                ],
            );
            layer.pixel(20, 20).unwrap()[3]
        };

        let opaque = center_alpha(255);
        let half = center_alpha(128);
        assert_eq!(center_alpha(0), 0);
        assert!(half < opaque, "half {} opaque {}", half, opaque);
        assert!((half as i32 - opaque as i32 / 2).abs() <= 3);
    }

    #[test]
    fn test_radial_gradient_ignores_bad_radius() {
        let mut layer = SkiaSurface::allocate(10, 10, Background::Transparent).unwrap();
        let stops = [RadialStop { offset: 0.0, color: Color::new(0, 0, 255, 255), alpha: 0.8 }];
        layer.fill_radial_gradient(5.0, 5.0, 0.0, &stops);
        layer.fill_radial_gradient(5.0, 5.0, f32::NAN, &stops);
        assert!(layer.to_rgba8().chunks_exact(4).all(|p| p[3] == 0));
    }

    #[test]
    fn test_multiply_with_transparent_layer_is_identity() {
        let mut base = SkiaSurface::allocate(8, 8, Background::White).unwrap();
        base.fill_rect(0.0, 0.0, 4.0, 8.0, Color::new(120, 60, 30, 255));
        let before = base.to_rgba8();

        let layer = SkiaSurface::allocate(8, 8, Background::Transparent).unwrap();
        base.composite_multiply(&layer);
        assert_eq!(base.to_rgba8(), before);
    }

    #[test]
    fn test_multiply_darkens_white() {
        let mut base = SkiaSurface::allocate(4, 4, Background::White).unwrap();
        let mut layer = SkiaSurface::allocate(4, 4, Background::Transparent).unwrap();
        layer.fill_rect(0.0, 0.0, 4.0, 4.0, Color::new(0, 0, 255, 255));
        base.composite_multiply(&layer);
        assert_eq!(base.pixel(1, 1), Some([0, 0, 255, 255]));
    }
}
