//! Reference frame drawn beneath the heat layer: grid, foot outline and the
//! dashed centerline.

use footmap_common::FootOutline;
use tracing::debug;

use crate::gradient::Color;
use crate::surface::{StrokeStyle, Surface};

/// Outline stroke color (#333333).
pub const OUTLINE_COLOR: Color = Color::rgb(0x33, 0x33, 0x33);

pub const OUTLINE_WIDTH: f32 = 2.0;

/// Grid stroke color (#E0E0E0).
pub const GRID_COLOR: Color = Color::rgb(0xE0, 0xE0, 0xE0);

pub const GRID_WIDTH: f32 = 0.5;

/// Centerline stroke color (#999999).
pub const CENTERLINE_COLOR: Color = Color::rgb(0x99, 0x99, 0x99);

pub const CENTERLINE_WIDTH: f32 = 1.0;

/// On/off lengths of the centerline dash in pixels.
pub const CENTERLINE_DASH: [f32; 2] = [5.0, 5.0];

/// Uniform grid at `spacing` pixels, starting at the origin.
pub fn draw_grid<S: Surface>(surface: &mut S, spacing: f32) {
    if !(spacing.is_finite() && spacing > 0.0) {
        return;
    }

    let width = surface.width() as f32;
    let height = surface.height() as f32;
    let style = StrokeStyle::solid(GRID_COLOR, GRID_WIDTH);

    let mut x = 0.0;
    while x <= width {
        surface.stroke_path(&[(x, 0.0), (x, height)], false, &style);
        x += spacing;
    }

    let mut y = 0.0;
    while y <= height {
        surface.stroke_path(&[(0.0, y), (width, y)], false, &style);
        y += spacing;
    }
}

/// Scale normalized outline vertices to pixel space.
pub fn outline_to_pixels(outline: &FootOutline, width: u32, height: u32) -> Vec<(f32, f32)> {
    let (w, h) = (width as f32, height as f32);
    outline.points.iter().map(|p| (p.x * w, p.y * h)).collect()
}

/// Closed solid polyline through the outline vertices.
///
/// A degenerate outline (fewer than two vertices) draws nothing.
pub fn draw_outline<S: Surface>(surface: &mut S, outline: &FootOutline) {
    if outline.is_degenerate() {
        debug!(points = outline.points.len(), "Skipping degenerate foot outline");
        return;
    }

    let points = outline_to_pixels(outline, surface.width(), surface.height());
    surface.stroke_path(&points, true, &StrokeStyle::solid(OUTLINE_COLOR, OUTLINE_WIDTH));
}

/// Dashed vertical line through the middle of the canvas, top to bottom.
pub fn draw_centerline<S: Surface>(surface: &mut S) {
    let x = surface.width() as f32 / 2.0;
    let height = surface.height() as f32;
    let style = StrokeStyle::dashed(CENTERLINE_COLOR, CENTERLINE_WIDTH, CENTERLINE_DASH.to_vec());
    surface.stroke_path(&[(x, 0.0), (x, height)], false, &style);
}

/// Draw the whole reference frame.
///
/// The grid goes first so the outline sits on top of it. The outline and
/// centerline are only drawn when an outline is given.
pub fn draw_reference<S: Surface>(
    surface: &mut S,
    outline: Option<&FootOutline>,
    grid_spacing: Option<f32>,
) {
    if let Some(spacing) = grid_spacing {
        draw_grid(surface, spacing);
    }

    if let Some(outline) = outline {
        draw_outline(surface, outline);
        draw_centerline(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Background, SkiaSurface};
    use footmap_common::{canonical_outline, FootSide, OutlinePoint};

    #[test]
    fn test_outline_to_pixels_scales() {
        let outline = FootOutline::new(
            FootSide::Left,
            vec![OutlinePoint::new(0.5, 0.25), OutlinePoint::new(1.0, 1.0)],
        );
        let px = outline_to_pixels(&outline, 200, 400);
        assert_eq!(px, vec![(100.0, 100.0), (200.0, 400.0)]);
    }

    #[test]
    fn test_no_outline_no_grid_is_noop() {
        let mut surface = SkiaSurface::allocate(20, 20, Background::White).unwrap();
        let before = surface.to_rgba8();
        draw_reference(&mut surface, None, None);
        assert_eq!(surface.to_rgba8(), before);
    }

    #[test]
    fn test_outline_draws_dark_pixels() {
        let mut surface = SkiaSurface::allocate(60, 100, Background::White).unwrap();
        draw_reference(&mut surface, Some(&canonical_outline(FootSide::Left)), None);
        let dark = surface
            .to_rgba8()
            .chunks_exact(4)
            .filter(|p| p[0] < 128)
            .count();
        assert!(dark > 0);
    }

    #[test]
    fn test_centerline_is_dashed() {
        let mut surface = SkiaSurface::allocate(41, 100, Background::White).unwrap();
        draw_centerline(&mut surface);
        let column: Vec<bool> = (0..100)
            .map(|y| surface.pixel(20, y).unwrap()[0] < 250)
            .collect();
        assert!(column.iter().any(|&inked| inked));
        assert!(column.iter().any(|&inked| !inked));
    }
}
