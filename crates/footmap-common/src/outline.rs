//! Normalized foot silhouettes used as the heatmap's reference frame.

use serde::{Deserialize, Serialize};

use crate::sample::FootSide;

/// A vertex of an outline in normalized `[0, 1]` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlinePoint {
    pub x: f32,
    pub y: f32,
}

impl OutlinePoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A closed reference polyline describing a foot silhouette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootOutline {
    pub side: FootSide,

    /// Vertices in drawing order; the path is closed back to the first one.
    pub points: Vec<OutlinePoint>,

    /// Nominal length scale. Informational only, outlines are pre-normalized.
    #[serde(default = "default_scale")]
    pub length: f32,

    /// Nominal width scale. Informational only, outlines are pre-normalized.
    #[serde(default = "default_scale")]
    pub width: f32,
}

fn default_scale() -> f32 {
    1.0
}

impl FootOutline {
    pub fn new(side: FootSide, points: Vec<OutlinePoint>) -> Self {
        Self {
            side,
            points,
            length: 1.0,
            width: 1.0,
        }
    }

    /// Fewer than two vertices draws nothing.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }
}

/// Silhouette shared by both canonical outlines, starting at the heel and
/// running up the medial edge, across the toes and back down laterally.
const CANONICAL_POINTS: &[OutlinePoint] = &[
    OutlinePoint::new(0.50, 0.97),
    OutlinePoint::new(0.40, 0.95),
    OutlinePoint::new(0.34, 0.88),
    OutlinePoint::new(0.33, 0.78),
    OutlinePoint::new(0.35, 0.66),
    OutlinePoint::new(0.31, 0.55),
    OutlinePoint::new(0.27, 0.44),
    OutlinePoint::new(0.26, 0.34),
    OutlinePoint::new(0.27, 0.22),
    OutlinePoint::new(0.28, 0.10),
    OutlinePoint::new(0.33, 0.04),
    OutlinePoint::new(0.40, 0.05),
    OutlinePoint::new(0.45, 0.04),
    OutlinePoint::new(0.52, 0.07),
    OutlinePoint::new(0.59, 0.10),
    OutlinePoint::new(0.66, 0.15),
    OutlinePoint::new(0.72, 0.24),
    OutlinePoint::new(0.74, 0.36),
    OutlinePoint::new(0.71, 0.50),
    OutlinePoint::new(0.68, 0.64),
    OutlinePoint::new(0.67, 0.78),
    OutlinePoint::new(0.65, 0.89),
    OutlinePoint::new(0.59, 0.95),
];

/// Built-in outline for a side.
///
/// Both sides currently use the same vertex table. Pressure samples are
/// mirrored for the right foot but the outline is not.
// TODO: mirror the right-foot silhouette once the product decision on outline orientation lands
pub fn canonical_outline(side: FootSide) -> FootOutline {
    FootOutline::new(side, CANONICAL_POINTS.to_vec())
}
