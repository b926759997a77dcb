//! Pressure samples and the standard fallback sample set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single pressure observation in normalized plane coordinates.
///
/// `x` and `y` are in `[0, 1]` with the origin at the top-left and `y`
/// increasing downward. `intensity` is in `[0, 1]`. Values outside these
/// ranges are accepted and rendered as-is (off-canvas or clamped by the
/// color mapping).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f32,
    pub y: f32,
    pub intensity: f32,

    /// Anatomical tag for display, e.g. "Heel Center". Not used for rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Sample {
    pub fn new(x: f32, y: f32, intensity: f32) -> Self {
        Self {
            x,
            y,
            intensity,
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Reflect across the vertical centerline (`x -> 1 - x`).
    pub fn mirrored(&self) -> Self {
        Self {
            x: 1.0 - self.x,
            ..self.clone()
        }
    }

    /// Whether the coordinates and intensity are all inside `[0, 1]`.
    pub fn is_in_range(&self) -> bool {
        let unit = 0.0..=1.0;
        unit.contains(&self.x) && unit.contains(&self.y) && unit.contains(&self.intensity)
    }
}

/// Which foot a render belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FootSide {
    Left,
    Right,
}

impl FootSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            FootSide::Left => "left",
            FootSide::Right => "right",
        }
    }
}

impl fmt::Display for FootSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FootSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Ok(FootSide::Left),
            "right" | "r" => Ok(FootSide::Right),
            other => Err(format!("unknown foot side '{}'", other)),
        }
    }
}

/// Canonical left-foot readings: (location, x, y, intensity).
///
/// Heel and metatarsal heads carry the load, the arch is light and the toes
/// taper off.
const STANDARD_LEFT_POINTS: &[(&str, f32, f32, f32)] = &[
    ("Heel Center", 0.50, 0.88, 0.90),
    ("Heel Medial", 0.42, 0.85, 0.80),
    ("Heel Lateral", 0.58, 0.85, 0.75),
    ("Lateral Midfoot", 0.64, 0.62, 0.45),
    ("Central Arch", 0.50, 0.56, 0.25),
    ("Medial Arch", 0.38, 0.58, 0.15),
    ("First Metatarsal Head", 0.36, 0.33, 0.85),
    ("Second Metatarsal Head", 0.45, 0.31, 0.80),
    ("Third Metatarsal Head", 0.53, 0.32, 0.70),
    ("Fourth Metatarsal Head", 0.60, 0.34, 0.60),
    ("Fifth Metatarsal Head", 0.67, 0.37, 0.55),
    ("Hallux", 0.34, 0.12, 0.70),
    ("Second Toe", 0.45, 0.10, 0.45),
    ("Lesser Toes", 0.58, 0.14, 0.35),
];

/// Placeholder samples for when no measured data is available.
///
/// The right foot is the left foot reflected with `x -> 1 - x`; `y`,
/// intensity and location are unchanged.
pub fn create_standard_pressure_points(side: FootSide) -> Vec<Sample> {
    let left = STANDARD_LEFT_POINTS
        .iter()
        .map(|&(location, x, y, intensity)| Sample::new(x, y, intensity).with_location(location));

    match side {
        FootSide::Left => left.collect(),
        FootSide::Right => left.map(|s| s.mirrored()).collect(),
    }
}
