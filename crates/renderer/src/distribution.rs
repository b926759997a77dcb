//! Regional load summary for a sample set.
//!
//! The foot is split lengthwise into forefoot (`y < 0.3`), midfoot
//! (`0.3 <= y < 0.7`) and rearfoot (`y >= 0.7`), and across at `x = 0.5`
//! into medial and lateral halves. The medial half is `x < 0.5` on a left
//! foot and `x > 0.5` on a right foot, matching the `x -> 1 - x` mirroring
//! of right-foot samples. A sample exactly on `x = 0.5` is split evenly
//! between the halves on both feet.

use footmap_common::{FootSide, Sample};
use serde::{Deserialize, Serialize};

pub const FOREFOOT_END: f32 = 0.3;
pub const MIDFOOT_END: f32 = 0.7;
pub const MEDIAL_SPLIT: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FootRegion {
    Forefoot,
    Midfoot,
    Rearfoot,
}

impl FootRegion {
    pub fn of(sample: &Sample) -> Self {
        if sample.y < FOREFOOT_END {
            FootRegion::Forefoot
        } else if sample.y < MIDFOOT_END {
            FootRegion::Midfoot
        } else {
            FootRegion::Rearfoot
        }
    }
}

/// Share of a sample's load that falls on the medial (inner) half of `side`:
/// 1, 0, or 0.5 on the midline.
pub fn medial_share(sample: &Sample, side: FootSide) -> f32 {
    if sample.x == MEDIAL_SPLIT {
        return 0.5;
    }
    let inner = match side {
        FootSide::Left => sample.x < MEDIAL_SPLIT,
        FootSide::Right => sample.x > MEDIAL_SPLIT,
    };
    if inner {
        1.0
    } else {
        0.0
    }
}

/// Intensity-weighted load shares, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadDistribution {
    pub side: FootSide,
    pub sample_count: usize,

    /// Highest-intensity sample; the first one wins a tie.
    pub peak: Option<Sample>,
    pub mean_intensity: f32,

    pub forefoot_percent: f32,
    pub midfoot_percent: f32,
    pub rearfoot_percent: f32,
    pub medial_percent: f32,
    pub lateral_percent: f32,

    /// Medial over lateral load; `None` when the lateral side carries nothing.
    pub medial_lateral_ratio: Option<f32>,
}

impl LoadDistribution {
    pub fn region_percent(&self, region: FootRegion) -> f32 {
        match region {
            FootRegion::Forefoot => self.forefoot_percent,
            FootRegion::Midfoot => self.midfoot_percent,
            FootRegion::Rearfoot => self.rearfoot_percent,
        }
    }
}

/// Summarize how load is spread over the foot.
///
/// Intensities are clamped to `[0, 1]` first. An empty set or a set with no
/// load reports zero everywhere.
pub fn summarize(samples: &[Sample], side: FootSide) -> LoadDistribution {
    let mut peak: Option<&Sample> = None;
    let mut total = 0.0f32;
    let mut forefoot = 0.0f32;
    let mut midfoot = 0.0f32;
    let mut rearfoot = 0.0f32;
    let mut medial = 0.0f32;

    for sample in samples {
        let load = clamp_intensity(sample.intensity);

        if peak.map_or(true, |p| load > clamp_intensity(p.intensity)) {
            peak = Some(sample);
        }

        total += load;
        match FootRegion::of(sample) {
            FootRegion::Forefoot => forefoot += load,
            FootRegion::Midfoot => midfoot += load,
            FootRegion::Rearfoot => rearfoot += load,
        }
        medial += load * medial_share(sample, side);
    }

    let lateral = total - medial;
    let percent = |part: f32| if total > 0.0 { part / total * 100.0 } else { 0.0 };

    LoadDistribution {
        side,
        sample_count: samples.len(),
        peak: peak.cloned(),
        mean_intensity: if samples.is_empty() {
            0.0
        } else {
            total / samples.len() as f32
        },
        forefoot_percent: percent(forefoot),
        midfoot_percent: percent(midfoot),
        rearfoot_percent: percent(rearfoot),
        medial_percent: percent(medial),
        lateral_percent: percent(lateral),
        medial_lateral_ratio: (lateral > 0.0).then(|| medial / lateral),
    }
}

fn clamp_intensity(intensity: f32) -> f32 {
    if intensity.is_nan() {
        0.0
    } else {
        intensity.clamp(0.0, 1.0)
    }
}
