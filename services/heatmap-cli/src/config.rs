//! Input files for the CLI: sample sets and render options.

use anyhow::{bail, Context, Result};
use footmap_common::{canonical_outline, create_standard_pressure_points, FootSide, Sample};
use renderer::RenderOptions;
use std::path::Path;
use tracing::{debug, info};

/// Load samples from a JSON or YAML file holding a list of
/// `{x, y, intensity, location?}` records.
pub fn load_samples(path: &Path) -> Result<Vec<Sample>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read samples from {}", path.display()))?;

    let samples: Vec<Sample> = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML samples in {}", path.display()))?,
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON samples in {}", path.display()))?,
        other => bail!(
            "Unsupported samples file extension {:?} for {}",
            other,
            path.display()
        ),
    };

    debug!(path = %path.display(), count = samples.len(), "Loaded samples");
    Ok(samples)
}

/// Samples for one foot.
///
/// A samples file is taken to describe the left foot; right-foot samples are
/// derived from it by mirroring. Without a file the standard set is used.
pub fn samples_for_side(file: Option<&[Sample]>, side: FootSide) -> Vec<Sample> {
    match (file, side) {
        (Some(samples), FootSide::Left) => samples.to_vec(),
        (Some(samples), FootSide::Right) => samples.iter().map(Sample::mirrored).collect(),
        (None, side) => {
            info!(side = %side, "No samples given, using standard pressure points");
            create_standard_pressure_points(side)
        }
    }
}

/// Scan render options for `side`, optionally read from a file.
///
/// A file that sets no outline gets the canonical outline for `side`.
pub fn scan_options(path: Option<&Path>, side: FootSide) -> Result<RenderOptions> {
    let Some(path) = path else {
        return Ok(RenderOptions::for_scan(side));
    };

    let mut options = RenderOptions::from_file(path)
        .with_context(|| format!("Failed to load render options from {}", path.display()))?;
    if options.foot_outline.is_none() {
        options.foot_outline = Some(canonical_outline(side));
    }
    options.validate()?;
    Ok(options)
}
