//! Persisting scan heatmaps to disk.
//!
//! Pixel work runs on the blocking pool; only directory creation and the
//! file write are async. Each saved heatmap takes two independent render
//! passes, one encoded as PNG for the file and one as a data URL preview.
//! The file is always PNG, whatever format the options ask for.
//!
//! Files are written under a hidden `.partial` name and renamed into place
//! once every write of the call has succeeded.

use footmap_common::{FootSide, HeatmapError, HeatmapResult, Sample};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, instrument, warn};

use crate::encode::OutputFormat;
use crate::heatmap::generate_heatmap;
use crate::options::RenderOptions;

/// Location and inline preview of a persisted heatmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedHeatmap {
    pub side: FootSide,
    pub file_path: PathBuf,
    pub data_url: String,
}

/// Reject scan ids that would leave the output directory.
pub fn validate_scan_id(scan_id: &str) -> HeatmapResult<()> {
    if scan_id.is_empty() {
        return Err(HeatmapError::InvalidOptions("scan id is empty".to_string()));
    }
    if scan_id.contains(['/', '\\']) || scan_id.contains("..") {
        return Err(HeatmapError::InvalidOptions(format!(
            "scan id '{}' contains a path separator or '..'",
            scan_id
        )));
    }
    Ok(())
}

/// `scan_{scan_id}_{side}_pressure_heatmap.png`
pub fn heatmap_file_name(scan_id: &str, side: FootSide) -> String {
    format!("scan_{}_{}_pressure_heatmap.png", scan_id, side)
}

/// PNG bytes and data URL from two full render passes.
pub fn render_scan_outputs(
    samples: &[Sample],
    options: &RenderOptions,
) -> HeatmapResult<(Vec<u8>, String)> {
    let png = generate_heatmap(samples, &options.clone().with_format(OutputFormat::Png))?
        .into_bytes()
        .ok_or_else(|| HeatmapError::Encode("PNG pass returned no bytes".to_string()))?;

    let data_url = generate_heatmap(samples, &options.clone().with_format(OutputFormat::DataUrl))?
        .into_data_url()
        .ok_or_else(|| HeatmapError::Encode("preview pass returned no data URL".to_string()))?;

    Ok((png, data_url))
}

/// Render and save the heatmap for one foot of a scan with the standard
/// scan settings (600x1000, canonical outline for `side`).
pub async fn generate_and_save_scan_heatmap(
    scan_id: &str,
    samples: &[Sample],
    side: FootSide,
    output_dir: impl AsRef<Path>,
) -> HeatmapResult<SavedHeatmap> {
    generate_and_save_scan_heatmap_with(
        scan_id,
        samples,
        side,
        output_dir,
        RenderOptions::for_scan(side),
    )
    .await
}

/// Like [`generate_and_save_scan_heatmap`] with caller-supplied options.
/// `options.output_format` is ignored: the file is PNG and the preview is a
/// data URL.
#[instrument(skip(samples, output_dir, options), fields(samples = samples.len()))]
pub async fn generate_and_save_scan_heatmap_with(
    scan_id: &str,
    samples: &[Sample],
    side: FootSide,
    output_dir: impl AsRef<Path>,
    options: RenderOptions,
) -> HeatmapResult<SavedHeatmap> {
    validate_scan_id(scan_id)?;
    let owned = samples.to_vec();
    let (png, data_url) =
        tokio::task::spawn_blocking(move || render_scan_outputs(&owned, &options))
            .await
            .map_err(|e| HeatmapError::Task(e.to_string()))??;

    let output_dir = output_dir.as_ref();
    ensure_output_dir(output_dir).await?;
    let staged = stage_heatmap(output_dir, scan_id, side, png, data_url).await?;
    commit_heatmap(staged).await
}

/// Render both feet of a scan in parallel and save them.
///
/// The two renders share nothing; they run side by side on one blocking
/// task and the directory is created once before either write. If either
/// staged write fails the other is removed and neither file is created. A
/// failure while renaming the second file leaves the first one in place.
#[instrument(skip(left, right, output_dir), fields(left = left.len(), right = right.len()))]
pub async fn generate_and_save_scan_pair(
    scan_id: &str,
    left: &[Sample],
    right: &[Sample],
    output_dir: impl AsRef<Path>,
) -> HeatmapResult<(SavedHeatmap, SavedHeatmap)> {
    validate_scan_id(scan_id)?;
    let left = left.to_vec();
    let right = right.to_vec();

    let (left_out, right_out) = tokio::task::spawn_blocking(move || {
        rayon::join(
            || render_scan_outputs(&left, &RenderOptions::for_scan(FootSide::Left)),
            || render_scan_outputs(&right, &RenderOptions::for_scan(FootSide::Right)),
        )
    })
    .await
    .map_err(|e| HeatmapError::Task(e.to_string()))?;

    let (left_png, left_url) = left_out?;
    let (right_png, right_url) = right_out?;

    let output_dir = output_dir.as_ref();
    ensure_output_dir(output_dir).await?;

    let staged = tokio::join!(
        stage_heatmap(output_dir, scan_id, FootSide::Left, left_png, left_url),
        stage_heatmap(output_dir, scan_id, FootSide::Right, right_png, right_url),
    );

    match staged {
        (Ok(left), Ok(right)) => {
            let left = match commit_heatmap(left).await {
                Ok(saved) => saved,
                Err(e) => {
                    discard_staged(&right).await;
                    return Err(e);
                }
            };
            let right = commit_heatmap(right).await?;
            Ok((left, right))
        }
        (Ok(staged), Err(e)) | (Err(e), Ok(staged)) => {
            discard_staged(&staged).await;
            Err(e)
        }
        (Err(e), Err(_)) => Err(e),
    }
}

/// Create-if-absent; an existing directory is fine.
async fn ensure_output_dir(dir: &Path) -> HeatmapResult<()> {
    fs::create_dir_all(dir).await?;
    debug!(dir = %dir.display(), "Output directory ready");
    Ok(())
}

/// A heatmap written under its staging name, not yet visible.
struct StagedHeatmap {
    saved: SavedHeatmap,
    staging_path: PathBuf,
    bytes: usize,
}

async fn stage_heatmap(
    dir: &Path,
    scan_id: &str,
    side: FootSide,
    png: Vec<u8>,
    data_url: String,
) -> HeatmapResult<StagedHeatmap> {
    let file_name = heatmap_file_name(scan_id, side);
    let file_path = dir.join(&file_name);
    let staging_path = dir.join(format!(".{}.partial", file_name));
    let bytes = png.len();

    if let Err(e) = fs::write(&staging_path, png).await {
        let _ = fs::remove_file(&staging_path).await;
        return Err(e.into());
    }

    Ok(StagedHeatmap {
        saved: SavedHeatmap {
            side,
            file_path,
            data_url,
        },
        staging_path,
        bytes,
    })
}

async fn commit_heatmap(staged: StagedHeatmap) -> HeatmapResult<SavedHeatmap> {
    if let Err(e) = fs::rename(&staged.staging_path, &staged.saved.file_path).await {
        discard_staged(&staged).await;
        return Err(e.into());
    }

    info!(
        side = %staged.saved.side,
        path = %staged.saved.file_path.display(),
        bytes = staged.bytes,
        "Saved pressure heatmap"
    );
    Ok(staged.saved)
}

async fn discard_staged(staged: &StagedHeatmap) {
    if let Err(e) = fs::remove_file(&staged.staging_path).await {
        warn!(path = %staged.staging_path.display(), error = %e, "Failed to remove staged heatmap");
    }
}
