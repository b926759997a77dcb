//! Foot pressure heatmap command-line tool.
//!
//! Renders and saves scan heatmaps, writes gradient legends and prints load
//! distribution summaries.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use footmap_common::FootSide;
use renderer::persist::generate_and_save_scan_heatmap_with;
use renderer::{
    generate_and_save_scan_pair, render_legend, summarize, LegendConfig, RenderOptions,
    SavedHeatmap,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "heatmap-cli")]
#[command(about = "Render foot pressure heatmaps for scans")]
struct Args {
    /// Log level
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render and save the heatmap for one or both feet of a scan
    Render {
        /// Scan identifier used in the output file name
        #[arg(long)]
        scan_id: String,

        #[arg(long, value_enum, default_value = "both")]
        side: SideArg,

        /// Left-foot samples (JSON or YAML); right foot is mirrored from them
        #[arg(long)]
        samples: Option<PathBuf>,

        /// Directory for the PNG files
        #[arg(long, env = "HEATMAP_OUTPUT_DIR", default_value = "heatmaps")]
        output_dir: PathBuf,

        /// Render options file (JSON or YAML)
        #[arg(long, env = "HEATMAP_OPTIONS")]
        options: Option<PathBuf>,
    },

    /// Write a PNG legend for the configured gradient
    Legend {
        #[arg(short, long)]
        output: PathBuf,

        #[arg(long)]
        vertical: bool,

        /// Render options file providing `color_gradient`
        #[arg(long, env = "HEATMAP_OPTIONS")]
        options: Option<PathBuf>,
    },

    /// Print the regional load distribution as JSON
    Summary {
        /// Samples file (JSON or YAML); standard points when absent
        #[arg(long)]
        samples: Option<PathBuf>,

        /// left or right
        #[arg(long)]
        side: FootSide,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SideArg {
    Left,
    Right,
    Both,
}

impl SideArg {
    fn sides(self) -> Vec<FootSide> {
        match self {
            SideArg::Left => vec![FootSide::Left],
            SideArg::Right => vec![FootSide::Right],
            SideArg::Both => vec![FootSide::Left, FootSide::Right],
        }
    }
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // stdout is reserved for command output
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.log_json)?;

    match args.command {
        Command::Render {
            scan_id,
            side,
            samples,
            output_dir,
            options,
        } => render(&scan_id, side, samples, output_dir, options).await,
        Command::Legend {
            output,
            vertical,
            options,
        } => legend(output, vertical, options).await,
        Command::Summary { samples, side } => summary(samples, side),
    }
}

async fn render(
    scan_id: &str,
    side: SideArg,
    samples: Option<PathBuf>,
    output_dir: PathBuf,
    options: Option<PathBuf>,
) -> Result<()> {
    let file_samples = samples.as_deref().map(config::load_samples).transpose()?;

    info!(
        scan_id = %scan_id,
        side = ?side,
        output_dir = %output_dir.display(),
        "Rendering scan heatmaps"
    );

    let saved: Vec<SavedHeatmap> = if side == SideArg::Both && options.is_none() {
        let left = config::samples_for_side(file_samples.as_deref(), FootSide::Left);
        let right = config::samples_for_side(file_samples.as_deref(), FootSide::Right);
        let (l, r) = generate_and_save_scan_pair(scan_id, &left, &right, &output_dir).await?;
        vec![l, r]
    } else {
        let mut saved = Vec::new();
        for foot in side.sides() {
            let foot_samples = config::samples_for_side(file_samples.as_deref(), foot);
            let foot_options = config::scan_options(options.as_deref(), foot)?;
            saved.push(
                generate_and_save_scan_heatmap_with(
                    scan_id,
                    &foot_samples,
                    foot,
                    &output_dir,
                    foot_options,
                )
                .await?,
            );
        }
        saved
    };

    for heatmap in &saved {
        println!(
            "{}\t{}\tdata URL: {} chars",
            heatmap.side,
            heatmap.file_path.display(),
            heatmap.data_url.len()
        );
    }
    Ok(())
}

async fn legend(output: PathBuf, vertical: bool, options: Option<PathBuf>) -> Result<()> {
    let options = match options {
        Some(path) => RenderOptions::from_file(&path)
            .with_context(|| format!("Failed to load render options from {}", path.display()))?,
        None => RenderOptions::default(),
    };

    let config = if vertical {
        LegendConfig::vertical()
    } else {
        LegendConfig::default()
    };

    let png = render_legend(&options.color_gradient, &config)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&output, &png)
        .await
        .with_context(|| format!("Failed to write legend to {}", output.display()))?;

    info!(path = %output.display(), bytes = png.len(), "Legend written");
    println!("{}", output.display());
    Ok(())
}

fn summary(samples: Option<PathBuf>, side: FootSide) -> Result<()> {
    // A samples file is taken as-is for the requested side.
    let samples = match samples {
        Some(path) => config::load_samples(&path)?,
        None => config::samples_for_side(None, side),
    };

    let distribution = summarize(&samples, side);
    println!("{}", serde_json::to_string_pretty(&distribution)?);
    Ok(())
}
