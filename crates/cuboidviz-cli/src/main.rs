use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use cuboidviz_core::figure::{figures_bbox, reconstruct, Figure, Reconstruction, SkipReason};
use cuboidviz_core::frames::FrameIndex;
use cuboidviz_core::geom::BBox2;
use cuboidviz_core::model::JobDump;
use cuboidviz_render::{render_shapes, RenderConfig};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "cuboidviz")]
#[command(about = "Overlay reconstructed cuboid annotations on video-annotation frames.")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Draw the wireframes of one frame onto its image.
    Render {
        image: PathBuf,
        #[arg(long)]
        annotations: PathBuf,
        #[arg(long)]
        frame: u64,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        line_width: Option<u32>,
    },
    /// Print the figures derived for every shape of one frame.
    Figures {
        #[arg(long)]
        annotations: PathBuf,
        #[arg(long)]
        frame: u64,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List annotated frames with their shape counts.
    Frames {
        #[arg(long)]
        annotations: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.cmd {
        Command::Render {
            image,
            annotations,
            frame,
            output,
            config,
            line_width,
        } => render(
            &image,
            &annotations,
            frame,
            output.as_deref(),
            config.as_deref(),
            line_width,
        ),
        Command::Figures {
            annotations,
            frame,
            config,
        } => figures(&annotations, frame, config.as_deref()),
        Command::Frames { annotations } => frames(&annotations),
    }
}

fn render(
    image_path: &Path,
    annotations: &Path,
    frame: u64,
    output: Option<&Path>,
    config: Option<&Path>,
    line_width: Option<u32>,
) -> Result<()> {
    let job = load_job(annotations)?;
    ensure_frame_in_job(&job, frame)?;
    let index = FrameIndex::from_job(&job).context("resolve job annotations")?;

    let mut cfg = load_config(config)?;
    if line_width.is_some() {
        cfg.line_width = line_width;
    }

    ensure_input_file(image_path)?;
    let mut img = image::open(image_path)
        .with_context(|| format!("decode image: {image_path:?}"))?
        .to_rgba8();

    let shapes = index.shapes(frame);
    let report = render_shapes(&mut img, shapes, &cfg).context("draw frame")?;
    log::info!(
        "frame {frame}: {} drawn, {} skipped, {} failed",
        report.drawn,
        report.skipped,
        report.failed.len()
    );

    let out = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output(image_path, frame));
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    save_image(img, &out)?;

    let json = serde_json::to_string_pretty(&report).context("serialize report")?;
    println!("{json}");
    Ok(())
}

#[derive(Debug, Serialize)]
struct ShapeFigures {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    skipped: Option<SkipReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    figures: Vec<Figure>,
    bbox: Option<BBox2>,
}

fn figures(annotations: &Path, frame: u64, config: Option<&Path>) -> Result<()> {
    let job = load_job(annotations)?;
    ensure_frame_in_job(&job, frame)?;
    let index = FrameIndex::from_job(&job).context("resolve job annotations")?;
    let cfg = load_config(config)?;

    let entries: Vec<ShapeFigures> = index
        .shapes(frame)
        .iter()
        .enumerate()
        .map(|(i, shape)| {
            let mut entry = ShapeFigures {
                index: i,
                skipped: None,
                error: None,
                figures: Vec::new(),
                bbox: None,
            };
            match reconstruct(shape, &cfg.palette) {
                Ok(Reconstruction::Figures(figures)) => {
                    entry.bbox = figures_bbox(&figures);
                    entry.figures = figures;
                }
                Ok(Reconstruction::Skipped(reason)) => entry.skipped = Some(reason),
                Err(err) => entry.error = Some(err.to_string()),
            }
            entry
        })
        .collect();

    let json = serde_json::to_string_pretty(&entries).context("serialize figures")?;
    println!("{json}");
    Ok(())
}

#[derive(Debug, Serialize)]
struct FrameEntry {
    frame: u64,
    shapes: usize,
}

fn frames(annotations: &Path) -> Result<()> {
    let job = load_job(annotations)?;
    let index = FrameIndex::from_job(&job).context("resolve job annotations")?;
    if index.is_empty() {
        log::warn!("job has no shapes");
    }
    log::info!("{} annotated frames", index.len());
    let entries: Vec<FrameEntry> = index
        .frame_counts()
        .map(|(frame, shapes)| FrameEntry { frame, shapes })
        .collect();
    let json = serde_json::to_string_pretty(&entries).context("serialize frames")?;
    println!("{json}");
    Ok(())
}

fn load_job(path: &Path) -> Result<JobDump> {
    ensure_input_file(path)?;
    let json = std::fs::read_to_string(path).with_context(|| format!("read annotations: {path:?}"))?;
    JobDump::from_json(&json).with_context(|| format!("parse annotations: {path:?}"))
}

fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };
    ensure_input_file(path)?;
    let json = std::fs::read_to_string(path).with_context(|| format!("read config: {path:?}"))?;
    serde_json::from_str(&json).with_context(|| format!("parse config: {path:?}"))
}

fn ensure_frame_in_job(job: &JobDump, frame: u64) -> Result<()> {
    if !job.contains_frame(frame) {
        bail!(
            "frame {frame} is outside the job's range {}..={}",
            job.start_frame,
            job.stop_frame
        );
    }
    Ok(())
}

fn save_image(img: image::RgbaImage, out: &Path) -> Result<()> {
    let ext = out
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let saved = match ext.as_str() {
        // JPEG has no alpha channel.
        "jpg" | "jpeg" => image::DynamicImage::ImageRgba8(img).to_rgb8().save(out),
        _ => img.save(out),
    };
    saved.with_context(|| format!("write image: {out:?}"))
}

fn default_output(image: &Path, frame: u64) -> PathBuf {
    let stem = image
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("frame");
    image.with_file_name(format!("{stem}_frame{frame}_overlay.png"))
}

fn ensure_input_file(input: &Path) -> Result<()> {
    match std::fs::metadata(input) {
        Ok(meta) => {
            if meta.is_file() {
                Ok(())
            } else {
                bail!("input is not a file: {input:?}");
            }
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            bail!("input not found: {input:?} (cwd: {cwd:?}).");
        }
        Err(err) => Err(err).with_context(|| format!("stat input: {input:?}")),
    }
}
