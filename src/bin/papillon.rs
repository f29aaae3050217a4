use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(name = "papillon", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the particle morph offline and write PNG frames.
    Frames(FramesArgs),
    /// Print the gallery cards and category listings of a manifest.
    Gallery(GalleryArgs),
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out: PathBuf,

    /// Configuration JSON (defaults apply to missing fields).
    #[arg(long)]
    config: Option<PathBuf>,

    /// SVG path data to morph into instead of the built-in butterfly.
    #[arg(long)]
    svg_path: Option<String>,

    /// Frames per second of the offline clock.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// RNG seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Write every K-th frame (the final frame is always written).
    #[arg(long, default_value_t = 1)]
    every: u64,
}

#[derive(Parser, Debug)]
struct GalleryArgs {
    /// Manifest JSON on disk.
    #[arg(long)]
    manifest: PathBuf,

    /// CDN base prepended to relative media paths.
    #[arg(long)]
    cdn_base: Option<String>,
}

/// Width in animator units a custom SVG outline is scaled to.
const SVG_TARGET_WIDTH: f64 = 480.0;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frames(args) => cmd_frames(args),
        Command::Gallery(args) => cmd_gallery(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<papillon::AppConfig> {
    let cfg = match path {
        Some(p) => papillon::AppConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => papillon::AppConfig::default(),
    };
    cfg.validate()?;
    Ok(cfg)
}

fn outline(svg_path: Option<&str>) -> anyhow::Result<papillon::Outline> {
    match svg_path {
        Some(d) => {
            let curve = papillon::PathCurve::from_svg(d).context("parse --svg-path")?;
            let mapping = papillon::CurveMapping::centered(curve.bounds(), SVG_TARGET_WIDTH, true);
            Ok(papillon::Outline::curve(curve, mapping))
        }
        None => Ok(papillon::Outline::anchors(papillon::butterfly_anchors())),
    }
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.every > 0, "--every must be > 0");
    let cfg = load_config(args.config.as_deref())?;
    let viewport = papillon::Viewport::new(args.width, args.height)?;
    let outline = outline(args.svg_path.as_deref())?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut ui = papillon::RecordingUi::full_page();
    let mut session = papillon::LandingSession::prepare(&ui, cfg.clone(), &outline, &mut rng)?;
    let mut surface = papillon::CpuPointSurface::new(cfg.morph.camera, viewport)?;

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;

    let timer = papillon::FrameTimer::new(0.0, args.fps)?;
    let frame_loop = papillon::FrameLoop::default();
    let mut written = 0u64;
    let report = session.run(
        &frame_loop,
        &mut surface,
        &mut ui,
        viewport,
        timer,
        |i, outcome, surface| {
            if i % args.every != 0 && !outcome.done {
                return Ok(());
            }
            let frame = surface
                .frame()
                .context("surface produced no frame after a tick")?;
            let path = args.out.join(format!("frame_{i:05}.png"));
            image::save_buffer_with_format(
                &path,
                &frame.data,
                frame.width,
                frame.height,
                image::ColorType::Rgba8,
                image::ImageFormat::Png,
            )
            .with_context(|| format!("write png '{}'", path.display()))?;
            written += 1;
            Ok(())
        },
    )?;

    anyhow::ensure!(
        report.completed,
        "morph did not complete within {} frames",
        frame_loop.max_frames
    );
    eprintln!(
        "wrote {written} of {} frames to {}",
        report.frames,
        args.out.display()
    );
    Ok(())
}

fn cmd_gallery(args: GalleryArgs) -> anyhow::Result<()> {
    let mut cfg = papillon::LandingConfig::default();
    if let Some(base) = args.cdn_base {
        cfg.cdn_base = base;
    }
    let root = args
        .manifest
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    let name = args
        .manifest
        .file_name()
        .and_then(|n| n.to_str())
        .context("manifest path has no file name")?;
    let source = papillon::DirManifestSource::new(root, name)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build tokio runtime")?;
    let mut ui = papillon::RecordingUi::full_page();
    let gallery = rt.block_on(papillon::load_gallery(&source, &mut ui, &cfg))?;

    for card in gallery.cards() {
        println!(
            "{}\t{}",
            card.label,
            card.preview_url.as_deref().unwrap_or("-")
        );
        if let Some(view) = gallery.open(&card.category) {
            for item in &view.items {
                println!("  {:?}\t{}", item.kind, item.url);
            }
        }
    }
    Ok(())
}
