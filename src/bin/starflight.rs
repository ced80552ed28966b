use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use starflight::catalogs::{cache, gaia, reduced, Body};
use starflight::frame::{FrameContext, FrameUpdater, Vertex};
use starflight::hud::hud_text;
use starflight::input::{Action, InputFrame};
use starflight::raster::{Canvas, Renderer};
use starflight::solar::{markers, orbit_guides, project_markers, Fade};
use starflight::RenderConfig;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Render a first-person flythrough of a star catalog to PNG frames"
)]
struct Cli {
    /// Catalog CSV file
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Read the catalog as the three-column ra,dec,parallax format
    #[arg(long, default_value_t = false)]
    reduced: bool,

    /// Binary body cache; read if present, otherwise written after loading the CSV
    #[arg(long)]
    cache: Option<PathBuf>,

    /// TOML render configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of frames to render
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Directory for frame_NNNN.png snapshots
    #[arg(long, default_value = "frames")]
    output: PathBuf,

    /// Render every body at a fixed intensity
    #[arg(long, default_value_t = false)]
    see_all: bool,

    /// Draw orbit guides
    #[arg(long, default_value_t = false)]
    orbits: bool,

    /// Initial yaw in degrees
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    yaw: f64,

    /// Initial pitch in degrees
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pitch: f64,

    /// Hold the forward key for every frame
    #[arg(long, default_value_t = false)]
    forward: bool,
}

fn load_csv(path: &Path, reduced_format: bool) -> Result<Vec<Body>> {
    let bodies = if reduced_format {
        reduced::load_bodies(path)
    } else {
        gaia::load_bodies(path)
    };
    bodies.with_context(|| format!("loading catalog {}", path.display()))
}

fn load_bodies(cli: &Cli) -> Result<Vec<Body>> {
    if let Some(cache_path) = &cli.cache {
        if cache_path.exists() {
            return cache::read_cache(cache_path)
                .with_context(|| format!("reading cache {}", cache_path.display()));
        }
    }

    let Some(catalog) = &cli.catalog else {
        bail!("no catalog given and no cache to read");
    };
    let bodies = load_csv(catalog, cli.reduced)?;

    if let Some(cache_path) = &cli.cache {
        cache::write_cache(cache_path, &bodies)
            .with_context(|| format!("writing cache {}", cache_path.display()))?;
    }
    Ok(bodies)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RenderConfig::default(),
    };

    let bodies = load_bodies(&cli)?;

    let mut ctx = FrameContext::new(config);
    ctx.see_all = cli.see_all;
    ctx.orbit_lines = cli.orbits;
    ctx.camera
        .set_orientation(cli.yaw.to_radians(), cli.pitch.to_radians());

    let updater =
        FrameUpdater::new(ctx.config.worker_fraction).context("building frame update pool")?;
    let mut vertices = vec![Vertex::HIDDEN; bodies.len()];
    let mut canvas = Canvas::new(ctx.camera.viewport(), ctx.config.background);

    std::fs::create_dir_all(&cli.output)
        .with_context(|| format!("creating output directory {}", cli.output.display()))?;

    let input = if cli.forward {
        InputFrame::default().holding(Action::Forward)
    } else {
        InputFrame::default()
    };

    for frame in 0..cli.frames {
        let start = Instant::now();

        ctx.apply_input(&input);
        updater.update(&ctx, &bodies, &mut vertices);

        canvas.clear();
        let fade = Fade::for_camera(&ctx.camera);
        if ctx.orbit_lines {
            canvas.draw_strip(&orbit_guides(&ctx.camera, fade));
        }
        canvas.draw_points(&vertices);
        for marker in project_markers(&ctx.camera, &markers(fade)) {
            canvas.draw_marker(&marker);
        }
        canvas.draw_crosshair();

        let frame_time = start.elapsed().as_secs_f64();

        let path = cli.output.join(format!("frame_{:04}.png", frame));
        canvas
            .save(&path)
            .with_context(|| format!("writing {}", path.display()))?;

        let visible = vertices.iter().filter(|v| v.is_visible()).count();
        tracing::info!(
            "frame {} -> {} ({} of {} bodies visible)\n{}",
            frame,
            path.display(),
            visible,
            vertices.len(),
            hud_text(&ctx, frame_time)
        );
    }

    Ok(())
}
