//! Terrain Sculpt - headless stroke replay
//!
//! Generates a terrain, drags a straight stroke across its middle and reports
//! how long each dab took against an interactive frame budget.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use glam::Vec2;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use terrain_sculpt_engine::config::SculptConfig;
use terrain_sculpt_engine::terrain::BrushDirection;
use terrain_sculpt_engine::sculpt::SculptSession;

/// Per-dab budget that keeps dragging smooth at 60+ fps
const FRAME_BUDGET: Duration = Duration::from_millis(4);

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON configuration file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Noise seed; overrides the config file
    #[arg(short, long)]
    seed: Option<u32>,

    /// Number of dabs in the replayed stroke
    #[arg(short, long, default_value_t = 60)]
    dabs: u32,

    /// Lower the terrain instead of raising it
    #[arg(long)]
    lower: bool,

    /// Override log level (trace|debug|info|warn|error)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Command-line values take precedence over the config file.
fn apply_overrides(config: &mut SculptConfig, args: &Args) {
    if args.seed.is_some() {
        config.generation.seed = args.seed;
    }
    if args.lower {
        config.brush.direction = BrushDirection::Lower;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    let mut config = match &args.config {
        Some(path) => SculptConfig::load(path)?,
        None => SculptConfig::default(),
    };
    apply_overrides(&mut config, &args);

    let mut session = SculptSession::new(config)?;
    let (lo, hi) = session.mesh().height_range();
    info!(
        seed = session.seed(),
        segments = config.terrain.segments,
        size = config.terrain.size,
        min_height = lo,
        max_height = hi,
        "terrain ready"
    );

    // Stroke from a quarter of the extent left of center to a quarter right
    let reach = config.terrain.size * 0.25;
    let start = Vec2::new(-reach, 0.0);
    let end = Vec2::new(reach, 0.0);
    let steps = args.dabs.max(1);

    let mut timings = Vec::with_capacity(steps as usize);
    for i in 0..steps {
        let t = if steps == 1 { 0.0 } else { i as f32 / (steps - 1) as f32 };
        let point = Some(start.lerp(end, t));

        let started = Instant::now();
        if i == 0 {
            session.press(point);
        } else {
            session.drag(point);
        }
        timings.push(started.elapsed());
    }

    let summary = session.release().ok_or("stroke was never started")?;
    let worst = timings.iter().max().copied().unwrap_or_default();
    let total: Duration = timings.iter().sum();
    let mean = total / steps;

    info!(
        dabs = summary.dabs,
        affected = summary.affected,
        mean_us = mean.as_micros() as u64,
        worst_us = worst.as_micros() as u64,
        "stroke replayed"
    );
    if worst > FRAME_BUDGET {
        warn!(
            worst_ms = worst.as_secs_f64() * 1000.0,
            budget_ms = FRAME_BUDGET.as_secs_f64() * 1000.0,
            "slowest dab exceeded frame budget"
        );
    }

    let (lo, hi) = session.mesh().height_range();
    info!(min_height = lo, max_height = hi, "final height range");
    Ok(())
}
