//! hike-calories — estimate calories burned along a recorded hike.
//!
//! Scores the track with the Pandolf load-carriage model and the
//! Ludlow-Weyand oxygen-cost model at several downsampling strides, prints
//! the summary, and writes `calories.{json,txt,csv}` to the output
//! directory.
//!
//! ```text
//! hike-calories estimate hike.gpx -w 150 -p 50 -P 38 -H 170 -a 40 -m
//! hike-calories demo -o ./out --segments 1 -v
//! ```

mod config;

use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;

use hk_core::TrackPoint;
use hk_energy::{CalorieEngine, CalorieReport, TracingObserver};
use hk_output::{CsvSegmentWriter, SegmentOutputObserver, SegmentWriter, write_report_files};
use hk_track::{GradeProfile, SyntheticTrack, load_track};

use config::{EstimateConfig, HikeArgs};


// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "Estimate calories burned along a hiking track", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate calories for a GPX or CSV track
    Estimate(EstimateArgs),
    /// Estimate calories for a generated out-and-back hike
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
struct EstimateArgs {
    /// Track file (.gpx, or .csv with latitude,longitude,elevation,time)
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    track: PathBuf,

    #[command(flatten)]
    hike: HikeArgs,
}

#[derive(Args, Debug)]
struct DemoArgs {
    /// Number of generated fixes, five seconds apart
    #[arg(long, default_value_t = 1_441)]
    points: usize,

    /// Grade of the outbound climb in percent; the return descends it
    #[arg(long, default_value_t = 8.0, allow_negative_numbers = true)]
    grade: f64,

    /// Seed for the simulated GPS noise
    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[command(flatten)]
    hike: HikeArgs,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let report = match cli.command {
        Command::Estimate(args) => handle_estimate(args)?,
        Command::Demo(args) => handle_demo(args)?,
    };
    print!("{}", report.summary());
    Ok(())
}

fn handle_estimate(args: EstimateArgs) -> Result<CalorieReport> {
    let config = EstimateConfig::from_args(&args.hike)?;
    let track = load_track(&args.track)
        .with_context(|| format!("loading track {}", args.track.display()))?;
    info!("loaded {} points from {}", track.len(), args.track.display());
    estimate(track, &config)
}

fn handle_demo(args: DemoArgs) -> Result<CalorieReport> {
    let config = EstimateConfig::from_args(&args.hike.with_demo_defaults())?;
    let track = SyntheticTrack {
        profile: GradeProfile::OutAndBack { grade_pct: args.grade, half_points: args.points / 2 },
        jitter_m: 2.0,
        elev_jitter_m: 1.0,
        seed: args.seed,
        ..Default::default()
    }
    .generate(args.points);
    info!("generated {} points (grade {}%, seed {})", track.len(), args.grade, args.seed);
    estimate(track, &config)
}

// ── Orchestration ─────────────────────────────────────────────────────────────

/// Score `track` at every configured stride and write the report files.
fn estimate(track: Vec<TrackPoint>, config: &EstimateConfig) -> Result<CalorieReport> {
    let engine = config.engine(track).context("invalid hike parameters")?;
    info!(
        body_kg = engine.hiker().body_mass_kg(),
        rmr = engine.hiker().resting_metabolic_rate(),
        pack_start_kg = engine.pack().start_mass_kg,
        pack_end_kg = engine.pack().end_mass_kg,
        terrain = engine.pandolf().terrain().value(),
        "hike parameters"
    );

    if tracing::enabled!(Level::DEBUG) {
        engine.run_with(1, &mut TracingObserver)?;
    }

    let start = Instant::now();
    let report = engine.report(&config.strides)?;
    info!("scored {} strides in {:.1?}", report.len(), start.elapsed());

    write_report_files(&config.output_dir, &report)
        .with_context(|| format!("writing report to {}", config.output_dir.display()))?;

    if let Some(stride) = config.segments_stride {
        write_segments(&engine, stride, &config.output_dir)?;
    }
    Ok(report)
}

/// Per-segment breakdown for one stride: `segments.csv`, plus `segments.db`
/// when built with `sqlite`.
fn write_segments(engine: &CalorieEngine, stride: usize, dir: &Path) -> Result<()> {
    let writer = CsvSegmentWriter::new(dir)
        .with_context(|| format!("creating segments.csv in {}", dir.display()))?;
    let rows = run_segments(engine, stride, writer)?;
    info!("wrote {rows} segment rows for stride {stride}");

    #[cfg(feature = "sqlite")]
    {
        let writer = hk_output::SqliteSegmentWriter::new(dir)
            .with_context(|| format!("opening segments.db in {}", dir.display()))?;
        run_segments(engine, stride, writer)?;
    }
    Ok(())
}

fn run_segments<W: SegmentWriter>(engine: &CalorieEngine, stride: usize, writer: W) -> Result<usize> {
    let mut obs = SegmentOutputObserver::new(writer);
    let totals = engine.run_with(stride, &mut obs)?;
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing segment output");
    }
    if totals.segments_scored == 0 {
        warn!("stride {stride} scored no segments; track has {} points", engine.track().len());
    }
    Ok(obs.rows_written())
}
