//! Posture mood demo: replays a recorded frame stream through the estimator.
//!
//! Input is JSONL, one [`FrameMeasurement`] object or `null` (absent
//! detection) per line, replayed on a virtual clock at the recorded frame
//! interval so the cooldown and watchdog behave as they would live.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use posture_mood::config::Config;
use posture_mood::effects::LogEffects;
use posture_mood::estimator::PostureEstimator;
use posture_mood::frame::FrameMeasurement;
use posture_mood::scheduler::VirtualScheduler;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSONL frame stream (one measurement object or `null` per line)
    input: PathBuf,

    /// Tolerance knob override (0-100, lower = stricter)
    #[arg(short, long)]
    tolerance: Option<u8>,

    /// Disable sound and notification requests
    #[arg(long)]
    no_sounds: bool,

    /// Frame interval of the recorded stream in milliseconds
    #[arg(long, default_value = "33")]
    frame_interval_ms: u64,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {config_path}");
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {e}. Using defaults.");
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    if let Some(tolerance) = args.tolerance {
        config.detection.tolerance = tolerance;
    }
    if args.no_sounds {
        config.detection.sounds_enabled = false;
    }

    let scheduler = VirtualScheduler::new();
    let mut estimator = PostureEstimator::new(
        config,
        Box::new(scheduler.clone()),
        Box::new(LogEffects),
    )?;

    let file = File::open(&args.input)
        .with_context(|| format!("cannot open frame stream {}", args.input.display()))?;
    let interval = Duration::from_millis(args.frame_interval_ms);

    let mut frames = 0u64;
    let mut last_mood = estimator.analysis().mood;

    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let frame = FrameMeasurement::parse_line(&line)
            .with_context(|| format!("bad frame on line {}", line_no + 1))?;

        estimator.push_frame(frame);
        scheduler.advance(interval);
        estimator.poll();
        frames += 1;

        let analysis = estimator.analysis();
        if analysis.mood != last_mood {
            info!(
                "frame {frames}: {}",
                serde_json::to_string(analysis).expect("analysis state serializes")
            );
            last_mood = analysis.mood;
        }
    }

    info!(
        "replayed {frames} frames; calibrating: {}",
        estimator.is_calibrating()
    );
    println!(
        "{}",
        serde_json::to_string_pretty(estimator.analysis()).expect("analysis state serializes")
    );

    Ok(())
}
