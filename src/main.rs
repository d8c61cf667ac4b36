// Replays a list of still images as a fake camera feed and plays the game
// against them, one image per tick.

use anyhow::Context;
use clap::Parser;
use color_rush::core_modules::frame_classifier::frame_classifier;
use color_rush::core_modules::utils::image_helper::image_helper;
use color_rush::{GameConfig, NullCamera, RoundOutcome, RoundStateMachine};
use log::{info, warn};
use simple_logger::SimpleLogger;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};

#[derive(Parser, Debug)]
#[command(name = "color_rush", about = "Find the named color before the clock runs out.")]
struct Args {
    /// TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides the goal percentage.
    #[arg(long)]
    goal: Option<f64>,

    /// Overrides the pixel format ("grayscale" or "rgb").
    #[arg(long)]
    format: Option<String>,

    /// Seeds the color picker for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between ticks.
    #[arg(long, default_value_t = 33)]
    tick_ms: u64,

    /// Writes the match mask of every frame into this directory.
    #[arg(long)]
    mask_dir: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    /// Image files played back in order, one per tick.
    frames: Vec<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .unwrap_or_else(|err| eprintln!("Failed initialize logger: {err}"));

    let mut config = match &args.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(goal) = args.goal {
        config.goal_percentage = goal;
    }
    if let Some(format) = &args.format {
        config.pixel_format = format.clone();
    }
    if args.seed.is_some() {
        config.rng_seed = args.seed;
    }

    let mut game = RoundStateMachine::from_config(&config, NullCamera)?;
    if !game.capture_mut().on_started() {
        warn!("camera refused the pixel format; no frames will be judged");
    }
    let board = game.start();
    info!("{}", board.instruction_text.replace('\n', " "));

    if let Some(dir) = &args.mask_dir {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let format = game.capture().format();
    let mut interval = tokio::time::interval(Duration::from_millis(args.tick_ms.max(1)));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval.tick().await;
    let mut last_tick = Instant::now();

    for (index, path) in args.frames.iter().enumerate() {
        let decode_path = path.clone();
        let image =
            tokio::task::spawn_blocking(move || image_helper::load_frame(decode_path, format))
                .await?
                .with_context(|| format!("decoding {}", path.display()))?;

        if let (Some(dir), Some(target)) = (&args.mask_dir, game.current_target()) {
            let mask = frame_classifier::match_mask(&image.frame, target);
            let mask_path = dir.join(format!("mask_{index:04}_{}.png", target.name));
            image_helper::save_mask(&mask_path, image.width, image.height, &mask)
                .with_context(|| format!("writing {}", mask_path.display()))?;
        }

        interval.tick().await;
        game.capture_mut().deliver_frame(image.frame.bytes, format.tag());

        let now = Instant::now();
        let elapsed = now.duration_since(last_tick).as_secs_f64();
        last_tick = now;

        let report = game.tick(elapsed);
        let board = &report.scoreboard;
        match report.outcome {
            RoundOutcome::Won => info!(
                "point! score {} - next: {} in {}s",
                board.score,
                board.target_name,
                board.clock_text()
            ),
            RoundOutcome::TimedOut => warn!(
                "too slow - next: {} in {}s",
                board.target_name,
                board.clock_text()
            ),
            RoundOutcome::InProgress => info!(
                "{} {} | clock {} | score {}",
                board.percent_color_text(),
                board.percentage_text(),
                board.clock_text(),
                board.score
            ),
        }
    }

    info!("final score: {}", game.state().score);
    Ok(())
}
