mod config;
mod error;
mod jiggler;
mod logger;
mod models;
mod shutdown;
mod system;

use anyhow::Result;
use clap::Parser;
use config::Config;
use jiggler::{Jiggler, RandomOffsets};
use logger::StepLogger;
use shutdown::Shutdown;
use std::time::Duration;
use system::Desktop;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "jigl")]
#[command(about = "Move the mouse cursor periodically to keep the session awake", long_about = None)]
struct Cli {
    /// Maximum change in pixels per axis (1-100)
    #[arg(short, long = "max_change", visible_alias = "max-change", default_value_t = config::DEFAULT_MAX_CHANGE, allow_negative_numbers = true)]
    max_change: i32,
    /// Wait time between moves, in seconds or as a duration (e.g. 90s, 5m)
    #[arg(short, long = "wait_time", visible_alias = "wait-time", default_value = config::DEFAULT_WAIT_SECS, value_parser = config::parse_wait, allow_negative_numbers = true)]
    wait_time: f64,
    /// Enable logging of each move to stdout
    #[arg(short, long)]
    log: bool,
    /// Stop after this long (e.g. 8h, 30m)
    #[arg(short, long, value_parser = humantime::parse_duration)]
    duration: Option<Duration>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = Config::new(cli.max_change, cli.wait_time, cli.log, cli.duration)?;

    let desktop = Desktop::connect()?;
    let bounds = desktop.primary_bounds()?;

    let logger = if config.logging {
        StepLogger::stdout()
    } else {
        StepLogger::disabled()
    };

    println!(
        "Moving cursor by up to {}px every {} on a {}x{} screen{}. Press Ctrl+C to stop.",
        config.max_change,
        humantime::format_duration(config.wait),
        bounds.width,
        bounds.height,
        if logger.is_enabled() { " (logging on)" } else { "" }
    );

    let shutdown = Shutdown::on_ctrl_c()?;
    let offsets = RandomOffsets::new(rand::thread_rng());
    let mut jiggler = Jiggler::new(config, bounds, desktop, offsets, logger);
    let ticks = jiggler.run(&shutdown)?;

    tracing::info!(ticks, "stopped");
    println!("\nStopped after {} ticks.", ticks);

    Ok(())
}
