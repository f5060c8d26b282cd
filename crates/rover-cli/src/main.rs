//! Rover CLI - headless point-robot navigation simulator.
//!
//! Single binary that provides:
//! - `rover run` - drive a scenario to completion and print a summary
//! - `rover gen` - emit a deterministic random scenario as YAML
//! - `rover validate` - check a scenario file without running it

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use rover_sim::{generate, GenParams, RunState, Scenario, Session, Speed, TraceWriter};

#[derive(Parser)]
#[command(name = "rover")]
#[command(about = "Point-robot navigation simulator", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario to completion
    Run {
        /// Scenario YAML file
        scenario: PathBuf,

        /// Tick cap for runs that never finish
        #[arg(long, default_value_t = 100_000)]
        ticks: u64,

        /// Override the scenario's speed setting (1..=5)
        #[arg(long)]
        speed: Option<u8>,

        /// Write a JSONL run trace to this file
        #[arg(long)]
        trace: Option<PathBuf>,
    },

    /// Generate a random scenario
    Gen {
        /// Placement seed
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Number of obstacles
        #[arg(long, default_value_t = 8)]
        obstacles: usize,

        /// Number of targets
        #[arg(long, default_value_t = 10)]
        targets: usize,

        /// Output file (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Validate a scenario file
    Validate {
        /// Scenario YAML file
        scenario: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Run {
            scenario,
            ticks,
            speed,
            trace,
        } => run_scenario(&scenario, ticks, speed, trace),
        Commands::Gen {
            seed,
            obstacles,
            targets,
            out,
        } => gen_scenario(seed, obstacles, targets, out),
        Commands::Validate { scenario } => validate_scenario(&scenario),
    }
}

fn run_scenario(
    path: &PathBuf,
    ticks: u64,
    speed: Option<u8>,
    trace: Option<PathBuf>,
) -> Result<()> {
    let scenario = Scenario::load(path)?;
    let mut session = Session::from_scenario(&scenario)?;

    if let Some(value) = speed {
        let speed =
            Speed::new(value).ok_or_else(|| anyhow!("speed {value} is outside 1..=5"))?;
        session.set_speed(speed);
    }

    if let Some(trace_path) = trace {
        tracing::info!(path = %trace_path.display(), "writing run trace");
        session.set_trace(TraceWriter::new(trace_path));
    }

    tracing::info!(
        scenario = %path.display(),
        goals = session.goal_count(),
        "starting run"
    );

    let summary = session.run_to_completion(ticks);

    println!("Run: {}", scenario.name.as_deref().unwrap_or("unnamed"));
    println!("  state:    {:?}", summary.run_state);
    println!("  ticks:    {}", summary.ticks);
    println!(
        "  progress: {}/{}",
        summary.progress,
        session.goal_count()
    );
    println!(
        "  pose:     ({:.1}, {:.1}) heading {:.3} rad",
        summary.pose.position.x, summary.pose.position.y, summary.pose.heading
    );
    println!("  markers:  {}", summary.markers);

    if summary.run_state == RunState::Running {
        println!("  (tick cap reached before the goal set was exhausted)");
    }

    Ok(())
}

fn gen_scenario(seed: u64, obstacles: usize, targets: usize, out: Option<PathBuf>) -> Result<()> {
    let scenario = generate(&GenParams {
        seed,
        obstacle_count: obstacles,
        target_count: targets,
        ..GenParams::default()
    });

    match out {
        Some(path) => {
            scenario.save(&path)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", scenario.to_yaml()?),
    }

    Ok(())
}

fn validate_scenario(path: &PathBuf) -> Result<()> {
    let scenario = Scenario::load(path)?;
    scenario.validate()?;

    println!("OK: {}", path.display());
    println!("  mode:      {:?}", scenario.mode);
    println!("  obstacles: {}", scenario.obstacles.len());
    println!(
        "  goals:     {}",
        scenario.targets.len().max(scenario.path.len())
    );
    Ok(())
}
