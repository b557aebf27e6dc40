use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use nalgebra::Vector2;
use sentinel_topology::alpha::DelaunayAlphaKernel2;
use sentinel_topology::error::TopologyError;
use sentinel_topology::events::{EventKind, RunEvent, RunOutcome};
use sentinel_topology::simulation::Simulation;

mod motion;

/// Drives a sentinel-topology simulation with a toy billiard motion model.
#[derive(Parser)]
#[command(name = "sentinel-cli")]
#[command(about = "Demonstration runner for the sentinel-topology intruder-detection core")]
struct Cli {
    /// Number of mobile sensors bouncing inside the unit square.
    #[arg(long, default_value_t = 20)]
    sensors: usize,

    /// Sensing radius.
    #[arg(long, default_value_t = 0.2)]
    radius: f64,

    /// Time step.
    #[arg(long, default_value_t = 0.01)]
    dt: f64,

    /// End time; 0 means "run until no intruder can hide".
    #[arg(long, default_value_t = 0.0)]
    end_time: f64,

    /// RNG seed for the toy motion model, so a run is reproducible.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Mobile sensor speed.
    #[arg(long, default_value_t = 0.3)]
    speed: f64,

    /// Optional path to write the persisted `RunOutcome` JSON line to.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    let outcome = run(&cli);
    if let Some(path) = &cli.out {
        let line = serde_json::to_string(&outcome)?;
        std::fs::write(path, format!("{line}\n")).with_context(|| format!("writing outcome to {path:?}"))?;
    }
    match outcome {
        RunOutcome::Evacuated { time } => {
            tracing::info!(time, "evacuated");
            Ok(())
        }
        RunOutcome::TimedOut { intruder_present } => {
            tracing::warn!(intruder_present, "timed out");
            Ok(())
        }
        RunOutcome::Fatal { error } => {
            tracing::error!(error, "fatal");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> RunOutcome {
    match try_run(cli) {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!(error = %err, "core returned a fatal error");
            RunOutcome::Fatal { error: err.to_string() }
        }
    }
}

fn try_run(cli: &Cli) -> Result<RunOutcome, TopologyError> {
    let points = fence_and_sensors(cli.sensors);
    let mut sim = Simulation::new(points.clone(), cli.radius, cli.dt, DelaunayAlphaKernel2)?;
    let mut model = motion::Billiard::seeded(&points, 4, cli.seed, cli.speed);

    loop {
        if !sim.has_intruder() {
            return Ok(RunOutcome::Evacuated { time: sim.time() });
        }
        if cli.end_time > 0.0 && sim.time() >= cli.end_time {
            return Ok(RunOutcome::TimedOut {
                intruder_present: sim.has_intruder(),
            });
        }
        for step in sim.step(&mut model)? {
            let event = RunEvent {
                time: step.time,
                kind: EventKind::Committed {
                    case: step.kind,
                    ambiguous: step.ambiguous,
                    has_intruder: step.has_intruder,
                },
            };
            tracing::info!(time = event.time, kind = ?event.kind, "committed");
        }
    }
}

/// Four fixed fence points at the unit square's corners (indices 0..4),
/// `sensors` mobile points (indices 4..4+sensors) scattered inside it.
fn fence_and_sensors(sensors: usize) -> HashMap<usize, Vector2<f64>> {
    let mut points = HashMap::with_capacity(sensors + 4);
    points.insert(0, Vector2::new(0.0, 0.0));
    points.insert(1, Vector2::new(1.0, 0.0));
    points.insert(2, Vector2::new(1.0, 1.0));
    points.insert(3, Vector2::new(0.0, 1.0));
    for i in 0..sensors {
        let t = i as f64 / sensors.max(1) as f64;
        let theta = t * std::f64::consts::TAU;
        let p = Vector2::new(0.5, 0.5) + Vector2::new(theta.cos(), theta.sin()) * 0.3;
        points.insert(4 + i, p);
    }
    points
}
