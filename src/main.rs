//! Headless demo: runs one scripted scenario through the reference
//! simulation and prints a summary of the modes, speeds and impulses seen.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use serde::Serialize;
use strider::input::Intent;
use strider::look::Facing;
use strider::sim::{course, Course, Sample, Simulation};
use strider::{init_logging, LocomotionConfig, Mode};

/// Runs a scripted locomotion scenario headless and reports what happened.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with locomotion tuning; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Simulated duration in seconds
    #[arg(short, long, default_value_t = 3.0)]
    seconds: f32,
    /// Frame and tick rate
    #[arg(long, default_value_t = 50.0)]
    hz: f32,
    /// Scripted course and input to run
    #[arg(long, value_enum, default_value_t = Scenario::Sprint)]
    scenario: Scenario,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum Scenario {
    /// Hold forward and sprint on flat ground
    Sprint,
    /// Jump at a wall on the right and run along it
    WallRun,
    /// Walk into a tall wall
    Climb,
    /// Walk into a knee-high ledge
    Vault,
}

impl Scenario {
    const fn course(self) -> Course {
        match self {
            Self::Sprint => Course::Flat,
            Self::WallRun => Course::WallRunLane,
            Self::Climb => Course::ClimbWall,
            Self::Vault => Course::VaultLedge,
        }
    }

    fn intent(self, time: f32) -> Intent {
        let forward = Intent::default().with_forward(1.0);
        match self {
            Self::Sprint => forward.with_sprint(),
            Self::WallRun if time < 0.1 => forward.with_lateral(1.0).with_jump(),
            Self::WallRun => forward.with_lateral(1.0),
            Self::Climb | Self::Vault => forward,
        }
    }
}

#[derive(Debug, Serialize)]
struct ModeTime {
    mode: Mode,
    seconds: f32,
}

#[derive(Debug, Serialize)]
struct Summary {
    scenario: Scenario,
    seconds: f32,
    final_position: [f32; 3],
    max_planar_speed: f32,
    max_height: f32,
    impulses: usize,
    modes: Vec<ModeTime>,
}

impl Summary {
    fn from_samples(scenario: Scenario, dt: f32, samples: &[Sample]) -> Self {
        let modes = [
            Mode::Walking,
            Mode::Sprinting,
            Mode::Airborne,
            Mode::WallRunning,
            Mode::Climbing,
        ]
        .into_iter()
        .map(|mode| ModeTime {
            mode,
            seconds: samples.iter().filter(|s| s.mode == mode).count() as f32 * dt,
        })
        .filter(|entry| entry.seconds > 0.0)
        .collect();

        Self {
            scenario,
            seconds: samples.last().map_or(0.0, |s| s.time),
            final_position: samples.last().map_or([0.0; 3], |s| s.position.to_array()),
            max_planar_speed: samples.iter().map(Sample::planar_speed).fold(0.0, f32::max),
            max_height: samples.iter().map(|s| s.position.y).fold(f32::MIN, f32::max),
            impulses: samples.iter().map(|s| s.impulses).sum(),
            modes,
        }
    }

    fn write_text(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "scenario: {:?} ({:.2}s)", self.scenario, self.seconds)?;
        let [x, y, z] = self.final_position;
        writeln!(out, "final position: ({x:.2}, {y:.2}, {z:.2})")?;
        writeln!(out, "max planar speed: {:.2}", self.max_planar_speed)?;
        writeln!(out, "max height: {:.2}", self.max_height)?;
        writeln!(out, "impulses: {}", self.impulses)?;
        for entry in &self.modes {
            writeln!(out, "  {:?}: {:.2}s", entry.mode, entry.seconds)?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    ensure!(args.hz.is_finite() && args.hz > 0.0, "--hz must be positive");
    ensure!(
        args.seconds.is_finite() && args.seconds >= 0.0,
        "--seconds must not be negative"
    );

    let config = args.config.as_ref().map_or_else(
        || Ok(LocomotionConfig::default()),
        |path| {
            LocomotionConfig::from_file(path)
                .with_context(|| format!("loading locomotion config from {}", path.display()))
        },
    )?;
    debug!("tuning: {config:?}");

    let scenario = args.scenario;
    info!("running {scenario:?} for {}s at {} Hz", args.seconds, args.hz);
    let mut sim = Simulation::new(config, scenario.course().build(), course::SPAWN)
        .context("building simulation")?;
    let samples = sim.run(args.seconds, args.hz, |time| {
        (scenario.intent(time), Facing::default())
    });
    let summary = Summary::from_samples(scenario, 1.0 / args.hz, samples);

    let mut out = std::io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &summary).context("writing JSON summary")?;
        writeln!(out)?;
    } else {
        summary.write_text(&mut out).context("writing summary")?;
    }
    Ok(())
}
