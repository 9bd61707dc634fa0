use anyhow::{Context, Result};
use clap::Parser;
use gravity_sim::{ScenarioConfig, Simulation};
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Run a gravity-sim scenario without a window and log what happens
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Scenario YAML file; the built-in startup world when omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// Log diagnostics every this many ticks (0 disables periodic reports)
    #[arg(short, long, default_value_t = 60)]
    report_every: u64,

    /// Seed for the belt of the built-in world
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn load_scenario(path: &Path) -> Result<ScenarioConfig> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let scenario = ScenarioConfig::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(scenario)
}

fn report(sim: &Simulation, collisions: usize) {
    let diagnostics = sim.measure();
    info!(
        "tick {:>6}: kinetic energy {:>14.4}, momentum {:>12.4}, {} collision(s)",
        sim.ticks(),
        diagnostics.total_kinetic_energy,
        diagnostics.total_momentum,
        collisions
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let scenario = match &args.scenario {
        Some(path) => load_scenario(path)?,
        None => ScenarioConfig::default_scene(args.seed),
    };
    let mut sim = scenario.build().context("building the simulation")?;

    info!(
        "{} bodies, gravity {}, boundaries {:?}, {} ms per tick at speed {}",
        sim.body_count(),
        sim.gravity(),
        sim.boundaries(),
        sim.tick_interval().as_millis(),
        sim.speed()
    );
    if let Some(largest) = sim.largest_body() {
        info!("largest body: {} (mass {})", largest.id.0, largest.mass);
    }

    report(&sim, 0);
    let mut collisions = 0;
    for _ in 0..args.ticks {
        sim.step();
        collisions += sim.last_collisions().len();

        if args.report_every > 0 && sim.ticks() % args.report_every == 0 {
            report(&sim, collisions);
            collisions = 0;
        }
    }

    if args.report_every == 0 || sim.ticks() % args.report_every != 0 {
        report(&sim, collisions);
    }

    Ok(())
}
