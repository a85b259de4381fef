use anyhow::{Context, Result, bail};
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use clap::Parser;
use orrery_core::SimConfig;
use orrery_physics::procgen::{self, TRISOLARIS};
use orrery_physics::units::{meters_to_au, meters_to_light_years};
use orrery_sim::{EraTracker, Simulation, SimulationPlugin, Survey, SurveyThresholds, TickState};
use std::path::PathBuf;
use std::time::Duration;

/// Orrery - headless three-body run of the Trisolaris system
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Random seed for the generated system (overrides config file)
    #[arg(short = 's', long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of ticks to run (overrides config file)
    #[arg(short = 'n', long, value_name = "COUNT")]
    ticks: Option<u64>,

    /// Simulated seconds per real second (overrides config file)
    #[arg(short = 'w', long, value_name = "FACTOR")]
    warp: Option<f64>,

    /// Resume from a snapshot instead of generating a new system
    #[arg(long, value_name = "FILE")]
    load: Option<PathBuf>,

    /// Write a snapshot of the final state
    #[arg(long, value_name = "FILE")]
    save: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(ticks) = args.ticks {
        config.ticks = ticks;
    }
    if let Some(warp) = args.warp {
        config.time_warp = warp;
    }
    config.validate()?;
    Ok(config)
}

/// The body whose sky gets surveyed: the first planet, or body 0
fn pick_observer(sim: &Simulation) -> usize {
    sim.bodies()
        .iter()
        .position(|b| !b.is_star())
        .unwrap_or(TRISOLARIS)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    let mut sim = match &args.load {
        Some(path) => orrery_storage::load_snapshot(path)
            .with_context(|| format!("loading snapshot from {}", path.display()))?,
        None => Simulation::new(procgen::generate_trisolaris(&config)?),
    };
    sim.set_time_warp(config.time_warp);
    let observer = pick_observer(&sim);

    let tick = Duration::from_secs_f64(config.tick_seconds);
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };

    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        LogPlugin {
            level,
            ..default()
        },
        SimulationPlugin,
    ))
    .insert_resource(TimeUpdateStrategy::ManualDuration(tick))
    .insert_resource(EraTracker::new(
        observer,
        SurveyThresholds::from_config(&config),
    ))
    .insert_resource(sim);
    app.world_mut()
        .resource_mut::<Time<Virtual>>()
        .set_max_delta(tick);

    app.finish();
    app.cleanup();

    info!(
        "Running {} ticks of {} s at warp {} (seed {})",
        config.ticks, config.tick_seconds, config.time_warp, config.seed
    );
    loop {
        let state = app.world().resource::<TickState>();
        if state.steps >= config.ticks {
            break;
        }
        if state.paused {
            warn!("Simulation paused after {} ticks", state.steps);
            break;
        }
        app.update();
    }

    let sim = app.world().resource::<Simulation>();
    report(sim, observer, &SurveyThresholds::from_config(&config))?;

    if let Some(path) = &args.save {
        orrery_storage::save_snapshot(sim, path)
            .with_context(|| format!("saving snapshot to {}", path.display()))?;
        info!("Snapshot saved to {}", path.display());
    }

    Ok(())
}

fn report(sim: &Simulation, observer: usize, thresholds: &SurveyThresholds) -> Result<()> {
    let Some(survey) = Survey::observe(sim, observer, thresholds) else {
        bail!("no body {observer} to observe from");
    };

    println!(
        "t = {:.1} days, {} bodies",
        sim.elapsed_time() / 86_400.0,
        sim.len()
    );
    println!("Era: {}", survey.era.name());
    println!(
        "Flying stars: {} ({} frozen)",
        survey.flying_stars, survey.frozen_flying_stars
    );
    let distances: Vec<String> = survey
        .star_distances
        .iter()
        .map(|d| format!("{:.3}", meters_to_au(*d)))
        .collect();
    println!("Star distances (AU): {}", distances.join(", "));
    if let Some(farthest) = survey.star_distances.last() {
        println!("Farthest star: {:.2e} ly", meters_to_light_years(*farthest));
    }
    println!("Surface temperature: {:.1} K", survey.temperature);

    for index in 0..sim.len() {
        if let Some(star) = sim.star_properties(index) {
            println!(
                "  star {index}: {:.0} K, {:.3e} W, color #{:06x}",
                star.temperature,
                star.luminosity,
                star.color.packed()
            );
        }
    }
    Ok(())
}
