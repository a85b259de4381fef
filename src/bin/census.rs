//! Monte Carlo census of Trisolaris systems.
//! Runs many seeds headless and reports how often each era ends up in the sky.

use anyhow::Result;
use orrery_core::SimConfig;
use orrery_physics::procgen::{self, TRISOLARIS};
use orrery_sim::{Era, Simulation, Survey, SurveyThresholds};
use std::collections::HashMap;

const ERAS: [Era; 4] = [
    Era::TriSolarDay,
    Era::Stable,
    Era::Chaotic,
    Era::ExtremeCold,
];

fn main() -> Result<()> {
    let num_systems = 200;
    // One simulated day per step, ten years in total
    let step = 86_400.0;
    let steps = 3650;

    let base = SimConfig::default();
    let thresholds = SurveyThresholds::from_config(&base);

    eprintln!("Simulating {num_systems} systems...");

    let mut counts: HashMap<Era, u32> = HashMap::new();
    let mut diverged = 0u32;
    let mut temperatures = Vec::with_capacity(num_systems);

    for s in 0..num_systems {
        let seed = 1000 + s as u64 * 7919;
        let config = SimConfig { seed, ..base.clone() };
        let mut sim = Simulation::new(procgen::generate_trisolaris(&config)?);

        for _ in 0..steps {
            sim.advance(step);
        }

        if !sim.is_finite() {
            diverged += 1;
            continue;
        }
        if let Some(survey) = Survey::observe(&sim, TRISOLARIS, &thresholds) {
            *counts.entry(survey.era).or_insert(0) += 1;
            temperatures.push(survey.temperature);
        }

        if (s + 1) % 20 == 0 {
            eprint!("  {}/{}...\r", s + 1, num_systems);
        }
    }
    eprintln!("Done.");

    let surveyed = temperatures.len().max(1) as f64;
    println!("Era after {} years ({} systems):", steps / 365, num_systems);
    for era in ERAS {
        let n = counts.get(&era).copied().unwrap_or(0);
        println!("  {:<22} {:>4}  ({:.1}%)", era.name(), n, 100.0 * n as f64 / surveyed);
    }
    if diverged > 0 {
        println!("  diverged               {diverged:>4}");
    }

    temperatures.sort_by(f64::total_cmp);
    if let (Some(coldest), Some(hottest)) = (temperatures.first(), temperatures.last()) {
        let median = temperatures[temperatures.len() / 2];
        println!("Planet temperature: min {coldest:.1} K, median {median:.1} K, max {hottest:.1} K");
    }

    Ok(())
}
