use bevy::prelude::*;

use super::simulation::Simulation;
use super::status::{Era, Survey, SurveyThresholds};

/// Bevy plugin that advances the [`Simulation`] resource once per frame
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TickState>().add_systems(
            Update,
            (
                simulation_tick,
                track_era.run_if(resource_exists::<EraTracker>),
            )
                .chain()
                .run_if(resource_exists::<Simulation>),
        );
    }
}

/// Frame-loop bookkeeping around the simulation
#[derive(Resource, Debug, Default)]
pub struct TickState {
    /// Skip integration while set
    pub paused: bool,
    /// Number of integration steps taken
    pub steps: u64,
}

/// Watches the era of one observer body and logs every transition
#[derive(Resource, Debug)]
pub struct EraTracker {
    pub observer: usize,
    pub thresholds: SurveyThresholds,
    pub era: Option<Era>,
}

impl EraTracker {
    pub fn new(observer: usize, thresholds: SurveyThresholds) -> Self {
        Self {
            observer,
            thresholds,
            era: None,
        }
    }
}

/// Main simulation tick: one advance per frame, using the frame's delta
fn simulation_tick(
    mut sim: ResMut<Simulation>,
    mut state: ResMut<TickState>,
    time: Res<Time>,
) {
    if state.paused {
        return;
    }
    let dt = time.delta_secs_f64();
    if dt <= 0.0 {
        return;
    }

    sim.advance(dt);
    state.steps += 1;

    if !sim.is_finite() {
        warn!(
            "Simulation diverged at t = {} s (step {}); pausing",
            sim.elapsed_time(),
            state.steps
        );
        state.paused = true;
    }
}

fn track_era(sim: Res<Simulation>, mut tracker: ResMut<EraTracker>) {
    let Some(survey) = Survey::observe(&sim, tracker.observer, &tracker.thresholds) else {
        return;
    };

    match tracker.era {
        Some(era) if era == survey.era => {}
        Some(era) => {
            info!(
                "Era transition: {} -> {} (t = {:.0} s)",
                era.name(),
                survey.era.name(),
                sim.elapsed_time()
            );
            tracker.era = Some(survey.era);
        }
        None => {
            info!("Initial era: {}", survey.era.name());
            tracker.era = Some(survey.era);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::time::TimeUpdateStrategy;
    use orrery_core::constants::{SOLAR_MASS, SOLAR_RADIUS};
    use orrery_core::{Body, Vector3};
    use std::time::Duration;

    fn two_stars(velocity: f64) -> Simulation {
        Simulation::new(vec![
            Body::star(Vector3::ZERO, Vector3::ZERO, SOLAR_MASS, SOLAR_RADIUS).unwrap(),
            Body::star(
                Vector3::new(1.0e11, 0.0, 0.0),
                Vector3::new(0.0, velocity, 0.0),
                SOLAR_MASS,
                SOLAR_RADIUS,
            )
            .unwrap(),
        ])
    }

    fn test_app(sim: Simulation) -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, SimulationPlugin))
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
            .insert_resource(sim);
        app
    }

    #[test]
    fn test_plugin_advances_simulation() {
        let mut app = test_app(two_stars(1.0e4));
        // The first update only primes the clock
        for _ in 0..11 {
            app.update();
        }

        let state = app.world().resource::<TickState>();
        assert_eq!(state.steps, 10);
        let sim = app.world().resource::<Simulation>();
        assert!((sim.elapsed_time() - 1.0).abs() < 1e-9);
        assert!(sim.bodies()[1].position.y > 0.0);
    }

    #[test]
    fn test_paused_state_skips_ticks() {
        let mut app = test_app(two_stars(1.0e4));
        app.world_mut().resource_mut::<TickState>().paused = true;
        for _ in 0..5 {
            app.update();
        }
        let sim = app.world().resource::<Simulation>();
        assert_eq!(sim.elapsed_time(), 0.0);
    }

    #[test]
    fn test_divergence_pauses() {
        let mut app = test_app(two_stars(f64::NAN));
        for _ in 0..5 {
            app.update();
        }
        let state = app.world().resource::<TickState>();
        assert!(state.paused);
        assert_eq!(state.steps, 1);
    }

    #[test]
    fn test_era_tracker_records_era() {
        let mut app = test_app(two_stars(0.0));
        app.insert_resource(EraTracker::new(0, SurveyThresholds::default()));
        for _ in 0..3 {
            app.update();
        }
        let tracker = app.world().resource::<EraTracker>();
        // 1e11 m is inside the 3 AU default, so the single other star is near
        assert_eq!(tracker.era, Some(Era::TriSolarDay));
    }
}
