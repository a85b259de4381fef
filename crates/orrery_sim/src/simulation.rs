use bevy::prelude::*;
use orrery_core::{Body, BodyKind, Vector3};
use orrery_physics::forces::accumulate_forces;
use orrery_physics::integrator::semi_implicit_euler;
use orrery_physics::stellar::{StarProperties, luminosity};
use orrery_physics::thermodynamics;

/// The N-body system, tracked as a Bevy Resource.
///
/// Owns an ordered set of bodies that is fixed at construction. Order carries
/// no physical meaning but is preserved through snapshots.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Simulation {
    /// Simulated seconds since the start
    elapsed_time: f64,
    /// Simulated seconds per external second. Zero pauses, negative runs backwards.
    time_warp: f64,
    bodies: Vec<Body>,
}

impl Simulation {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self::from_snapshot(0.0, bodies)
    }

    /// Rebuild a simulation at a given elapsed time. Time warp is runtime
    /// state only and always restarts at 1.
    pub fn from_snapshot(elapsed_time: f64, bodies: Vec<Body>) -> Self {
        debug!(
            "Simulation created with {} bodies at t = {} s",
            bodies.len(),
            elapsed_time
        );
        Self {
            elapsed_time,
            time_warp: 1.0,
            bodies,
        }
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn time_warp(&self) -> f64 {
        self.time_warp
    }

    pub fn set_time_warp(&mut self, time_warp: f64) {
        self.time_warp = time_warp;
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Net gravitational force on each body at the current positions
    pub fn forces(&self) -> Vec<Vector3> {
        accumulate_forces(&self.bodies)
    }

    /// Advance by one tick of `dt` external seconds.
    ///
    /// The tick is scaled by the time warp and added to the elapsed time. All
    /// forces are evaluated against the pre-step positions, then every body
    /// takes one semi-implicit Euler step.
    pub fn advance(&mut self, dt: f64) {
        let step = dt * self.time_warp;
        self.elapsed_time += step;
        if step == 0.0 {
            return;
        }

        let forces = accumulate_forces(&self.bodies);
        for (body, force) in self.bodies.iter_mut().zip(forces) {
            let acceleration = force / body.mass();
            semi_implicit_euler(&mut body.position, &mut body.velocity, acceleration, step);
        }
    }

    /// Derived radiative properties, if `index` is a star
    pub fn star_properties(&self, index: usize) -> Option<StarProperties> {
        let body = self.bodies.get(index)?;
        body.is_star()
            .then(|| StarProperties::derive(body.mass(), body.radius()))
    }

    /// Temperature in kelvin: effective temperature for a star, radiative
    /// equilibrium temperature under every star's light for a planet
    pub fn temperature_of(&self, index: usize) -> Option<f64> {
        let body = self.bodies.get(index)?;
        let temperature = match body.kind() {
            BodyKind::Star => StarProperties::derive(body.mass(), body.radius()).temperature,
            BodyKind::Planet { albedo, .. } => {
                let flux = thermodynamics::incident_flux(body.position, self.luminous_sources());
                thermodynamics::equilibrium_temperature(albedo, flux)
            }
        };
        Some(temperature)
    }

    /// (position, luminosity) of every star
    fn luminous_sources(&self) -> impl Iterator<Item = (Vector3, f64)> + '_ {
        self.bodies
            .iter()
            .filter(|b| b.is_star())
            .map(|b| (b.position, luminosity(b.mass())))
    }

    pub fn total_momentum(&self) -> Vector3 {
        thermodynamics::total_momentum(&self.bodies)
    }

    pub fn total_energy(&self) -> f64 {
        thermodynamics::total_energy(&self.bodies)
    }

    /// False once any position or velocity has gone NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.bodies.iter().all(Body::is_finite)
    }
}
