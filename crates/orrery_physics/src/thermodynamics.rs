use orrery_core::constants::{G, STEFAN_BOLTZMANN};
use orrery_core::{Body, Vector3};
use std::f64::consts::PI;

/// Total stellar flux (W/m^2) arriving at `at`, summed over `(position,
/// luminosity)` pairs of every radiating source
pub fn incident_flux(at: Vector3, sources: impl IntoIterator<Item = (Vector3, f64)>) -> f64 {
    sources
        .into_iter()
        .map(|(position, luminosity)| {
            let d2 = at.distance_to(position).powi(2);
            luminosity / (4.0 * PI * d2)
        })
        .sum()
}

/// Radiative equilibrium temperature (K) of a body with the given albedo
/// under incident flux `flux`
pub fn equilibrium_temperature(albedo: f64, flux: f64) -> f64 {
    ((1.0 - albedo) * flux / (4.0 * STEFAN_BOLTZMANN)).powf(0.25)
}

/// Sum of m * v over all bodies
pub fn total_momentum(bodies: &[Body]) -> Vector3 {
    bodies
        .iter()
        .fold(Vector3::ZERO, |acc, body| acc + body.momentum())
}

pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .map(|b| 0.5 * b.mass() * b.velocity.magnitude_squared())
        .sum()
}

/// Pairwise Newtonian potential energy. Coincident pairs are skipped, the
/// same way the force sweep skips them.
pub fn potential_energy(bodies: &[Body]) -> f64 {
    let mut energy = 0.0;
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            let r = a.distance_to(b);
            if r == 0.0 {
                continue;
            }
            energy -= G * a.mass() * b.mass() / r;
        }
    }
    energy
}

pub fn total_energy(bodies: &[Body]) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies)
}
