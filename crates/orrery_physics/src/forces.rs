use orrery_core::constants::G;
use orrery_core::{Body, Vector3};

/// Newtonian gravitational force exerted on body i by body j.
///
/// Returns `None` when the two positions coincide exactly; the pair then
/// contributes nothing. The magnitude is computed as `G * (m_i * m_j) / r^2`
/// so that swapping i and j yields the exact negation.
pub fn gravity_force(
    pos_i: Vector3,
    mass_i: f64,
    pos_j: Vector3,
    mass_j: f64,
) -> Option<Vector3> {
    let d = pos_j - pos_i;
    let r2 = d.magnitude_squared();
    if r2 == 0.0 {
        return None;
    }

    let magnitude = G * (mass_i * mass_j) / r2;
    Some(d / r2.sqrt() * magnitude)
}

/// Net force on every body from every other body, evaluated against the
/// positions as they are now. The result is indexed like `bodies`.
pub fn accumulate_forces(bodies: &[Body]) -> Vec<Vector3> {
    let mut forces = vec![Vector3::ZERO; bodies.len()];

    for (i, body) in bodies.iter().enumerate() {
        for (j, other) in bodies.iter().enumerate() {
            if i == j {
                continue;
            }
            if let Some(force) =
                gravity_force(body.position, body.mass(), other.position, other.mass())
            {
                forces[i] += force;
            }
        }
    }

    forces
}
