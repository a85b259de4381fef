use orrery_core::Vector3;

/// Semi-implicit (symplectic) Euler step.
///
/// Velocity is updated first and the updated velocity advances the position.
pub fn semi_implicit_euler(
    position: &mut Vector3,
    velocity: &mut Vector3,
    acceleration: Vector3,
    dt: f64,
) {
    *velocity += acceleration * dt;
    *position += *velocity * dt;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semi_implicit_euler_uses_new_velocity() {
        let mut position = Vector3::new(1.0, 0.0, 0.0);
        let mut velocity = Vector3::new(0.0, 1.0, 0.0);
        let acceleration = Vector3::new(0.0, 0.0, -9.81);

        semi_implicit_euler(&mut position, &mut velocity, acceleration, 0.5);

        assert_eq!(velocity, Vector3::new(0.0, 1.0, -4.905));
        assert_eq!(position, Vector3::new(1.0, 0.5, -2.4525));
    }

    #[test]
    fn test_zero_step_keeps_state() {
        let mut position = Vector3::new(1.0, 2.0, 3.0);
        let mut velocity = Vector3::new(4.0, 5.0, 6.0);
        semi_implicit_euler(&mut position, &mut velocity, Vector3::new(1.0, 1.0, 1.0), 0.0);
        assert_eq!(position, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(velocity, Vector3::new(4.0, 5.0, 6.0));
    }
}
