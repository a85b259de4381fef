use orrery_core::constants::{SOLAR_MASS, SOLAR_RADIUS};
use orrery_core::{Body, BodyError, SimConfig, TextureRef, Vector3};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::units::AU;

/// Index of the planet in a generated Trisolaris system
pub const TRISOLARIS: usize = 0;

/// Texture handle assigned to the generated planet
pub const TRISOLARIS_TEXTURE: TextureRef = TextureRef(1);

/// (mass, radius) of the three suns, in solar units
const SUNS: [(f64, f64); 3] = [(1.25, 1.359), (1.13, 1.167), (0.9, 0.853)];

/// Generate the Trisolaris system: one Earth-like planet (index
/// [`TRISOLARIS`]) followed by three stars, scattered and launched at random.
/// The same seed always yields the same bodies.
pub fn generate_trisolaris(config: &SimConfig) -> Result<Vec<Body>, BodyError> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut bodies = Vec::with_capacity(1 + SUNS.len());

    bodies.push(Body::planet(
        random_position(&mut rng, config.max_scatter_au),
        random_velocity(&mut rng, config.max_speed),
        5.972168e24,
        6_371_000.0,
        0.29,
        TRISOLARIS_TEXTURE,
    )?);

    for (mass, radius) in SUNS {
        bodies.push(Body::star(
            random_position(&mut rng, config.max_scatter_au),
            random_velocity(&mut rng, config.max_speed),
            SOLAR_MASS * mass,
            SOLAR_RADIUS * radius,
        )?);
    }

    Ok(bodies)
}

/// Cube of side `scale` centred on the origin, where `scale` is a product of
/// three uniform draws. Bodies cluster near the origin with a long tail out
/// to `max_scatter_au`.
fn random_position(rng: &mut impl Rng, max_scatter_au: f64) -> Vector3 {
    let scale = rng.gen_range(0.0..1.0f64)
        * (rng.gen_range(0.0..1.0f64) * (rng.gen_range(0.0..1.0f64) * max_scatter_au))
        * AU;
    Vector3::new(
        random_symmetric(rng, scale / 2.0),
        random_symmetric(rng, scale / 2.0),
        random_symmetric(rng, scale / 2.0),
    )
}

fn random_velocity(rng: &mut impl Rng, max_speed: f64) -> Vector3 {
    Vector3::new(
        random_symmetric(rng, max_speed),
        random_symmetric(rng, max_speed),
        random_symmetric(rng, max_speed),
    )
}

/// Uniform in [-half_width, half_width); zero width yields zero
fn random_symmetric(rng: &mut impl Rng, half_width: f64) -> f64 {
    rng.gen_range(0.0..1.0f64) * 2.0 * half_width - half_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_for_seed() {
        let config = SimConfig::default();
        let a = generate_trisolaris(&config).unwrap();
        let b = generate_trisolaris(&config).unwrap();
        assert_eq!(a, b);

        let other = generate_trisolaris(&SimConfig {
            seed: config.seed + 1,
            ..config
        })
        .unwrap();
        assert_ne!(a, other);
    }

    #[test]
    fn test_system_layout() {
        let bodies = generate_trisolaris(&SimConfig::default()).unwrap();
        assert_eq!(bodies.len(), 4);
        assert!(!bodies[TRISOLARIS].is_star());
        assert_eq!(bodies[TRISOLARIS].texture(), Some(TRISOLARIS_TEXTURE));
        assert!(bodies[1..].iter().all(Body::is_star));
        assert_eq!(bodies[1].mass(), SOLAR_MASS * 1.25);
    }

    #[test]
    fn test_bounds() {
        let config = SimConfig {
            max_scatter_au: 10.0,
            max_speed: 1000.0,
            ..SimConfig::default()
        };
        for seed in 0..50 {
            let bodies = generate_trisolaris(&SimConfig { seed, ..config.clone() }).unwrap();
            for body in &bodies {
                for c in body.position.to_array() {
                    assert!(c.abs() <= 5.0 * AU);
                }
                for c in body.velocity.to_array() {
                    assert!(c.abs() <= 1000.0);
                }
            }
        }
    }

    #[test]
    fn test_zero_speed_and_scatter() {
        let config = SimConfig {
            max_scatter_au: 0.0,
            max_speed: 0.0,
            ..SimConfig::default()
        };
        let bodies = generate_trisolaris(&config).unwrap();
        assert!(bodies.iter().all(|b| b.velocity.magnitude() == 0.0));
        assert!(bodies.iter().all(|b| b.position.magnitude() == 0.0));
    }
}
