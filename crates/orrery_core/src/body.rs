use serde::{Deserialize, Serialize};
use std::fmt;

use crate::vector::Vector3;

/// Opaque handle to a surface texture. Only the presentation layer knows
/// what it points at; physics never reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureRef(pub u64);

/// What kind of body this is. Stars carry no radiative state of their own:
/// luminosity, temperature and color are derived from mass and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BodyKind {
    Star,
    Planet {
        /// Bond albedo, 0.0 - 1.0
        albedo: f64,
        texture: TextureRef,
    },
}

/// Rejected body parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyError {
    /// Mass must be finite and strictly positive
    InvalidMass(f64),
    /// Radius must be finite and strictly positive
    InvalidRadius(f64),
    /// Albedo must lie in [0, 1]
    InvalidAlbedo(f64),
}

impl fmt::Display for BodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyError::InvalidMass(m) => write!(f, "mass must be finite and positive, got {m}"),
            BodyError::InvalidRadius(r) => {
                write!(f, "radius must be finite and positive, got {r}")
            }
            BodyError::InvalidAlbedo(a) => write!(f, "albedo must be within [0, 1], got {a}"),
        }
    }
}

impl std::error::Error for BodyError {}

/// A point mass taking part in the gravitational integration.
///
/// Position and velocity are free state and may go non-finite if the
/// simulation diverges. Mass, radius and kind are fixed at construction and
/// validated there.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Meters
    pub position: Vector3,
    /// Meters per second
    pub velocity: Vector3,
    mass: f64,
    radius: f64,
    kind: BodyKind,
}

fn positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl Body {
    pub fn new(
        position: Vector3,
        velocity: Vector3,
        mass: f64,
        radius: f64,
        kind: BodyKind,
    ) -> Result<Self, BodyError> {
        if !positive_finite(mass) {
            return Err(BodyError::InvalidMass(mass));
        }
        if !positive_finite(radius) {
            return Err(BodyError::InvalidRadius(radius));
        }
        if let BodyKind::Planet { albedo, .. } = kind {
            if !(0.0..=1.0).contains(&albedo) {
                return Err(BodyError::InvalidAlbedo(albedo));
            }
        }

        Ok(Self {
            position,
            velocity,
            mass,
            radius,
            kind,
        })
    }

    pub fn star(
        position: Vector3,
        velocity: Vector3,
        mass: f64,
        radius: f64,
    ) -> Result<Self, BodyError> {
        Self::new(position, velocity, mass, radius, BodyKind::Star)
    }

    pub fn planet(
        position: Vector3,
        velocity: Vector3,
        mass: f64,
        radius: f64,
        albedo: f64,
        texture: TextureRef,
    ) -> Result<Self, BodyError> {
        Self::new(
            position,
            velocity,
            mass,
            radius,
            BodyKind::Planet { albedo, texture },
        )
    }

    /// Kilograms
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Meters
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    pub fn is_star(&self) -> bool {
        matches!(self.kind, BodyKind::Star)
    }

    pub fn albedo(&self) -> Option<f64> {
        match self.kind {
            BodyKind::Planet { albedo, .. } => Some(albedo),
            BodyKind::Star => None,
        }
    }

    pub fn texture(&self) -> Option<TextureRef> {
        match self.kind {
            BodyKind::Planet { texture, .. } => Some(texture),
            BodyKind::Star => None,
        }
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        self.position.distance_to(other.position)
    }

    /// Velocity of `self` as seen from `other`
    pub fn relative_velocity(&self, other: &Body) -> Vector3 {
        self.velocity - other.velocity
    }

    pub fn momentum(&self) -> Vector3 {
        self.velocity * self.mass
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SOLAR_MASS, SOLAR_RADIUS};

    #[test]
    fn test_star_and_planet_construction() {
        let star = Body::star(Vector3::ZERO, Vector3::ZERO, SOLAR_MASS, SOLAR_RADIUS).unwrap();
        assert!(star.is_star());
        assert_eq!(star.albedo(), None);
        assert_eq!(star.texture(), None);

        let planet = Body::planet(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::ZERO,
            5.972e24,
            6.371e6,
            0.29,
            TextureRef(7),
        )
        .unwrap();
        assert!(!planet.is_star());
        assert_eq!(planet.albedo(), Some(0.29));
        assert_eq!(planet.texture(), Some(TextureRef(7)));
    }

    #[test]
    fn test_rejects_non_physical_parameters() {
        let v = Vector3::ZERO;
        assert_eq!(Body::star(v, v, 0.0, 1.0), Err(BodyError::InvalidMass(0.0)));
        assert_eq!(Body::star(v, v, -5.0, 1.0), Err(BodyError::InvalidMass(-5.0)));
        assert_eq!(Body::star(v, v, 1.0, -1.0), Err(BodyError::InvalidRadius(-1.0)));
        assert!(matches!(
            Body::star(v, v, f64::NAN, 1.0),
            Err(BodyError::InvalidMass(_))
        ));
        assert!(matches!(
            Body::star(v, v, 1.0, f64::INFINITY),
            Err(BodyError::InvalidRadius(_))
        ));
        assert_eq!(
            Body::planet(v, v, 1.0, 1.0, 1.5, TextureRef::default()),
            Err(BodyError::InvalidAlbedo(1.5))
        );
        assert!(Body::planet(v, v, 1.0, 1.0, f64::NAN, TextureRef::default()).is_err());
    }

    #[test]
    fn test_non_finite_motion_is_allowed() {
        let body = Body::star(
            Vector3::new(f64::NAN, 0.0, 0.0),
            Vector3::new(0.0, f64::INFINITY, 0.0),
            1.0,
            1.0,
        )
        .unwrap();
        assert!(!body.is_finite());
    }

    #[test]
    fn test_relative_quantities() {
        let a = Body::star(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(10.0, 0.0, 0.0),
            2.0,
            1.0,
        )
        .unwrap();
        let b = Body::star(
            Vector3::new(3.0, 4.0, 0.0),
            Vector3::new(4.0, 0.0, 0.0),
            1.0,
            1.0,
        )
        .unwrap();
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(a.relative_velocity(&b), Vector3::new(6.0, 0.0, 0.0));
        assert_eq!(a.momentum(), Vector3::new(20.0, 0.0, 0.0));
    }
}
