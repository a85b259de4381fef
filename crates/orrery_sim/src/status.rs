use orrery_core::SimConfig;
use orrery_physics::units::au_to_meters;

use crate::simulation::Simulation;

/// Climate era of a planet in a multi-star system, judged by how many of its
/// suns have wandered off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    /// Every star is close
    TriSolarDay,
    /// Several stars close, several far
    Chaotic,
    /// Exactly one star close, like a planet with a single sun
    Stable,
    /// No star close
    ExtremeCold,
}

impl Era {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TriSolarDay => "Tri-solar day",
            Self::Chaotic => "Chaotic Era",
            Self::Stable => "Stable Era",
            Self::ExtremeCold => "Extreme cold period",
        }
    }

    pub fn classify(flying_stars: usize, total_stars: usize) -> Self {
        if total_stars == 0 || flying_stars >= total_stars {
            Self::ExtremeCold
        } else if flying_stars == 0 {
            Self::TriSolarDay
        } else if flying_stars + 1 == total_stars {
            Self::Stable
        } else {
            Self::Chaotic
        }
    }
}

/// Distances and speeds that separate near stars from flying ones
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurveyThresholds {
    /// Meters
    pub flying_star_distance: f64,
    /// Meters per second
    pub frozen_speed: f64,
}

impl SurveyThresholds {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            flying_star_distance: au_to_meters(config.flying_star_distance_au),
            frozen_speed: config.frozen_speed,
        }
    }
}

impl Default for SurveyThresholds {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

/// The sky as seen from one body
#[derive(Debug, Clone, PartialEq)]
pub struct Survey {
    pub era: Era,
    /// Stars farther than the flying threshold
    pub flying_stars: usize,
    /// Flying stars that are also barely moving relative to the observer
    pub frozen_flying_stars: usize,
    /// Distance to every other star in meters, nearest first
    pub star_distances: Vec<f64>,
    /// Observer temperature in kelvin
    pub temperature: f64,
}

impl Survey {
    /// Survey the sky from body `observer`. `None` if there is no such body.
    pub fn observe(
        sim: &Simulation,
        observer: usize,
        thresholds: &SurveyThresholds,
    ) -> Option<Self> {
        let home = sim.body(observer)?;

        let mut star_distances = Vec::new();
        let mut flying_stars = 0;
        let mut frozen_flying_stars = 0;

        for (index, star) in sim.bodies().iter().enumerate() {
            if index == observer || !star.is_star() {
                continue;
            }
            let distance = home.distance_to(star);
            star_distances.push(distance);
            if distance > thresholds.flying_star_distance {
                flying_stars += 1;
                if home.relative_velocity(star).magnitude() < thresholds.frozen_speed {
                    frozen_flying_stars += 1;
                }
            }
        }
        star_distances.sort_by(f64::total_cmp);

        Some(Self {
            era: Era::classify(flying_stars, star_distances.len()),
            flying_stars,
            frozen_flying_stars,
            star_distances,
            temperature: sim.temperature_of(observer)?,
        })
    }
}
