use orrery_core::constants::{SOLAR_LUMINOSITY, SOLAR_MASS, STEFAN_BOLTZMANN};
use std::f64::consts::PI;

/// 8-bit per channel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `0xRRGGBB`
    pub fn packed(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Normalized [r, g, b] for renderers that take floats
    pub fn to_f32(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

/// Main-sequence mass-luminosity relation, watts.
///
/// Three-segment power law in solar masses: exponent 2.3 below 0.43,
/// 4 below 2, 3.5 above.
pub fn luminosity(mass: f64) -> f64 {
    let mu = mass / SOLAR_MASS;
    let exponent = if mu < 0.43 {
        2.3
    } else if mu < 2.0 {
        4.0
    } else {
        3.5
    };
    SOLAR_LUMINOSITY * mu.powf(exponent)
}

/// Stefan-Boltzmann effective temperature (K) of a sphere of `radius`
/// meters radiating `luminosity` watts
pub fn effective_temperature(luminosity: f64, radius: f64) -> f64 {
    (luminosity / (4.0 * PI * radius * radius * STEFAN_BOLTZMANN)).powf(0.25)
}

/// Bound to [0, 255] then round. NaN passes through and truncates to 0.
fn clamp_channel(value: f64) -> f64 {
    let bounded = if value < 0.0 {
        0.0
    } else if value > 255.0 {
        255.0
    } else {
        value
    };
    bounded.round()
}

/// Approximate blackbody color for a temperature in kelvin
/// (Tanner Helland's piecewise fit, with green and blue rescaled so a
/// sun-like star renders close to white).
pub fn blackbody_color(temperature: f64) -> Rgb8 {
    let x = temperature / 100.0;

    let (r, g, b) = if x < 66.0 {
        let g = clamp_channel(99.4708025861 * x.ln() - 161.1195681661);
        let b = if x <= 19.0 {
            0.0
        } else {
            clamp_channel(138.5177312231 * (x - 10.0).ln() - 305.0447927307)
        };
        (255.0, g, b)
    } else {
        let r = clamp_channel(329.698727446 * (x - 60.0).powf(-0.1332047592));
        let g = clamp_channel(288.1221695283 * (x - 60.0).powf(-0.0755148492));
        (r, g, 255.0)
    };

    let g = clamp_channel(g / 241.0 * 255.0);
    let b = clamp_channel(b / 224.0 * 255.0);

    Rgb8::new(r as u8, g as u8, b as u8)
}

/// Radiative properties of a star, all derived from mass and radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarProperties {
    /// Watts
    pub luminosity: f64,
    /// Kelvin
    pub temperature: f64,
    pub color: Rgb8,
}

impl StarProperties {
    pub fn derive(mass: f64, radius: f64) -> Self {
        let luminosity = luminosity(mass);
        let temperature = effective_temperature(luminosity, radius);
        Self {
            luminosity,
            temperature,
            color: blackbody_color(temperature),
        }
    }
}
