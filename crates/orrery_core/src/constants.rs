// Physical constants, SI units throughout.

/// Newtonian gravitational constant (m^3 kg^-1 s^-2)
pub const G: f64 = 6.67430e-11;

/// Stefan-Boltzmann constant (W m^-2 K^-4)
pub const STEFAN_BOLTZMANN: f64 = 5.670374419e-8;

/// Nominal solar mass (kg)
pub const SOLAR_MASS: f64 = 1.9885e30;

/// Nominal solar radius (m)
pub const SOLAR_RADIUS: f64 = 695_700_000.0;

/// Solar luminosity (W), anchor of the mass-luminosity relation
pub const SOLAR_LUMINOSITY: f64 = 3.486e26;
