// Astronomical length units. The integrator works purely in meters; these
// are for scenario setup and reporting only.

/// Astronomical unit (m)
pub const AU: f64 = 149_597_870_700.0;

/// Light-year (m)
pub const LIGHT_YEAR: f64 = 9.461e15;

pub fn au_to_meters(au: f64) -> f64 {
    au * AU
}

pub fn meters_to_au(meters: f64) -> f64 {
    meters / AU
}

pub fn meters_to_light_years(meters: f64) -> f64 {
    meters / LIGHT_YEAR
}
