pub mod forces;
pub mod integrator;
pub mod procgen;
pub mod stellar;
pub mod thermodynamics;
pub mod units;

pub use stellar::{Rgb8, StarProperties};
