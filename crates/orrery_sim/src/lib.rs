pub mod pipeline;
pub mod simulation;
pub mod status;

pub use pipeline::{EraTracker, SimulationPlugin, TickState};
pub use simulation::Simulation;
pub use status::{Era, Survey, SurveyThresholds};
