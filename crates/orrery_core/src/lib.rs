pub mod body;
pub mod config;
pub mod constants;
pub mod vector;

pub use body::{Body, BodyError, BodyKind, TextureRef};
pub use config::{ConfigError, SimConfig};
pub use constants::*;
pub use vector::Vector3;
