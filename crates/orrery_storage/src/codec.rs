//! Fixed-layout binary snapshot of a [`Simulation`].
//!
//! Little-endian, fixed-width fields (bincode 1.x legacy configuration):
//!
//! ```text
//! Header  (9 bytes)   version u8, elapsed_time f64
//! Record (81 bytes)   position [f64; 3], velocity [f64; 3], kind u8,
//!                     mass f64, radius f64, albedo f64, texture u64
//! ```
//!
//! Stars write zero for `albedo` and `texture`. Floats are stored bit for bit,
//! so NaN and infinite positions or velocities survive a round trip.

use orrery_core::{Body, BodyError, BodyKind, TextureRef, Vector3};
use orrery_sim::Simulation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout version written into every header
pub const FORMAT_VERSION: u8 = 1;

pub const HEADER_SIZE: usize = 9;
pub const RECORD_SIZE: usize = 81;

const KIND_PLANET: u8 = 0;
const KIND_STAR: u8 = 1;

#[derive(Serialize, Deserialize)]
struct Header {
    version: u8,
    elapsed_time: f64,
}

#[derive(Serialize, Deserialize)]
struct Record {
    position: [f64; 3],
    velocity: [f64; 3],
    kind: u8,
    mass: f64,
    radius: f64,
    albedo: f64,
    texture: u64,
}

impl Record {
    fn from_body(body: &Body) -> Self {
        let (kind, albedo, texture) = match body.kind() {
            BodyKind::Star => (KIND_STAR, 0.0, 0),
            BodyKind::Planet { albedo, texture } => (KIND_PLANET, albedo, texture.0),
        };
        Self {
            position: body.position.to_array(),
            velocity: body.velocity.to_array(),
            kind,
            mass: body.mass(),
            radius: body.radius(),
            albedo,
            texture,
        }
    }

    fn into_body(self, index: usize) -> Result<Body, CodecError> {
        let kind = match self.kind {
            KIND_STAR => {
                if self.albedo.to_bits() != 0 || self.texture != 0 {
                    return Err(CodecError::ReservedBytes { index });
                }
                BodyKind::Star
            }
            KIND_PLANET => BodyKind::Planet {
                albedo: self.albedo,
                texture: TextureRef(self.texture),
            },
            tag => return Err(CodecError::UnknownKind { index, tag }),
        };

        Body::new(
            Vector3::from(self.position),
            Vector3::from(self.velocity),
            self.mass,
            self.radius,
            kind,
        )
        .map_err(|source| CodecError::InvalidBody { index, source })
    }
}

/// Why a buffer could not be decoded
#[derive(Debug)]
pub enum CodecError {
    /// Shorter than the header
    Truncated { len: usize },
    /// Not a whole number of records after the header
    Length { len: usize },
    UnsupportedVersion(u8),
    UnknownKind { index: usize, tag: u8 },
    /// A star record with non-zero planet-only fields
    ReservedBytes { index: usize },
    InvalidBody { index: usize, source: BodyError },
    Bincode(bincode::Error),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Truncated { len } => {
                write!(f, "snapshot is {len} bytes, shorter than the {HEADER_SIZE}-byte header")
            }
            CodecError::Length { len } => write!(
                f,
                "snapshot length {len} is not {HEADER_SIZE} + a multiple of {RECORD_SIZE}"
            ),
            CodecError::UnsupportedVersion(v) => {
                write!(f, "unsupported snapshot version {v} (expected {FORMAT_VERSION})")
            }
            CodecError::UnknownKind { index, tag } => {
                write!(f, "body {index}: unknown kind tag {tag}")
            }
            CodecError::ReservedBytes { index } => {
                write!(f, "body {index}: star record has non-zero planet fields")
            }
            CodecError::InvalidBody { index, source } => write!(f, "body {index}: {source}"),
            CodecError::Bincode(e) => write!(f, "bincode error: {e}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::InvalidBody { source, .. } => Some(source),
            CodecError::Bincode(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<bincode::Error> for CodecError {
    fn from(e: bincode::Error) -> Self {
        CodecError::Bincode(e)
    }
}

/// Encoded size of a simulation with `bodies` bodies
pub fn encoded_len(bodies: usize) -> usize {
    HEADER_SIZE + RECORD_SIZE * bodies
}

/// Encode elapsed time and every body. Time warp is not stored.
pub fn encode(sim: &Simulation) -> Result<Vec<u8>, CodecError> {
    let mut buffer = Vec::with_capacity(encoded_len(sim.len()));
    bincode::serialize_into(
        &mut buffer,
        &Header {
            version: FORMAT_VERSION,
            elapsed_time: sim.elapsed_time(),
        },
    )?;
    for body in sim.bodies() {
        bincode::serialize_into(&mut buffer, &Record::from_body(body))?;
    }
    Ok(buffer)
}

/// Decode a buffer produced by [`encode`]. The result has a time warp of 1.
pub fn decode(bytes: &[u8]) -> Result<Simulation, CodecError> {
    if bytes.len() < HEADER_SIZE {
        return Err(CodecError::Truncated { len: bytes.len() });
    }
    let (header_bytes, records) = bytes.split_at(HEADER_SIZE);
    let header: Header = bincode::deserialize(header_bytes)?;
    if header.version != FORMAT_VERSION {
        return Err(CodecError::UnsupportedVersion(header.version));
    }
    if records.len() % RECORD_SIZE != 0 {
        return Err(CodecError::Length { len: bytes.len() });
    }

    let bodies = records
        .chunks_exact(RECORD_SIZE)
        .enumerate()
        .map(|(index, chunk)| -> Result<Body, CodecError> {
            bincode::deserialize::<Record>(chunk)?.into_body(index)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Simulation::from_snapshot(header.elapsed_time, bodies))
}
