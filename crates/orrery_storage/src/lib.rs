pub mod codec;

use orrery_sim::Simulation;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

pub use codec::{CodecError, decode, encode};

/// Failure to save or load a snapshot file
#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Codec(CodecError),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "snapshot I/O error: {e}"),
            StorageError::Codec(e) => write!(f, "snapshot format error: {e}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Codec(e) => Some(e),
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<CodecError> for StorageError {
    fn from(e: CodecError) -> Self {
        StorageError::Codec(e)
    }
}

/// Save a snapshot to disk, creating parent directories as needed
pub fn save_snapshot(sim: &Simulation, path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = encode(sim)?;
    fs::write(path, data)?;
    Ok(())
}

/// Load a snapshot from disk
pub fn load_snapshot(path: &Path) -> Result<Simulation, StorageError> {
    let data = fs::read(path)?;
    Ok(decode(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::SimConfig;
    use orrery_physics::procgen::generate_trisolaris;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("orrery-storage-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_save_and_load() {
        let dir = scratch_dir("roundtrip");
        let path = dir.join("nested").join("trisolaris.bin");

        let mut sim = Simulation::new(generate_trisolaris(&SimConfig::default()).unwrap());
        for _ in 0..100 {
            sim.advance(60.0);
        }
        save_snapshot(&sim, &path).unwrap();
        let loaded = load_snapshot(&path).unwrap();
        assert_eq!(loaded, sim);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let dir = scratch_dir("missing");
        let result = load_snapshot(&dir.join("nope.bin"));
        assert!(matches!(result, Err(StorageError::Io(_))));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = scratch_dir("corrupt");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("short.bin");
        fs::write(&path, [1u8, 2, 3]).unwrap();

        let result = load_snapshot(&path);
        assert!(matches!(
            result,
            Err(StorageError::Codec(CodecError::Truncated { len: 3 }))
        ));

        fs::remove_dir_all(&dir).unwrap();
    }
}
