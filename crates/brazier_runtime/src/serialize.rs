//! Controller description serialization using `MessagePack`.
//!
//! This module provides functions for saving and loading controller
//! descriptions to/from files using the `MessagePack` binary format.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use brazier_foundation::{Error, Result};

use crate::spec::ControllerSpec;

/// Serializes a controller description to `MessagePack` bytes.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(spec: &ControllerSpec) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(spec).map_err(|e| Error::Serialization(e.to_string()))
}

/// Deserializes a controller description from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<ControllerSpec> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::Serialization(e.to_string()))
}

/// Saves a controller description to a file using `MessagePack` format.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to, or if
/// serialization fails.
pub fn save_to_file<P: AsRef<Path>>(spec: &ControllerSpec, path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(|e| {
        Error::Io(format!(
            "failed to create file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(spec)?;

    writer.write_all(&bytes).map_err(|e| {
        Error::Io(format!(
            "failed to write to file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    writer.flush().map_err(|e| {
        Error::Io(format!(
            "failed to flush file '{}': {e}",
            path.as_ref().display()
        ))
    })
}

/// Loads a controller description from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if
/// deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ControllerSpec> {
    let file = File::open(path.as_ref()).map_err(|e| {
        Error::Io(format!(
            "failed to open file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::Io(format!(
            "failed to read file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    from_bytes(&bytes)
}
