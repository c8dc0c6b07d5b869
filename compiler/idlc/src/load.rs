//! Declaration graph loading.
//!
//! The input document is `{ "interfaces": [ ... ] }`, each record shaped like
//! [`idl_ir::Interface`]. Annotation values decode by shape: `null` is a bare
//! flag, a string is a `Name=Value` pair, and an object is a function value.

use std::path::Path;

use idl_ir::{IdlDatabase, Interface};
use serde::Deserialize;

use crate::DriverError;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DeclarationFile {
    interfaces: Vec<Interface>,
}

/// Decode a declaration graph from JSON text.
///
/// A later interface with the same name replaces an earlier one.
pub fn parse_database(json: &str) -> Result<IdlDatabase, serde_json::Error> {
    let file: DeclarationFile = serde_json::from_str(json)?;
    Ok(file.interfaces.into_iter().collect())
}

/// Read and decode a declaration graph from disk.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn load_database(path: &Path) -> Result<IdlDatabase, DriverError> {
    let json = std::fs::read_to_string(path).map_err(|source| DriverError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let database = parse_database(&json).map_err(|source| DriverError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(interfaces = database.len(), "declarations loaded");
    Ok(database)
}
