//! File loading with dependency fallback
//!
//! Reads a schema file, resolves it, and on an unresolved reference loads
//! the dependency from a sibling file named by convention: a missing type
//! `X` is expected at `<same directory>/X.avsc`, the qualified name spelled
//! literally in the filename.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{Result, SchemaError};
use crate::registry::SchemaRegistry;
use crate::resolve::resolve_schema;

/// Filename suffix for schema files located by the directory convention
pub const SCHEMA_EXTENSION: &str = "avsc";

/// Load and resolve the schema file at `path`, following cross-file
/// references via the directory convention
///
/// A fresh registry backs the resolution and is dropped with it; use
/// [`load_schema_into`] to keep the registry for further loads.
pub fn load_schema(path: impl AsRef<Path>) -> Result<Value> {
    let mut registry = SchemaRegistry::new();
    load_schema_into(path, &mut registry)
}

/// Load and resolve the schema file at `path` against a shared registry
///
/// Named types from every file touched during resolution end up in
/// `registry`, so subsequent loads resolve against the same namespace
/// space. Errors with [`SchemaError::UnknownType`] naming the unresolvable
/// type when a dependency file cannot be found; I/O errors for `path`
/// itself propagate as [`SchemaError::Io`].
pub fn load_schema_into(path: impl AsRef<Path>, registry: &mut SchemaRegistry) -> Result<Value> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let schema: Value = serde_json::from_str(&content)?;

    debug!("loaded schema file {}", path.display());

    let schema_dir = path.parent().unwrap_or_else(|| Path::new(""));
    resolve_with_fallback(&schema, schema_dir, registry)
}

/// Resolve `schema`, loading missing dependencies from `schema_dir` and
/// retrying the whole tree after each successful dependency load
///
/// The retry is bounded: each dependency file is loaded at most once per
/// call, and a name that still fails after its file was loaded is reported
/// as unknown rather than retried.
fn resolve_with_fallback(
    schema: &Value,
    schema_dir: &Path,
    registry: &mut SchemaRegistry,
) -> Result<Value> {
    let mut loaded = HashSet::new();

    loop {
        let name = match resolve_schema(schema, registry, None) {
            Ok(resolved) => return Ok(resolved),
            Err(SchemaError::UnknownType { name }) => name,
            Err(err) => return Err(err),
        };

        if !loaded.insert(name.clone()) {
            // The convention file for this name was already loaded and the
            // reference still does not resolve.
            return Err(SchemaError::UnknownType { name });
        }

        let dependency = schema_dir.join(format!("{}.{}", name, SCHEMA_EXTENSION));
        debug!("loading dependency {} from {}", name, dependency.display());

        match load_schema_into(&dependency, registry) {
            Ok(_) => {}
            Err(SchemaError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                // The missing type, not the missing file, is the meaningful
                // error for the caller.
                return Err(SchemaError::UnknownType { name });
            }
            Err(err) => return Err(err),
        }
    }
}
