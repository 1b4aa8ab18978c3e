//! Shared utilities for command implementations.

use std::fs;
use std::path::{Path, PathBuf};

use esmlink::{GraphManifest, InteropOptions, LoadedGraph};
use esmlink_config::{ConfigDiscovery, EsmlinkConfig};

use crate::error::{CliError, Result, ResultExt};

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(CliError::Io)
}

/// Resolve configuration from `explicit` or `./esmlink.toml`, then the
/// environment.
pub fn load_config(explicit: Option<&Path>) -> Result<EsmlinkConfig> {
    let cwd = get_cwd()?;
    Ok(ConfigDiscovery::new(cwd).resolve(explicit)?)
}

/// Read a manifest. `.toml` files are parsed as TOML, anything else as JSON.
pub fn read_manifest(path: &Path) -> Result<GraphManifest> {
    let content = fs::read_to_string(path).with_path(path)?;

    let parsed = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| e.to_string()),
        _ => serde_json::from_str(&content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| CliError::Manifest {
        path: path.to_path_buf(),
        message,
    })
}

/// Read a manifest and register its modules.
pub fn load_graph(path: &Path, interop: &InteropOptions) -> Result<(GraphManifest, LoadedGraph)> {
    let manifest = read_manifest(path)?;
    let graph = manifest.load(interop)?;
    tracing::debug!(
        manifest = %path.display(),
        modules = graph.registry.len(),
        "loaded manifest"
    );
    Ok((manifest, graph))
}
