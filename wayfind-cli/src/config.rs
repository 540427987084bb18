//! wayfind configuration loading from `.wayfindrc.toml`.
//!
//! Configuration is optional; without a config file wayfind reads
//! `vertex.txt` and `edge.txt` from the working directory and prints tables.
//!
//! # Example Configuration
//!
//! ```toml
//! [input]
//! vertices = "data/cities.txt"
//! edges = "data/roads.txt"
//!
//! [output]
//! format = "json"
//! color = false
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".wayfindrc.toml";

/// Vertex file used when neither the CLI nor the config names one.
pub const DEFAULT_VERTEX_FILE: &str = "vertex.txt";

/// Edge file used when neither the CLI nor the config names one.
pub const DEFAULT_EDGE_FILE: &str = "edge.txt";

/// Root configuration structure loaded from `.wayfindrc.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct WayfindConfig {
    /// Graph input files.
    #[serde(default)]
    pub input: InputConfig,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Where the graph is read from.
///
/// Relative paths are resolved against the directory holding the config
/// file, not the process working directory.
#[derive(Debug, Deserialize, Default)]
pub struct InputConfig {
    #[serde(default)]
    pub vertices: Option<PathBuf>,

    #[serde(default)]
    pub edges: Option<PathBuf>,
}

/// Output formatting preferences.
///
/// Command-line flags (e.g., `--format json`) override these settings.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Default output format: `table`, `json` or `csv`.
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output. Unset means "only on a TTY".
    #[serde(default)]
    pub color: Option<bool>,
}

impl WayfindConfig {
    /// Load configuration from `.wayfindrc.toml` in the given directory.
    ///
    /// If the config file doesn't exist or can't be parsed, returns defaults.
    /// Parse errors are logged as warnings but don't cause failures.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str::<WayfindConfig>(&content) {
                    Ok(mut config) => {
                        config.input.vertices = config.input.vertices.map(|p| root.join(p));
                        config.input.edges = config.input.edges.map(|p| root.join(p));
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Resolve the vertex file: CLI flag > config > `vertex.txt`.
    pub fn vertex_file(&self, cli: Option<&Path>) -> PathBuf {
        cli.map(Path::to_path_buf)
            .or_else(|| self.input.vertices.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_VERTEX_FILE))
    }

    /// Resolve the edge file: CLI flag > config > `edge.txt`.
    pub fn edge_file(&self, cli: Option<&Path>) -> PathBuf {
        cli.map(Path::to_path_buf)
            .or_else(|| self.input.edges.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EDGE_FILE))
    }

    /// Get the default output format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Returns the configured color preference, or `None` to auto-detect.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }
}
