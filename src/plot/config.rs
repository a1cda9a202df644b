// Gnuplot Configuration
// Defaults compiled from config.yaml at build time, overridable from YAML files

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

// Include the auto-generated defaults from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_defaults.rs"));
}

/// Preamble sent before 2D plots: black border on the bottom/left axes and a dotted grid
pub const DEFAULT_DIM2: &str = "
set style line 11 lc rgb 'black' lt 1
set border 3 back ls 11 lw 2.5
set tics nomirror
set style line 12 lc rgb 'black' lt 0 lw 1
set grid back ls 12 lw 2.0
";

/// Preamble sent before 3D plots
pub const DEFAULT_DIM3: &str = DEFAULT_DIM2;

/// Settings for a gnuplot session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GnuplotConfig {
    /// Keep plot windows open after gnuplot exits
    pub persist: bool,

    /// Echo every command sent to gnuplot
    pub debug: bool,

    /// Discard gnuplot's own output
    pub silent: bool,

    /// Executable name or path
    pub exe: String,

    /// Terminal size in pixels: [width, height]
    pub size: [u32; 2],

    /// Commands sent before 2D plots
    pub dim2: String,

    /// Commands sent before 3D plots
    pub dim3: String,
}

impl Default for GnuplotConfig {
    fn default() -> Self {
        Self {
            persist: compiled::PERSIST,
            debug: compiled::DEBUG,
            silent: compiled::SILENT,
            exe: compiled::GNUPLOT_EXE.to_string(),
            size: [compiled::WIDTH, compiled::HEIGHT],
            dim2: DEFAULT_DIM2.to_string(),
            dim3: DEFAULT_DIM3.to_string(),
        }
    }
}

impl GnuplotConfig {
    /// Load configuration from a YAML file; missing fields take the compiled defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read gnuplot config: {}", path.display()))?;

        let config: GnuplotConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse gnuplot config YAML: {}", path.display()))?;

        debug!(path = %path.display(), exe = %config.exe, "loaded gnuplot config");
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize gnuplot config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write gnuplot config: {}", path.display()))?;

        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.size[0]
    }

    pub fn height(&self) -> u32 {
        self.size[1]
    }
}
