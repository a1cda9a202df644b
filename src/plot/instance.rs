// Gnuplot Instance
// Figure and axis descriptions held by a session; nothing here talks to gnuplot

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::config::GnuplotConfig;
use crate::core::FsPath;

/// A named axis of a figure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axe {
    pub name: String,
}

impl Axe {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One plot window or output file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    #[serde(default)]
    pub title: Option<String>,

    /// Where the rendered figure is written; `None` plots to the interactive terminal
    #[serde(default)]
    pub output: Option<FsPath>,

    #[serde(default)]
    pub axes: Vec<Axe>,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn output(mut self, output: impl Into<FsPath>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_axe(mut self, axe: Axe) -> Self {
        self.axes.push(axe);
        self
    }
}

/// A gnuplot session: its configuration and the figures it holds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instance {
    config: GnuplotConfig,
    figures: Vec<Figure>,
}

impl Instance {
    /// Create an instance with the compiled-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GnuplotConfig) -> Self {
        Self {
            config,
            figures: Vec::new(),
        }
    }

    /// Create an instance configured from a YAML file
    pub fn from_config_file(path: &Path) -> Result<Self> {
        Ok(Self::with_config(GnuplotConfig::load(path)?))
    }

    pub fn config(&self) -> &GnuplotConfig {
        &self.config
    }

    /// Add a figure and return its index
    pub fn add_figure(&mut self, figure: Figure) -> usize {
        self.figures.push(figure);
        self.figures.len() - 1
    }

    pub fn figure(&self, index: usize) -> Option<&Figure> {
        self.figures.get(index)
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_figures() {
        let mut instance = Instance::new();
        assert!(instance.figures().is_empty());

        let first = instance.add_figure(
            Figure::new()
                .titled("sine")
                .output("plots/sine.png")
                .with_axe(Axe::new("x"))
                .with_axe(Axe::new("y")),
        );
        let second = instance.add_figure(Figure::new());

        assert_eq!((first, second), (0, 1));
        let figure = instance.figure(0).unwrap();
        assert_eq!(figure.title.as_deref(), Some("sine"));
        assert_eq!(figure.output, Some(FsPath::from("plots/sine.png")));
        assert_eq!(figure.axes.len(), 2);
        assert!(instance.figure(2).is_none());
    }

    #[test]
    fn test_with_config() {
        let config = GnuplotConfig {
            persist: true,
            ..GnuplotConfig::default()
        };
        let instance = Instance::with_config(config.clone());
        assert_eq!(instance.config(), &config);
    }

    #[test]
    fn test_figure_yaml() {
        let figure: Figure =
            serde_yaml::from_str("title: surface\noutput: out/surface.svg\naxes:\n  - name: z\n")
                .unwrap();
        assert_eq!(figure.output, Some(FsPath::from("out/surface.svg")));
        assert_eq!(figure.axes, vec![Axe::new("z")]);
    }
}
