// Plot module
// Gnuplot configuration and figure scaffolding

pub mod config;
pub mod instance;

pub use config::GnuplotConfig;
pub use instance::{Axe, Figure, Instance};
