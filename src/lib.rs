// Toolbox Library
// Filesystem path utilities with contextual error wrapping, plus gnuplot scaffolding

// Core infrastructure - path value and error wrapping
pub mod core;

// Utilities - lexical path helpers and glob patterns
pub mod utilities;

// Plot - gnuplot configuration and figure descriptions
pub mod plot;

// Re-export commonly used items for convenience
pub use crate::core::{annotate, Annotate, ErrorKind, FsPath, Result, WrappedError};
pub use crate::plot::{Axe, Figure, GnuplotConfig, Instance};
pub use crate::utilities::PatternMatcher;
