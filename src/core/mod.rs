// Core infrastructure module
// Path value and the error wrapping every path operation reports through

pub mod error;
pub mod path;

pub use error::{annotate, Annotate, BoxError, ErrorKind, Result, WrappedError};
pub use path::FsPath;
