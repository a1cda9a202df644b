// Error Wrapping
// Contextual error messages that keep the underlying cause inspectable

use std::error::Error as StdError;
use std::fmt;
use std::io;

use thiserror::Error;

/// Boxed cause carried by a [`WrappedError`]
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Result alias used by every fallible path operation
pub type Result<T> = std::result::Result<T, WrappedError>;

/// Broad classification of what went wrong underneath a wrapped error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The target path does not exist
    NotFound,
    /// Any other OS-level failure (permissions, I/O, invalid path)
    Io,
    /// Invalid glob syntax
    Pattern,
    /// No cause, or a cause that doesn't fit the categories above
    Other,
}

/// A contextual message chained to an optional underlying cause.
///
/// The cause is returned from [`StdError::source`] and is also appended to the
/// rendered message on its own line, so printing the error alone shows both
/// what was attempted and why it failed.
#[derive(Debug, Error)]
#[error("{message}{}", render_cause(.cause))]
pub struct WrappedError {
    message: String,
    kind: ErrorKind,
    #[source]
    cause: Option<BoxError>,
}

fn render_cause(cause: &Option<BoxError>) -> String {
    match cause {
        Some(cause) => format!("\n{cause}"),
        None => String::new(),
    }
}

impl WrappedError {
    /// Create an error that carries only a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::Other,
            cause: None,
        }
    }

    /// Create an error chained to `cause`
    pub fn with_cause(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        let cause = cause.into();
        Self {
            message: message.into(),
            kind: classify(&*cause),
            cause: Some(cause),
        }
    }

    /// Override the classification derived from the cause
    pub fn with_kind(mut self, kind: ErrorKind) -> Self {
        self.kind = kind;
        self
    }

    /// The contextual message, without the cause
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    /// The underlying cause, if any
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Consume the error and hand back its cause
    pub fn into_cause(self) -> Option<BoxError> {
        self.cause
    }
}

fn classify(cause: &(dyn StdError + Send + Sync + 'static)) -> ErrorKind {
    if let Some(err) = cause.downcast_ref::<io::Error>() {
        if err.kind() == io::ErrorKind::NotFound {
            ErrorKind::NotFound
        } else {
            ErrorKind::Io
        }
    } else if let Some(err) = cause.downcast_ref::<glob::GlobError>() {
        if err.error().kind() == io::ErrorKind::NotFound {
            ErrorKind::NotFound
        } else {
            ErrorKind::Io
        }
    } else if cause.is::<glob::PatternError>() {
        ErrorKind::Pattern
    } else if let Some(err) = cause.downcast_ref::<WrappedError>() {
        err.kind
    } else {
        ErrorKind::Other
    }
}

/// Format a message and chain it to `cause` when one is given.
///
/// Prefer the [`annotate!`](crate::annotate) macro, which builds the
/// `fmt::Arguments` for you.
pub fn annotate(cause: Option<BoxError>, args: fmt::Arguments<'_>) -> WrappedError {
    let message = fmt::format(args);
    match cause {
        Some(cause) => WrappedError::with_cause(message, cause),
        None => WrappedError::new(message),
    }
}

/// Build a [`WrappedError`] from a format string, optionally chained to a cause.
///
/// ```
/// use toolbox::annotate;
///
/// let plain = annotate!("nothing at '{}'", "/tmp/x");
/// assert!(plain.cause().is_none());
///
/// let io = std::io::Error::from(std::io::ErrorKind::NotFound);
/// let chained = annotate!(io, "Failed to get FileInfo of '{}'", "/tmp/x");
/// assert!(chained.is_not_found());
/// ```
#[macro_export]
macro_rules! annotate {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::core::error::annotate(None, format_args!($fmt $(, $arg)*))
    };
    ($cause:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::core::error::annotate(Some($cause.into()), format_args!($fmt $(, $arg)*))
    };
}

/// Attach a contextual message to the error side of a `Result`
pub trait Annotate<T> {
    /// Wrap the error with a lazily built message
    fn annotate<F>(self, message: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> Annotate<T> for std::result::Result<T, E>
where
    E: Into<BoxError>,
{
    fn annotate<F>(self, message: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| WrappedError::with_cause(message(), err))
    }
}
