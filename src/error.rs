use std::fmt;

/// Errors surfaced by the engine.
///
/// Mirrors the four-kind taxonomy of the search contract: configuration
/// mistakes, oversized queries, malformed input files, and I/O failures.
#[derive(Debug)]
pub enum EngineError {
    /// A search was requested in a mode the engine isn't configured for,
    /// e.g. matrix search without a loaded substitution matrix, or
    /// conflicting budget kinds.
    Configuration(String),
    /// A query exceeded `max_query_length`.
    InputSize { length: usize, max: usize },
    /// A corpus file, matrix file, or query string was malformed.
    InputFormat(String),
    /// Reading or writing a file failed.
    Io(std::io::Error),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Configuration(msg) => write!(f, "configuration error: {msg}"),
            EngineError::InputSize { length, max } => {
                write!(f, "query length {length} exceeds maximum allowed length {max}")
            }
            EngineError::InputFormat(msg) => write!(f, "input format error: {msg}"),
            EngineError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
