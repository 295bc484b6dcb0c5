use thiserror::Error;

use crate::check::{CheckError, ErrorKind};

/// Result type for sjavac operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for the verifier.
///
/// `Io` is the unreadable-source channel, kept distinct from every
/// validation kind; `Validation` carries the first check failure together
/// with the line the checker stopped on.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {source}")]
    Validation { line: usize, source: CheckError },
}

impl Error {
    /// Attach a line number to a check failure
    pub fn validation(line: usize, source: CheckError) -> Self {
        Self::Validation { line, source }
    }

    /// The taxonomy kind of the underlying check failure, if this is one
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Io(_) => None,
            Self::Validation { source, .. } => Some(source.kind()),
        }
    }
}
