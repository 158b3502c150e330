//! Error types for the bintovec-core library.
//!
//! Every failure is terminal for a run. Variants carry the offending path
//! (or seed) so the caller can report it verbatim.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bintovec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all bintovec operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Input file could not be opened
    #[error("unable to open input file '{path}': {source}")]
    InputOpen {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading the input failed part way through
    #[error("failed to read input file '{path}': {source}")]
    Read {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be created or truncated
    #[error("unable to open output file '{path}': {source}")]
    OutputOpen {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing to an opened output file failed
    #[error("failed to write output file '{path}': {source}")]
    OutputWrite {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The identifier seed sanitized to nothing
    #[error("cannot derive a variable name from '{seed}': result is empty")]
    InvalidIdentifier {
        /// The seed string that was sanitized
        seed: String,
    },
}

/// Coarse classification of an [`Error`], used to pick an exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid caller-supplied arguments
    Argument,
    /// Input could not be opened
    InputOpen,
    /// Input failed mid-stream
    Read,
    /// Output target could not be opened or written
    Output,
}

impl Error {
    /// Creates a new input open error
    pub fn input_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputOpen {
            path: path.into(),
            source,
        }
    }

    /// Creates a new read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new output open error
    pub fn output_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputOpen {
            path: path.into(),
            source,
        }
    }

    /// Creates a new output write error
    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }

    /// Creates a new invalid identifier error
    pub fn invalid_identifier(seed: impl Into<String>) -> Self {
        Self::InvalidIdentifier { seed: seed.into() }
    }

    /// Returns the taxonomy bucket this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputOpen { .. } => ErrorKind::InputOpen,
            Self::Read { .. } => ErrorKind::Read,
            Self::OutputOpen { .. } | Self::OutputWrite { .. } => ErrorKind::Output,
            Self::InvalidIdentifier { .. } => ErrorKind::Argument,
        }
    }
}
