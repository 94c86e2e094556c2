//! Custom error types for the colaccel crate.

use thiserror::Error;

use super::models::{Phase, Table};

/// The primary error type for all operations in this crate.
///
/// The format carries no magic, version or checksum, so every bit pattern
/// decodes to *some* value. The only detectable failures are reads that
/// leave the buffer.
#[derive(Debug, Error)]
pub enum AccelError {
    /// An error originating from I/O operations (file loading, report output).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A scalar read or a record decode reached past the end of its buffer.
    #[error("Read out of bounds: {width} bytes at offset {offset:#x} exceed buffer of {buffer_len} bytes")]
    OutOfBounds {
        offset: usize,
        width: usize,
        buffer_len: usize,
    },

    /// A length-prefixed span (or the reserved block) could not be sliced from the buffer.
    #[error("Truncated file at phase {phase}: expected {expected} bytes, but only {available} bytes remain")]
    TruncatedFile {
        phase: Phase,
        expected: usize,
        available: usize,
    },

    /// A single record failed to decode while building a table.
    #[error("Failed to decode {table} record #{index}: {source}")]
    Record {
        table: Table,
        index: usize,
        #[source]
        source: Box<AccelError>,
    },
}

/// A convenience `Result` type alias using the crate's `AccelError` type.
pub type Result<T> = std::result::Result<T, AccelError>;
