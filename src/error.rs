//! Error types for line reads and typed assignment.

use std::io;
use thiserror::Error;

/// Errors returned by [`Scanner`](crate::Scanner) operations.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The stream ended before any byte of the next line was read.
    ///
    /// A partial final line (bytes but no terminator) is not an error;
    /// this fires only when there was nothing left at all.
    #[error("end of input")]
    Eof,

    /// The underlying stream failed mid-read. Invalid UTF-8 surfaces
    /// here as an `InvalidData` error, per `BufRead::read_line`.
    #[error("read error: {0}")]
    Io(#[from] io::Error),

    /// The line was read but did not match the destination's lexical form.
    #[error(transparent)]
    Parse(#[from] AssignError),

    /// The cancellation token fired before the blocking read completed.
    #[error("scan cancelled")]
    Cancelled,
}

/// Errors produced by the assignment dispatcher ([`Assign`](crate::Assign)).
///
/// Assignment is pure text-to-value conversion; stream and cancellation
/// failures never appear here.
#[derive(Debug, Error)]
pub enum AssignError {
    /// The text did not parse as the destination kind named by `kind`.
    #[error("parse error: {kind}: {source}")]
    Parse {
        kind: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl AssignError {
    /// Wrap an underlying parser complaint, naming the destination kind.
    ///
    /// Public so that caller-defined [`Assign`](crate::Assign)
    /// implementations can report failures the same way the built-in
    /// scalar set does.
    pub fn parse(
        kind: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Parse {
            kind,
            source: source.into(),
        }
    }
}
