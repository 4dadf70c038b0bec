//! Error types for branch extraction.
//!
//! Every error here is fatal for the run: this is a single-shot batch tool
//! and nothing is retried. A filter target that is simply absent from the
//! branch map is not represented here at all; that case is reported as a
//! warning and an empty result (see [`crate::filter`]).

use std::io;

use thiserror::Error;

use crate::module::Module;

/// Result type for branch extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for branch extraction operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the input stream failed (anything other than end-of-stream).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An input line did not contain two space-separated tokens.
    #[error("malformed edge at line {line_no}: expected 'parent dependant', got {line:?}")]
    MalformedLine {
        /// 1-based line number in the input stream.
        line_no: usize,
        /// The offending line, without its terminator.
        line: String,
    },

    /// An edge referenced a parent whose own chain to the root was never
    /// established. The dumper is expected to emit edges root-outward.
    #[error("no branch ends at {missing}; edges must introduce a module as a dependant before using it as a parent")]
    BrokenChain {
        /// The parent module with no recorded chain.
        missing: Module,
    },

    /// A filter was asked to extract the chain of the root module, which by
    /// definition has no ancestors.
    #[error("{module} is the root module and has no ancestor chain")]
    RootTarget {
        /// The rejected target.
        module: Module,
    },
}
