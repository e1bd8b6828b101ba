/*!
# Error Taxonomy

Every pipeline invocation is a one-shot batch job: no error is retried, none is
logged-and-swallowed. All fallible operations return [`Result`] and surface a
descriptive message to the invoking process.

Output files are only ever renamed into place on success (see
[`io::write_atomic`](crate::io::write_atomic)), so a fatal error never leaves a partial
artifact behind.
*/

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for all pipeline operations
pub type Result<T> = std::result::Result<T, PrepError>;

/// Fatal pipeline errors
#[derive(Debug, Error)]
pub enum PrepError {
    /// A raw edge line with a token count other than 3 or 4
    #[error("line {line}: expected 3 or 4 integer columns, found {found}")]
    Format { line: usize, found: usize },

    /// An integer token too large for the raw edge domain
    #[error("line {line}: integer token `{token}` out of range")]
    Token { line: usize, token: String },

    /// All raw timestamps identical: the normalization range has zero width
    #[error("all timestamps equal {value}: cannot rescale a zero-width range")]
    DegenerateRange { value: u64 },

    /// An input file without a single edge record
    #[error("{0}: no edge records found")]
    EmptyInput(PathBuf),

    /// A malformed snapshot archive: missing members or inconsistent dimensions
    #[error("archive {path}: {reason}")]
    ArchiveShape { path: PathBuf, reason: String },

    /// A label matrix row violating the one-hot invariant
    #[error("label row {node} has {set_bits} set bits, expected exactly one")]
    Label { node: usize, set_bits: usize },

    /// Invalid or inconsistent arguments, reported before any processing starts
    #[error("invalid argument: {0}")]
    Argument(String),

    /// Failure to bring up the flattening worker pool
    #[error("worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Npz(#[from] ndarray_npy::ReadNpzError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
