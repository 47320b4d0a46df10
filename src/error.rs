use cancel_this::Cancelled;
use thiserror::Error;

/// Errors that can terminate a closure session.
///
/// Malformed row content is never an error (rows are parsed leniently), and neither is
/// a universe too large for labeled output (rendering is simply skipped).
#[derive(Error, Debug)]
pub enum RelationError {
    #[error("Invalid universe size {size} (expected 1..={max})")]
    InvalidSize { size: usize, max: usize },
    #[error("Relation over {size} elements cannot have {found} cells")]
    CellCount { size: usize, found: usize },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Closure computation cancelled: {0}")]
    Cancelled(Cancelled),
}

impl From<Cancelled> for RelationError {
    fn from(value: Cancelled) -> Self {
        RelationError::Cancelled(value)
    }
}
