use thiserror::Error;

/// Errors for sample and cell coordinate access.
///
/// There is one kind: an index outside the valid range. It is a caller
/// mistake, never retried. `max_x`/`max_y` are the inclusive upper bounds of
/// the range that was violated (the vertex lattice for sample access, the
/// cell grid for cell access).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("coordinate ({x}, {y}) out of range; valid range is [0, {max_x}] x [0, {max_y}]")]
    OutOfRange {
        x: usize,
        y: usize,
        max_x: usize,
        max_y: usize,
    },
}

/// Type alias for Results using GridError
pub type Result<T> = std::result::Result<T, GridError>;
