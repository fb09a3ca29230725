use thiserror::Error;

/// Errors raised by grid access and generation stepping.
///
/// All of them signal a caller contract violation; none is worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("expected a {}x{} grid, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    #[error("density {0} must be between 0.0 and 1.0")]
    InvalidDensity(f64),
}
