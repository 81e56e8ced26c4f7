use thiserror::Error;

/// Recoverable validation failures on the grid's write paths.
///
/// The grid is left untouched whenever one of these is returned; the
/// caller may retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("matrix is {found_rows}x{found_cols}, grid is {rows}x{cols}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        found_rows: usize,
        found_cols: usize,
    },

    #[error("code {code} at ({row}, {col}) is not in the identity codebook")]
    UnknownIdentityCode { code: u8, row: usize, col: usize },

    #[error("({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}
