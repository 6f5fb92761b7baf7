/// Error type for numdiff-nn
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A matrix was requested with zero rows or zero columns.
    #[error("cannot create matrix with zero dimension: {rows} x {cols}")]
    InvalidShape { rows: usize, cols: usize },

    /// An element index lies outside the matrix.
    #[error("cannot access element at ({row}, {col}) in {rows} x {cols} matrix")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Operand dimensions are incompatible for `op`.
    #[error("cannot {op} {lhs:?} and {rhs:?}")]
    ShapeMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// A zero-length row was appended.
    #[error("cannot append an empty row")]
    EmptyRow,

    /// The training table's column count is not `inputs + outputs`.
    #[error("training data has {got} columns, but the network expects {expected}")]
    DatasetShapeMismatch { expected: usize, got: usize },

    /// An input row does not have the network's input width.
    #[error("input must be a 1 x {expected} matrix, but got {got:?}")]
    InputShapeMismatch { expected: usize, got: (usize, usize) },

    /// The network has no layers to evaluate or train.
    #[error("network has no layers")]
    NoLayers,

    /// Writing a report to the output sink failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The training thread panicked.
    #[error("training thread failed")]
    ThreadErr,
}

pub type Result<T> = std::result::Result<T, Error>;
