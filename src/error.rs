use thiserror::Error;

/// Result alias for `medoid`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by clustering, initialization and evaluation routines.
///
/// Every variant is a configuration error: it is reported before the first
/// round runs, so no partial result is ever produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input was empty.
    #[error("empty input provided")]
    EmptyInput,

    /// Point dimensionality differs within a dataset, or from the fitted data.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// A distance-matrix row does not have one entry per item.
    #[error("distance matrix row {row} has {found} entries, expected {expected}")]
    NotSquare {
        /// Offending row.
        row: usize,
        /// Expected row width (the number of rows).
        expected: usize,
        /// Actual row width.
        found: usize,
    },

    /// A distance-matrix entry is negative, NaN or infinite.
    #[error("distance matrix entry ({row}, {col}) is {value}, expected a finite non-negative value")]
    InvalidDistance {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
        /// Offending value.
        value: f64,
    },

    /// Shape mismatch (string description).
    #[error("shape mismatch: expected {expected}, actual {actual}")]
    ShapeMismatch {
        /// Expected shape description.
        expected: String,
        /// Actual shape description.
        actual: String,
    },

    /// Invalid number of clusters requested.
    #[error("cannot create {requested} clusters from {n_items} items")]
    InvalidClusterCount {
        /// Requested count.
        requested: usize,
        /// Number of items.
        n_items: usize,
    },

    /// A medoid index does not name an item of the dataset.
    #[error("medoid index {index} out of range for {n_items} items")]
    MedoidOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of items.
        n_items: usize,
    },

    /// The same index appears twice in a medoid sequence.
    #[error("duplicate medoid index {index}")]
    DuplicateMedoid {
        /// Repeated index.
        index: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },
}
