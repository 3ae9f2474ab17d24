use thiserror::Error;

/// Argument-validation errors of the linear algebra helpers. Every check runs
/// before any computation or mutation, so a returned error means the inputs
/// were left untouched and no partial result exists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinAlgError {
    #[error("conflicting arguments: {0}")]
    ArgumentConflict(String),
    #[error("bad shape: {0}")]
    Shape(String),
    #[error("singular matrix: zero value on diagonal at row {row}")]
    Singular { row: usize },
    #[error("non-triangular matrix: entry ({row}, {col}) = {value} above the diagonal")]
    NonTriangular { row: usize, col: usize, value: f64 },
    #[error("invalid loop option: '{0}'")]
    UnknownStrategy(String),
}
