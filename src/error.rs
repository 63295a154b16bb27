use thiserror::Error;

use crate::CriteriaError;

/// Unified error type covering compilation, JSON decoding, and I/O.
///
/// Returned by convenience constructors like [`Criteria::from_json()`](crate::Criteria::from_json)
/// and [`Criteria::from_file()`](crate::Criteria::from_file).
#[derive(Debug, Error)]
pub enum EligoError {
    #[error(transparent)]
    Criteria(#[from] CriteriaError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
