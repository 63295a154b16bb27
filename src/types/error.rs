use thiserror::Error;

use super::criterion::Operator;
use crate::parse::ParseError;

/// Why a single criteria key could not be compiled or tested.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("path '{path}' does not resolve: segment '{segment}' is absent and the subject is not a sequence")]
    Resolution { path: String, segment: String },

    #[error("operator object must have exactly one key, found {found}")]
    MalformedCriterion { found: usize },

    #[error("unknown operator '{operator}'")]
    UnknownOperator { operator: String },

    #[error("operand of '{operator}' must be {expected}")]
    InvalidOperand {
        operator: Operator,
        expected: &'static str,
    },

    #[error("a sequence is not a valid criterion; use the 'in' operator")]
    SequenceCriterion,

    #[error("null is not a valid criterion")]
    NullCriterion,

    #[error("cannot test a scalar criterion against a mapping field")]
    MappingMembership,

    #[error("criterion nesting exceeds the maximum depth of {limit}")]
    DepthExceeded { limit: usize },

    #[error("path has {segments} segments, more than the maximum of {limit}")]
    PathTooLong { segments: usize, limit: usize },

    #[error("invalid path '{path}': {source}")]
    InvalidPath { path: String, source: ParseError },
}

/// Raised when raw criteria cannot be compiled into [`Criteria`](super::Criteria).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    #[error("criteria must be a mapping of paths to criteria")]
    NotAMapping,

    #[error("invalid criterion at '{key}': {error}")]
    InvalidKey {
        key: String,
        #[source]
        error: EvalError,
    },
}

impl CriteriaError {
    pub(crate) fn at(key: &str, error: EvalError) -> Self {
        CriteriaError::InvalidKey {
            key: key.to_owned(),
            error,
        }
    }

    /// The criteria key that failed to compile, if the failure is tied to one.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            CriteriaError::NotAMapping => None,
            CriteriaError::InvalidKey { key, .. } => Some(key.as_str()),
        }
    }
}
