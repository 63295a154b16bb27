use std::fmt;

use super::error::{CriteriaError, EvalError};

/// Why a cart was found ineligible.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// The value at `key` does not meet its criterion.
    Unsatisfied { key: String },
    /// The value at `key` could not be resolved or tested.
    Failed { key: String, error: EvalError },
    /// The criteria could not be compiled; no cart can pass them.
    Invalid(CriteriaError),
}

impl Rejection {
    /// The criteria key the rejection is attributed to, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Rejection::Unsatisfied { key } | Rejection::Failed { key, .. } => Some(key.as_str()),
            Rejection::Invalid(err) => err.key(),
        }
    }

    /// `true` when the rejection comes from an error rather than a genuine
    /// mismatch between the cart and the criteria.
    #[must_use]
    pub fn is_error(&self) -> bool {
        !matches!(self, Rejection::Unsatisfied { .. })
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Unsatisfied { key } => write!(f, "'{key}' not satisfied"),
            Rejection::Failed { key, error } => write!(f, "'{key}' failed: {error}"),
            Rejection::Invalid(err) => write!(f, "invalid criteria: {err}"),
        }
    }
}

/// Result of an eligibility check, returned by
/// [`Evaluator::evaluate()`](super::Evaluator::evaluate).
///
/// Carries the boolean outcome together with the keys that held (in
/// evaluation order) and, when ineligible, the reason evaluation stopped.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Eligibility {
    satisfied: Vec<String>,
    rejection: Option<Rejection>,
}

impl Eligibility {
    pub(crate) fn new(satisfied: Vec<String>, rejection: Option<Rejection>) -> Self {
        Self {
            satisfied,
            rejection,
        }
    }

    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.rejection.is_none()
    }

    /// Keys whose criterion held before evaluation finished or stopped.
    #[must_use]
    pub fn satisfied(&self) -> &[String] {
        &self.satisfied
    }

    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        self.rejection.as_ref()
    }

    /// The underlying error, when ineligibility was caused by one.
    #[must_use]
    pub fn error(&self) -> Option<&EvalError> {
        match self.rejection.as_ref()? {
            Rejection::Failed { error, .. }
            | Rejection::Invalid(CriteriaError::InvalidKey { error, .. }) => Some(error),
            Rejection::Unsatisfied { .. } | Rejection::Invalid(CriteriaError::NotAMapping) => None,
        }
    }
}

impl From<Eligibility> for bool {
    fn from(e: Eligibility) -> bool {
        e.is_eligible()
    }
}

impl fmt::Display for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rejection {
            None => write!(f, "eligible")?,
            Some(r) => write!(f, "ineligible: {r}")?,
        }
        write!(f, ", satisfied: [{}]", self.satisfied.join(", "))
    }
}
