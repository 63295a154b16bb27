pub(crate) mod criteria;
mod criterion;
mod eligibility;
mod error;
mod evaluator;
mod options;
mod path;
pub(crate) mod value;

pub use criteria::Criteria;
pub use criterion::{CompareOp, Criterion, Operator};
pub use eligibility::{Eligibility, Rejection};
pub use error::{CriteriaError, EvalError};
pub use evaluator::{Evaluator, EvaluatorBuilder};
pub use options::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_PATH_SEGMENTS, Options, ProjectionMode};
pub use path::Path;
