//! Decide whether a JSON record (a "cart") satisfies a nested set of
//! declarative criteria.
//!
//! Criteria map dotted paths into the cart to condition nodes: a bare scalar
//! (equality, or membership when the field is a sequence), or an object with a
//! single operator key among `gt`, `lt`, `gte`, `lte`, `and`, `or`, `in`.
//! Every key must hold for the cart to be eligible.
//!
//! ```
//! use serde_json::json;
//!
//! let cart = json!({
//!     "customer": {"tier": "gold"},
//!     "items": [{"price": 30, "sku": "mug"}, {"price": 45, "sku": "tea"}],
//!     "total": 75,
//! });
//! let criteria = json!({
//!     "customer.tier": {"in": ["gold", "platinum"]},
//!     "total": {"and": {"gte": 50, "lt": 500}},
//!     "items.sku": "tea",
//! });
//!
//! assert!(eligo::is_eligible(&cart, &criteria));
//! ```

mod compile;
mod error;
mod evaluate;
pub mod parse;
mod resolve;
mod types;

pub use error::EligoError;
pub use types::{
    CompareOp, Criteria, CriteriaError, Criterion, DEFAULT_MAX_DEPTH, DEFAULT_MAX_PATH_SEGMENTS,
    Eligibility, EvalError, Evaluator, EvaluatorBuilder, Operator, Options, Path, ProjectionMode,
    Rejection,
};

/// `true` iff `cart` satisfies every key of `criteria`, using default [`Options`].
///
/// Never panics and never fails: malformed criteria and unresolvable paths
/// make the cart ineligible. Use [`Evaluator::evaluate()`] to learn why.
#[must_use]
pub fn is_eligible(cart: &serde_json::Value, criteria: &serde_json::Value) -> bool {
    Evaluator::new().is_eligible(cart, criteria)
}
