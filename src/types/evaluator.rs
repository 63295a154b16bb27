use serde_json::Value;

use super::criteria::Criteria;
use super::eligibility::{Eligibility, Rejection};
use super::error::CriteriaError;
use super::options::{Options, ProjectionMode};

/// Decides whether carts satisfy criteria.
///
/// Holds only [`Options`]; cheap to clone and safe to share across threads.
///
/// # Example
///
/// ```
/// use eligo::{Evaluator, ProjectionMode};
/// use serde_json::json;
///
/// let evaluator = Evaluator::builder()
///     .projection(ProjectionMode::Deep)
///     .max_depth(8)
///     .build();
///
/// let cart = json!({"items": [{"product": {"sku": "a"}}, {"product": {"sku": "b"}}]});
/// assert!(evaluator.is_eligible(&cart, &json!({"items.product.sku": {"in": ["b"]}})));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    options: Options,
}

/// Builder for an [`Evaluator`], obtained from [`Evaluator::builder()`].
#[derive(Debug, Default)]
pub struct EvaluatorBuilder {
    options: Options,
}

impl EvaluatorBuilder {
    #[must_use]
    pub fn projection(mut self, mode: ProjectionMode) -> Self {
        self.options.projection = mode;
        self
    }

    /// Maximum `and`/`or` nesting accepted when compiling criteria.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = depth;
        self
    }

    /// Maximum number of segments accepted in a criteria path.
    #[must_use]
    pub fn max_path_segments(mut self, segments: usize) -> Self {
        self.options.max_path_segments = segments;
        self
    }

    #[must_use]
    pub fn build(self) -> Evaluator {
        Evaluator {
            options: self.options,
        }
    }
}

impl Evaluator {
    /// An evaluator with default [`Options`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::default()
    }

    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Compile raw criteria under this evaluator's limits.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError`] if the criteria are not a mapping, or any key
    /// holds an invalid path or malformed criterion.
    pub fn compile(&self, criteria: &Value) -> Result<Criteria, CriteriaError> {
        crate::compile::compile(criteria, &self.options)
    }

    /// `true` iff every criteria key holds for `cart`. Never fails: malformed
    /// criteria and unresolvable paths make the cart ineligible.
    #[must_use]
    pub fn is_eligible(&self, cart: &Value, criteria: &Value) -> bool {
        self.evaluate(cart, criteria).is_eligible()
    }

    /// Like [`is_eligible()`](Self::is_eligible), with the reason for any rejection.
    pub fn evaluate(&self, cart: &Value, criteria: &Value) -> Eligibility {
        match self.compile(criteria) {
            Ok(compiled) => self.evaluate_compiled(cart, &compiled),
            Err(err) => {
                tracing::warn!(error = %err, "criteria rejected");
                Eligibility::new(Vec::new(), Some(Rejection::Invalid(err)))
            }
        }
    }

    /// Evaluate pre-compiled criteria. Use this when the same criteria are
    /// checked against many carts.
    pub fn evaluate_compiled(&self, cart: &Value, criteria: &Criteria) -> Eligibility {
        crate::evaluate::evaluate(cart, criteria, self.options.projection)
    }

    #[must_use]
    pub fn is_eligible_compiled(&self, cart: &Value, criteria: &Criteria) -> bool {
        self.evaluate_compiled(cart, criteria).is_eligible()
    }
}
