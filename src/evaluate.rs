use serde_json::Value;

use crate::resolve::resolve;
use crate::types::value::{compare, contains, loose_eq, strict_eq};
use crate::{Criteria, Criterion, Eligibility, EvalError, ProjectionMode, Rejection};

/// AND-fold over the criteria keys, in order, stopping at the first key that
/// does not hold.
pub(crate) fn evaluate(cart: &Value, criteria: &Criteria, mode: ProjectionMode) -> Eligibility {
    let mut satisfied = Vec::with_capacity(criteria.len());

    for (path, criterion) in criteria.iter() {
        let key = path.as_str();
        let outcome = resolve(cart, path, mode)
            .and_then(|resolved| check(&resolved.into_value(), criterion));

        match outcome {
            Ok(true) => {
                tracing::trace!(key, "criterion satisfied");
                satisfied.push(key.to_owned());
            }
            Ok(false) => {
                tracing::debug!(key, "criterion not satisfied");
                let rejection = Rejection::Unsatisfied {
                    key: key.to_owned(),
                };
                return Eligibility::new(satisfied, Some(rejection));
            }
            Err(error) => {
                tracing::warn!(key, %error, "criterion evaluation failed");
                let rejection = Rejection::Failed {
                    key: key.to_owned(),
                    error,
                };
                return Eligibility::new(satisfied, Some(rejection));
            }
        }
    }

    Eligibility::new(satisfied, None)
}

/// Test a resolved field value against one criterion node.
pub(crate) fn check(field: &Value, criterion: &Criterion) -> Result<bool, EvalError> {
    match criterion {
        Criterion::Scalar(expected) => match field {
            Value::Array(items) => Ok(items.iter().any(|item| strict_eq(item, expected))),
            Value::Object(_) => Err(EvalError::MappingMembership),
            scalar => Ok(loose_eq(scalar, expected)),
        },
        Criterion::Compare { op, operand } => Ok(compare(field, *op, operand).unwrap_or(false)),
        Criterion::And(children) => {
            for child in children {
                if !check(field, child)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Criterion::Or(children) => {
            for child in children {
                if check(field, child)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        Criterion::In(allowed) => Ok(match field {
            Value::Array(items) => items.iter().any(|item| contains(allowed, item)),
            other => contains(allowed, other),
        }),
    }
}
