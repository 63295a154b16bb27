use serde_json::Value;

use crate::types::criteria::Entry;
use crate::types::value::is_scalar;
use crate::{CompareOp, Criteria, CriteriaError, Criterion, EvalError, Operator, Options, Path};

pub(crate) fn compile(raw: &Value, options: &Options) -> Result<Criteria, CriteriaError> {
    let Value::Object(map) = raw else {
        return Err(CriteriaError::NotAMapping);
    };

    let mut entries = Vec::with_capacity(map.len());
    for (key, node) in map {
        let path = Path::parse(key).map_err(|e| CriteriaError::at(key, e))?;
        if path.len() > options.max_path_segments {
            return Err(CriteriaError::at(
                key,
                EvalError::PathTooLong {
                    segments: path.len(),
                    limit: options.max_path_segments,
                },
            ));
        }
        let criterion =
            parse_criterion(node, options.max_depth).map_err(|e| CriteriaError::at(key, e))?;
        entries.push(Entry { path, criterion });
    }

    Ok(Criteria::new(entries))
}

/// Parse one raw criterion node: a scalar, or an object with exactly one operator key.
pub(crate) fn parse_criterion(node: &Value, max_depth: usize) -> Result<Criterion, EvalError> {
    match node {
        Value::Null => Err(EvalError::NullCriterion),
        Value::Array(_) => Err(EvalError::SequenceCriterion),
        Value::Object(map) => {
            let mut keys = map.iter();
            match (keys.next(), keys.next()) {
                (Some((key, operand)), None) => parse_operator(key, operand, 0, max_depth),
                _ => Err(EvalError::MalformedCriterion { found: map.len() }),
            }
        }
        scalar => Ok(Criterion::Scalar(scalar.clone())),
    }
}

fn parse_operator(
    key: &str,
    operand: &Value,
    depth: usize,
    max_depth: usize,
) -> Result<Criterion, EvalError> {
    if depth > max_depth {
        return Err(EvalError::DepthExceeded { limit: max_depth });
    }

    let operator: Operator = key.parse()?;
    match operator {
        Operator::Gt => comparison(CompareOp::Gt, operator, operand),
        Operator::Gte => comparison(CompareOp::Gte, operator, operand),
        Operator::Lt => comparison(CompareOp::Lt, operator, operand),
        Operator::Lte => comparison(CompareOp::Lte, operator, operand),
        Operator::And | Operator::Or => {
            let Value::Object(branches) = operand else {
                return Err(EvalError::InvalidOperand {
                    operator,
                    expected: "a mapping of operators to operands",
                });
            };
            let children = branches
                .iter()
                .map(|(k, v)| parse_operator(k, v, depth + 1, max_depth))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(if operator == Operator::And {
                Criterion::And(children)
            } else {
                Criterion::Or(children)
            })
        }
        Operator::In => match operand {
            Value::Array(allowed) => Ok(Criterion::In(allowed.clone())),
            _ => Err(EvalError::InvalidOperand {
                operator,
                expected: "a sequence",
            }),
        },
    }
}

fn comparison(op: CompareOp, operator: Operator, operand: &Value) -> Result<Criterion, EvalError> {
    if operand.is_null() || !is_scalar(operand) {
        return Err(EvalError::InvalidOperand {
            operator,
            expected: "a number, string or boolean",
        });
    }
    Ok(Criterion::Compare {
        op,
        operand: operand.clone(),
    })
}
