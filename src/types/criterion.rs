use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use super::error::EvalError;

/// Ordinal comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Gt,
    Gte,
    Lt,
    Lte,
}

impl CompareOp {
    /// Whether `field <op> operand` holds given the ordering of `field` relative to `operand`.
    #[must_use]
    pub fn holds(self, ord: Ordering) -> bool {
        match self {
            CompareOp::Gt => ord == Ordering::Greater,
            CompareOp::Gte => ord != Ordering::Less,
            CompareOp::Lt => ord == Ordering::Less,
            CompareOp::Lte => ord != Ordering::Greater,
        }
    }

    fn operator(self) -> Operator {
        match self {
            CompareOp::Gt => Operator::Gt,
            CompareOp::Gte => Operator::Gte,
            CompareOp::Lt => Operator::Lt,
            CompareOp::Lte => Operator::Lte,
        }
    }
}

/// Every key accepted in an operator object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Gt,
    Lt,
    Gte,
    Lte,
    And,
    Or,
    In,
}

impl Operator {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Gt => "gt",
            Operator::Lt => "lt",
            Operator::Gte => "gte",
            Operator::Lte => "lte",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::In => "in",
        }
    }
}

impl FromStr for Operator {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gt" => Ok(Operator::Gt),
            "lt" => Ok(Operator::Lt),
            "gte" => Ok(Operator::Gte),
            "lte" => Ok(Operator::Lte),
            "and" => Ok(Operator::And),
            "or" => Ok(Operator::Or),
            "in" => Ok(Operator::In),
            other => Err(EvalError::UnknownOperator {
                operator: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operator().as_str())
    }
}

/// A single condition node, parsed once from its raw JSON shape.
///
/// Produced by [`Criteria`](super::Criteria) compilation; `and`/`or` operands
/// are expanded into one child per operator key, each tested against the same
/// field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// A bare scalar. Loose equality against a scalar field, membership
    /// against a sequence field.
    Scalar(Value),
    Compare {
        op: CompareOp,
        operand: Value,
    },
    And(Vec<Criterion>),
    Or(Vec<Criterion>),
    /// Allowed values; a sequence field passes if any element is allowed.
    In(Vec<Value>),
}

impl Criterion {
    #[must_use]
    pub fn and(children: Vec<Criterion>) -> Criterion {
        Criterion::And(children)
    }

    #[must_use]
    pub fn or(children: Vec<Criterion>) -> Criterion {
        Criterion::Or(children)
    }

    #[must_use]
    pub fn compare(op: CompareOp, operand: impl Into<Value>) -> Criterion {
        Criterion::Compare {
            op,
            operand: operand.into(),
        }
    }

    /// Render this node back into the raw JSON shape it is compiled from.
    ///
    /// `and`/`or` children sharing an operator key collapse into one entry,
    /// since a JSON mapping cannot repeat keys.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Criterion::Scalar(v) => v.clone(),
            Criterion::Compare { op, operand } => single(op.operator(), operand.clone()),
            Criterion::And(children) => single(Operator::And, branches(children)),
            Criterion::Or(children) => single(Operator::Or, branches(children)),
            Criterion::In(allowed) => single(Operator::In, Value::Array(allowed.clone())),
        }
    }
}

fn single(op: Operator, operand: Value) -> Value {
    let mut map = Map::with_capacity(1);
    map.insert(op.as_str().to_owned(), operand);
    Value::Object(map)
}

fn branches(children: &[Criterion]) -> Value {
    let mut map = Map::with_capacity(children.len());
    for child in children {
        if let Value::Object(entry) = child.to_value() {
            map.extend(entry);
        }
    }
    Value::Object(map)
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn operator_round_trips_through_str() {
        for op in [
            Operator::Gt,
            Operator::Lt,
            Operator::Gte,
            Operator::Lte,
            Operator::And,
            Operator::Or,
            Operator::In,
        ] {
            assert_eq!(op.as_str().parse::<Operator>(), Ok(op));
        }
    }

    #[test]
    fn unknown_operator_is_an_error() {
        assert_eq!(
            "neq".parse::<Operator>(),
            Err(EvalError::UnknownOperator {
                operator: "neq".into()
            })
        );
    }

    #[test]
    fn operators_are_case_sensitive() {
        assert!("GT".parse::<Operator>().is_err());
    }

    #[test]
    fn compare_op_holds() {
        assert!(CompareOp::Gt.holds(Ordering::Greater));
        assert!(!CompareOp::Gt.holds(Ordering::Equal));
        assert!(CompareOp::Gte.holds(Ordering::Equal));
        assert!(!CompareOp::Gte.holds(Ordering::Less));
        assert!(CompareOp::Lt.holds(Ordering::Less));
        assert!(!CompareOp::Lt.holds(Ordering::Equal));
        assert!(CompareOp::Lte.holds(Ordering::Equal));
        assert!(!CompareOp::Lte.holds(Ordering::Greater));
    }

    #[test]
    fn to_value_renders_operator_objects() {
        let c = Criterion::and(vec![
            Criterion::compare(CompareOp::Gt, 10),
            Criterion::compare(CompareOp::Lt, 100),
        ]);
        assert_eq!(c.to_value(), json!({"and": {"gt": 10, "lt": 100}}));
        assert_eq!(
            Criterion::In(vec![json!("x"), json!("y")]).to_value(),
            json!({"in": ["x", "y"]})
        );
        assert_eq!(Criterion::Scalar(json!(5)).to_value(), json!(5));
    }

    #[test]
    fn display_uses_json() {
        let c = Criterion::or(vec![Criterion::compare(CompareOp::Lte, 3)]);
        assert_eq!(c.to_string(), r#"{"or":{"lte":3}}"#);
    }
}
