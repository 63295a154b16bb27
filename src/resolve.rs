use std::borrow::Cow;

use serde_json::Value;

use crate::{EvalError, Path, ProjectionMode};

/// Outcome of walking a path through a cart.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Resolved<'a> {
    /// Every segment was an own field; points into the cart.
    Field(&'a Value),
    /// The last segment named a value derived from the cart, such as the
    /// length of a sequence.
    Derived(Value),
    /// A segment was projected over a sequence of records.
    Projected(Vec<Value>),
}

impl<'a> Resolved<'a> {
    pub(crate) fn into_value(self) -> Cow<'a, Value> {
        match self {
            Resolved::Field(v) => Cow::Borrowed(v),
            Resolved::Derived(v) => Cow::Owned(v),
            Resolved::Projected(values) => Cow::Owned(Value::Array(values)),
        }
    }
}

/// Resolve `path` against `subject`.
///
/// Each segment is first looked up as an own field (a mapping key, a
/// canonical index into a sequence, or a sequence's `length`). If that fails and the subject is a
/// sequence, the segment is projected over its elements and resolution stops.
pub(crate) fn resolve<'a>(
    subject: &'a Value,
    path: &Path,
    mode: ProjectionMode,
) -> Result<Resolved<'a>, EvalError> {
    walk(subject, path.segments(), mode).map_err(|segment| EvalError::Resolution {
        path: path.as_str().to_owned(),
        segment: segment.to_owned(),
    })
}

/// Returns the segment that could not be resolved on failure.
fn walk<'a, 's>(
    mut subject: &'a Value,
    segments: &'s [String],
    mode: ProjectionMode,
) -> Result<Resolved<'a>, &'s str> {
    for (i, segment) in segments.iter().enumerate() {
        match own_field(subject, segment) {
            Some(Cow::Borrowed(next)) => {
                subject = next;
                continue;
            }
            // Derived values are numbers, which have no fields of their own.
            Some(Cow::Owned(value)) => {
                return match segments.get(i + 1) {
                    None => Ok(Resolved::Derived(value)),
                    Some(next) => Err(next.as_str()),
                };
            }
            None => {}
        }
        let Value::Array(items) = subject else {
            return Err(segment.as_str());
        };
        let rest = &segments[i + 1..];
        return Ok(Resolved::Projected(project(items, segment, rest, mode)));
    }
    Ok(Resolved::Field(subject))
}

fn project(items: &[Value], segment: &str, rest: &[String], mode: ProjectionMode) -> Vec<Value> {
    match mode {
        ProjectionMode::Shallow => items
            .iter()
            .map(|item| own_field(item, segment).map_or(Value::Null, Cow::into_owned))
            .collect(),
        ProjectionMode::Deep => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                let Some(field) = own_field(item, segment) else {
                    out.push(Value::Null);
                    continue;
                };
                if rest.is_empty() {
                    out.push(field.into_owned());
                    continue;
                }
                match walk(&field, rest, mode) {
                    Ok(Resolved::Field(v)) => out.push(v.clone()),
                    Ok(Resolved::Derived(v)) => out.push(v),
                    Ok(Resolved::Projected(values)) => out.extend(values),
                    Err(_) => out.push(Value::Null),
                }
            }
            out
        }
    }
}

fn own_field<'a>(subject: &'a Value, segment: &str) -> Option<Cow<'a, Value>> {
    match subject {
        Value::Object(map) => map.get(segment).map(Cow::Borrowed),
        Value::Array(items) if segment == "length" => Some(Cow::Owned(items.len().into())),
        Value::Array(items) => index(segment).and_then(|i| items.get(i)).map(Cow::Borrowed),
        _ => None,
    }
}

/// Canonical decimal index: `"0"`, `"12"`, but not `"01"` or `"+1"`.
fn index(segment: &str) -> Option<usize> {
    let canonical = segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical {
        segment.parse().ok()
    } else {
        None
    }
}
