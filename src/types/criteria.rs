use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::criterion::Criterion;
use super::error::CriteriaError;
use super::options::Options;
use super::path::Path;

/// A compiled criteria key: the parsed path and the condition it must meet.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Entry {
    pub(crate) path: Path,
    pub(crate) criterion: Criterion,
}

/// Compiled, immutable criteria. Keys keep the order they were written in.
///
/// Safe to share across threads and to evaluate against any number of carts.
///
/// # Example
///
/// ```
/// use eligo::{Criteria, Evaluator};
/// use serde_json::json;
///
/// let criteria = Criteria::from_json(r#"{"total": {"gte": 50}, "items.sku": "gift-card"}"#).unwrap();
/// let cart = json!({"total": 80, "items": [{"sku": "mug"}, {"sku": "gift-card"}]});
/// assert!(Evaluator::new().is_eligible_compiled(&cart, &criteria));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "Value")]
pub struct Criteria {
    entries: Vec<Entry>,
}

impl Criteria {
    pub(crate) fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Compile raw criteria with the default [`Options`].
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError`] if the value is not a mapping, or a key holds
    /// an invalid path or a malformed criterion.
    pub fn from_value(raw: &Value) -> Result<Self, CriteriaError> {
        crate::compile::compile(raw, &Options::default())
    }

    /// Parse a JSON document and compile it.
    ///
    /// # Errors
    ///
    /// Returns [`EligoError`](crate::EligoError) on JSON syntax or compile failure.
    pub fn from_json(input: &str) -> Result<Self, crate::EligoError> {
        let raw: Value = serde_json::from_str(input)?;
        Ok(Self::from_value(&raw)?)
    }

    /// Read a JSON file and compile it.
    ///
    /// # Errors
    ///
    /// Returns [`EligoError`](crate::EligoError) on I/O, JSON, or compile failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::EligoError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_json(&input)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(path, criterion)` pairs in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &Criterion)> {
        self.entries.iter().map(|e| (&e.path, &e.criterion))
    }

    /// The criteria keys in evaluation order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.path.as_str()).collect()
    }

    /// Look up the criterion for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Criterion> {
        self.entries
            .iter()
            .find(|e| e.path.as_str() == key)
            .map(|e| &e.criterion)
    }

    /// Render back into the raw JSON shape.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|e| (e.path.as_str().to_owned(), e.criterion.to_value()))
            .collect();
        Value::Object(map)
    }
}

impl TryFrom<Value> for Criteria {
    type Error = CriteriaError;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        Self::from_value(&raw)
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Criteria({} keys)", self.entries.len())
    }
}
