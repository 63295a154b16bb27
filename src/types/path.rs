use std::fmt;
use std::str::FromStr;

use super::error::EvalError;

/// A validated dotted field path such as `"items.price"`.
///
/// Always holds at least one segment, and no segment is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    raw: String,
    segments: Vec<String>,
}

impl Path {
    /// Parse a dotted path.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::InvalidPath`] if the path or one of its segments is empty.
    pub fn parse(raw: &str) -> Result<Self, EvalError> {
        let segments = crate::parse::parse_path(raw).map_err(|source| EvalError::InvalidPath {
            path: raw.to_owned(),
            source,
        })?;
        Ok(Self {
            raw: raw.to_owned(),
            segments,
        })
    }

    /// The path exactly as written in the criteria.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments. Never zero.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

impl FromStr for Path {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
