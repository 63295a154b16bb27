use serde::{Deserialize, Serialize};

/// Default ceiling on `and`/`or` nesting inside a single criterion.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Default ceiling on the number of segments in a criteria path.
pub const DEFAULT_MAX_PATH_SEGMENTS: usize = 64;

/// How a path continues once it reaches a sequence of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    /// Project the next segment over every element and stop there; any
    /// segments after it are ignored.
    #[default]
    Shallow,
    /// Apply every remaining segment to each element, flattening nested
    /// projections one level. Elements that do not resolve become `null`.
    Deep,
}

/// Evaluation settings. Deserializes from a partial JSON object; missing
/// fields take their defaults.
///
/// ```
/// use eligo::{Options, ProjectionMode};
///
/// let options: Options = serde_json::from_str(r#"{"projection": "deep"}"#).unwrap();
/// assert_eq!(options.projection, ProjectionMode::Deep);
/// assert_eq!(options.max_depth, eligo::DEFAULT_MAX_DEPTH);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    pub projection: ProjectionMode,
    /// Maximum `and`/`or` nesting depth accepted when compiling criteria.
    pub max_depth: usize,
    /// Maximum number of segments accepted in a criteria path.
    pub max_path_segments: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            projection: ProjectionMode::Shallow,
            max_depth: DEFAULT_MAX_DEPTH,
            max_path_segments: DEFAULT_MAX_PATH_SEGMENTS,
        }
    }
}
