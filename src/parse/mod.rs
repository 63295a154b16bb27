mod error;
mod grammar;

pub use error::ParseError;

/// Split a dotted field path such as `"items.0.price"` into its segments.
///
/// # Errors
///
/// Returns [`ParseError`] if the path is empty or contains an empty segment
/// (`"a..b"`, `".a"`, `"a."`).
pub fn parse_path(input: &str) -> Result<Vec<String>, ParseError> {
    use winnow::Parser;
    grammar::path
        .parse(input)
        .map_err(|e| ParseError::new(e.to_string()))
}
