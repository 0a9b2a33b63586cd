//! Shared pieces of the list-filter contract.
//!
//! List endpoints receive raw `(key, value)` pairs straight from the query
//! string. Each resource declares the keys it understands; anything else is
//! rejected instead of being silently ignored. Empty values count as absent.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("query.unknown_parameter")]
    UnknownParameter(String),
    #[error("query.invalid_value")]
    InvalidValue(String),
}

impl QueryError {
    /// The offending query key.
    pub fn key(&self) -> &str {
        match self {
            QueryError::UnknownParameter(key) | QueryError::InvalidValue(key) => key,
        }
    }
}

/// Case-insensitive substring match used by every `*_contains` filter.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Normalizes raw query pairs. Blank values come back as `None` so callers
/// still see the key and can reject it when unknown.
pub fn query_pairs<I, K, V>(pairs: I) -> impl Iterator<Item = (String, Option<String>)>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs.into_iter().map(|(k, v)| {
        let value: String = v.into();
        let value = (!value.trim().is_empty()).then_some(value);
        (k.into(), value)
    })
}
