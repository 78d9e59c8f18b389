//! Filter options and query-string encoding for list and statistics endpoints.

use std::collections::BTreeMap;
use url::form_urlencoded;

/// Open-ended filter options appended to a request's query string.
///
/// Keys are passed to Postmark verbatim and values are stringified with
/// [`ToString`]. Nothing is validated client-side: a misspelled key only
/// shows up in whatever Postmark answers. Entries are kept sorted by key.
///
/// ```
/// use postmark_client::QueryOptions;
///
/// let options = QueryOptions::new()
///     .with("tag", "Invitation")
///     .with("fromdate", "2024-01-01");
/// assert_eq!(options.get("tag"), Some("Invitation"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    params: BTreeMap<String, String>,
}

impl QueryOptions {
    /// Create an empty set of options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option, consuming and returning `self`.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace an option in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.params.insert(key.into(), value.to_string());
        self
    }

    /// Look up the stringified value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Number of options set.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether no option is set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryOptions
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        options.extend(iter);
        options
    }
}

impl<K, V> Extend<(K, V)> for QueryOptions
where
    K: Into<String>,
    V: ToString,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// `path?count=..&offset=..&<options>`
pub(crate) fn paged_path(path: &str, count: i64, offset: i64, options: &QueryOptions) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("count", &count.to_string())
        .append_pair("offset", &offset.to_string())
        .extend_pairs(options.iter());
    format!("{path}?{}", query.finish())
}

/// `path?<options>`, or the bare path when there are no options.
pub(crate) fn filtered_path(path: &str, options: &QueryOptions) -> String {
    if options.is_empty() {
        return path.to_string();
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(options.iter())
        .finish();
    format!("{path}?{query}")
}
