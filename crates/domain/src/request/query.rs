//! Query parameter types

use serde::{Deserialize, Serialize};

/// A single query key/value pair. Values are carried verbatim; no encoding
/// or decoding happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    /// The parameter key.
    pub key: String,
    /// The parameter value.
    pub value: String,
}

impl QueryParam {
    /// Creates a query parameter.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An ordered query parameter list. Duplicate keys are allowed and their
/// relative order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryString {
    items: Vec<QueryParam>,
}

impl QueryString {
    /// Creates an empty query string.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends a parameter, keeping input order.
    pub fn add(&mut self, param: QueryParam) {
        self.items.push(param);
    }

    /// Returns all parameters in input order.
    #[must_use]
    pub fn all(&self) -> &[QueryParam] {
        &self.items
    }

    /// Renders the parameters as a literal `k=v&k=v` string, order and
    /// duplicate keys untouched.
    #[must_use]
    pub fn to_literal(&self) -> String {
        self.items
            .iter()
            .map(|p| format!("{}={}", p.key, p.value))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<QueryParam> for QueryString {
    fn from_iter<T: IntoIterator<Item = QueryParam>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
