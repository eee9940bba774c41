//! HTTP header types

use serde::{Deserialize, Serialize};

/// A single name/value header pair. Case of the name is preserved as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// The header name (e.g. "Content-Type").
    pub name: String,
    /// The header value.
    pub value: String,
}

impl Header {
    /// Creates a header pair.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An ordered header list. Duplicate names are allowed and order is
/// significant; lookups compare names case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headers {
    items: Vec<Header>,
}

impl Headers {
    /// Creates an empty header list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends a header, keeping input order.
    pub fn add(&mut self, header: Header) {
        self.items.push(header);
    }

    /// Returns all headers in input order.
    #[must_use]
    pub fn all(&self) -> &[Header] {
        &self.items
    }

    /// Returns an iterator over the headers in input order.
    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.items.iter()
    }

    /// Finds the first header with the given name, ignoring ASCII case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Header> {
        self.items
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
    }

    /// Whether a header with the given name is present, ignoring ASCII case.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of headers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Header> for Headers {
    fn from_iter<T: IntoIterator<Item = Header>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a Header;
    type IntoIter = std::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
