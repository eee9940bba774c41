//! Cookie pairs and cookie-header folding.
//!
//! The renderer never manages a jar; cookies arrive as plain name/value
//! pairs and leave as a single folded `cookie` header value.

use serde::{Deserialize, Serialize};

/// A cookie as it appears in a request description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookiePair {
    /// Cookie name.
    pub name: String,
    /// Cookie value.
    pub value: String,
}

impl CookiePair {
    /// Creates a cookie pair.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Folds cookie pairs into one `cookie` header value: `name=value` joined
/// by `"; "`, input order preserved. Returns `None` for an empty list.
#[must_use]
pub fn fold_cookies(cookies: &[CookiePair]) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }
    Some(
        cookies
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn folds_in_input_order() {
        let cookies = [CookiePair::new("foo", "bar"), CookiePair::new("bar", "baz")];
        assert_eq!(fold_cookies(&cookies).as_deref(), Some("foo=bar; bar=baz"));
    }

    #[test]
    fn empty_list_folds_to_none() {
        assert_eq!(fold_cookies(&[]), None);
    }

    #[test]
    fn single_cookie_has_no_separator() {
        let cookies = [CookiePair::new("session", "abc123")];
        assert_eq!(fold_cookies(&cookies).as_deref(), Some("session=abc123"));
    }
}
