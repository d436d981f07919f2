//! Matching custom-order tokens against entry names

use regex::Regex;

/// A compiled custom-order token.
///
/// Tokens without `*` match one name exactly. In a wildcard token each `*`
/// matches any run of characters (including none) and every other character
/// is literal; the whole name must match.
#[derive(Debug, Clone)]
pub enum TokenMatcher {
    Exact(String),
    Wildcard { token: String, regex: Regex },
}

impl TokenMatcher {
    pub fn new(token: &str) -> Self {
        if !token.contains('*') {
            return Self::Exact(token.to_string());
        }

        match Regex::new(&wildcard_pattern(token)) {
            Ok(regex) => Self::Wildcard {
                token: token.to_string(),
                regex,
            },
            Err(e) => {
                tracing::warn!(token, error = %e, "Wildcard token did not compile, matching exactly");
                Self::Exact(token.to_string())
            }
        }
    }

    pub fn token(&self) -> &str {
        match self {
            Self::Exact(token) | Self::Wildcard { token, .. } => token,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard { .. })
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Exact(token) => token == name,
            Self::Wildcard { token, regex } => token == name || regex.is_match(name),
        }
    }
}

/// Anchored regex for a wildcard token.
///
/// Only `*` is special: every other character, regex metacharacters
/// included, matches itself literally. `a+b*` therefore matches `a+b.txt`
/// and not `aab.txt`.
fn wildcard_pattern(token: &str) -> String {
    let body = token
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    format!("(?s)^{body}$")
}
