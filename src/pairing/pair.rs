//! Canonical unordered developer pairs.

use serde::{Serialize, Serializer};

/// Two distinct developers, stored in lexicographic order.
///
/// `Pair::new("b", "a")` and `Pair::new("a", "b")` are the same key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair {
    first: String,
    second: String,
}

impl Pair {
    /// Builds the canonical pair, or `None` when both sides are the same developer.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Option<Self> {
        let (a, b) = (a.into(), b.into());
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self {
                first: a,
                second: b,
            }),
            std::cmp::Ordering::Greater => Some(Self {
                first: b,
                second: a,
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Both developers, smaller first.
    pub fn members(&self) -> (&str, &str) {
        (&self.first, &self.second)
    }
}

// Serialized as a two-element array so it can sit inside JSON/YAML lists.
impl Serialize for Pair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [&self.first, &self.second].serialize(serializer)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn order_independent() {
        assert_eq!(Pair::new("Alice", "Bob"), Pair::new("Bob", "Alice"));
    }

    #[test]
    fn smaller_identity_first() {
        let pair = Pair::new("carol@example.com", "Bob").unwrap();
        assert_eq!(pair.members(), ("Bob", "carol@example.com"));
    }

    #[test]
    fn no_self_pair() {
        assert!(Pair::new("Alice", "Alice").is_none());
    }

    #[test]
    fn identities_are_case_sensitive() {
        let pair = Pair::new("alice", "Alice").unwrap();
        assert_eq!(pair.members(), ("Alice", "alice"));
    }

    #[test]
    fn serializes_as_array() {
        let pair = Pair::new("Bob", "Alice").unwrap();
        assert_eq!(serde_json::to_string(&pair).unwrap(), r#"["Alice","Bob"]"#);
    }
}
