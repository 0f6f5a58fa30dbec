//! Domain newtypes with validation
//!
//! This module provides strongly-typed wrappers for domain identifiers.
//! Each newtype ensures data validity at construction time.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::DomainError;

// ============================================================================
// CollectionKey
// ============================================================================

/// Name of a logical paginated collection
///
/// Keys identify one client-side mirror of a server list: `"news"`,
/// `"contacts"`, `"guest-houses"`. Parameterized variants embed their
/// discriminator in the key, e.g. `"contacts:subcategory:12"` — two
/// sub-category listings are two independent collections.
///
/// Format: non-empty, alphanumeric plus `-`, `_`, `:`, `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CollectionKey(String);

impl CollectionKey {
    /// Create a new CollectionKey
    ///
    /// # Errors
    /// Returns `DomainError::InvalidCollectionKey` if the key is empty or
    /// contains characters outside the allowed set
    pub fn new(key: impl Into<String>) -> Result<Self, DomainError> {
        let key = key.into();
        if key.is_empty() {
            return Err(DomainError::InvalidCollectionKey(
                "Collection key cannot be empty".to_string(),
            ));
        }

        if !key
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == ':' || c == '.')
        {
            return Err(DomainError::InvalidCollectionKey(format!(
                "Collection key contains invalid characters: {key}"
            )));
        }

        Ok(Self(key))
    }

    /// Get the inner string reference
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CollectionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CollectionKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CollectionKey {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CollectionKey> for String {
    fn from(key: CollectionKey) -> Self {
        key.0
    }
}

// ============================================================================
// ItemId
// ============================================================================

/// Stable identity of an item within its collection
///
/// Backends report either integer ids (database rows) or string ids
/// (opaque handles); both are stable within a collection and that is all
/// the merge rules rely on. Items are otherwise opaque to the core.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Integer identifier
    Int(i64),
    /// String identifier
    Str(String),
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Int(n) => write!(f, "{n}"),
            ItemId::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        ItemId::Int(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Str(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::Str(s)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod collection_key_tests {
        use super::*;

        #[test]
        fn test_new_valid() {
            let key = CollectionKey::new("news").unwrap();
            assert_eq!(key.as_str(), "news");
        }

        #[test]
        fn test_parameterized_key() {
            let key = CollectionKey::new("contacts:subcategory:12").unwrap();
            assert_eq!(key.as_str(), "contacts:subcategory:12");
        }

        #[test]
        fn test_empty_fails() {
            let result = CollectionKey::new("");
            assert!(result.is_err());
        }

        #[test]
        fn test_invalid_chars_fails() {
            assert!(CollectionKey::new("news feed").is_err());
            assert!(CollectionKey::new("news/feed").is_err());
        }

        #[test]
        fn test_from_str() {
            let key: CollectionKey = "guest-houses".parse().unwrap();
            assert_eq!(key.to_string(), "guest-houses");
        }

        #[test]
        fn test_serde_roundtrip() {
            let key = CollectionKey::new("gallery").unwrap();
            let json = serde_json::to_string(&key).unwrap();
            let parsed: CollectionKey = serde_json::from_str(&json).unwrap();
            assert_eq!(key, parsed);
        }

        #[test]
        fn test_serde_rejects_invalid() {
            let result: Result<CollectionKey, _> = serde_json::from_str("\"bad key\"");
            assert!(result.is_err());
        }
    }

    mod item_id_tests {
        use super::*;

        #[test]
        fn test_int_and_str_are_distinct() {
            assert_ne!(ItemId::from(42), ItemId::from("42"));
        }

        #[test]
        fn test_equality() {
            assert_eq!(ItemId::from(7), ItemId::Int(7));
            assert_eq!(ItemId::from("abc"), ItemId::Str("abc".to_string()));
        }

        #[test]
        fn test_display() {
            assert_eq!(ItemId::from(42).to_string(), "42");
            assert_eq!(ItemId::from("item-9").to_string(), "item-9");
        }

        #[test]
        fn test_serde_untagged() {
            let id: ItemId = serde_json::from_str("42").unwrap();
            assert_eq!(id, ItemId::Int(42));

            let id: ItemId = serde_json::from_str("\"abc\"").unwrap();
            assert_eq!(id, ItemId::Str("abc".to_string()));
        }
    }
}
