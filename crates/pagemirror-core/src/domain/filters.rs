//! Filter maps for paginated queries
//!
//! Filters carry the free-form query parameters (keyword, category id,
//! city id) that scope a collection fetch. Changing a collection's
//! filters invalidates the previous result set, so filter equality is
//! load-bearing: the store compares a response's filters against the
//! most recently recorded ones to detect stale responses.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// A single filter value
///
/// Mirrors the value space of REST query parameters: strings, integers,
/// and an explicit null (a filter that is present but cleared).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// String value (keyword search, city name)
    Str(String),
    /// Integer value (category id, subcategory id)
    Int(i64),
    /// Explicitly cleared filter
    Null,
}

impl Display for FilterValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Str(s) => write!(f, "{s}"),
            FilterValue::Int(n) => write!(f, "{n}"),
            FilterValue::Null => write!(f, ""),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Str(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Str(s)
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        FilterValue::Int(n)
    }
}

/// An ordered filter map
///
/// Backed by a `BTreeMap` so equality is structural and independent of
/// insertion order: `{category: 5, city: "pune"}` compares equal however
/// it was built. Two filter maps are the same query iff they are `==`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filters(BTreeMap<String, FilterValue>);

impl Filters {
    /// Create an empty filter map
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert or replace a filter
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a filter value
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.0.get(key)
    }

    /// Returns true if no filters are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of filters set
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over filter entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over `(key, rendered-value)` pairs suitable for a query
    /// string. `Null` filters are omitted — a cleared filter is not sent.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, String)> {
        self.0
            .iter()
            .filter(|(_, v)| !matches!(v, FilterValue::Null))
            .map(|(k, v)| (k.as_str(), v.to_string()))
    }
}

impl FromIterator<(String, FilterValue)> for Filters {
    fn from_iter<I: IntoIterator<Item = (String, FilterValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
