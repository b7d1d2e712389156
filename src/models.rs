//! Shared data model

use serde::{Deserialize, Serialize};

/// The one entity every backend kind stores in its own shape: a row in the
/// relational `items` tables, a document keyed by `id` in Mongo, and a flat
/// string value under `item:<id>` in Redis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub value: String,
}

impl Item {
    /// Cache key derived from an item id.
    pub fn cache_key(id: &str) -> String {
        format!("item:{}", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_key_is_prefixed() {
        assert_eq!(Item::cache_key("abc-1"), "item:abc-1");
    }
}
