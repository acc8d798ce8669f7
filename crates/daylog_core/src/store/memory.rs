//! In-memory keyed store.

use super::{KeyedStore, StoreResult};
use std::collections::BTreeMap;

/// `BTreeMap`-backed store.
///
/// The unit-test substrate, and the fallback for hosts without durable
/// storage. Key order falls out of the map order, satisfying the
/// `list_keys` ordering contract for free.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyedStore {
    entries: BTreeMap<String, String>,
}

impl MemoryKeyedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyedStore for MemoryKeyedStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn list_keys(&self, prefix: &str) -> StoreResult<Vec<String>> {
        Ok(self
            .entries
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryKeyedStore;
    use crate::store::KeyedStore;

    #[test]
    fn set_get_and_overwrite() {
        let mut store = MemoryKeyedStore::new();
        assert_eq!(store.get("a").unwrap(), None);

        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn list_keys_is_prefix_filtered_and_ascending() {
        let mut store = MemoryKeyedStore::new();
        store.set("logs:1:2025-01-02", "[]").unwrap();
        store.set("logs:1:2025-01-01", "[]").unwrap();
        store.set("reminders:1", "[]").unwrap();

        let keys = store.list_keys("logs:1:").unwrap();
        assert_eq!(keys, ["logs:1:2025-01-01", "logs:1:2025-01-02"]);
    }
}
