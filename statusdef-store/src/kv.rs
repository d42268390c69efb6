//! Key-value persistence boundary.

use std::collections::HashMap;

use crate::error::StoreResult;

/// Key the category registry is persisted under.
pub const CATEGORY_REGISTRY_KEY: &str = "status_categories";

/// Key the item definition registry is persisted under.
pub const ITEM_REGISTRY_KEY: &str = "status_item_definitions";

/// A string key-value store the catalog is loaded from and saved to.
///
/// Values are JSON documents. Implementations decide where they live.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Stores every `(key, value)` pair, or none of them when an error is
    /// returned.
    fn put_all(&mut self, entries: &[(&str, &str)]) -> StoreResult<()>;
}

/// Volatile store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn put_all(&mut self, entries: &[(&str, &str)]) -> StoreResult<()> {
        self.values.extend(
            entries
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        );
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).put(key, value)
    }

    fn put_all(&mut self, entries: &[(&str, &str)]) -> StoreResult<()> {
        (**self).put_all(entries)
    }
}
