//! Category and item definition registries.
//!
//! Both registries keep insertion order. A full-replace upsert keeps an
//! existing key at its position; a delete keeps the remaining order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use statusdef_model::{CategoryDefinition, ItemDefinition};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Category key → definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryRegistry {
    entries: IndexMap<String, CategoryDefinition>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or fully replaces the entry at `def.key`.
    ///
    /// Returns `false` without touching the registry when the key or name is
    /// empty.
    pub fn upsert(&mut self, def: CategoryDefinition) -> bool {
        if !def.is_saveable() {
            debug!(key = %def.key, "Rejected category save: empty key or name");
            return false;
        }
        debug!(key = %def.key, order = def.order, scope = ?def.scope, "Category saved");
        self.entries.insert(def.key.clone(), def);
        true
    }

    /// Removes the entry at `key`, if present.
    pub fn delete(&mut self, key: &str) -> Option<CategoryDefinition> {
        let removed = self.entries.shift_remove(key);
        if removed.is_some() {
            debug!(key = %key, "Category deleted");
        }
        removed
    }

    pub fn get(&self, key: &str) -> Option<&CategoryDefinition> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryDefinition> {
        self.entries.values()
    }

    /// All categories sorted ascending by `order`. Ties keep registry order.
    pub fn list_sorted(&self) -> Vec<&CategoryDefinition> {
        let mut sorted: Vec<_> = self.entries.values().collect();
        sorted.sort_by_key(|c| c.order);
        sorted
    }

    /// Checks a registry read from storage: every entry sits under its own
    /// key and has a non-empty key and name.
    pub(crate) fn validate(&self) -> StoreResult<()> {
        for (key, def) in &self.entries {
            check_entry("category", key, &def.key, def.is_saveable())?;
        }
        Ok(())
    }
}

/// Item key → definition. Keys are global, not per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemRegistry {
    entries: IndexMap<String, ItemDefinition>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or fully replaces the entry at `def.key`, storing a freshly
    /// derived `format` resolved against `categories`.
    ///
    /// Returns `false` without touching the registry when the key or name is
    /// empty.
    pub fn upsert(&mut self, def: ItemDefinition, categories: &CategoryRegistry) -> bool {
        if !def.is_saveable() {
            debug!(key = %def.key, "Rejected item save: empty key or name");
            return false;
        }
        if let Some(existing) = self.entries.get(&def.key) {
            if existing.category != def.category {
                debug!(
                    key = %def.key,
                    from = %existing.category,
                    to = %def.category,
                    "Item key overwritten from another category"
                );
            }
        }
        let stored = def.with_generated_format(categories.get(&def.category));
        debug!(key = %stored.key, format = %stored.format, "Item saved");
        self.entries.insert(stored.key.clone(), stored);
        true
    }

    /// Removes the entry at `key`, if present.
    pub fn delete(&mut self, key: &str) -> Option<ItemDefinition> {
        let removed = self.entries.shift_remove(key);
        if removed.is_some() {
            debug!(key = %key, "Item deleted");
        }
        removed
    }

    pub fn get(&self, key: &str) -> Option<&ItemDefinition> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.entries.values()
    }

    /// All items when `category` is `None`, else only items filed under it.
    /// Registry order, no sorting.
    pub fn list_filtered(&self, category: Option<&str>) -> Vec<&ItemDefinition> {
        self.entries
            .values()
            .filter(|item| category.is_none_or(|key| item.category == key))
            .collect()
    }

    /// Re-derives every stored format against `categories`.
    ///
    /// Returns how many formats changed.
    pub fn refresh_formats(&mut self, categories: &CategoryRegistry) -> usize {
        let mut changed = 0;
        for item in self.entries.values_mut() {
            let format = statusdef_model::generate_format(item, categories.get(&item.category));
            if item.format != format {
                item.format = format;
                changed += 1;
            }
        }
        changed
    }

    /// Checks a registry read from storage: every entry sits under its own
    /// key and has a non-empty key and name.
    pub(crate) fn validate(&self) -> StoreResult<()> {
        for (key, def) in &self.entries {
            check_entry("item", key, &def.key, def.is_saveable())?;
        }
        Ok(())
    }
}

fn check_entry(kind: &str, stored_under: &str, key: &str, saveable: bool) -> StoreResult<()> {
    if stored_under != key {
        return Err(StoreError::InvalidData(format!(
            "{kind} stored under '{stored_under}' has key '{key}'"
        )));
    }
    if !saveable {
        return Err(StoreError::InvalidData(format!(
            "{kind} '{key}' has an empty key or name"
        )));
    }
    Ok(())
}
