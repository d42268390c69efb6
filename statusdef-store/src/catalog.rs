use statusdef_model::{CategoryDefinition, ItemDefinition};
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::kv::{CATEGORY_REGISTRY_KEY, ITEM_REGISTRY_KEY, KeyValueStore};
use crate::registry::{CategoryRegistry, ItemRegistry};

/// The definition a delete is about to remove.
#[derive(Debug, Clone, Copy)]
pub enum DeleteTarget<'a> {
    Category(&'a CategoryDefinition),
    Item(&'a ItemDefinition),
}

/// Asks the operator before a delete is applied.
pub trait ConfirmDelete {
    /// Return `false` to leave the catalog unchanged.
    fn confirm_delete(&self, target: DeleteTarget<'_>) -> bool;
}

/// Answers every confirmation with a fixed value.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl ConfirmDelete for AutoConfirm {
    fn confirm_delete(&self, _target: DeleteTarget<'_>) -> bool {
        self.0
    }
}

/// Both registries plus the category filter the item list is viewed through.
///
/// The selected category always names an existing category or is `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    categories: CategoryRegistry,
    items: ItemRegistry,
    selected_category: Option<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    pub fn items(&self) -> &ItemRegistry {
        &self.items
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// Sets the category filter. Unknown keys are refused; `None` clears.
    pub fn select_category(&mut self, key: Option<&str>) -> bool {
        match key {
            Some(key) if !self.categories.contains(key) => false,
            key => {
                self.selected_category = key.map(str::to_string);
                true
            }
        }
    }

    /// Items under the current filter, in registry order.
    pub fn visible_items(&self) -> Vec<&ItemDefinition> {
        self.items.list_filtered(self.selected_category())
    }

    // ── Mutations ────────────────────────────────────────────────

    /// See [`CategoryRegistry::upsert`]. Stored item formats are left as they
    /// were saved; call [`Catalog::refresh_formats`] to re-derive them.
    pub fn upsert_category(&mut self, def: CategoryDefinition) -> bool {
        self.categories.upsert(def)
    }

    /// See [`ItemRegistry::upsert`].
    pub fn upsert_item(&mut self, def: ItemDefinition) -> bool {
        self.items.upsert(def, &self.categories)
    }

    /// Removes a category. Items filed under it keep their `category` key.
    pub fn delete_category(&mut self, key: &str) -> Option<CategoryDefinition> {
        let removed = self.categories.delete(key)?;
        if self.selected_category.as_deref() == Some(key) {
            debug!(key = %key, "Cleared selection of deleted category");
            self.selected_category = None;
        }
        Some(removed)
    }

    pub fn delete_item(&mut self, key: &str) -> Option<ItemDefinition> {
        self.items.delete(key)
    }

    /// Deletes a category once `confirm` agrees. Absent keys are not asked about.
    pub fn delete_category_confirmed(
        &mut self,
        key: &str,
        confirm: &dyn ConfirmDelete,
    ) -> Option<CategoryDefinition> {
        let target = self.categories.get(key)?;
        if !confirm.confirm_delete(DeleteTarget::Category(target)) {
            debug!(key = %key, "Category delete declined");
            return None;
        }
        self.delete_category(key)
    }

    /// Deletes an item once `confirm` agrees. Absent keys are not asked about.
    pub fn delete_item_confirmed(
        &mut self,
        key: &str,
        confirm: &dyn ConfirmDelete,
    ) -> Option<ItemDefinition> {
        let target = self.items.get(key)?;
        if !confirm.confirm_delete(DeleteTarget::Item(target)) {
            debug!(key = %key, "Item delete declined");
            return None;
        }
        self.delete_item(key)
    }

    /// Re-derives every stored item format. Returns how many changed.
    pub fn refresh_formats(&mut self) -> usize {
        self.items.refresh_formats(&self.categories)
    }

    // ── Persistence ──────────────────────────────────────────────

    /// Loads both registries. Missing keys load as empty registries.
    ///
    /// An entry stored under a key other than its own, or with an empty key or
    /// name, is [`StoreError::InvalidData`](crate::StoreError::InvalidData).
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> StoreResult<Self> {
        let categories: CategoryRegistry = match store.get(CATEGORY_REGISTRY_KEY)? {
            Some(json) => serde_json::from_str(&json)?,
            None => CategoryRegistry::default(),
        };
        let items: ItemRegistry = match store.get(ITEM_REGISTRY_KEY)? {
            Some(json) => serde_json::from_str(&json)?,
            None => ItemRegistry::default(),
        };
        categories.validate()?;
        items.validate()?;
        info!(
            categories = categories.len(),
            items = items.len(),
            "Loaded definition catalog"
        );
        Ok(Self {
            categories,
            items,
            selected_category: None,
        })
    }

    /// Writes both registries in one batch, so either both land or neither
    /// does. The selection is session state and is not saved.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> StoreResult<()> {
        let categories = serde_json::to_string(&self.categories)?;
        let items = serde_json::to_string(&self.items)?;
        store.put_all(&[
            (CATEGORY_REGISTRY_KEY, categories.as_str()),
            (ITEM_REGISTRY_KEY, items.as_str()),
        ])?;
        debug!(
            categories = self.categories.len(),
            items = self.items.len(),
            "Saved definition catalog"
        );
        Ok(())
    }
}
