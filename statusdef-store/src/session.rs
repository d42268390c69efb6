//! Editing drafts.
//!
//! An editor owns a deep copy of the definition under edit. Nothing reaches a
//! registry until the editor is committed; dropping it cancels.

use statusdef_model::{
    CategoryDefinition, CategoryScope, DEFAULT_SEPARATOR, ItemDefinition, ItemDefinitionPart,
    MoveDirection, generate_format,
};

use crate::catalog::Catalog;
use crate::registry::CategoryRegistry;

/// Draft of a category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryEditor {
    draft: CategoryDefinition,
    original_key: Option<String>,
}

impl CategoryEditor {
    /// A blank character-scoped draft.
    pub fn open_new() -> Self {
        Self {
            draft: CategoryDefinition::new("", "", CategoryScope::Character),
            original_key: None,
        }
    }

    pub fn open_existing(existing: &CategoryDefinition) -> Self {
        Self {
            draft: existing.clone(),
            original_key: Some(existing.key.clone()),
        }
    }

    pub fn draft(&self) -> &CategoryDefinition {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut CategoryDefinition {
        &mut self.draft
    }

    /// Key of the committed entry this draft was opened from.
    pub fn original_key(&self) -> Option<&str> {
        self.original_key.as_deref()
    }

    /// Copies the draft into `catalog`. Returns whether it was accepted.
    pub fn commit(&self, catalog: &mut Catalog) -> bool {
        catalog.upsert_category(self.draft.clone())
    }
}

/// Draft of an item definition, with a live format preview.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemEditor {
    draft: ItemDefinition,
    original_key: Option<String>,
}

impl ItemEditor {
    /// A blank `Single` draft filed under `category`.
    pub fn open_new(category: &str) -> Self {
        Self {
            draft: ItemDefinition::draft(category),
            original_key: None,
        }
    }

    pub fn open_existing(existing: &ItemDefinition) -> Self {
        Self {
            draft: existing.clone(),
            original_key: Some(existing.key.clone()),
        }
    }

    pub fn draft(&self) -> &ItemDefinition {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ItemDefinition {
        &mut self.draft
    }

    /// Key of the committed entry this draft was opened from.
    pub fn original_key(&self) -> Option<&str> {
        self.original_key.as_deref()
    }

    pub fn add_part(&mut self) {
        self.draft.add_part();
    }

    pub fn remove_part(&mut self, index: usize) -> Option<ItemDefinitionPart> {
        self.draft.remove_part(index)
    }

    pub fn move_part(&mut self, index: usize, direction: MoveDirection) -> bool {
        self.draft.move_part(index, direction)
    }

    /// The format the draft would be saved with, derived from its current state.
    pub fn preview(&self, categories: &CategoryRegistry) -> String {
        generate_format(&self.draft, categories.get(&self.draft.category))
    }

    /// Copies the draft into `catalog`. Returns whether it was accepted.
    pub fn commit(&self, catalog: &mut Catalog) -> bool {
        catalog.upsert_item(self.draft.clone())
    }
}

/// At most one category draft and one item draft, independent of each other.
#[derive(Debug, Clone)]
pub struct EditingSession {
    default_separator: String,
    category: Option<CategoryEditor>,
    item: Option<ItemEditor>,
}

impl Default for EditingSession {
    fn default() -> Self {
        Self::with_default_separator(DEFAULT_SEPARATOR)
    }
}

impl EditingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session whose new item drafts start with `separator`.
    pub fn with_default_separator(separator: impl Into<String>) -> Self {
        Self {
            default_separator: separator.into(),
            category: None,
            item: None,
        }
    }

    // ── Category draft ───────────────────────────────────────────

    /// Opens a blank category draft, replacing any open one.
    pub fn open_new_category(&mut self) -> &mut CategoryEditor {
        self.category.insert(CategoryEditor::open_new())
    }

    /// Opens a copy of `existing`, replacing any open category draft.
    pub fn edit_category(&mut self, existing: &CategoryDefinition) -> &mut CategoryEditor {
        self.category.insert(CategoryEditor::open_existing(existing))
    }

    pub fn category_editor(&self) -> Option<&CategoryEditor> {
        self.category.as_ref()
    }

    pub fn category_editor_mut(&mut self) -> Option<&mut CategoryEditor> {
        self.category.as_mut()
    }

    /// Discards the category draft.
    pub fn cancel_category(&mut self) -> Option<CategoryEditor> {
        self.category.take()
    }

    /// Commits the open category draft and closes it when accepted.
    /// A rejected draft stays open.
    pub fn commit_category(&mut self, catalog: &mut Catalog) -> bool {
        let accepted = self
            .category
            .as_ref()
            .is_some_and(|editor| editor.commit(catalog));
        if accepted {
            self.category = None;
        }
        accepted
    }

    // ── Item draft ───────────────────────────────────────────────

    /// Opens a blank item draft under `category`, replacing any open one.
    pub fn open_new_item(&mut self, category: &str) -> &mut ItemEditor {
        let mut editor = ItemEditor::open_new(category);
        editor.draft_mut().separator = self.default_separator.clone();
        self.item.insert(editor)
    }

    /// Opens a copy of `existing`, replacing any open item draft.
    pub fn edit_item(&mut self, existing: &ItemDefinition) -> &mut ItemEditor {
        self.item.insert(ItemEditor::open_existing(existing))
    }

    pub fn item_editor(&self) -> Option<&ItemEditor> {
        self.item.as_ref()
    }

    pub fn item_editor_mut(&mut self) -> Option<&mut ItemEditor> {
        self.item.as_mut()
    }

    /// Discards the item draft.
    pub fn cancel_item(&mut self) -> Option<ItemEditor> {
        self.item.take()
    }

    /// Commits the open item draft and closes it when accepted.
    /// A rejected draft stays open.
    pub fn commit_item(&mut self, catalog: &mut Catalog) -> bool {
        let accepted = self
            .item
            .as_ref()
            .is_some_and(|editor| editor.commit(catalog));
        if accepted {
            self.item = None;
        }
        accepted
    }
}
