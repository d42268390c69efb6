use serde::{Deserialize, Serialize};

use crate::format::{DEFAULT_SECONDARY_SEPARATOR, generate_format};
use crate::CategoryDefinition;

/// Primary separator given to freshly created drafts.
pub const DEFAULT_SEPARATOR: &str = "|";

/// Whether an owner holds one instance of an item or an ordered list of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    #[default]
    Single,
    List,
}

/// The value type of a single part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartDataType {
    #[default]
    String,
    Number,
    Boolean,
}

/// Constraints attached to a part.
///
/// Carried as metadata for downstream consumers; nothing here enforces them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartValidation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// One named, typed field within an item's structure (e.g. `current`, `max`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinitionPart {
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub data_type: PartDataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<PartValidation>,
}

impl ItemDefinitionPart {
    pub fn new(key: impl Into<String>, label: impl Into<String>, data_type: PartDataType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            data_type,
            validation: None,
        }
    }

    #[must_use]
    pub fn with_validation(mut self, validation: PartValidation) -> Self {
        self.validation = Some(validation);
        self
    }
}

/// Direction for [`ItemDefinition::move_part`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Towards index 0.
    Up,
    /// Towards the end.
    Down,
}

/// Schema for one tracked data entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Unique across the whole item registry, not per category.
    pub key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Key of a [`CategoryDefinition`]. Not enforced; may dangle.
    pub category: String,
    #[serde(default)]
    pub entry_type: EntryType,
    /// Order is significant: it is the join order in the format string.
    #[serde(default)]
    pub parts: Vec<ItemDefinitionPart>,
    /// Between list elements (`List`) or between parts (`Single`).
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Between parts inside one list element. Falls back to `@`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_separator: Option<String>,
    #[serde(default)]
    pub ui_type: String,
    #[serde(default)]
    pub interaction_type: String,
    #[serde(default)]
    pub description: String,
    /// Derived on every save. Whatever a caller puts here is overwritten.
    #[serde(default)]
    pub format: String,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl ItemDefinition {
    /// A blank `Single` draft filed under `category`.
    pub fn draft(category: impl Into<String>) -> Self {
        Self {
            key: String::new(),
            name: String::new(),
            icon: None,
            category: category.into(),
            entry_type: EntryType::Single,
            parts: Vec::new(),
            separator: default_separator(),
            secondary_separator: None,
            ui_type: String::new(),
            interaction_type: String::new(),
            description: String::new(),
            format: String::new(),
        }
    }

    /// Whether a registry will accept this definition: key and name must be non-empty.
    pub fn is_saveable(&self) -> bool {
        !self.key.is_empty() && !self.name.is_empty()
    }

    /// The separator used between parts of one list element.
    pub fn effective_secondary_separator(&self) -> &str {
        self.secondary_separator
            .as_deref()
            .unwrap_or(DEFAULT_SECONDARY_SEPARATOR)
    }

    /// Returns a copy whose `format` is derived against `category`.
    #[must_use]
    pub fn with_generated_format(&self, category: Option<&CategoryDefinition>) -> Self {
        let mut item = self.clone();
        item.format = generate_format(self, category);
        item
    }

    // ── Parts editing ────────────────────────────────────────────

    /// Appends an empty `string` part.
    pub fn add_part(&mut self) {
        self.parts.push(ItemDefinitionPart::default());
    }

    /// Removes the part at `index`. Out of range is a no-op returning `None`.
    pub fn remove_part(&mut self, index: usize) -> Option<ItemDefinitionPart> {
        (index < self.parts.len()).then(|| self.parts.remove(index))
    }

    /// Swaps the part at `index` with its neighbour in `direction`.
    ///
    /// Returns `false` and leaves the parts untouched when either index falls
    /// outside the sequence.
    pub fn move_part(&mut self, index: usize, direction: MoveDirection) -> bool {
        let target = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => index.checked_add(1),
        };
        match target {
            Some(target) if index < self.parts.len() && target < self.parts.len() => {
                self.parts.swap(index, target);
                true
            }
            _ => false,
        }
    }
}
