//! World-book integration point.
//!
//! A world book is an external document store the text-generation process
//! reads. Only the interface lives here; hosts provide the sink.

use serde::{Deserialize, Serialize};
use statusdef_model::ItemDefinition;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// One world-book entry carrying an item's format string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldBookEntry {
    pub title: String,
    /// Trigger keywords.
    pub keys: Vec<String>,
    pub content: String,
}

impl WorldBookEntry {
    /// Entry titled by the item's name, triggered by its key, holding its format.
    pub fn from_item(item: &ItemDefinition) -> Self {
        Self {
            title: item.name.clone(),
            keys: vec![item.key.clone()],
            content: item.format.clone(),
        }
    }
}

/// Receives world-book entries.
pub trait WorldBookSink {
    fn inject(&mut self, entry: &WorldBookEntry) -> StoreResult<()>;
}

/// Pushes a committed item's format into `sink`.
///
/// Items without a derived format are refused: they were never saved through a
/// registry or cannot be generated.
pub fn inject_item<W: WorldBookSink + ?Sized>(sink: &mut W, item: &ItemDefinition) -> StoreResult<()> {
    if item.format.is_empty() {
        return Err(StoreError::InvalidData(format!(
            "item '{}' has no format to inject",
            item.key
        )));
    }
    let entry = WorldBookEntry::from_item(item);
    sink.inject(&entry)?;
    debug!(key = %item.key, "Injected item format into world book");
    Ok(())
}
