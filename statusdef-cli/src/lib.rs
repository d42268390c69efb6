//! Shared types and rendering for the `statusdef` command line.

use std::cell::RefCell;
use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use statusdef_model::{CategoryDefinition, ItemDefinition};
use statusdef_store::{
    Catalog, ConfirmDelete, DefinitionStore, DeleteTarget, KeyValueStore, StoreResult,
};
use tracing::warn;

/// Definitions read by `statusdef import`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportBundle {
    #[serde(default)]
    pub categories: Vec<CategoryDefinition>,
    #[serde(default)]
    pub items: Vec<ItemDefinition>,
}

/// What an import did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub categories_saved: usize,
    pub items_saved: usize,
    /// `category:<key>` / `item:<key>` for each rejected definition.
    pub rejected: Vec<String>,
}

/// Upserts every definition in `bundle`, categories first, in bundle order.
///
/// The whole bundle is applied to one copy of the catalog and written once:
/// either every accepted definition lands or, on a failed write, none does.
pub fn import_bundle<S: KeyValueStore>(
    store: &mut DefinitionStore<S>,
    bundle: ImportBundle,
) -> StoreResult<ImportReport> {
    store.batch(|catalog| {
        let mut report = ImportReport::default();
        for category in bundle.categories {
            let key = category.key.clone();
            if catalog.upsert_category(category) {
                report.categories_saved += 1;
            } else {
                warn!(key = %key, "Skipped category with empty key or name");
                report.rejected.push(format!("category:{key}"));
            }
        }
        for item in bundle.items {
            let key = item.key.clone();
            if catalog.upsert_item(item) {
                report.items_saved += 1;
            } else {
                warn!(key = %key, "Skipped item with empty key or name");
                report.rejected.push(format!("item:{key}"));
            }
        }
        report
    })
}

/// One line per category, sorted by order.
pub fn render_categories(catalog: &Catalog) -> String {
    catalog
        .categories()
        .list_sorted()
        .into_iter()
        .map(|c| format!("{:>4}  {}  {} ({})", c.order, c.key, c.name, c.scope))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per visible item with its stored format.
pub fn render_items(catalog: &Catalog) -> String {
    catalog
        .visible_items()
        .into_iter()
        .map(|i| format!("{}  {}  {}", i.key, i.name, i.format))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Asks `Delete <kind> '<key>'? [y/N]` and reads the answer.
///
/// Anything but `y` / `yes` declines, including a read failure.
pub struct PromptConfirm<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    pub fn into_output(self) -> W {
        self.output.into_inner()
    }
}

impl<R: BufRead, W: Write> ConfirmDelete for PromptConfirm<R, W> {
    fn confirm_delete(&self, target: DeleteTarget<'_>) -> bool {
        let (kind, key, name) = match target {
            DeleteTarget::Category(c) => ("category", &c.key, &c.name),
            DeleteTarget::Item(i) => ("item", &i.key, &i.name),
        };
        let mut output = self.output.borrow_mut();
        if write!(output, "Delete {kind} '{key}' ({name})? [y/N] ")
            .and_then(|()| output.flush())
            .is_err()
        {
            return false;
        }

        let mut answer = String::new();
        if self.input.borrow_mut().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}
