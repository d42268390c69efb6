//! Format string derivation.
//!
//! The grammar is a contract with the downstream parser:
//!
//! ```text
//! [<scope>^<category>|<item>::<value>]
//! ```
//!
//! where `<value>` is `{key}` placeholders joined by the item's separators,
//! with a trailing `<separator>...` for list items.

use crate::{CategoryDefinition, CategoryScope, EntryType, ItemDefinition};

/// Scope token for categories in the shared namespace.
pub const SHARED_SCOPE_TOKEN: &str = "ST";

/// Scope token standing for "the current character".
pub const CHARACTER_SCOPE_TOKEN: &str = "{角色}";

/// Joins parts inside one list element when none is configured.
pub const DEFAULT_SECONDARY_SEPARATOR: &str = "@";

/// Marks a list value as repeating.
pub const LIST_CONTINUATION: &str = "...";

/// Derives the format string for `item`.
///
/// `category` is the definition `item.category` resolves to, if any. An
/// unresolved category is treated as character-scoped. Returns an empty string
/// when the item's key or category key is empty.
pub fn generate_format(item: &ItemDefinition, category: Option<&CategoryDefinition>) -> String {
    if item.key.is_empty() || item.category.is_empty() {
        return String::new();
    }

    let scope_token = match category.map(|c| c.scope) {
        Some(CategoryScope::Shared) => SHARED_SCOPE_TOKEN,
        Some(CategoryScope::Character) | None => CHARACTER_SCOPE_TOKEN,
    };

    format!(
        "[{scope_token}^{}|{}::{}]",
        item.category,
        item.key,
        value_part(item)
    )
}

fn value_part(item: &ItemDefinition) -> String {
    if item.parts.is_empty() {
        return placeholder(&item.key);
    }

    match item.entry_type {
        EntryType::Single => join_parts(item, &item.separator),
        EntryType::List => {
            let element = join_parts(item, item.effective_secondary_separator());
            format!("{element}{}{LIST_CONTINUATION}", item.separator)
        }
    }
}

fn join_parts(item: &ItemDefinition, separator: &str) -> String {
    item.parts
        .iter()
        .map(|part| placeholder(&part.key))
        .collect::<Vec<_>>()
        .join(separator)
}

fn placeholder(key: &str) -> String {
    format!("{{{key}}}")
}
