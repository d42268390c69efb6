//! Shared fixtures for store tests.

#![allow(dead_code)]

use statusdef_model::{
    CategoryDefinition, CategoryScope, EntryType, ItemDefinition, ItemDefinitionPart,
    PartDataType,
};

pub fn character_category(key: &str, order: i64) -> CategoryDefinition {
    CategoryDefinition::new(key, format!("{key} name"), CategoryScope::Character).with_order(order)
}

pub fn shared_category(key: &str, order: i64) -> CategoryDefinition {
    CategoryDefinition::new(key, format!("{key} name"), CategoryScope::Shared).with_order(order)
}

pub fn item(key: &str, category: &str, parts: &[&str]) -> ItemDefinition {
    let mut d = ItemDefinition::draft(category);
    d.key = key.to_string();
    d.name = format!("{key} name");
    d.parts = parts
        .iter()
        .map(|k| ItemDefinitionPart::new(*k, *k, PartDataType::String))
        .collect();
    d
}

pub fn list_item(key: &str, category: &str, parts: &[&str]) -> ItemDefinition {
    let mut d = item(key, category, parts);
    d.entry_type = EntryType::List;
    d
}

pub fn category_keys<'a>(entries: impl IntoIterator<Item = &'a CategoryDefinition>) -> Vec<String> {
    entries.into_iter().map(|c| c.key.clone()).collect()
}

pub fn item_keys<'a>(entries: impl IntoIterator<Item = &'a ItemDefinition>) -> Vec<String> {
    entries.into_iter().map(|i| i.key.clone()).collect()
}
