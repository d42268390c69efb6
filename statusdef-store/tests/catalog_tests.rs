mod common;

use std::cell::RefCell;

use common::{character_category, item, item_keys, shared_category};
use pretty_assertions::assert_eq;
use statusdef_store::{AutoConfirm, Catalog, ConfirmDelete, DeleteTarget};

fn seeded() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.upsert_category(character_category("CV", 0));
    catalog.upsert_category(shared_category("ST1", 1));
    catalog.upsert_item(item("HP", "CV", &["current", "max"]));
    catalog.upsert_item(item("天气", "ST1", &[]));
    catalog.upsert_item(item("MP", "CV", &[]));
    catalog
}

/// Records what it was asked about and answers with a fixed value.
struct RecordingConfirm {
    answer: bool,
    asked: RefCell<Vec<String>>,
}

impl RecordingConfirm {
    fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl ConfirmDelete for RecordingConfirm {
    fn confirm_delete(&self, target: DeleteTarget<'_>) -> bool {
        let label = match target {
            DeleteTarget::Category(c) => format!("category:{}", c.key),
            DeleteTarget::Item(i) => format!("item:{}", i.key),
        };
        self.asked.borrow_mut().push(label);
        self.answer
    }
}

// ── Selection ────────────────────────────────────────────────────

#[test]
fn selection_starts_empty() {
    assert_eq!(seeded().selected_category(), None);
}

#[test]
fn select_existing_category() {
    let mut catalog = seeded();
    assert!(catalog.select_category(Some("CV")));
    assert_eq!(catalog.selected_category(), Some("CV"));
    assert_eq!(item_keys(catalog.visible_items()), vec!["HP", "MP"]);
}

#[test]
fn select_unknown_category_is_refused() {
    let mut catalog = seeded();
    catalog.select_category(Some("CV"));
    assert!(!catalog.select_category(Some("nope")));
    assert_eq!(catalog.selected_category(), Some("CV"));
}

#[test]
fn clearing_selection_shows_everything() {
    let mut catalog = seeded();
    catalog.select_category(Some("ST1"));
    assert_eq!(item_keys(catalog.visible_items()), vec!["天气"]);
    assert!(catalog.select_category(None));
    assert_eq!(item_keys(catalog.visible_items()), vec!["HP", "天气", "MP"]);
}

// ── Category deletion ────────────────────────────────────────────

#[test]
fn deleting_selected_category_clears_selection() {
    let mut catalog = seeded();
    catalog.select_category(Some("CV"));
    assert!(catalog.delete_category("CV").is_some());
    assert_eq!(catalog.selected_category(), None);
}

#[test]
fn deleting_other_category_keeps_selection() {
    let mut catalog = seeded();
    catalog.select_category(Some("CV"));
    catalog.delete_category("ST1");
    assert_eq!(catalog.selected_category(), Some("CV"));
}

#[test]
fn deleting_category_leaves_items_dangling() {
    let mut catalog = seeded();
    let before = catalog.items().clone();
    catalog.delete_category("CV");
    assert_eq!(catalog.items(), &before);
    assert_eq!(catalog.items().get("HP").unwrap().category, "CV");
}

#[test]
fn deleting_absent_category_is_noop() {
    let mut catalog = seeded();
    let before = catalog.clone();
    assert!(catalog.delete_category("missing").is_none());
    assert_eq!(catalog, before);
}

// ── Confirmed deletes ────────────────────────────────────────────

#[test]
fn declined_category_delete_changes_nothing() {
    let mut catalog = seeded();
    catalog.select_category(Some("CV"));
    let before = catalog.clone();
    let confirm = RecordingConfirm::new(false);
    assert!(catalog.delete_category_confirmed("CV", &confirm).is_none());
    assert_eq!(catalog, before);
    assert_eq!(*confirm.asked.borrow(), vec!["category:CV".to_string()]);
}

#[test]
fn accepted_category_delete_applies() {
    let mut catalog = seeded();
    let removed = catalog.delete_category_confirmed("ST1", &AutoConfirm(true));
    assert_eq!(removed.unwrap().key, "ST1");
    assert!(!catalog.categories().contains("ST1"));
}

#[test]
fn absent_keys_are_not_confirmed() {
    let mut catalog = seeded();
    let confirm = RecordingConfirm::new(true);
    assert!(catalog.delete_category_confirmed("missing", &confirm).is_none());
    assert!(catalog.delete_item_confirmed("missing", &confirm).is_none());
    assert!(confirm.asked.borrow().is_empty());
}

#[test]
fn item_delete_confirmation() {
    let mut catalog = seeded();
    assert!(catalog.delete_item_confirmed("HP", &AutoConfirm(false)).is_none());
    assert!(catalog.items().contains("HP"));

    let confirm = RecordingConfirm::new(true);
    assert!(catalog.delete_item_confirmed("HP", &confirm).is_some());
    assert!(!catalog.items().contains("HP"));
    assert_eq!(*confirm.asked.borrow(), vec!["item:HP".to_string()]);
}

// ── Formats ──────────────────────────────────────────────────────

#[test]
fn scenario_character_scoped_single() {
    let mut catalog = Catalog::new();
    catalog.upsert_category(statusdef_model::CategoryDefinition::new(
        "CV",
        "角色属性",
        statusdef_model::CategoryScope::Character,
    ));
    catalog.upsert_item(item("HP", "CV", &["value"]));
    assert_eq!(catalog.items().get("HP").unwrap().format, "[{角色}^CV|HP::{value}]");
}

#[test]
fn scenario_shared_without_parts() {
    let mut catalog = Catalog::new();
    catalog.upsert_category(statusdef_model::CategoryDefinition::new(
        "ST1",
        "世界",
        statusdef_model::CategoryScope::Shared,
    ));
    catalog.upsert_item(item("天气", "ST1", &[]));
    assert_eq!(catalog.items().get("天气").unwrap().format, "[ST^ST1|天气::{天气}]");
}

#[test]
fn category_upsert_does_not_rewrite_item_formats() {
    let mut catalog = seeded();
    catalog.upsert_category(shared_category("CV", 0));
    assert_eq!(catalog.items().get("MP").unwrap().format, "[{角色}^CV|MP::{MP}]");
    assert_eq!(catalog.refresh_formats(), 2);
    assert_eq!(catalog.items().get("MP").unwrap().format, "[ST^CV|MP::{MP}]");
}
