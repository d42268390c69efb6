//! Property-based tests for registry upsert semantics.

use proptest::prelude::*;
use statusdef_model::{CategoryDefinition, CategoryScope};
use statusdef_store::{CategoryRegistry, ItemRegistry};

fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,6}").unwrap()
}

fn category_strategy() -> impl Strategy<Value = CategoryDefinition> {
    (
        key_strategy(),
        prop::string::string_regex("[A-Za-z ]{0,8}").unwrap(),
        -5i64..5,
        any::<bool>(),
    )
        .prop_map(|(key, name, order, shared)| {
            let scope = if shared {
                CategoryScope::Shared
            } else {
                CategoryScope::Character
            };
            CategoryDefinition::new(key, name, scope).with_order(order)
        })
}

proptest! {
    #[test]
    fn saveable_upsert_is_listed_exactly_once(
        seed in prop::collection::vec(category_strategy(), 0..8),
        def in category_strategy(),
    ) {
        prop_assume!(def.is_saveable());
        let mut reg = CategoryRegistry::new();
        for c in seed {
            reg.upsert(c);
        }
        reg.upsert(def.clone());
        let matching: Vec<_> = reg.list_sorted().into_iter().filter(|c| c.key == def.key).collect();
        prop_assert_eq!(matching, vec![&def]);
    }

    #[test]
    fn upsert_is_idempotent(
        seed in prop::collection::vec(category_strategy(), 0..8),
        def in category_strategy(),
    ) {
        let mut once = CategoryRegistry::new();
        for c in seed {
            once.upsert(c);
        }
        once.upsert(def.clone());
        let mut twice = once.clone();
        twice.upsert(def);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn list_sorted_is_ordered_and_complete(seed in prop::collection::vec(category_strategy(), 0..12)) {
        let mut reg = CategoryRegistry::new();
        for c in seed {
            reg.upsert(c);
        }
        let sorted = reg.list_sorted();
        prop_assert_eq!(sorted.len(), reg.len());
        prop_assert!(sorted.windows(2).all(|w| w[0].order <= w[1].order));
    }

    #[test]
    fn deleting_category_never_touches_items(
        seed in prop::collection::vec(category_strategy(), 1..6),
        victim in 0usize..6,
    ) {
        let mut cats = CategoryRegistry::new();
        let mut items = ItemRegistry::new();
        for c in &seed {
            cats.upsert(c.clone());
            let mut item = statusdef_model::ItemDefinition::draft(c.key.clone());
            item.key = format!("item_{}", c.key);
            item.name = "n".to_string();
            items.upsert(item, &cats);
        }
        let before = items.clone();
        let key = seed[victim % seed.len()].key.clone();
        cats.delete(&key);
        prop_assert_eq!(items, before);
    }
}
