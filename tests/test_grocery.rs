//! Integration tests for grocery-list snapshots and aisle grouping.

mod common;

use common::*;

use time::macros::datetime;

use cookturn::models::{AisleCategory, GroceryList, group_by_aisle};

#[test]
fn test_snapshot_captures_title_and_ingredients() {
    let recipe = make_recipe(
        "Weeknight Curry",
        vec![
            make_ingredient("Coconut milk", 400.0, "ml", AisleCategory::Pantry),
            make_ingredient("Spinach", 100.0, "g", AisleCategory::Produce),
        ],
        vec![],
        35,
    );

    let list = GroceryList::snapshot_of(&recipe, datetime!(2026-02-10 18:30 UTC));
    assert_eq!(list.recipe_id, recipe.id);
    assert_eq!(list.recipe_title, "Weeknight Curry");
    assert_eq!(list.items, recipe.ingredients);
    assert!(list.created_at > 0);
}

#[test]
fn test_snapshot_is_detached_from_the_recipe() {
    let mut recipe = make_recipe(
        "Weeknight Curry",
        vec![make_ingredient("Spinach", 100.0, "g", AisleCategory::Produce)],
        vec![],
        35,
    );
    let list = GroceryList::snapshot_of(&recipe, datetime!(2026-02-10 18:30 UTC));

    // Later recipe edits do not reach into the snapshot.
    recipe.ingredients[0].amount = 999.0;
    recipe.ingredients.push(make_ingredient("Tofu", 200.0, "g", AisleCategory::Protein));

    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].amount, 100.0);
}

#[test]
fn test_group_by_aisle_orders_and_drops_empty_groups() {
    let items = vec![
        make_ingredient("Salt", 1.0, "tsp", AisleCategory::Spices),
        make_ingredient("Chicken breast", 500.0, "g", AisleCategory::Protein),
        make_ingredient("Lemon", 2.0, "whole", AisleCategory::Produce),
        make_ingredient("Fresh basil", 1.0, "bunch", AisleCategory::Produce),
    ];

    let groups = group_by_aisle(&items);
    let aisles: Vec<AisleCategory> = groups.iter().map(|(aisle, _)| *aisle).collect();
    assert_eq!(
        aisles,
        [
            AisleCategory::Produce,
            AisleCategory::Protein,
            AisleCategory::Spices,
        ]
    );

    // Input order is preserved within a group.
    assert_eq!(groups[0].1[0].name, "Lemon");
    assert_eq!(groups[0].1[1].name, "Fresh basil");
}

#[test]
fn test_share_text_lists_only_needed_items() {
    let mut items = vec![
        make_ingredient("Spinach", 100.0, "g", AisleCategory::Produce),
        make_ingredient("Coconut milk", 400.0, "ml", AisleCategory::Pantry),
        make_ingredient("Salt", 1.0, "tsp", AisleCategory::Spices),
    ];
    items[2].have = Some(true);

    let recipe = make_recipe("Curry", items, vec![], 35);
    let list = GroceryList::snapshot_of(&recipe, datetime!(2026-02-10 18:30 UTC));

    let text = list.share_text();
    assert_eq!(text, "• Spinach — 100 g\n• Coconut milk — 400 ml");
}
