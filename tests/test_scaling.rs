//! Integration tests for ingredient scaling.

mod common;

use common::*;

use cookturn::models::AisleCategory;
use cookturn::scaling::scale;

#[test]
fn test_scale_doubles_amounts_exactly() {
    let ingredients = vec![
        make_ingredient("Penne pasta", 400.0, "g", AisleCategory::Pantry),
        make_ingredient("Black pepper", 0.5, "tsp", AisleCategory::Spices),
    ];

    let scaled = scale(&ingredients, 4, 8);
    assert_eq!(scaled[0].amount, 800.0);
    assert_eq!(scaled[1].amount, 1.0);

    // Everything but the amount is copied through.
    assert_eq!(scaled[0].name, "Penne pasta");
    assert_eq!(scaled[0].unit, "g");
    assert_eq!(scaled[0].aisle, AisleCategory::Pantry);
}

#[test]
fn test_scale_rounds_to_two_decimals() {
    let ingredients = vec![make_ingredient("Milk", 1.0, "cup", AisleCategory::Dairy)];

    // 1 * 2/3 = 0.666... -> 0.67
    let scaled = scale(&ingredients, 3, 2);
    assert_eq!(scaled[0].amount, 0.67);

    // 1 * 1/3 = 0.333... -> 0.33
    let scaled = scale(&ingredients, 3, 1);
    assert_eq!(scaled[0].amount, 0.33);
}

#[test]
fn test_scale_does_not_mutate_input() {
    let ingredients = vec![make_ingredient("Rice", 200.0, "g", AisleCategory::Pantry)];
    let _ = scale(&ingredients, 2, 6);
    assert_eq!(ingredients[0].amount, 200.0);
}

#[test]
fn test_scale_round_trip_is_approximate_identity() {
    let ingredients = vec![
        make_ingredient("Heavy cream", 240.0, "ml", AisleCategory::Dairy),
        make_ingredient("Lemon", 2.0, "whole", AisleCategory::Produce),
        make_ingredient("Salt", 1.0, "tsp", AisleCategory::Spices),
        make_ingredient("Black pepper", 0.5, "tsp", AisleCategory::Spices),
    ];

    for (n, m) in [(4u32, 6u32), (4, 2), (2, 7), (3, 5)] {
        let there = scale(&ingredients, n, m);
        let back = scale(&there, m, n);
        for (original, returned) in ingredients.iter().zip(&back) {
            // Two-decimal rounding happens on each leg, so allow a cent of
            // drift per unit.
            assert!(
                (original.amount - returned.amount).abs() < 0.02,
                "{}: {} -> {} servings -> {} came back as {}",
                original.name,
                n,
                m,
                original.amount,
                returned.amount
            );
        }
    }
}
