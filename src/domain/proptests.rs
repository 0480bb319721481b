//! Property-based tests for stock checks and payments.

use super::inventory::Inventory;
use super::ledger::Ledger;
use super::menu::{Drink, Ingredient};
use super::money::{CoinCounts, Money};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn arb_drink() -> impl Strategy<Value = Drink> {
    prop_oneof![
        Just(Drink::Espresso),
        Just(Drink::Latte),
        Just(Drink::Cappuccino),
    ]
}

fn arb_inventory() -> impl Strategy<Value = Inventory> {
    (0u32..400, 0u32..300, 0u32..150).prop_map(|(water, milk, coffee)| {
        Inventory::new([
            (Ingredient::Water, water),
            (Ingredient::Milk, milk),
            (Ingredient::Coffee, coffee),
        ])
    })
}

fn arb_coin_counts() -> impl Strategy<Value = CoinCounts> {
    (0u64..100, 0u64..100, 0u64..100, 0u64..1000)
        .prop_map(|(q, d, n, p)| CoinCounts::new(q, d, n, p))
}

fn arb_money() -> impl Strategy<Value = Money> {
    (0i64..100_000).prop_map(|cents| Money::new(Decimal::new(cents, 2)))
}

proptest! {
    #[test]
    fn sufficient_iff_every_level_covers_recipe(
        drink in arb_drink(),
        inventory in arb_inventory(),
    ) {
        let expected = drink
            .recipe()
            .iter()
            .all(|(ingredient, required)| inventory.level(*ingredient) >= *required);
        prop_assert_eq!(inventory.is_sufficient(drink.recipe()), expected);
    }

    #[test]
    fn deduct_after_check_subtracts_exactly(
        drink in arb_drink(),
        mut inventory in arb_inventory(),
    ) {
        prop_assume!(inventory.is_sufficient(drink.recipe()));
        let before = inventory.clone();
        inventory.deduct(drink.recipe());
        for ingredient in Ingredient::ALL {
            let used = drink
                .recipe()
                .iter()
                .find(|(i, _)| *i == ingredient)
                .map_or(0, |(_, amount)| *amount);
            prop_assert_eq!(inventory.level(ingredient), before.level(ingredient) - used);
        }
    }

    #[test]
    fn tendered_total_is_non_negative_cents(counts in arb_coin_counts()) {
        let total = counts.total();
        prop_assert!(total >= Money::ZERO);
        prop_assert!(total.value().scale() <= 2);
    }

    #[test]
    fn settle_credits_price_only_when_covered(
        tendered in arb_money(),
        price in arb_money(),
        start in arb_money(),
    ) {
        let mut ledger = Ledger::new();
        ledger.settle(start, start).unwrap();
        let result = ledger.settle(tendered, price);
        if tendered < price {
            prop_assert!(result.is_err());
            prop_assert_eq!(ledger.revenue(), start);
        } else {
            let settlement = result.unwrap();
            prop_assert_eq!(ledger.revenue(), start + price);
            prop_assert_eq!(settlement.change, tendered - price);
        }
    }
}
