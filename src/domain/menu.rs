use crate::domain::money::Money;
use crate::error::MachineError;
use rust_decimal_macros::dec;
use std::fmt;
use std::str::FromStr;

/// A consumable the machine keeps in stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ingredient {
    Water,
    Milk,
    Coffee,
}

impl Ingredient {
    pub const ALL: [Ingredient; 3] = [Ingredient::Water, Ingredient::Milk, Ingredient::Coffee];

    pub fn name(&self) -> &'static str {
        match self {
            Ingredient::Water => "water",
            Ingredient::Milk => "milk",
            Ingredient::Coffee => "coffee",
        }
    }

    /// Unit the quantity is measured in: millilitres for liquids, grams for coffee.
    pub fn unit(&self) -> &'static str {
        match self {
            Ingredient::Water | Ingredient::Milk => "ml",
            Ingredient::Coffee => "g",
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const ESPRESSO_RECIPE: &[(Ingredient, u32)] = &[(Ingredient::Water, 50), (Ingredient::Coffee, 18)];

const LATTE_RECIPE: &[(Ingredient, u32)] = &[
    (Ingredient::Water, 200),
    (Ingredient::Milk, 150),
    (Ingredient::Coffee, 24),
];

const CAPPUCCINO_RECIPE: &[(Ingredient, u32)] = &[
    (Ingredient::Water, 250),
    (Ingredient::Milk, 100),
    (Ingredient::Coffee, 24),
];

/// The fixed menu.
///
/// Each drink carries its recipe and price, so an order can only ever refer to
/// something the machine knows how to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Drink {
    Espresso,
    Latte,
    Cappuccino,
}

impl Drink {
    pub const ALL: [Drink; 3] = [Drink::Espresso, Drink::Latte, Drink::Cappuccino];

    pub fn name(&self) -> &'static str {
        match self {
            Drink::Espresso => "espresso",
            Drink::Latte => "latte",
            Drink::Cappuccino => "cappuccino",
        }
    }

    /// Ingredient quantities consumed by one cup, in the order they are checked.
    pub fn recipe(&self) -> &'static [(Ingredient, u32)] {
        match self {
            Drink::Espresso => ESPRESSO_RECIPE,
            Drink::Latte => LATTE_RECIPE,
            Drink::Cappuccino => CAPPUCCINO_RECIPE,
        }
    }

    pub fn price(&self) -> Money {
        match self {
            Drink::Espresso => Money::new(dec!(1.50)),
            Drink::Latte => Money::new(dec!(2.50)),
            Drink::Cappuccino => Money::new(dec!(3.00)),
        }
    }
}

impl fmt::Display for Drink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Matches an already-normalized (lower case) drink name.
impl FromStr for Drink {
    type Err = MachineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Drink::ALL
            .into_iter()
            .find(|drink| drink.name() == s)
            .ok_or_else(|| MachineError::InvalidChoice(s.to_string()))
    }
}
