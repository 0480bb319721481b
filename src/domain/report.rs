use crate::domain::inventory::Inventory;
use crate::domain::menu::Ingredient;
use crate::domain::money::Money;
use std::fmt;

/// Snapshot of the machine's stock and takings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub water: u32,
    pub milk: u32,
    pub coffee: u32,
    pub money: Money,
}

impl Report {
    pub fn new(inventory: &Inventory, money: Money) -> Self {
        Self {
            water: inventory.level(Ingredient::Water),
            milk: inventory.level(Ingredient::Milk),
            coffee: inventory.level(Ingredient::Coffee),
            money,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Machine report:")?;
        writeln!(f, "Water: {}{}", self.water, Ingredient::Water.unit())?;
        writeln!(f, "Milk: {}{}", self.milk, Ingredient::Milk.unit())?;
        writeln!(f, "Coffee: {}{}", self.coffee, Ingredient::Coffee.unit())?;
        write!(f, "Money: {}", self.money)
    }
}
