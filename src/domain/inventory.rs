use crate::domain::menu::Ingredient;
use crate::error::{MachineError, Result};
use log::debug;
use std::collections::HashMap;

/// Water the machine is filled with at start-up, in millilitres.
pub const INITIAL_WATER_ML: u32 = 300;

/// Milk the machine is filled with at start-up, in millilitres.
pub const INITIAL_MILK_ML: u32 = 200;

/// Ground coffee the machine is filled with at start-up, in grams.
pub const INITIAL_COFFEE_G: u32 = 100;

/// Remaining quantity of every ingredient.
///
/// An ingredient with no entry counts as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    levels: HashMap<Ingredient, u32>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new([
            (Ingredient::Water, INITIAL_WATER_ML),
            (Ingredient::Milk, INITIAL_MILK_ML),
            (Ingredient::Coffee, INITIAL_COFFEE_G),
        ])
    }
}

impl Inventory {
    pub fn new(levels: impl IntoIterator<Item = (Ingredient, u32)>) -> Self {
        Self {
            levels: levels.into_iter().collect(),
        }
    }

    pub fn level(&self, ingredient: Ingredient) -> u32 {
        self.levels.get(&ingredient).copied().unwrap_or(0)
    }

    /// Checks every requirement against what is in stock.
    ///
    /// Fails with the first ingredient, in recipe order, that would run short.
    pub fn ensure_sufficient(&self, requirements: &[(Ingredient, u32)]) -> Result<()> {
        match requirements
            .iter()
            .find(|(ingredient, required)| *required > self.level(*ingredient))
        {
            Some((ingredient, _)) => Err(MachineError::InsufficientIngredient(*ingredient)),
            None => Ok(()),
        }
    }

    pub fn is_sufficient(&self, requirements: &[(Ingredient, u32)]) -> bool {
        self.ensure_sufficient(requirements).is_ok()
    }

    /// Removes the required amounts from stock without checking them first.
    ///
    /// Callers run `ensure_sufficient` beforehand; levels bottom out at zero.
    pub fn deduct(&mut self, requirements: &[(Ingredient, u32)]) {
        for (ingredient, required) in requirements {
            let level = self.levels.entry(*ingredient).or_insert(0);
            *level = level.saturating_sub(*required);
            debug!("Remains {} of {}", level, ingredient);
        }
    }
}
