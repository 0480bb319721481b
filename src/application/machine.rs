use crate::domain::inventory::Inventory;
use crate::domain::ledger::{Ledger, Settlement};
use crate::domain::menu::Drink;
use crate::domain::money::Money;
use crate::domain::report::Report;
use crate::error::Result;
use log::{debug, info};

/// The machine's mutable state: what is left in stock and what has been earned.
///
/// Every order step goes through here. A drink is only deducted from stock
/// after `check_stock` and `take_payment` have both succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoffeeMachine {
    inventory: Inventory,
    ledger: Ledger,
}

impl CoffeeMachine {
    /// Creates a machine filled to the factory levels with no takings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a machine with explicit starting stock.
    pub fn with_inventory(inventory: Inventory) -> Self {
        Self {
            inventory,
            ledger: Ledger::new(),
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn revenue(&self) -> Money {
        self.ledger.revenue()
    }

    /// Fails with the first ingredient the drink would run short of.
    pub fn check_stock(&self, drink: Drink) -> Result<()> {
        self.inventory.ensure_sufficient(drink.recipe()).inspect_err(|e| {
            info!("Cannot make {}: {}", drink, e);
        })
    }

    /// Charges the drink's price against the tendered amount.
    pub fn take_payment(&mut self, drink: Drink, tendered: Money) -> Result<Settlement> {
        let settlement = self.ledger.settle(tendered, drink.price()).inspect_err(|_| {
            info!("Refunded {} for {} costing {}", tendered, drink, drink.price());
        })?;
        debug!(
            "Accepted {} for {}, change {}, revenue now {}",
            tendered,
            drink,
            settlement.change,
            self.ledger.revenue()
        );
        Ok(settlement)
    }

    /// Uses up the drink's ingredients. Stock and payment must already be checked.
    pub fn dispense(&mut self, drink: Drink) {
        self.inventory.deduct(drink.recipe());
        info!("Dispensed {}", drink);
    }

    pub fn report(&self) -> Report {
        Report::new(&self.inventory, self.ledger.revenue())
    }
}
