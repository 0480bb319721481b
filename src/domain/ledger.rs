use crate::domain::money::Money;
use crate::error::{MachineError, Result};

/// Outcome of an accepted payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Amount handed back to the customer, rounded to cents.
    pub change: Money,
}

/// Running total of money earned by the machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    revenue: Money,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revenue(&self) -> Money {
        self.revenue
    }

    /// Accepts or refuses a payment for something costing `price`.
    ///
    /// On success the revenue grows by `price` (never by the tendered amount).
    /// A refused payment leaves the ledger untouched.
    pub fn settle(&mut self, tendered: Money, price: Money) -> Result<Settlement> {
        if tendered < price {
            return Err(MachineError::InsufficientPayment { tendered, price });
        }

        let change = (tendered - price).round_cents();
        self.revenue += price;
        Ok(Settlement { change })
    }
}
