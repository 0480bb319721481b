//! Domain layer: the menu, stock, money and takings of the machine.
//!
//! Nothing in here performs I/O; the console drives these types.

pub mod inventory;
pub mod ledger;
pub mod menu;
pub mod money;
pub mod report;

#[cfg(test)]
mod proptests;
