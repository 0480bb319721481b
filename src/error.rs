use crate::domain::menu::Ingredient;
use crate::domain::money::{Coin, Money};
use thiserror::Error;

/// Everything that can go wrong while serving a customer.
///
/// Apart from `IoError`, every variant is recovered by the console loop: its
/// `Display` text is the message shown to the customer.
#[derive(Error, Debug)]
pub enum MachineError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Sorry there is not enough {0}.")]
    InsufficientIngredient(Ingredient),
    #[error("Sorry that's not enough money. Money refunded.")]
    InsufficientPayment { tendered: Money, price: Money },
    #[error("Invalid coin input. Treating as zero.")]
    InvalidCoinInput { coin: Coin, input: String },
    #[error("Invalid choice. Please choose espresso, latte, cappuccino, report, or off.")]
    InvalidChoice(String),
}

pub type Result<T> = std::result::Result<T, MachineError>;
