use crate::error::{MachineError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// Number of decimal places every amount is rounded to.
pub const CENTS_DP: u32 = 2;

/// A monetary value in dollars.
///
/// Wraps `rust_decimal::Decimal` so coin arithmetic stays exact. Rounding to
/// cents always uses round-half-to-even: `0.125` becomes `0.12` and `0.135`
/// becomes `0.14`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn round_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(CENTS_DP, RoundingStrategy::MidpointNearestEven),
        )
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.round_cents().0)
    }
}

/// Coins accepted by the slot, in the order the customer is asked for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coin {
    Quarter,
    Dime,
    Nickel,
    Penny,
}

impl Coin {
    pub const ALL: [Coin; 4] = [Coin::Quarter, Coin::Dime, Coin::Nickel, Coin::Penny];

    pub fn value(&self) -> Money {
        match self {
            Coin::Quarter => Money(dec!(0.25)),
            Coin::Dime => Money(dec!(0.10)),
            Coin::Nickel => Money(dec!(0.05)),
            Coin::Penny => Money(dec!(0.01)),
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Coin::Quarter => "quarters",
            Coin::Dime => "dimes",
            Coin::Nickel => "nickels",
            Coin::Penny => "pennies",
        }
    }

    /// Parses the customer's answer to "How many <coins>?".
    ///
    /// Surrounding whitespace is ignored; anything that is not a non-negative
    /// integer up to `u64::MAX` is rejected.
    pub fn parse_count(&self, input: &str) -> Result<u64> {
        input
            .trim()
            .parse::<u64>()
            .map_err(|_| MachineError::InvalidCoinInput {
                coin: *self,
                input: input.to_string(),
            })
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Coin::Quarter => "quarter",
            Coin::Dime => "dime",
            Coin::Nickel => "nickel",
            Coin::Penny => "penny",
        };
        f.write_str(name)
    }
}

/// How many of each coin were inserted for one payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoinCounts {
    pub quarters: u64,
    pub dimes: u64,
    pub nickels: u64,
    pub pennies: u64,
}

impl CoinCounts {
    pub fn new(quarters: u64, dimes: u64, nickels: u64, pennies: u64) -> Self {
        Self {
            quarters,
            dimes,
            nickels,
            pennies,
        }
    }

    pub fn count(&self, coin: Coin) -> u64 {
        match coin {
            Coin::Quarter => self.quarters,
            Coin::Dime => self.dimes,
            Coin::Nickel => self.nickels,
            Coin::Penny => self.pennies,
        }
    }

    pub fn set(&mut self, coin: Coin, count: u64) {
        match coin {
            Coin::Quarter => self.quarters = count,
            Coin::Dime => self.dimes = count,
            Coin::Nickel => self.nickels = count,
            Coin::Penny => self.pennies = count,
        }
    }

    /// Tendered amount, rounded to cents.
    pub fn total(&self) -> Money {
        Coin::ALL
            .into_iter()
            .fold(Money::ZERO, |sum, coin| {
                sum + Money(Decimal::from(self.count(coin)) * coin.value().0)
            })
            .round_cents()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(2.50));
        let b = Money::new(dec!(1.50));
        assert_eq!(a + b, Money::new(dec!(4.0)));
        assert_eq!(a - b, Money::new(dec!(1.0)));

        let mut total = Money::ZERO;
        total += a;
        total += b;
        assert_eq!(total, Money::new(dec!(4)));
    }

    #[test]
    fn test_money_display_has_two_decimals() {
        assert_eq!(Money::ZERO.to_string(), "$0.00");
        assert_eq!(Money::new(dec!(1.5)).to_string(), "$1.50");
        assert_eq!(Money::new(dec!(3)).to_string(), "$3.00");
        assert_eq!(Money::new(dec!(0.05)).to_string(), "$0.05");
    }

    #[test]
    fn test_round_half_to_even() {
        assert_eq!(Money::new(dec!(0.125)).round_cents(), Money::new(dec!(0.12)));
        assert_eq!(Money::new(dec!(0.135)).round_cents(), Money::new(dec!(0.14)));
        assert_eq!(Money::new(dec!(2.675)).round_cents(), Money::new(dec!(2.68)));
        assert_eq!(Money::new(dec!(0.1251)).round_cents(), Money::new(dec!(0.13)));
        assert_eq!(Money::new(dec!(0.124)).round_cents(), Money::new(dec!(0.12)));
    }

    #[test]
    fn test_coin_counts_total() {
        assert_eq!(CoinCounts::new(2, 2, 0, 0).total(), Money::new(dec!(0.70)));
        assert_eq!(CoinCounts::new(6, 0, 0, 0).total(), Money::new(dec!(1.50)));
        assert_eq!(CoinCounts::new(1, 1, 1, 1).total(), Money::new(dec!(0.41)));
        assert_eq!(CoinCounts::default().total(), Money::ZERO);
    }

    #[test]
    fn test_total_is_exact_for_many_pennies() {
        assert_eq!(CoinCounts::new(0, 0, 0, 333).total(), Money::new(dec!(3.33)));
        assert_eq!(CoinCounts::new(0, 3, 0, 0).total(), Money::new(dec!(0.30)));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(Coin::Quarter.parse_count("6").unwrap(), 6);
        assert_eq!(Coin::Dime.parse_count("  3 \n").unwrap(), 3);
        assert_eq!(Coin::Nickel.parse_count("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_count_accepts_counts_beyond_u32() {
        let quarters = Coin::Quarter.parse_count("5000000000").unwrap();
        assert_eq!(quarters, 5_000_000_000);

        let total = CoinCounts::new(quarters, 0, 0, 0).total();
        assert_eq!(total, Money::new(dec!(1250000000.00)));
        assert_eq!(total.to_string(), "$1250000000.00");
    }

    #[test]
    fn test_parse_count_rejects_non_integers() {
        for input in ["", "abc", "1.5", "-1", "two", "18446744073709551616"] {
            let result = Coin::Penny.parse_count(input);
            assert!(
                matches!(result, Err(MachineError::InvalidCoinInput { coin: Coin::Penny, .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_coin_counts_set_and_count() {
        let mut counts = CoinCounts::default();
        for (i, coin) in Coin::ALL.into_iter().enumerate() {
            counts.set(coin, i as u64 + 1);
        }
        assert_eq!(counts, CoinCounts::new(1, 2, 3, 4));
        assert_eq!(counts.count(Coin::Nickel), 3);
    }
}
