//! Investment assumptions driving one full metrics + projection run

mod presets;
pub mod loader;

pub use loader::{load_scenarios, ScenarioRecord};
pub use presets::{preset, preset_names};

use serde::{Deserialize, Serialize};

/// The immutable set of investment parameters for one calculation.
///
/// One instance drives one full metrics + projection run; the engine never
/// mutates it, and a changed input is a new value. All rates are percentage
/// numbers (`4.5` means 4.5% per year), not decimals.
///
/// The engine assumes every field is a finite number and performs no
/// business-rule validation beyond that: a deposit larger than the price or a
/// negative rent stay representable and simply flow through the arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssumptionSet {
    /// Purchase price of the property
    pub property_price: f64,

    /// Cash deposit; the amount actually used in every formula
    /// (the deposit percentage is display-only, see [`deposit_percent`](Self::deposit_percent))
    pub deposit_amount: f64,

    /// Annual mortgage interest rate as a percentage (e.g. `4.5`)
    pub interest_rate: f64,

    /// Mortgage term in whole years
    pub mortgage_term: u32,

    /// Rent collected per month at purchase
    pub monthly_rent: f64,

    /// Running costs per month (maintenance, insurance, management, voids)
    pub monthly_expenses: f64,

    /// Annual property value growth as a percentage; may be zero or negative
    pub annual_appreciation: f64,

    /// Annual rent growth as a percentage; may be zero or negative
    pub annual_rent_increase: f64,
}

impl AssumptionSet {
    /// Borrowed amount: price minus deposit. Not clamped - a deposit larger
    /// than the price yields a negative loan and the pipeline stays
    /// arithmetically well-defined.
    pub fn loan_amount(&self) -> f64 {
        self.property_price - self.deposit_amount
    }

    /// Monthly interest rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate / 100.0 / 12.0
    }

    /// Total number of monthly repayments over the term
    pub fn total_payments(&self) -> u32 {
        self.mortgage_term * 12
    }

    /// Deposit as a percentage of price. Display convenience only; 0 when the
    /// price is 0.
    pub fn deposit_percent(&self) -> f64 {
        if self.property_price == 0.0 {
            0.0
        } else {
            self.deposit_amount / self.property_price * 100.0
        }
    }

    /// Worked example used throughout the docs and CLI defaults:
    /// a £250k purchase at 75% LTV, 4.5% over 25 years.
    pub fn example() -> Self {
        Self {
            property_price: 250_000.0,
            deposit_amount: 62_500.0,
            interest_rate: 4.5,
            mortgage_term: 25,
            monthly_rent: 1_200.0,
            monthly_expenses: 200.0,
            annual_appreciation: 3.5,
            annual_rent_increase: 2.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_loan_figures() {
        let a = AssumptionSet::example();
        assert_eq!(a.loan_amount(), 187_500.0);
        assert_eq!(a.total_payments(), 300);
        assert!((a.monthly_rate() - 0.00375).abs() < 1e-12);
        assert!((a.deposit_percent() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_deposit_percent_zero_price() {
        let a = AssumptionSet {
            property_price: 0.0,
            ..AssumptionSet::example()
        };
        assert_eq!(a.deposit_percent(), 0.0);
    }

    #[test]
    fn test_oversized_deposit_gives_negative_loan() {
        let a = AssumptionSet {
            deposit_amount: 300_000.0,
            ..AssumptionSet::example()
        };
        assert_eq!(a.loan_amount(), -50_000.0);
    }
}
