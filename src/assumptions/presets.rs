//! Named preset scenarios
//!
//! One-click starting points that populate a complete assumption set in one
//! step. The engine treats presets identically to manually entered values.

use super::AssumptionSet;

/// (name, assumptions) pairs for every built-in preset
const PRESETS: &[(&str, AssumptionSet)] = &[
    (
        "starter-flat",
        AssumptionSet {
            property_price: 140_000.0,
            deposit_amount: 35_000.0,
            interest_rate: 5.2,
            mortgage_term: 25,
            monthly_rent: 750.0,
            monthly_expenses: 140.0,
            annual_appreciation: 3.0,
            annual_rent_increase: 2.5,
        },
    ),
    (
        "family-house",
        AssumptionSet {
            property_price: 320_000.0,
            deposit_amount: 80_000.0,
            interest_rate: 4.8,
            mortgage_term: 25,
            monthly_rent: 1_450.0,
            monthly_expenses: 260.0,
            annual_appreciation: 3.5,
            annual_rent_increase: 2.5,
        },
    ),
    (
        "city-centre-apartment",
        AssumptionSet {
            property_price: 210_000.0,
            deposit_amount: 52_500.0,
            interest_rate: 5.0,
            mortgage_term: 20,
            monthly_rent: 1_100.0,
            monthly_expenses: 280.0,
            annual_appreciation: 4.0,
            annual_rent_increase: 3.0,
        },
    ),
];

/// Look up a preset by name
pub fn preset(name: &str) -> Option<AssumptionSet> {
    PRESETS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, a)| a.clone())
}

/// Names of all built-in presets
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|(n, _)| *n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_is_finite_and_positive() {
        for name in preset_names() {
            let a = preset(name).unwrap();
            assert!(a.property_price > 0.0, "{name}");
            assert!(a.deposit_amount > 0.0 && a.deposit_amount <= a.property_price, "{name}");
            assert!(a.mortgage_term > 0, "{name}");
            for v in [
                a.property_price,
                a.deposit_amount,
                a.interest_rate,
                a.monthly_rent,
                a.monthly_expenses,
                a.annual_appreciation,
                a.annual_rent_increase,
            ] {
                assert!(v.is_finite(), "{name}");
            }
        }
    }

    #[test]
    fn test_unknown_preset_is_none() {
        assert!(preset("castle").is_none());
    }
}
