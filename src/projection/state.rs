//! Projection state carried across the year loop

use crate::assumptions::AssumptionSet;
use crate::metrics::MetricsSnapshot;

/// A mortgage balance below half a cent after the year-end clamp is
/// floating-point residue from the 300 monthly sub-steps, not a real debt;
/// snap it to zero so an at-term loan reports as exactly repaid.
const BALANCE_EPSILON: f64 = 0.005;

/// Portfolio state at the start of a projection year
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current property value (compounds by the appreciation rate)
    pub property_value: f64,

    /// Outstanding mortgage balance, floored at zero
    pub mortgage_balance: f64,

    /// Cash flow accumulated since purchase
    pub cumulative_cash_flow: f64,

    /// Monthly rent for the current year (compounds by the rent-growth rate)
    pub current_monthly_rent: f64,

    /// Rent collected since purchase
    pub total_rent_collected: f64,
}

impl ProjectionState {
    /// Initialize state at acquisition
    pub fn new(assumptions: &AssumptionSet, metrics: &MetricsSnapshot) -> Self {
        Self {
            property_value: assumptions.property_price,
            mortgage_balance: metrics.loan_amount,
            cumulative_cash_flow: 0.0,
            current_monthly_rent: assumptions.monthly_rent,
            total_rent_collected: 0.0,
        }
    }

    /// Advance to the next year. Applied after the year's point is emitted,
    /// so it never affects the point it follows.
    ///
    /// The balance is amortized through 12 explicit monthly sub-steps rather
    /// than a closed-form annual formula: it keeps the method identical to the
    /// payment derivation and tolerates a loan repaid before the horizon (the
    /// balance saturates at zero and further payments have no effect on it).
    pub fn advance_year(
        &mut self,
        assumptions: &AssumptionSet,
        monthly_payment: f64,
        monthly_rate: f64,
        annual_rent: f64,
        annual_cash_flow: f64,
    ) {
        self.property_value *= 1.0 + assumptions.annual_appreciation / 100.0;
        self.current_monthly_rent *= 1.0 + assumptions.annual_rent_increase / 100.0;
        self.total_rent_collected += annual_rent;
        self.cumulative_cash_flow += annual_cash_flow;

        for _month in 0..12 {
            let interest_payment = self.mortgage_balance * monthly_rate;
            let principal_payment = monthly_payment - interest_payment;
            self.mortgage_balance -= principal_payment;
        }
        self.mortgage_balance = self.mortgage_balance.max(0.0);
        if self.mortgage_balance < BALANCE_EPSILON {
            self.mortgage_balance = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::compute;

    #[test]
    fn test_initial_state_matches_acquisition() {
        let a = AssumptionSet::example();
        let m = compute(&a);
        let s = ProjectionState::new(&a, &m);

        assert_eq!(s.property_value, 250_000.0);
        assert_eq!(s.mortgage_balance, 187_500.0);
        assert_eq!(s.cumulative_cash_flow, 0.0);
        assert_eq!(s.current_monthly_rent, 1_200.0);
        assert_eq!(s.total_rent_collected, 0.0);
    }

    #[test]
    fn test_advance_year_compounds_growth() {
        let a = AssumptionSet::example();
        let m = compute(&a);
        let mut s = ProjectionState::new(&a, &m);

        s.advance_year(&a, m.monthly_payment, a.monthly_rate(), 14_400.0, -500.0);

        assert!((s.property_value - 250_000.0 * 1.035).abs() < 1e-6);
        assert!((s.current_monthly_rent - 1_200.0 * 1.025).abs() < 1e-9);
        assert_eq!(s.total_rent_collected, 14_400.0);
        assert_eq!(s.cumulative_cash_flow, -500.0);
        // A year of payments retires some principal
        assert!(s.mortgage_balance < 187_500.0);
        assert!(s.mortgage_balance > 180_000.0);
    }

    #[test]
    fn test_balance_saturates_at_zero() {
        let a = AssumptionSet {
            interest_rate: 0.0,
            mortgage_term: 1,
            ..AssumptionSet::example()
        };
        let m = compute(&a);
        let mut s = ProjectionState::new(&a, &m);

        s.advance_year(&a, m.monthly_payment, a.monthly_rate(), 0.0, 0.0);
        assert_eq!(s.mortgage_balance, 0.0);

        // Further payments have no effect once repaid
        s.advance_year(&a, m.monthly_payment, a.monthly_rate(), 0.0, 0.0);
        assert_eq!(s.mortgage_balance, 0.0);
    }
}
