//! Year-by-year projection of property value, equity, balance, and cash flow

use crate::assumptions::AssumptionSet;
use crate::metrics::MetricsSnapshot;

use super::series::{ProjectionPoint, ProjectionSeries};
use super::state::ProjectionState;

/// Fixed projection horizon. The series spans years `0..=PROJECTION_YEARS`,
/// 26 points in total, with year 0 the acquisition baseline.
pub const PROJECTION_YEARS: u32 = 25;

/// Project the portfolio over the fixed 25-year horizon.
///
/// Deterministic and pure: the only inputs are the assumption set and the
/// metrics snapshot computed from it (the projection consumes its
/// `loan_amount` and `monthly_payment`). Each point is emitted from the
/// pre-update state, then the state advances, so year 0 reflects the position
/// at acquisition before any growth or amortization.
///
/// `annual_mortgage` is the constant `monthly_payment * 12` for every year of
/// the horizon, including years after a short-term loan is repaid.
pub fn project(assumptions: &AssumptionSet, metrics: &MetricsSnapshot) -> ProjectionSeries {
    let monthly_rate = assumptions.monthly_rate();
    let annual_expenses = assumptions.monthly_expenses * 12.0;
    let annual_mortgage = metrics.monthly_payment * 12.0;

    let mut state = ProjectionState::new(assumptions, metrics);
    let mut series = ProjectionSeries::with_capacity(PROJECTION_YEARS as usize + 1);

    for year in 0..=PROJECTION_YEARS {
        let annual_rent = state.current_monthly_rent * 12.0;
        let annual_cash_flow = annual_rent - annual_mortgage - annual_expenses;

        // Equity is never reported negative; an under-water position shows as
        // balance exceeding value, not as a negative asset
        let equity = (state.property_value - state.mortgage_balance).max(0.0);

        series.push(ProjectionPoint {
            year,
            property_value: state.property_value,
            equity,
            total_rent_collected: state.total_rent_collected,
            cumulative_cash_flow: state.cumulative_cash_flow,
            mortgage_balance: state.mortgage_balance,
            annual_rent,
            annual_mortgage,
            annual_cash_flow,
        });

        state.advance_year(
            assumptions,
            metrics.monthly_payment,
            monthly_rate,
            annual_rent,
            annual_cash_flow,
        );
    }

    series
}
