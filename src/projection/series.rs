//! Projection output structures

use serde::{Deserialize, Serialize};

/// Simulated financial state for one projection year.
///
/// Stocks (`property_value`, `equity`, `mortgage_balance`, the cumulative
/// figures) reflect the start of the year; the `annual_*` flows are the
/// amounts for the year ahead. Year 0 is the state at acquisition, before any
/// appreciation or amortization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: u32,
    pub property_value: f64,
    pub equity: f64,
    pub total_rent_collected: f64,
    pub cumulative_cash_flow: f64,
    pub mortgage_balance: f64,
    pub annual_rent: f64,
    pub annual_mortgage: f64,
    pub annual_cash_flow: f64,
}

/// Ordered sequence of projection points, indexed by year ascending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    points: Vec<ProjectionPoint>,
}

impl ProjectionSeries {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in year order
    pub fn points(&self) -> &[ProjectionPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectionPoint> {
        self.points.iter()
    }

    /// Point for a specific year, if within the horizon
    pub fn year(&self, year: u32) -> Option<&ProjectionPoint> {
        self.points.get(year as usize)
    }

    /// First year in which the mortgage balance reaches zero
    pub fn payoff_year(&self) -> Option<u32> {
        self.points
            .iter()
            .find(|p| p.mortgage_balance == 0.0)
            .map(|p| p.year)
    }

    /// Horizon roll-up for reports
    pub fn summary(&self) -> ProjectionSummary {
        let last = self.points.last();
        ProjectionSummary {
            horizon_years: self.points.len().saturating_sub(1) as u32,
            final_property_value: last.map(|p| p.property_value).unwrap_or(0.0),
            final_equity: last.map(|p| p.equity).unwrap_or(0.0),
            total_rent_collected: last.map(|p| p.total_rent_collected).unwrap_or(0.0),
            cumulative_cash_flow: last.map(|p| p.cumulative_cash_flow).unwrap_or(0.0),
            payoff_year: self.payoff_year(),
        }
    }
}

impl<'a> IntoIterator for &'a ProjectionSeries {
    type Item = &'a ProjectionPoint;
    type IntoIter = std::slice::Iter<'a, ProjectionPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Summary statistics over the projected horizon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub horizon_years: u32,
    pub final_property_value: f64,
    pub final_equity: f64,
    pub total_rent_collected: f64,
    pub cumulative_cash_flow: f64,
    /// First projected year with the loan fully repaid, if within the horizon
    pub payoff_year: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::AssumptionSet;
    use crate::metrics::compute;
    use crate::projection::project;

    #[test]
    fn test_summary_reflects_final_point() {
        let a = AssumptionSet::example();
        let m = compute(&a);
        let series = project(&a, &m);

        let summary = series.summary();
        let last = series.year(25).unwrap();
        assert_eq!(summary.horizon_years, 25);
        assert_eq!(summary.final_property_value, last.property_value);
        assert_eq!(summary.final_equity, last.equity);
        assert_eq!(summary.payoff_year, Some(25));
    }

    #[test]
    fn test_payoff_year_before_horizon() {
        let a = AssumptionSet {
            mortgage_term: 10,
            ..AssumptionSet::example()
        };
        let m = compute(&a);
        let series = project(&a, &m);

        assert_eq!(series.payoff_year(), Some(10));
    }

    #[test]
    fn test_year_lookup() {
        let a = AssumptionSet::example();
        let m = compute(&a);
        let series = project(&a, &m);

        assert_eq!(series.year(0).unwrap().year, 0);
        assert_eq!(series.year(25).unwrap().year, 25);
        assert!(series.year(26).is_none());
    }
}
