//! Load labelled scenario batches from CSV
//!
//! The engine's contract assumes finite numeric inputs; parsing user-supplied
//! files and rejecting non-finite values happens here, at the boundary, so the
//! calculation functions never have to.

use super::AssumptionSet;
use csv::Reader;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a scenario file
#[derive(Debug, Error)]
pub enum AssumptionsError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario file: {0}")]
    Csv(#[from] csv::Error),

    #[error("scenario '{label}' has a non-finite value for {field}")]
    NonFinite { label: String, field: &'static str },
}

/// A labelled assumption set loaded from a scenario file
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioRecord {
    pub label: String,
    pub assumptions: AssumptionSet,
}

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Label")]
    label: String,
    #[serde(rename = "PropertyPrice")]
    property_price: f64,
    #[serde(rename = "DepositAmount")]
    deposit_amount: f64,
    #[serde(rename = "InterestRate")]
    interest_rate: f64,
    #[serde(rename = "MortgageTerm")]
    mortgage_term: u32,
    #[serde(rename = "MonthlyRent")]
    monthly_rent: f64,
    #[serde(rename = "MonthlyExpenses")]
    monthly_expenses: f64,
    #[serde(rename = "AnnualAppreciation")]
    annual_appreciation: f64,
    #[serde(rename = "AnnualRentIncrease")]
    annual_rent_increase: f64,
}

impl CsvRow {
    fn into_record(self) -> Result<ScenarioRecord, AssumptionsError> {
        let assumptions = AssumptionSet {
            property_price: self.property_price,
            deposit_amount: self.deposit_amount,
            interest_rate: self.interest_rate,
            mortgage_term: self.mortgage_term,
            monthly_rent: self.monthly_rent,
            monthly_expenses: self.monthly_expenses,
            annual_appreciation: self.annual_appreciation,
            annual_rent_increase: self.annual_rent_increase,
        };

        let fields: [(&'static str, f64); 7] = [
            ("PropertyPrice", assumptions.property_price),
            ("DepositAmount", assumptions.deposit_amount),
            ("InterestRate", assumptions.interest_rate),
            ("MonthlyRent", assumptions.monthly_rent),
            ("MonthlyExpenses", assumptions.monthly_expenses),
            ("AnnualAppreciation", assumptions.annual_appreciation),
            ("AnnualRentIncrease", assumptions.annual_rent_increase),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(AssumptionsError::NonFinite {
                    label: self.label,
                    field,
                });
            }
        }

        Ok(ScenarioRecord {
            label: self.label,
            assumptions,
        })
    }
}

/// Load scenarios from a CSV file
pub fn load_scenarios(path: &Path) -> Result<Vec<ScenarioRecord>, AssumptionsError> {
    let records = load_scenarios_from_reader(std::fs::File::open(path)?)?;
    log::debug!("loaded {} scenarios from {}", records.len(), path.display());
    Ok(records)
}

/// Load scenarios from any reader producing scenario CSV
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<ScenarioRecord>, AssumptionsError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in csv_reader.deserialize::<CsvRow>() {
        records.push(row?.into_record()?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Label,PropertyPrice,DepositAmount,InterestRate,MortgageTerm,MonthlyRent,MonthlyExpenses,AnnualAppreciation,AnnualRentIncrease
baseline,250000,62500,4.5,25,1200,200,3.5,2.5
short-term,100000,20000,0,10,500,0,0,0
";

    #[test]
    fn test_loads_labelled_scenarios() {
        let records = load_scenarios_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].label, "baseline");
        assert_eq!(records[0].assumptions, AssumptionSet::example());

        assert_eq!(records[1].label, "short-term");
        assert_eq!(records[1].assumptions.mortgage_term, 10);
        assert_eq!(records[1].assumptions.interest_rate, 0.0);
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let bad = "\
Label,PropertyPrice,DepositAmount,InterestRate,MortgageTerm,MonthlyRent,MonthlyExpenses,AnnualAppreciation,AnnualRentIncrease
broken,250000,62500,NaN,25,1200,200,3.5,2.5
";
        let err = load_scenarios_from_reader(bad.as_bytes()).unwrap_err();
        match err {
            AssumptionsError::NonFinite { label, field } => {
                assert_eq!(label, "broken");
                assert_eq!(field, "InterestRate");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_malformed_rows() {
        let bad = "\
Label,PropertyPrice,DepositAmount,InterestRate,MortgageTerm,MonthlyRent,MonthlyExpenses,AnnualAppreciation,AnnualRentIncrease
broken,not-a-number,62500,4.5,25,1200,200,3.5,2.5
";
        assert!(matches!(
            load_scenarios_from_reader(bad.as_bytes()),
            Err(AssumptionsError::Csv(_))
        ));
    }
}
