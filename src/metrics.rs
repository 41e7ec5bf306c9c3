//! Metrics Calculator: single-point financial indicators for an assumption set

use crate::assumptions::AssumptionSet;
use crate::rounding::round_cents;
use serde::{Deserialize, Serialize};

/// Sentinel break-even value meaning the deposit is never recovered under the
/// current assumptions (monthly cash flow is negative)
pub const BREAK_EVEN_NEVER: i64 = -1;

/// Snapshot of financial metrics derived from one assumption set.
///
/// Monetary totals and cash flows are rounded to the cent; `monthly_payment`
/// and `loan_amount` are kept at full precision (the projection consumes the
/// payment directly, and display rounding belongs to the presenter).
/// Percentages are kept at full floating precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Borrowed amount: price minus deposit
    pub loan_amount: f64,

    /// Monthly mortgage repayment over the full term
    pub monthly_payment: f64,

    /// Interest paid over the life of the loan
    pub total_interest: f64,

    /// Total repaid over the life of the loan (principal plus interest)
    pub total_repayment: f64,

    /// Annual rent as a percentage of price
    pub gross_yield: f64,

    /// Annual rent net of expenses as a percentage of price
    pub net_yield: f64,

    /// Rent minus mortgage payment minus expenses, per month
    pub monthly_cash_flow: f64,

    /// Monthly cash flow annualised
    pub annual_cash_flow: f64,

    /// Approximate year-1 principal paid down: a year of payments less the
    /// lifetime interest spread evenly across the term
    pub first_year_equity_gain: f64,

    /// First-year return on the deposit, combining cash flow and appreciation
    pub roi: f64,

    /// Months of positive cash flow needed to recover the deposit,
    /// [`BREAK_EVEN_NEVER`] when cash flow is negative
    pub break_even_months: i64,

    /// Loan-to-value percentage
    pub ltv: f64,
}

/// Derive the metrics snapshot for an assumption set.
///
/// Total over finite inputs: every division is guarded, so the result never
/// contains NaN or infinities. No I/O, no side effects; concurrent calls with
/// different inputs are trivially safe.
pub fn compute(assumptions: &AssumptionSet) -> MetricsSnapshot {
    let loan_amount = assumptions.loan_amount();
    let monthly_rate = assumptions.monthly_rate();
    let total_payments = assumptions.total_payments();

    // Standard fixed-rate repayment-mortgage annuity formula, degrading to
    // straight-line principal repayment at zero rate
    let monthly_payment = if total_payments == 0 {
        0.0
    } else if monthly_rate > 0.0 {
        let growth = (1.0 + monthly_rate).powi(total_payments as i32);
        loan_amount * (monthly_rate * growth) / (growth - 1.0)
    } else {
        loan_amount / total_payments as f64
    };

    let total_repayment = monthly_payment * total_payments as f64;
    let total_interest = total_repayment - loan_amount;

    let annual_rent = assumptions.monthly_rent * 12.0;
    let annual_expenses = assumptions.monthly_expenses * 12.0;

    let (gross_yield, net_yield, ltv) = if assumptions.property_price == 0.0 {
        (0.0, 0.0, 0.0)
    } else {
        (
            annual_rent / assumptions.property_price * 100.0,
            (annual_rent - annual_expenses) / assumptions.property_price * 100.0,
            loan_amount / assumptions.property_price * 100.0,
        )
    };

    let monthly_cash_flow =
        assumptions.monthly_rent - monthly_payment - assumptions.monthly_expenses;
    let annual_cash_flow = monthly_cash_flow * 12.0;

    // Year-1 principal approximation: lifetime interest spread evenly across
    // the term rather than a true amortization split
    let first_year_equity_gain = if assumptions.mortgage_term == 0 {
        0.0
    } else {
        monthly_payment * 12.0 - total_interest / assumptions.mortgage_term as f64
    };

    let first_year_appreciation =
        assumptions.property_price * assumptions.annual_appreciation / 100.0;
    let roi = if assumptions.deposit_amount == 0.0 {
        0.0
    } else {
        (annual_cash_flow + first_year_appreciation) / assumptions.deposit_amount * 100.0
    };

    let break_even_months = if monthly_cash_flow > 0.0 {
        (assumptions.deposit_amount / monthly_cash_flow).ceil() as i64
    } else if monthly_cash_flow == 0.0 {
        // Nothing invested per month and nothing recovered: treated as
        // already broken even
        0
    } else {
        BREAK_EVEN_NEVER
    };

    MetricsSnapshot {
        loan_amount,
        monthly_payment,
        total_interest: round_cents(total_interest),
        total_repayment: round_cents(total_repayment),
        gross_yield,
        net_yield,
        monthly_cash_flow: round_cents(monthly_cash_flow),
        annual_cash_flow: round_cents(annual_cash_flow),
        first_year_equity_gain: round_cents(first_year_equity_gain),
        roi,
        break_even_months,
        ltv,
    }
}
