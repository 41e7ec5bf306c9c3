//! Property Calculator - Investment calculation and projection engine for buy-to-let analysis
//!
//! This library provides:
//! - Single-point financial metrics (mortgage payment, yields, cash flow, ROI, break-even, LTV)
//! - A 26-point (years 0-25) portfolio projection with monthly amortization sub-stepping
//! - Named preset scenarios and CSV batch scenario loading
//! - A memoizing analysis runner with parallel batch support
//!
//! Both engine entry points (`compute` and `project`) are pure functions of
//! their inputs: no I/O, no shared state, total over finite numbers.

pub mod assumptions;
pub mod metrics;
pub mod projection;
pub mod rounding;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::{AssumptionSet, ScenarioRecord};
pub use metrics::{compute, MetricsSnapshot, BREAK_EVEN_NEVER};
pub use projection::{project, ProjectionPoint, ProjectionSeries, ProjectionSummary, PROJECTION_YEARS};
pub use scenario::{analyse, Analysis, AnalysisRunner};
