//! Projection simulator for the 26-point (years 0-25) portfolio forecast

mod engine;
mod series;
mod state;

pub use engine::{project, PROJECTION_YEARS};
pub use series::{ProjectionPoint, ProjectionSeries, ProjectionSummary};
pub use state::ProjectionState;
