//! Report services for the planning dashboard.
//!
//! Turns depletion records and planning master data into engine-ready
//! tables: period bucketing (calendar year or rolling twelve), brand
//! aggregation, the volume drill-down, the scan-plan list and the budget
//! forecast. Data access goes through the repository traits in
//! [`repository`]; screens inject an implementation and stay free of any
//! ambient data.

pub mod aggregation;
pub mod budget_forecast;
pub mod error;
pub mod periods;
pub mod planning;
pub mod repository;
pub mod volume_drilldown;

pub use error::ReportError;
pub use periods::PeriodWindow;
