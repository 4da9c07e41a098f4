//! Aggregations over stored fleet records
//!
//! Dashboard totals and chart series. Everything here works from the stored
//! emission rows; nothing re-runs the estimator.

pub mod dashboard;
pub mod series;

pub use dashboard::DashboardStats;
pub use series::{
    before_after, consumption_by_source, emission_trend, energy_by_machine, machines_by_source,
    BeforeAfter, NamedValue, TrendPoint,
};
