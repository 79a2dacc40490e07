//! Metrics module - pure derivations over the water log.

mod metrics_calculator;
pub mod metrics_model;

pub use metrics_calculator::{
    achievements, compute, current_streak, daily_totals, goal_percentage, remaining_ml,
    today_total, weekly_series,
};
pub use metrics_model::*;
