//! Time-to-failure forecasts for over-pressure units.
//!
//! Exponential decay model: 48 hours at the threshold, shrinking by a
//! factor of `e^-0.8` per bar of excess pressure, never below one hour.

use crate::health::{PRESSURE_CRITICAL_THRESHOLD, is_critical};

/// Forecast horizon (hours) for a unit right at the threshold.
pub const BASE_HOURS_TO_FAILURE: f64 = 48.0;
/// Decay rate per bar of excess pressure.
pub const FAILURE_DECAY_PER_BAR: f64 = 0.8;
/// Shortest forecast ever reported.
pub const MIN_HOURS_TO_FAILURE: u32 = 1;

/// Predicted hours until failure, or `None` for a stable unit.
pub fn predict_hours_to_failure(pressure: f64) -> Option<u32> {
    if !is_critical(pressure) {
        return None;
    }
    let excess = pressure - PRESSURE_CRITICAL_THRESHOLD;
    let hours = (BASE_HOURS_TO_FAILURE * (-FAILURE_DECAY_PER_BAR * excess).exp()).floor();
    // `hours` lies in [0, 48); the cast cannot truncate.
    Some((hours as u32).max(MIN_HOURS_TO_FAILURE))
}
