// Water balance for a monitored field
//
// Compares the ground water reported by the field's sensors against what the
// crop needs per day. Values are liters per square meter.

use crate::artifacts::SensorReading;
use serde::{Deserialize, Serialize};

/// Assumed ground water content when a sensor does not report one
pub const DEFAULT_GROUND_WATER: f64 = 10.0;

const BANANA_REQUIREMENT: f64 = 6.0;
const GENERIC_REQUIREMENT: f64 = 4.0;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct WaterBalance {
    pub total_content: f64,
    pub required: f64,
    /// `required - total_content`; positive means a deficit
    pub difference: f64,
}

impl WaterBalance {
    pub fn is_deficit(&self) -> bool {
        self.difference > 0.0
    }

    /// Size of the deficit or surplus
    pub fn magnitude(&self) -> f64 {
        self.difference.abs()
    }
}

/// Sum of ground water levels across readings.
///
/// Only an absent level takes `DEFAULT_GROUND_WATER`; a reported 0.0 is a
/// dry sensor and counts as zero. With no readings at all the default is
/// returned as the whole field's content.
pub fn total_water_content(readings: &[SensorReading]) -> f64 {
    if readings.is_empty() {
        return DEFAULT_GROUND_WATER;
    }
    readings
        .iter()
        .map(|r| r.ground_water_level.unwrap_or(DEFAULT_GROUND_WATER))
        .sum()
}

/// Daily requirement for a crop. The crop name is matched ignoring case and
/// surrounding whitespace, so "banana" and " Banana " are the same crop.
pub fn crop_water_requirement(crop: &str) -> f64 {
    if crop.trim().eq_ignore_ascii_case("banana") {
        BANANA_REQUIREMENT
    } else {
        GENERIC_REQUIREMENT
    }
}

pub fn water_balance(readings: &[SensorReading], crop: &str) -> WaterBalance {
    let total_content = total_water_content(readings);
    let required = crop_water_requirement(crop);
    WaterBalance {
        total_content,
        required,
        difference: required - total_content,
    }
}

/// Mean of a set of readings, `None` when there is nothing to average
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
