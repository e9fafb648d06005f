use crate::artifacts::{Coordinate, HeatPoint, SensorReading};

/// Intensity used when a reading carries no value
pub const DEFAULT_INTENSITY: f64 = 0.0;

/// Turn sensor readings into heatmap points, one per reading.
///
/// A reading without a position is pinned to boundary vertex
/// `index % polygon.len()`, so repeated calls always give the same layout.
/// With no boundary to fall back on it is pinned to `fallback` instead
/// (typically the center of the map region).
pub fn to_heat_points(
    readings: &[SensorReading],
    polygon: &[Coordinate],
    fallback: Coordinate,
) -> Vec<HeatPoint> {
    readings
        .iter()
        .enumerate()
        .map(|(index, reading)| {
            let coordinate = match reading.coordinate {
                Some(c) => c,
                None if !polygon.is_empty() => polygon[index % polygon.len()],
                None => fallback,
            };
            HeatPoint {
                coordinate,
                intensity: reading.value.unwrap_or(DEFAULT_INTENSITY),
            }
        })
        .collect()
}
