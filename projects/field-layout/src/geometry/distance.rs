use crate::artifacts::Coordinate;

/// Spherical Earth radius used by every metric computation in the engine
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters using the haversine formula.
///
/// Defined for every pair of finite coordinates. The haversine term is clamped
/// to [0, 1] so coincident and antipodal pairs never produce NaN.
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}
