// Field geometry engine
//
// Pure functions from boundary/line input to layout data. Nothing here logs,
// holds state or fails: degenerate input produces empty or zero results.

pub mod area;
pub mod containment;
pub mod distance;
pub mod heatmap;
pub mod interior;
pub mod markers;
pub mod region;

pub use area::{area, area_square_meters, area_with, spherical_area, square_meters_to_acres, AreaMethod};
pub use containment::contains;
pub use distance::{distance, EARTH_RADIUS_M};
pub use heatmap::{to_heat_points, DEFAULT_INTENSITY};
pub use interior::{centroid, place_interior_points, place_interior_points_with, InteriorPolicy};
pub use markers::{place_markers, tag_markers, MAX_MARKERS};
pub use region::bounding_region;

use crate::artifacts::Coordinate;
use geo_types::{LineString, Polygon};

/// Bring a longitude (or longitude difference) back into [-180, 180].
///
/// In-range values are returned untouched so ordinary fields keep exact
/// arithmetic; only values pushed past the antimeridian are wrapped.
pub fn wrap_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) {
        longitude
    } else {
        (longitude + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// Convert a boundary to a geo_types Polygon (geo closes the ring itself)
pub(crate) fn to_geo_polygon(points: &[Coordinate]) -> Polygon<f64> {
    let coords: Vec<geo_types::Coord<f64>> = points.iter().map(|&p| p.into()).collect();
    Polygon::new(LineString::from(coords), vec![])
}
