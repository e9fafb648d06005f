use crate::artifacts::{Coordinate, FieldArea};
use crate::geometry::distance::EARTH_RADIUS_M;
use crate::geometry::{to_geo_polygon, wrap_longitude};
use geo::ChamberlainDuquetteArea;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const SQUARE_METERS_PER_ACRE: f64 = 4046.86;

/// How a field boundary is turned into square meters
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AreaMethod {
    /// Shoelace over a local equirectangular projection. Fine for fields up to a few km².
    #[default]
    TangentPlane,
    /// Spherical excess (Chamberlain-Duquette) for large boundaries
    Spherical,
}

impl FromStr for AreaMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "tangent_plane" | "planar" => Ok(AreaMethod::TangentPlane),
            "spherical" => Ok(AreaMethod::Spherical),
            other => Err(format!("unknown area method: {}", other)),
        }
    }
}

pub fn square_meters_to_acres(square_meters: f64) -> f64 {
    square_meters / SQUARE_METERS_PER_ACRE
}

/// Field area with the default tangent-plane method
pub fn area(polygon: &[Coordinate]) -> FieldArea {
    area_with(polygon, AreaMethod::TangentPlane)
}

pub fn area_with(polygon: &[Coordinate], method: AreaMethod) -> FieldArea {
    let square_meters = match method {
        AreaMethod::TangentPlane => area_square_meters(polygon),
        AreaMethod::Spherical => spherical_area(polygon),
    };
    FieldArea {
        square_meters,
        acres: square_meters_to_acres(square_meters),
    }
}

/// Planar area in square meters.
///
/// Each vertex is projected onto a plane centered on the first vertex, scaled
/// by meters-per-degree at that latitude; the ring is closed implicitly.
/// Longitude offsets are wrapped, so fields crossing the antimeridian project
/// as one piece.
/// Self-intersecting rings are not rejected: opposing lobes cancel out as the
/// shoelace sum dictates.
pub fn area_square_meters(polygon: &[Coordinate]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }

    let origin = polygon[0];
    let meters_per_degree_lat = EARTH_RADIUS_M.to_radians();
    let meters_per_degree_lon = meters_per_degree_lat * origin.latitude.to_radians().cos();

    let projected: Vec<(f64, f64)> = polygon
        .iter()
        .map(|p| {
            (
                wrap_longitude(p.longitude - origin.longitude) * meters_per_degree_lon,
                (p.latitude - origin.latitude) * meters_per_degree_lat,
            )
        })
        .collect();

    let mut twice_area = 0.0;
    for i in 0..projected.len() {
        let (x1, y1) = projected[i];
        let (x2, y2) = projected[(i + 1) % projected.len()];
        twice_area += x1 * y2 - x2 * y1;
    }

    twice_area.abs() / 2.0
}

/// Spherical-excess area in square meters (geo's Chamberlain-Duquette implementation)
pub fn spherical_area(polygon: &[Coordinate]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    // Unwrap longitudes around the first vertex; the formula only needs differences
    let origin = polygon[0].longitude;
    let unwrapped: Vec<Coordinate> = polygon
        .iter()
        .map(|p| Coordinate::new(p.latitude, origin + wrap_longitude(p.longitude - origin)))
        .collect();
    to_geo_polygon(&unwrapped).chamberlain_duquette_unsigned_area()
}
