use crate::artifacts::Coordinate;
use crate::geometry::containment::contains;
use crate::geometry::wrap_longitude;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Strategy for picking candidate sensor positions from a boundary
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InteriorPolicy {
    /// Midpoint between each vertex and the vertex centroid, kept only if inside
    #[default]
    CentroidMidpoints,
    /// Midpoint of each boundary edge, closing edge included
    EdgeMidpoints,
}

impl FromStr for InteriorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "centroid_midpoints" | "centroid" => Ok(InteriorPolicy::CentroidMidpoints),
            "edge_midpoints" | "edge" => Ok(InteriorPolicy::EdgeMidpoints),
            other => Err(format!("unknown interior policy: {}", other)),
        }
    }
}

/// Arithmetic mean of the vertices (not the area centroid).
/// Longitudes are averaged as offsets from the first vertex so a boundary
/// straddling the antimeridian stays in one piece.
pub fn centroid(polygon: &[Coordinate]) -> Option<Coordinate> {
    let first = polygon.first()?;
    let n = polygon.len() as f64;
    let (lat_sum, lon_offset_sum) = polygon.iter().fold((0.0, 0.0), |(lat, lon), p| {
        (lat + p.latitude, lon + wrap_longitude(p.longitude - first.longitude))
    });
    Some(Coordinate::new(
        lat_sum / n,
        wrap_longitude(first.longitude + lon_offset_sum / n),
    ))
}

/// Candidate sensor positions using the midpoint-to-centroid method
pub fn place_interior_points(polygon: &[Coordinate]) -> Vec<Coordinate> {
    place_interior_points_with(polygon, InteriorPolicy::CentroidMidpoints)
}

/// Candidate sensor positions for a boundary of at least three points.
///
/// With `CentroidMidpoints`, a convex boundary yields one point per vertex.
/// For concave boundaries some vertex-to-centroid midpoints can fall outside;
/// those are dropped rather than replaced.
pub fn place_interior_points_with(polygon: &[Coordinate], policy: InteriorPolicy) -> Vec<Coordinate> {
    if polygon.len() < 3 {
        return Vec::new();
    }

    match policy {
        InteriorPolicy::CentroidMidpoints => {
            let Some(center) = centroid(polygon) else {
                return Vec::new();
            };
            polygon
                .iter()
                .map(|vertex| vertex.midpoint(&center))
                .filter(|candidate| contains(*candidate, polygon))
                .collect()
        }
        InteriorPolicy::EdgeMidpoints => polygon
            .iter()
            .zip(polygon.iter().cycle().skip(1))
            .map(|(a, b)| a.midpoint(b))
            .collect(),
    }
}
