// Layout artifact struct definitions
//
// This module contains the value types exchanged between the map UI and the
// geometry engine. All of them serialize to the JSON documents written by the
// CLI and returned by the HTTP API.

use crate::geometry::wrap_longitude;
use serde::{Deserialize, Serialize};

/// A geodetic position in degrees (WGS84-like datum, no conversion performed)
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Point halfway between `self` and `other` in latitude/longitude space,
    /// taking the shorter way around in longitude.
    pub fn midpoint(&self, other: &Coordinate) -> Coordinate {
        let d_lon = wrap_longitude(other.longitude - self.longitude);
        Coordinate {
            latitude: (self.latitude + other.latitude) / 2.0,
            longitude: wrap_longitude(self.longitude + d_lon / 2.0),
        }
    }
}

// geo uses x = longitude, y = latitude
impl From<Coordinate> for geo_types::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo_types::Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

impl From<geo_types::Coord<f64>> for Coordinate {
    fn from(c: geo_types::Coord<f64>) -> Self {
        Coordinate {
            latitude: c.y,
            longitude: c.x,
        }
    }
}

impl From<Coordinate> for geo_types::Point<f64> {
    fn from(c: Coordinate) -> Self {
        geo_types::Point::new(c.longitude, c.latitude)
    }
}

/// What a placed marker stands for on the map
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Edge,
    Interior,
    GateValve,
    Custom(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Marker {
    pub coordinate: Coordinate,
    pub kind: MarkerKind,
}

/// Map viewport. Spans are in degrees with padding already added.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub center: Coordinate,
    pub latitude_span: f64,
    pub longitude_span: f64,
}

/// A single sensor sample. Position and values may be missing.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SensorReading {
    #[serde(default)]
    pub coordinate: Option<Coordinate>,
    #[serde(default)]
    pub value: Option<f64>,
    /// Ground water content in liters per square meter
    #[serde(default)]
    pub ground_water_level: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct HeatPoint {
    pub coordinate: Coordinate,
    pub intensity: f64,
}

/// Field area in both units shown to the user
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldArea {
    pub square_meters: f64,
    pub acres: f64,
}
