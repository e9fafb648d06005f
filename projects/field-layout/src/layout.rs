// Composite field layout
//
// Bundles every engine operation behind one request/report pair so the map UI
// can hand over a drawn boundary and traced line in a single call.

use crate::artifacts::{Coordinate, FieldArea, HeatPoint, Marker, MarkerKind, Region, SensorReading};
use crate::geometry::{
    area_with, bounding_region, place_interior_points_with, place_markers, tag_markers,
    to_heat_points, AreaMethod, InteriorPolicy,
};
use crate::water::{average, water_balance, WaterBalance};
use serde::{Deserialize, Serialize};

/// Everything the UI used to keep in toggles and globals, passed explicitly
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LayoutSettings {
    /// Spacing between markers along the traced line, in meters
    pub marker_interval_m: f64,
    /// Degrees added to both spans of the map region
    pub region_padding: f64,
    /// Viewport used when there is nothing to fit
    pub default_region: Region,
    pub area_method: AreaMethod,
    pub interior_policy: InteriorPolicy,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            marker_interval_m: 50.0,
            region_padding: 0.1,
            default_region: Region {
                center: Coordinate::new(37.78825, -122.4324),
                latitude_span: 0.0922,
                longitude_span: 0.0421,
            },
            area_method: AreaMethod::TangentPlane,
            interior_policy: InteriorPolicy::CentroidMidpoints,
        }
    }
}

/// Per-request settings; every field left out falls back to the base settings
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct LayoutOverrides {
    pub marker_interval_m: Option<f64>,
    pub region_padding: Option<f64>,
    pub default_region: Option<Region>,
    pub area_method: Option<AreaMethod>,
    pub interior_policy: Option<InteriorPolicy>,
}

impl LayoutOverrides {
    pub fn apply_to(&self, base: &LayoutSettings) -> LayoutSettings {
        LayoutSettings {
            marker_interval_m: self.marker_interval_m.unwrap_or(base.marker_interval_m),
            region_padding: self.region_padding.unwrap_or(base.region_padding),
            default_region: self.default_region.unwrap_or(base.default_region),
            area_method: self.area_method.unwrap_or(base.area_method),
            interior_policy: self.interior_policy.unwrap_or(base.interior_policy),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct LayoutRequest {
    /// Field boundary, closure implicit
    pub boundary: Vec<Coordinate>,
    /// Traced line (e.g. a pipeline) to place markers along
    pub line: Vec<Coordinate>,
    pub gate_valves: Vec<Coordinate>,
    pub readings: Vec<SensorReading>,
    pub crop_type: Option<String>,
    pub settings: LayoutOverrides,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LayoutReport {
    pub area: FieldArea,
    pub line_markers: Vec<Marker>,
    pub interior_markers: Vec<Marker>,
    pub gate_valves: Vec<Marker>,
    pub region: Region,
    pub heat_points: Vec<HeatPoint>,
    /// Mean sensor value over readings that report one
    pub average_reading: Option<f64>,
    pub water: WaterBalance,
}

impl LayoutReport {
    /// True when the boundary is too small to have an area yet
    pub fn boundary_incomplete(&self) -> bool {
        self.area.square_meters == 0.0
    }
}

/// Compute the full layout, resolving the request's overrides against `base`
pub fn build_layout(request: &LayoutRequest, base: &LayoutSettings) -> LayoutReport {
    let settings = request.settings.apply_to(base);

    let area = area_with(&request.boundary, settings.area_method);
    let line_points = place_markers(&request.line, settings.marker_interval_m);
    let interior_points = place_interior_points_with(&request.boundary, settings.interior_policy);

    let extent: Vec<Coordinate> = request
        .boundary
        .iter()
        .chain(request.line.iter())
        .copied()
        .collect();
    let region = bounding_region(&extent, settings.region_padding, settings.default_region);

    let values: Vec<f64> = request.readings.iter().filter_map(|r| r.value).collect();

    LayoutReport {
        area,
        line_markers: tag_markers(&line_points, MarkerKind::Edge),
        interior_markers: tag_markers(&interior_points, MarkerKind::Interior),
        gate_valves: tag_markers(&request.gate_valves, MarkerKind::GateValve),
        heat_points: to_heat_points(&request.readings, &request.boundary, region.center),
        region,
        average_reading: average(&values),
        water: water_balance(&request.readings, request.crop_type.as_deref().unwrap_or_default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{contains, distance, EARTH_RADIUS_M};

    fn square() -> Vec<Coordinate> {
        vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 0.001),
            Coordinate::new(0.001, 0.001),
            Coordinate::new(0.001, 0.0),
        ]
    }

    #[test]
    fn test_square_field_end_to_end() {
        let request = LayoutRequest {
            boundary: square(),
            ..Default::default()
        };
        let report = build_layout(&request, &LayoutSettings::default());

        let side = 0.001 * EARTH_RADIUS_M.to_radians();
        assert!((report.area.square_meters - side * side).abs() / (side * side) < 1e-9);
        assert!((report.area.acres - side * side / 4046.86).abs() < 1e-9);

        assert_eq!(report.interior_markers.len(), 4);
        for marker in &report.interior_markers {
            assert_eq!(marker.kind, MarkerKind::Interior);
            assert!(contains(marker.coordinate, &request.boundary));
        }
        assert!(contains(Coordinate::new(0.0005, 0.0005), &request.boundary));
        assert_eq!(report.region.center, Coordinate::new(0.0005, 0.0005));
        assert!(!report.boundary_incomplete());
    }

    #[test]
    fn test_line_markers_use_configured_interval() {
        let line = vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.002)];
        let mut request = LayoutRequest {
            line: line.clone(),
            ..Default::default()
        };
        request.settings.marker_interval_m = Some(25.0);
        let report = build_layout(&request, &LayoutSettings::default());

        let expected = (distance(line[0], line[1]) / 25.0).floor() as usize;
        assert_eq!(report.line_markers.len(), expected);
        assert!(report.line_markers.iter().all(|m| m.kind == MarkerKind::Edge));
    }

    #[test]
    fn test_empty_request_is_well_defined() {
        let report = build_layout(&LayoutRequest::default(), &LayoutSettings::default());
        assert!(report.boundary_incomplete());
        assert!(report.line_markers.is_empty());
        assert!(report.interior_markers.is_empty());
        assert!(report.heat_points.is_empty());
        assert_eq!(report.average_reading, None);
        assert_eq!(report.region, LayoutSettings::default().default_region);
    }

    #[test]
    fn test_gate_valves_and_water() {
        let request = LayoutRequest {
            boundary: square(),
            gate_valves: vec![Coordinate::new(0.0, 0.0005)],
            readings: vec![SensorReading {
                value: Some(12.0),
                ground_water_level: Some(3.0),
                ..Default::default()
            }],
            crop_type: Some("Banana".to_string()),
            ..Default::default()
        };
        let report = build_layout(&request, &LayoutSettings::default());

        assert_eq!(report.gate_valves.len(), 1);
        assert_eq!(report.gate_valves[0].kind, MarkerKind::GateValve);
        assert_eq!(report.heat_points[0].coordinate, square()[0]);
        assert!(report.water.is_deficit());
        assert_eq!(report.water.difference, 3.0);
    }

    #[test]
    fn test_deterministic() {
        let request = LayoutRequest {
            boundary: square(),
            line: vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.001, 0.001)],
            readings: vec![SensorReading::default(); 5],
            ..Default::default()
        };
        let base = LayoutSettings::default();
        assert_eq!(build_layout(&request, &base), build_layout(&request, &base));
    }

    #[test]
    fn test_request_json_defaults() {
        let request: LayoutRequest = serde_json::from_str(
            r#"{"boundary": [{"latitude": 1.0, "longitude": 2.0}], "settings": {"marker_interval_m": 10.0}}"#,
        )
        .unwrap();
        assert_eq!(request.boundary.len(), 1);
        assert!(request.line.is_empty());
        assert_eq!(request.settings.marker_interval_m, Some(10.0));
        assert_eq!(request.settings.region_padding, None);

        let settings = request.settings.apply_to(&LayoutSettings::default());
        assert_eq!(settings.marker_interval_m, 10.0);
        assert_eq!(settings.region_padding, 0.1);
        assert_eq!(settings.area_method, AreaMethod::TangentPlane);
    }

    #[test]
    fn test_base_settings_apply_when_request_omits_them() {
        let line = vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.002)];
        let request = LayoutRequest {
            line: line.clone(),
            ..Default::default()
        };
        let base = LayoutSettings {
            marker_interval_m: 20.0,
            ..Default::default()
        };
        let report = build_layout(&request, &base);
        let expected = (distance(line[0], line[1]) / 20.0).floor() as usize;
        assert_eq!(report.line_markers.len(), expected);

        // A request value still wins over the base
        let mut request = request;
        request.settings.marker_interval_m = Some(100.0);
        let report = build_layout(&request, &base);
        assert_eq!(report.line_markers.len(), 2);
    }

    #[test]
    fn test_unpositioned_readings_without_boundary_use_region_center() {
        let request = LayoutRequest {
            readings: vec![
                SensorReading {
                    value: Some(20.0),
                    ..Default::default()
                },
                SensorReading {
                    value: Some(35.0),
                    ..Default::default()
                },
                SensorReading::default(),
            ],
            ..Default::default()
        };
        let report = build_layout(&request, &LayoutSettings::default());
        assert_eq!(report.heat_points.len(), 3);
        let center = LayoutSettings::default().default_region.center;
        assert!(report.heat_points.iter().all(|p| p.coordinate == center));
        assert_eq!(report.average_reading, Some(27.5));
    }
}
