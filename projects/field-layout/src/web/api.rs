use axum::{extract::State, Json};
use field_layout::artifacts::{Coordinate, FieldArea, HeatPoint, Region, SensorReading};
use field_layout::geometry::{
    area_with, bounding_region, contains, distance, place_interior_points_with, place_markers,
    to_heat_points, AreaMethod, InteriorPolicy,
};
use field_layout::layout::{build_layout, LayoutReport, LayoutRequest, LayoutSettings};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct DistanceRequest {
    pub a: Coordinate,
    pub b: Coordinate,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DistanceResponse {
    pub meters: f64,
}

#[derive(Deserialize)]
pub struct AreaRequest {
    pub boundary: Vec<Coordinate>,
    #[serde(default)]
    pub method: Option<AreaMethod>,
}

#[derive(Deserialize)]
pub struct ContainsRequest {
    pub point: Coordinate,
    pub polygon: Vec<Coordinate>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ContainsResponse {
    pub inside: bool,
}

#[derive(Deserialize)]
pub struct MarkersRequest {
    pub line: Vec<Coordinate>,
    #[serde(default)]
    pub interval_m: Option<f64>,
}

#[derive(Deserialize)]
pub struct InteriorRequest {
    pub polygon: Vec<Coordinate>,
    #[serde(default)]
    pub policy: Option<InteriorPolicy>,
}

#[derive(Deserialize)]
pub struct RegionRequest {
    pub points: Vec<Coordinate>,
    #[serde(default)]
    pub padding: Option<f64>,
}

#[derive(Deserialize)]
pub struct HeatmapRequest {
    pub readings: Vec<SensorReading>,
    #[serde(default)]
    pub polygon: Vec<Coordinate>,
}

pub async fn get_settings(State(settings): State<Arc<LayoutSettings>>) -> Json<LayoutSettings> {
    Json(settings.as_ref().clone())
}

pub async fn distance_handler(Json(payload): Json<DistanceRequest>) -> Json<DistanceResponse> {
    Json(DistanceResponse {
        meters: distance(payload.a, payload.b),
    })
}

pub async fn area_handler(
    State(settings): State<Arc<LayoutSettings>>,
    Json(payload): Json<AreaRequest>,
) -> Json<FieldArea> {
    let method = payload.method.unwrap_or(settings.area_method);
    Json(area_with(&payload.boundary, method))
}

pub async fn contains_handler(Json(payload): Json<ContainsRequest>) -> Json<ContainsResponse> {
    Json(ContainsResponse {
        inside: contains(payload.point, &payload.polygon),
    })
}

pub async fn markers_handler(
    State(settings): State<Arc<LayoutSettings>>,
    Json(payload): Json<MarkersRequest>,
) -> Json<Vec<Coordinate>> {
    let interval = payload.interval_m.unwrap_or(settings.marker_interval_m);
    Json(place_markers(&payload.line, interval))
}

pub async fn interior_handler(
    State(settings): State<Arc<LayoutSettings>>,
    Json(payload): Json<InteriorRequest>,
) -> Json<Vec<Coordinate>> {
    let policy = payload.policy.unwrap_or(settings.interior_policy);
    Json(place_interior_points_with(&payload.polygon, policy))
}

pub async fn region_handler(
    State(settings): State<Arc<LayoutSettings>>,
    Json(payload): Json<RegionRequest>,
) -> Json<Region> {
    let padding = payload.padding.unwrap_or(settings.region_padding);
    Json(bounding_region(&payload.points, padding, settings.default_region))
}

pub async fn heatmap_handler(
    State(settings): State<Arc<LayoutSettings>>,
    Json(payload): Json<HeatmapRequest>,
) -> Json<Vec<HeatPoint>> {
    Json(to_heat_points(
        &payload.readings,
        &payload.polygon,
        settings.default_region.center,
    ))
}

pub async fn layout_handler(
    State(settings): State<Arc<LayoutSettings>>,
    Json(payload): Json<LayoutRequest>,
) -> Json<LayoutReport> {
    Json(build_layout(&payload, &settings))
}
