use crate::artifacts::Coordinate;
use crate::layout::{LayoutReport, LayoutRequest};
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Load a layout request from a JSON file
pub fn load_request(path: &Path) -> Result<LayoutRequest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout request: {:?}", path))?;
    let request: LayoutRequest = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse layout request: {:?}", path))?;
    tracing::debug!("Loaded layout request from {:?}", path);
    Ok(request)
}

/// Parse `latitude,longitude` rows (with header) into coordinates
pub fn parse_coordinates_csv<R: Read>(reader: R) -> Result<Vec<Coordinate>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut coordinates = Vec::new();
    for (idx, record) in rdr.deserialize::<Coordinate>().enumerate() {
        // +2: header row and 1-based numbering
        let coordinate = record.with_context(|| format!("Invalid coordinate on line {}", idx + 2))?;
        coordinates.push(coordinate);
    }
    Ok(coordinates)
}

pub fn load_coordinates_csv(path: &Path) -> Result<Vec<Coordinate>> {
    let file = fs::File::open(path).with_context(|| format!("Failed to open CSV file: {:?}", path))?;
    let coordinates = parse_coordinates_csv(file)
        .with_context(|| format!("Failed to read coordinates from {:?}", path))?;
    tracing::debug!("Loaded {} coordinates from {:?}", coordinates.len(), path);
    Ok(coordinates)
}

pub fn write_report(path: &Path, report: &LayoutReport) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create report directory: {:?}", parent))?;
    }
    let content = serde_json::to_string_pretty(report)?;
    fs::write(path, content).with_context(|| format!("Failed to write report: {:?}", path))?;
    Ok(())
}
