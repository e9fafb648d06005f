use crate::artifacts::{Coordinate, Region};
use crate::geometry::wrap_longitude;

/// Viewport that fits every point, with `padding` degrees added to each span.
/// An empty point set returns `default` unchanged.
///
/// East/west extents are measured as longitude offsets from the first point,
/// so a point set straddling the antimeridian gets the short span across it.
pub fn bounding_region(points: &[Coordinate], padding: f64, default: Region) -> Region {
    let Some(first) = points.first() else {
        return default;
    };

    let mut north = first.latitude;
    let mut south = first.latitude;
    let mut east = 0.0_f64;
    let mut west = 0.0_f64;

    for p in &points[1..] {
        let offset = wrap_longitude(p.longitude - first.longitude);
        north = north.max(p.latitude);
        south = south.min(p.latitude);
        east = east.max(offset);
        west = west.min(offset);
    }

    Region {
        center: Coordinate::new(
            (north + south) / 2.0,
            wrap_longitude(first.longitude + (east + west) / 2.0),
        ),
        latitude_span: (north - south) + padding,
        longitude_span: (east - west) + padding,
    }
}
