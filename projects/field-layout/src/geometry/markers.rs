use crate::artifacts::{Coordinate, Marker, MarkerKind};
use crate::geometry::distance::distance;
use crate::geometry::wrap_longitude;

/// Upper bound on markers produced for a single line
pub const MAX_MARKERS: usize = 100_000;

/// Place markers every `interval` meters of cumulative path length along `line`.
///
/// The distance still owed to the next marker carries across segment
/// boundaries, so spacing holds along the whole path rather than per segment.
/// Positions inside a segment are interpolated linearly in latitude/longitude,
/// which is accurate for the short segments of a hand-traced line.
///
/// Lines with fewer than two points, and non-positive or non-finite
/// intervals, yield no markers. Output stops at `MAX_MARKERS`, which bounds
/// the work done for a tiny interval on a long line.
pub fn place_markers(line: &[Coordinate], interval: f64) -> Vec<Coordinate> {
    let mut markers = Vec::new();
    if line.len() < 2 || !interval.is_finite() || interval <= 0.0 {
        return markers;
    }

    let mut remaining = interval;

    for segment in line.windows(2) {
        let (start, end) = (segment[0], segment[1]);
        let segment_length = distance(start, end);
        // Shorter way around, for segments crossing the antimeridian
        let d_lon = wrap_longitude(end.longitude - start.longitude);

        // Zero-length segments never enter the loop, so the ratio is never 0/0
        while remaining < segment_length {
            if markers.len() == MAX_MARKERS {
                return markers;
            }
            let ratio = remaining / segment_length;
            markers.push(Coordinate {
                latitude: start.latitude + ratio * (end.latitude - start.latitude),
                longitude: wrap_longitude(start.longitude + ratio * d_lon),
            });
            remaining += interval;
        }

        remaining -= segment_length;
    }

    markers
}

/// Attach a marker kind to a batch of placed coordinates
pub fn tag_markers(coordinates: &[Coordinate], kind: MarkerKind) -> Vec<Marker> {
    coordinates
        .iter()
        .map(|&coordinate| Marker {
            coordinate,
            kind: kind.clone(),
        })
        .collect()
}
