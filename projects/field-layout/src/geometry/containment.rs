use crate::artifacts::Coordinate;
use crate::geometry::wrap_longitude;

/// Ray-casting point-in-polygon test with longitude as x and latitude as y.
///
/// A horizontal ray is cast from `point` and crossings are counted with the
/// half-open rule `(yi > y) != (yj > y)`, so a vertex lying on the ray is
/// counted once. Boundaries with fewer than three points contain nothing.
pub fn contains(point: Coordinate, polygon: &[Coordinate]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    // Longitudes are taken as offsets from the first vertex so a boundary
    // straddling the antimeridian is not torn apart.
    let origin = polygon[0].longitude;
    let relative_x = |c: &Coordinate| wrap_longitude(c.longitude - origin);
    let x = relative_x(&point);
    let y = point.latitude;
    let mut inside = false;

    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (xi, yi) = (relative_x(&polygon[i]), polygon[i].latitude);
        let (xj, yj) = (relative_x(&polygon[j]), polygon[j].latitude);

        // yi != yj whenever the first clause holds, so the division is safe
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::fixtures::{antimeridian_square, l_shape, unit_square};
    use crate::geometry::to_geo_polygon;
    use geo::Contains;

    #[test]
    fn test_square_center_inside() {
        assert!(contains(Coordinate::new(0.0005, 0.0005), &unit_square()));
    }

    #[test]
    fn test_far_point_outside() {
        assert!(!contains(Coordinate::new(1.0, 1.0), &unit_square()));
        assert!(!contains(Coordinate::new(-0.0005, 0.0005), &unit_square()));
    }

    #[test]
    fn test_degenerate_polygons_contain_nothing() {
        let p = Coordinate::new(0.0, 0.0);
        assert!(!contains(p, &[]));
        assert!(!contains(p, &[p]));
        assert!(!contains(p, &[p, Coordinate::new(1.0, 1.0)]));
    }

    #[test]
    fn test_ray_through_vertex_counted_once() {
        // Diamond whose left and right vertices sit exactly on the test ray
        let diamond = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.001, 0.001),
            Coordinate::new(0.0, 0.002),
            Coordinate::new(-0.001, 0.001),
        ];
        assert!(contains(Coordinate::new(0.0, 0.001), &diamond));
        assert!(!contains(Coordinate::new(0.0, -0.001), &diamond));
        assert!(!contains(Coordinate::new(0.0, 0.003), &diamond));
    }

    #[test]
    fn test_concave_notch_is_outside() {
        let field = l_shape();
        assert!(contains(Coordinate::new(0.0005, 0.002), &field));
        assert!(contains(Coordinate::new(0.002, 0.0005), &field));
        assert!(!contains(Coordinate::new(0.002, 0.002), &field));
    }

    #[test]
    fn test_boundary_across_antimeridian() {
        let square = antimeridian_square();
        assert!(contains(Coordinate::new(0.0005, 180.0), &square));
        assert!(contains(Coordinate::new(0.0005, -180.0), &square));
        assert!(contains(Coordinate::new(0.0005, 179.9998), &square));
        assert!(!contains(Coordinate::new(0.0005, 0.0), &square));
        assert!(!contains(Coordinate::new(0.0005, 179.99), &square));
    }

    #[test]
    fn test_agrees_with_geo_contains() {
        let field = l_shape();
        let geo_poly = to_geo_polygon(&field);
        for i in 0..12 {
            for j in 0..12 {
                let p = Coordinate::new(0.00013 + i as f64 * 0.00025, 0.00017 + j as f64 * 0.00025);
                let expected = geo_poly.contains(&geo_types::Point::from(p));
                assert_eq!(contains(p, &field), expected, "mismatch at {:?}", p);
            }
        }
    }
}
