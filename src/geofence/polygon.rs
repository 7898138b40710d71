//! Even-odd (ray casting) point-in-polygon test.

use geo_types::Coord;

/// Check whether `point` lies inside `polygon`.
///
/// A ray is cast from the point towards increasing `x`; every polygon edge
/// it crosses flips the result. The polygon does not need to be closed,
/// the last vertex connects back to the first. Winding order does not
/// matter.
///
/// Points exactly on an edge or vertex follow the half-open rule below
/// (`y` strictly above the lower endpoint, at most the upper one) and may
/// resolve differently for equivalent polygon representations.
pub fn point_in_polygon(point: Coord<f64>, polygon: &[Coord<f64>]) -> bool {
    let Coord { x, y } = point;
    let mut inside = false;

    let edges = polygon.iter().zip(polygon.iter().cycle().skip(1));
    for (p1, p2) in edges {
        let spans_ray = y > p1.y.min(p2.y) && y <= p1.y.max(p2.y);
        if spans_ray && x <= p1.x.max(p2.x) {
            // spans_ray rules out horizontal edges.
            let x_intersection = (y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y) + p1.x;
            if p1.x == p2.x || x <= x_intersection {
                inside = !inside;
            }
        }
    }

    inside
}
