//! Closed-form geometry for edge paths
//!
//! Self-loop rings, control points for curved edges expressed in
//! edge-relative coordinates, and arrowhead segments.

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// A 2D coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Point) -> f64 {
        (other - self).length()
    }

    /// Anticlockwise quarter turn
    pub fn rot90(self) -> Point {
        Point::new(-self.y, self.x)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn approx_eq(self, other: Point, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Points of a self-loop drawn from `node` in the direction `angle_deg`.
///
/// The loop is a circle of `radius` whose centre lies `radius` away from the
/// node, traversed once starting and ending on the node. With few points the
/// ring becomes a polygon pointed at the node: 2 points stay on the node,
/// 3 trace a short segment out and back, 4 a triangle, 5 a square.
pub fn self_loop_ring(
    node: Point,
    radius: f64,
    angle_deg: f64,
    n_points: usize,
) -> Result<Vec<Point>, ChartError> {
    if n_points < 2 {
        return Err(ChartError::invalid_style(
            "loop_n_points",
            format!("at least 2 points are needed, got {n_points}"),
        ));
    }

    let direction = angle_deg.to_radians();
    let centre = node + Point::new(direction.cos(), direction.sin()) * radius;
    let start = direction + std::f64::consts::PI;
    let step = std::f64::consts::TAU / (n_points - 1) as f64;

    let mut ring: Vec<Point> = (0..n_points)
        .map(|i| {
            let phi = start + step * i as f64;
            centre + Point::new(phi.cos(), phi.sin()) * radius
        })
        .collect();

    // Pin both ends exactly on the node
    ring[0] = node;
    ring[n_points - 1] = node;
    Ok(ring)
}

/// Absolute positions of control points given relative to the edge
/// `source -> target`.
///
/// Each offset is `(parallel, perpendicular)` as fractions of the edge
/// length; the perpendicular component points to the left of the edge.
pub fn control_points(source: Point, target: Point, offsets: &[(f64, f64)]) -> Vec<Point> {
    let along = target - source;
    let across = along.rot90();

    offsets
        .iter()
        .map(|&(parallel, perpendicular)| source + along * parallel + across * perpendicular)
        .collect()
}

/// Total polyline length of a path
pub fn path_length(path: &[Point]) -> f64 {
    path.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// A short segment ending at the last point of `path`, pointing along the
/// path's final direction.
///
/// With `relative` set, `length` is a fraction of the straight distance
/// between the path's ends, or of the polyline length when the path is
/// closed (self-loops). Returns `[start, end]`.
pub fn arrow_segment(path: &[Point], length: f64, relative: bool) -> [Point; 2] {
    let Some(&end) = path.last() else {
        return [Point::default(), Point::default()];
    };

    let Some(&before) = path.iter().rev().skip(1).find(|p| !p.approx_eq(end, 1e-12)) else {
        return [end, end];
    };

    let absolute = if relative {
        let first = path[0];
        let reference = if first.approx_eq(end, 1e-12) {
            path_length(path)
        } else {
            first.distance(end)
        };
        length * reference
    } else {
        length
    };

    let tangent = end - before;
    let unit = tangent * (1.0 / tangent.length());
    [end - unit * absolute, end]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_self_loop_ring_starts_and_ends_on_node() {
        let node = Point::new(0.3, 0.7);
        for n in 2..12 {
            let ring = self_loop_ring(node, 0.05, 90.0, n).unwrap();
            assert_eq!(ring.len(), n);
            assert!(ring[0].approx_eq(node, EPS));
            assert!(ring[n - 1].approx_eq(node, EPS));
        }
    }

    #[test]
    fn test_self_loop_ring_points_away_from_node() {
        let node = Point::new(0.0, 0.0);
        // Three points: node, the far side of the circle, node
        let ring = self_loop_ring(node, 0.5, 90.0, 3).unwrap();
        assert!(ring[1].approx_eq(Point::new(0.0, 1.0), EPS));

        let ring = self_loop_ring(node, 0.5, 0.0, 3).unwrap();
        assert!(ring[1].approx_eq(Point::new(1.0, 0.0), EPS));
    }

    #[test]
    fn test_self_loop_ring_stays_on_circle() {
        let node = Point::new(1.0, 1.0);
        let ring = self_loop_ring(node, 0.2, 45.0, 30).unwrap();
        let dir = 45f64.to_radians();
        let centre = node + Point::new(dir.cos(), dir.sin()) * 0.2;
        for p in ring {
            assert!((p.distance(centre) - 0.2).abs() < EPS);
        }
    }

    #[test]
    fn test_two_point_ring_is_zero_length() {
        let node = Point::new(0.4, -0.2);
        let ring = self_loop_ring(node, 0.5, 90.0, 2).unwrap();

        assert_eq!(ring, vec![node, node]);
        assert_eq!(path_length(&ring), 0.0);
    }

    #[test]
    fn test_self_loop_ring_rejects_single_point() {
        assert!(self_loop_ring(Point::default(), 0.1, 90.0, 1).is_err());
    }

    #[test]
    fn test_control_points_midpoint_left_of_edge() {
        let points = control_points(Point::new(0.0, 0.0), Point::new(2.0, 0.0), &[(0.5, 0.1)]);
        assert_eq!(points.len(), 1);
        assert!(points[0].approx_eq(Point::new(1.0, 0.2), EPS));
    }

    #[test]
    fn test_control_points_follow_edge_rotation() {
        // Vertical edge pointing up: left is negative x
        let points = control_points(
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            &[(0.25, 0.5), (1.0, 0.0)],
        );
        assert!(points[0].approx_eq(Point::new(-0.5, 0.25), EPS));
        assert!(points[1].approx_eq(Point::new(0.0, 1.0), EPS));
    }

    #[test]
    fn test_arrow_segment_relative_straight() {
        let path = [Point::new(0.0, 0.0), Point::new(4.0, 0.0)];
        let [start, end] = arrow_segment(&path, 0.25, true);
        assert!(start.approx_eq(Point::new(3.0, 0.0), EPS));
        assert!(end.approx_eq(Point::new(4.0, 0.0), EPS));
    }

    #[test]
    fn test_arrow_segment_absolute_follows_last_segment() {
        let path = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 3.0),
        ];
        let [start, end] = arrow_segment(&path, 0.5, false);
        assert!(start.approx_eq(Point::new(1.0, 2.5), EPS));
        assert!(end.approx_eq(Point::new(1.0, 3.0), EPS));
    }

    #[test]
    fn test_arrow_segment_on_self_loop_uses_ring_length() {
        let node = Point::new(0.0, 0.0);
        let ring = self_loop_ring(node, 0.5, 90.0, 3).unwrap();
        let [start, end] = arrow_segment(&ring, 0.25, true);
        assert!(end.approx_eq(node, EPS));
        // Ring goes up 1.0 and back: length 2, arrow length 0.5
        assert!(start.approx_eq(Point::new(0.0, 0.5), EPS));
    }

    #[test]
    fn test_arrow_segment_degenerate_path() {
        let p = Point::new(0.5, 0.5);
        let [start, end] = arrow_segment(&[p, p], 0.1, true);
        assert_eq!(start, p);
        assert_eq!(end, p);
    }

    #[test]
    fn test_path_length() {
        let path = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 4.0),
        ];
        assert!((path_length(&path) - 7.0).abs() < EPS);
    }
}
