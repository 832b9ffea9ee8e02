use crate::error::PhysicsError;
use crate::math::{Interval, Vector2, EPSILON};
use crate::Result;
use nalgebra as na;

/// A simple polygon described by its vertices in winding order.
///
/// Edge `i` runs from vertex `i` to vertex `(i + 1) % n`. The physics engine
/// assumes the polygon is convex; that is not checked, but a polygon with
/// fewer than three vertices, a non-finite coordinate or zero area is
/// rejected at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Vector2>,
}

impl Polygon {
    /// Creates a polygon from its vertices
    pub fn new(points: Vec<Vector2>) -> Result<Self> {
        if points.len() < 3 {
            return Err(PhysicsError::DegeneratePolygon(format!(
                "polygon needs at least 3 vertices, got {}",
                points.len()
            )));
        }

        if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
            return Err(PhysicsError::DegeneratePolygon(format!(
                "vertex {} is not finite",
                bad
            )));
        }

        // Zero-area tolerance is relative to the vertex extent
        let area = signed_area(&points);
        let width = points.iter().map(|p| p.x).collect::<Interval>().length();
        let height = points.iter().map(|p| p.y).collect::<Interval>().length();
        let extent = width.max(height);
        if area.abs() <= EPSILON * extent * extent {
            return Err(PhysicsError::DegeneratePolygon(format!(
                "polygon area {} is zero",
                area
            )));
        }

        Ok(Self { points })
    }

    /// Creates an axis-aligned rectangle centered at `center`, wound counter-clockwise
    pub fn rectangle(center: Vector2, width: f64, height: f64) -> Result<Self> {
        let hw = width * 0.5;
        let hh = height * 0.5;
        Self::new(vec![
            Vector2::new(center.x - hw, center.y - hh),
            Vector2::new(center.x + hw, center.y - hh),
            Vector2::new(center.x + hw, center.y + hh),
            Vector2::new(center.x - hw, center.y + hh),
        ])
    }

    /// Creates a regular polygon with `sides` vertices on a circle of `radius`
    pub fn regular(center: Vector2, radius: f64, sides: usize) -> Result<Self> {
        let step = std::f64::consts::TAU / sides.max(1) as f64;
        let points = (0..sides)
            .map(|i| center + Vector2::new(radius, 0.0).rotate(step * i as f64))
            .collect();
        Self::new(points)
    }

    /// Returns the vertices
    pub fn get_points(&self) -> &[Vector2] {
        &self.points
    }

    /// Returns an owned copy of the vertices
    pub fn to_points(&self) -> Vec<Vector2> {
        self.points.clone()
    }

    /// Returns the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the signed area, positive for counter-clockwise winding
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Returns the area
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Returns the area centroid
    pub fn centroid(&self) -> Vector2 {
        centroid(&self.points)
    }

    /// Moves every vertex by `translation`
    pub fn translate(&mut self, translation: Vector2) {
        for point in &mut self.points {
            *point += translation;
        }
    }

    /// Rotates every vertex counter-clockwise by `angle` radians about `pivot`
    pub fn rotate(&mut self, angle: f64, pivot: Vector2) {
        let rotation = na::Rotation2::new(angle);
        for point in &mut self.points {
            let offset = rotation * (*point - pivot).to_nalgebra();
            *point = pivot + Vector2::from_nalgebra(&offset);
        }
    }

    /// Returns the edge vectors, including the closing edge from the last vertex to the first
    pub fn edges(&self) -> impl Iterator<Item = Vector2> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| self.points[(i + 1) % n] - self.points[i])
    }

    /// Projects every vertex onto `axis` and returns the covered range
    pub fn project(&self, axis: Vector2) -> Interval {
        self.points.iter().map(|p| p.dot(&axis)).collect()
    }

    /// Returns the part of the polygon lying on or below the horizontal line `y = level`
    pub fn clip_below(&self, level: f64) -> Vec<Vector2> {
        let n = self.points.len();
        let mut clipped = Vec::with_capacity(n + 2);

        for i in 0..n {
            let current = self.points[i];
            let next = self.points[(i + 1) % n];
            let current_inside = current.y <= level;
            let next_inside = next.y <= level;

            if current_inside {
                clipped.push(current);
            }
            if current_inside != next_inside {
                let t = (level - current.y) / (next.y - current.y);
                clipped.push(current.lerp(&next, t));
            }
        }

        clipped
    }

    /// Returns the area of the part of the polygon below `y = level`
    pub fn area_below(&self, level: f64) -> f64 {
        let clipped = self.clip_below(level);
        if clipped.len() < 3 {
            return 0.0;
        }
        signed_area(&clipped).abs()
    }
}

/// Shoelace formula over a closed vertex loop
fn signed_area(points: &[Vector2]) -> f64 {
    let n = points.len();
    let twice_area: f64 = (0..n)
        .map(|i| points[i].cross(&points[(i + 1) % n]))
        .sum();
    twice_area * 0.5
}

fn centroid(points: &[Vector2]) -> Vector2 {
    let n = points.len();
    let mut sum = Vector2::zero();
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        sum += (a + b) * a.cross(&b);
    }
    // Signed area keeps the result correct for both windings
    sum / (6.0 * signed_area(points))
}

impl From<Polygon> for Vec<Vector2> {
    fn from(polygon: Polygon) -> Self {
        polygon.points
    }
}

impl TryFrom<Vec<Vector2>> for Polygon {
    type Error = PhysicsError;

    fn try_from(points: Vec<Vector2>) -> Result<Self> {
        Polygon::new(points)
    }
}
