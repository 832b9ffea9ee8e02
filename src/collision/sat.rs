use crate::math::{Vector2, EPSILON};
use crate::shapes::Polygon;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Which edges of a polygon contribute separating axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum AxisMode {
    /// Every edge, including the one from the last vertex back to the first
    #[default]
    Closed,

    /// Only edges between consecutive vertices; the closing edge is skipped.
    /// Shapes whose only separating axis is that edge's normal are reported
    /// as colliding.
    OpenChain,
}

/// The outcome of a separating axis test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionInfo {
    /// Whether the two polygons intersect
    pub collided: bool,

    /// Unit axis of least overlap; zero when not collided
    pub axis: Vector2,

    /// Overlap along `axis`; zero when not collided
    pub overlap: f64,
}

impl CollisionInfo {
    /// A result for polygons that do not intersect
    pub fn none() -> Self {
        Self {
            collided: false,
            axis: Vector2::zero(),
            overlap: 0.0,
        }
    }
}

/// Tests two convex polygons for intersection using closed edge loops
pub fn find_collision(a: &Polygon, b: &Polygon) -> CollisionInfo {
    find_collision_with_mode(a, b, AxisMode::Closed)
}

/// Tests two convex polygons for intersection.
///
/// Candidate axes are the unit normals of `a`'s edges followed by those of
/// `b`'s. The first axis on which the projections do not overlap proves
/// separation. Otherwise the axis with the smallest overlap is reported; on
/// ties the earliest candidate wins.
pub fn find_collision_with_mode(a: &Polygon, b: &Polygon, mode: AxisMode) -> CollisionInfo {
    let mut best_overlap = f64::INFINITY;
    let mut best_axis = Vector2::zero();

    for axis in axes(a, mode).chain(axes(b, mode)) {
        let overlap = match a.project(axis).overlap_amount(&b.project(axis)) {
            Some(overlap) => overlap,
            None => return CollisionInfo::none(),
        };

        if overlap < best_overlap {
            best_overlap = overlap;
            best_axis = axis;
        }
    }

    // Every candidate edge had zero length
    if !best_overlap.is_finite() {
        return CollisionInfo::none();
    }

    CollisionInfo {
        collided: true,
        axis: best_axis,
        overlap: best_overlap,
    }
}

/// Unit normals `(e.y, -e.x) / |e|` of the polygon's edges. Zero-length edges are skipped.
pub fn axes(polygon: &Polygon, mode: AxisMode) -> impl Iterator<Item = Vector2> + '_ {
    let count = match mode {
        AxisMode::Closed => polygon.vertex_count(),
        AxisMode::OpenChain => polygon.vertex_count() - 1,
    };

    polygon
        .edges()
        .take(count)
        .filter(|edge| edge.length() > EPSILON)
        .map(|edge| edge.perpendicular().normalize())
}
