use crate::forces::{ForceContext, ForceGenerator};
use crate::core::BodyHandle;
use crate::math::Vector2;
use log::trace;
use std::any::Any;

/// Newtonian attraction between two bodies, `F = G·m1·m2 / d²`.
///
/// The force acts along the line joining the two centroids. Below
/// `min_distance` the pair is treated as coincident and no force is applied.
#[derive(Debug, Clone)]
pub struct GravityForce {
    /// The two attracting bodies
    bodies: [BodyHandle; 2],

    /// The gravitational constant
    strength: f64,

    /// Centroid distance below which the force is skipped
    min_distance: f64,

    /// When set, the force only acts while the first body is above this height
    surface_level: Option<f64>,

    /// Whether the force generator is enabled
    enabled: bool,
}

impl GravityForce {
    /// Creates a new gravity binding between two bodies
    pub fn new(strength: f64, body_a: BodyHandle, body_b: BodyHandle, min_distance: f64) -> Self {
        Self {
            bodies: [body_a, body_b],
            strength,
            min_distance: min_distance.max(0.0),
            surface_level: None,
            enabled: true,
        }
    }

    /// Creates a binding that switches off while the first body's centroid is
    /// at or below `level`, e.g. a floating body whose weight is carried by buoyancy
    pub fn new_above_surface(
        strength: f64,
        body_a: BodyHandle,
        body_b: BodyHandle,
        min_distance: f64,
        level: f64,
    ) -> Self {
        Self {
            surface_level: Some(level),
            ..Self::new(strength, body_a, body_b, min_distance)
        }
    }

    /// Returns whether the force generator is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets whether the force generator is enabled
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Gets the gravitational constant
    pub fn get_strength(&self) -> f64 {
        self.strength
    }

    /// Sets the gravitational constant
    pub fn set_strength(&mut self, strength: f64) {
        self.strength = strength;
    }

    /// Gets the cutoff distance
    pub fn get_min_distance(&self) -> f64 {
        self.min_distance
    }

    /// Gets the surface level, if any
    pub fn get_surface_level(&self) -> Option<f64> {
        self.surface_level
    }
}

/// Force on the body at `center_a` pulling it toward `center_b`
pub fn gravity_between(
    strength: f64,
    mass_a: f64,
    center_a: Vector2,
    mass_b: f64,
    center_b: Vector2,
    min_distance: f64,
) -> Vector2 {
    let distance = center_a.distance(&center_b);
    if distance < min_distance || distance == 0.0 {
        return Vector2::zero();
    }

    let magnitude = strength * mass_a * mass_b / (distance * distance);
    (center_b - center_a) * (magnitude / distance)
}

impl ForceGenerator for GravityForce {
    fn generator_type(&self) -> &'static str {
        if self.surface_level.is_some() {
            "SurfaceGravity"
        } else {
            "Gravity"
        }
    }

    fn apply_forces(&mut self, ctx: &mut ForceContext<'_>) {
        if !self.enabled {
            return;
        }

        let (body_a, body_b) = match ctx.bodies.get_pair_mut(self.bodies[0], self.bodies[1]) {
            Ok(pair) => pair,
            Err(_) => return,
        };

        if let Some(level) = self.surface_level {
            if body_a.get_centroid().y <= level {
                return;
            }
        }

        let force = gravity_between(
            self.strength,
            body_a.get_mass(),
            body_a.get_centroid(),
            body_b.get_mass(),
            body_b.get_centroid(),
            self.min_distance,
        );

        // An infinite mass makes the magnitude meaningless
        if !force.is_finite() {
            trace!("skipping non-finite gravity between {} and {}", self.bodies[0], self.bodies[1]);
            return;
        }

        body_a.add_force(force);
        body_b.add_force(-force);
    }

    fn get_affected_bodies(&self) -> &[BodyHandle] {
        &self.bodies
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
