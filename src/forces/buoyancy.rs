use crate::forces::{ForceContext, ForceGenerator};
use crate::bodies::RigidBody;
use crate::core::BodyHandle;
use crate::math::Vector2;
use log::trace;
use std::any::Any;

/// Upward buoyancy on a body floating in water that fills everything below `water_level`.
///
/// The lift is `density · gravity · depth · submerged_area`, where the
/// submerged area is the part of the polygon below the water line and
/// `depth` is the out-of-plane thickness that turns area into volume.
/// A body whose centroid is at or above the water line gets no lift at all.
#[derive(Debug, Clone)]
pub struct BuoyancyForce {
    /// The floating body
    body: [BodyHandle; 1],

    /// Height of the water surface
    water_level: f64,

    /// The density of the fluid
    density: f64,

    /// Gravitational acceleration magnitude
    gravity: f64,

    /// Out-of-plane thickness of the body
    depth: f64,

    /// Whether the force generator is enabled
    enabled: bool,
}

impl BuoyancyForce {
    /// Creates a new buoyancy force generator
    pub fn new(body: BodyHandle, water_level: f64, density: f64, gravity: f64, depth: f64) -> Self {
        Self {
            body: [body],
            water_level,
            density: density.max(0.0),
            gravity,
            depth: depth.max(0.0),
            enabled: true,
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

    /// Gets the height of the water surface
    pub fn get_water_level(&self) -> f64 {
        self.water_level
    }

    /// Sets the height of the water surface
    pub fn set_water_level(&mut self, level: f64) {
        self.water_level = level;
    }

    /// Gets the density of the fluid
    pub fn get_density(&self) -> f64 {
        self.density
    }

    /// Computes the lift on `body`, or `None` when its centroid is out of the water
    pub fn compute_force(&self, body: &RigidBody) -> Option<Vector2> {
        if body.get_centroid().y >= self.water_level {
            return None;
        }

        let submerged = body.get_polygon().area_below(self.water_level);
        let lift = self.density * self.gravity * self.depth * submerged;
        Some(Vector2::new(0.0, lift))
    }
}

impl ForceGenerator for BuoyancyForce {
    fn generator_type(&self) -> &'static str {
        "Buoyancy"
    }

    fn apply_forces(&mut self, ctx: &mut ForceContext<'_>) {
        if !self.enabled {
            return;
        }

        let body = match ctx.bodies.get_body_mut(self.body[0]) {
            Ok(body) => body,
            Err(_) => return,
        };

        match self.compute_force(body) {
            Some(force) => body.add_force(force),
            None => trace!("{} is above the water line, no buoyancy", self.body[0]),
        }
    }

    fn get_affected_bodies(&self) -> &[BodyHandle] {
        &self.body
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
