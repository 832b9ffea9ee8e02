use crate::forces::{ForceContext, ForceGenerator};
use crate::core::BodyHandle;
use std::any::Any;

/// An ideal zero-rest-length spring between two centroids, `F = k·(cB - cA)`
#[derive(Debug, Clone)]
pub struct SpringForce {
    /// The two connected bodies
    bodies: [BodyHandle; 2],

    /// The spring stiffness coefficient
    stiffness: f64,

    /// Whether the force generator is enabled
    enabled: bool,
}

impl SpringForce {
    /// Creates a new spring between two bodies
    pub fn new(stiffness: f64, body_a: BodyHandle, body_b: BodyHandle) -> Self {
        Self {
            bodies: [body_a, body_b],
            stiffness,
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

    /// Gets the spring stiffness coefficient
    pub fn get_stiffness(&self) -> f64 {
        self.stiffness
    }

    /// Sets the spring stiffness coefficient
    pub fn set_stiffness(&mut self, stiffness: f64) {
        self.stiffness = stiffness;
    }
}

impl ForceGenerator for SpringForce {
    fn generator_type(&self) -> &'static str {
        "Spring"
    }

    fn apply_forces(&mut self, ctx: &mut ForceContext<'_>) {
        if !self.enabled {
            return;
        }

        let (body_a, body_b) = match ctx.bodies.get_pair_mut(self.bodies[0], self.bodies[1]) {
            Ok(pair) => pair,
            Err(_) => return,
        };

        let force = (body_b.get_centroid() - body_a.get_centroid()) * self.stiffness;
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
