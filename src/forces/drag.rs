use crate::forces::{ForceContext, ForceGenerator};
use crate::core::BodyHandle;
use std::any::Any;

/// Linear drag opposing a body's velocity, `F = -γ·v`
#[derive(Debug, Clone)]
pub struct DragForce {
    /// The body slowed by this drag
    body: [BodyHandle; 1],

    /// Linear drag coefficient
    gamma: f64,

    /// Whether the force generator is enabled
    enabled: bool,
}

impl DragForce {
    /// Creates a new drag force generator
    pub fn new(gamma: f64, body: BodyHandle) -> Self {
        Self {
            body: [body],
            gamma,
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

    /// Gets the drag coefficient
    pub fn get_gamma(&self) -> f64 {
        self.gamma
    }

    /// Sets the drag coefficient
    pub fn set_gamma(&mut self, gamma: f64) {
        self.gamma = gamma;
    }
}

impl ForceGenerator for DragForce {
    fn generator_type(&self) -> &'static str {
        "Drag"
    }

    fn apply_forces(&mut self, ctx: &mut ForceContext<'_>) {
        if !self.enabled {
            return;
        }

        let body = match ctx.bodies.get_body_mut(self.body[0]) {
            Ok(body) => body,
            Err(_) => return,
        };

        let force = body.get_velocity() * -self.gamma;
        body.add_force(force);
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
