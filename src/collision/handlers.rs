use crate::bodies::RigidBody;
use crate::collision::CollisionHandler;
use crate::math::Vector2;

/// `m1·m2 / (m1 + m2)`, or the finite mass when the other one is infinite
pub fn reduced_mass(mass_a: f64, mass_b: f64) -> f64 {
    if mass_a.is_infinite() {
        mass_b
    } else if mass_b.is_infinite() {
        mass_a
    } else {
        mass_a * mass_b / (mass_a + mass_b)
    }
}

/// Adds the impulse pair that resolves a collision along `axis`.
///
/// `J = μ·(1 + e)·((vB - vA)·axis)·axis` goes to `body_a` and `-J` to
/// `body_b`. Two immovable bodies get nothing.
pub fn apply_collision_impulse(body_a: &mut RigidBody, body_b: &mut RigidBody, axis: Vector2, elasticity: f64) {
    if body_a.is_infinite_mass() && body_b.is_infinite_mass() {
        return;
    }

    let relative_speed = body_b.get_velocity().dot(&axis) - body_a.get_velocity().dot(&axis);
    let mu = reduced_mass(body_a.get_mass(), body_b.get_mass());
    let impulse = axis * (mu * (1.0 + elasticity) * relative_speed);

    body_a.add_impulse(impulse);
    body_b.add_impulse(-impulse);
}

/// Bounces two bodies off each other with the given elasticity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsCollisionHandler {
    /// Coefficient of restitution; 1 is perfectly elastic, 0 perfectly inelastic
    pub elasticity: f64,
}

impl PhysicsCollisionHandler {
    pub fn new(elasticity: f64) -> Self {
        Self { elasticity }
    }
}

impl CollisionHandler for PhysicsCollisionHandler {
    fn on_collision(&mut self, body_a: &mut RigidBody, body_b: &mut RigidBody, axis: Vector2) {
        apply_collision_impulse(body_a, body_b, axis, self.elasticity);
    }
}

/// Flags both bodies for removal on first contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DestructiveCollisionHandler;

impl CollisionHandler for DestructiveCollisionHandler {
    fn on_collision(&mut self, body_a: &mut RigidBody, body_b: &mut RigidBody, _axis: Vector2) {
        body_a.remove();
        body_b.remove();
    }
}
