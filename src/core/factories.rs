use crate::collision::{CollisionForce, CollisionHandler, DestructiveCollisionHandler, PhysicsCollisionHandler};
use crate::core::{BodyHandle, ForceHandle, Scene};
use crate::error::PhysicsError;
use crate::forces::{BuoyancyForce, DragForce, GravityForce, SpringForce};
use crate::Result;

fn distinct(body_a: BodyHandle, body_b: BodyHandle, what: &str) -> Result<()> {
    if body_a == body_b {
        return Err(PhysicsError::InvalidParameter(format!(
            "{} needs two different bodies, got {} twice",
            what, body_a
        )));
    }
    Ok(())
}

/// Convenience constructors for the built-in force bindings
impl Scene {
    /// Mutual Newtonian attraction `G·m1·m2/d²` between two bodies.
    ///
    /// Pairs closer than `SimulationConfig::gravity_min_distance` feel nothing.
    pub fn create_newtonian_gravity(&mut self, g: f64, body_a: BodyHandle, body_b: BodyHandle) -> Result<ForceHandle> {
        distinct(body_a, body_b, "Gravity")?;
        let min_distance = self.get_config().gravity_min_distance;
        self.add_force_generator(Box::new(GravityForce::new(g, body_a, body_b, min_distance)))
    }

    /// Gravity that only acts while `body_a` is strictly above `surface_level`
    pub fn create_surface_gravity(
        &mut self,
        g: f64,
        surface_level: f64,
        body_a: BodyHandle,
        body_b: BodyHandle,
    ) -> Result<ForceHandle> {
        distinct(body_a, body_b, "Surface gravity")?;
        let min_distance = self.get_config().gravity_min_distance;
        self.add_force_generator(Box::new(GravityForce::new_above_surface(
            g,
            body_a,
            body_b,
            min_distance,
            surface_level,
        )))
    }

    /// A zero-rest-length spring of stiffness `k`
    pub fn create_spring(&mut self, k: f64, body_a: BodyHandle, body_b: BodyHandle) -> Result<ForceHandle> {
        distinct(body_a, body_b, "Spring")?;
        self.add_force_generator(Box::new(SpringForce::new(k, body_a, body_b)))
    }

    /// Linear drag `-γ·v`
    pub fn create_drag(&mut self, gamma: f64, body: BodyHandle) -> Result<ForceHandle> {
        self.add_force_generator(Box::new(DragForce::new(gamma, body)))
    }

    /// Upward buoyancy on the part of `body` below `water_level`
    pub fn create_buoyancy(
        &mut self,
        body: BodyHandle,
        water_level: f64,
        density: f64,
        gravity: f64,
    ) -> Result<ForceHandle> {
        let depth = self.get_config().buoyancy_depth;
        self.add_force_generator(Box::new(BuoyancyForce::new(body, water_level, density, gravity, depth)))
    }

    /// Runs `handler` once each time the two bodies start overlapping
    pub fn create_collision<H: CollisionHandler>(
        &mut self,
        body_a: BodyHandle,
        body_b: BodyHandle,
        handler: H,
    ) -> Result<ForceHandle> {
        distinct(body_a, body_b, "Collision")?;
        let axis_mode = self.get_config().axis_mode;
        self.add_force_generator(Box::new(CollisionForce::with_axis_mode(body_a, body_b, handler, axis_mode)))
    }

    /// Bounces the two bodies off each other with the given elasticity
    pub fn create_physics_collision(
        &mut self,
        elasticity: f64,
        body_a: BodyHandle,
        body_b: BodyHandle,
    ) -> Result<ForceHandle> {
        self.create_collision(body_a, body_b, PhysicsCollisionHandler::new(elasticity))
    }

    /// Removes both bodies on their first contact
    pub fn create_destructive_collision(&mut self, body_a: BodyHandle, body_b: BodyHandle) -> Result<ForceHandle> {
        self.create_collision(body_a, body_b, DestructiveCollisionHandler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{RgbColor, RigidBody};
    use crate::math::Vector2;
    use crate::shapes::Polygon;

    fn square(scene: &mut Scene, x: f64) -> BodyHandle {
        let shape = Polygon::rectangle(Vector2::new(x, 0.0), 1.0, 1.0).unwrap();
        scene.add_body(RigidBody::new(shape, 1.0, RgbColor::WHITE).unwrap())
    }

    #[test]
    fn pair_bindings_reject_a_single_body() {
        let mut scene = Scene::new();
        let a = square(&mut scene, 0.0);

        assert!(matches!(scene.create_spring(1.0, a, a), Err(PhysicsError::InvalidParameter(_))));
        assert!(matches!(
            scene.create_destructive_collision(a, a),
            Err(PhysicsError::InvalidParameter(_))
        ));
        assert_eq!(scene.force_count(), 0);
    }

    #[test]
    fn factories_register_in_order() {
        let mut scene = Scene::new();
        let a = square(&mut scene, 0.0);
        let b = square(&mut scene, 10.0);

        let gravity = scene.create_newtonian_gravity(1.0, a, b).unwrap();
        let drag = scene.create_drag(0.5, a).unwrap();

        assert_eq!(scene.force_count(), 2);
        assert_eq!(scene.get_force(gravity).unwrap().generator_type(), "Gravity");
        assert_eq!(scene.get_force(drag).unwrap().generator_type(), "Drag");
    }
}
