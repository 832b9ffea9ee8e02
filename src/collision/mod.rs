mod sat;
mod collision_force;
mod handlers;

pub use self::sat::{find_collision, find_collision_with_mode, axes, AxisMode, CollisionInfo};
pub use self::collision_force::{CollisionForce, CollisionHandler, CollisionState};
pub use self::handlers::{
    apply_collision_impulse, reduced_mass, DestructiveCollisionHandler, PhysicsCollisionHandler,
};
