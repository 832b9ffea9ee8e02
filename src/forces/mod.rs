mod force_generator;
mod gravity;
mod spring;
mod drag;
mod buoyancy;

pub use self::force_generator::{ForceGenerator, ForceRegistry, ForceContext, ForceCreator};
pub use self::gravity::{GravityForce, gravity_between};
pub use self::spring::SpringForce;
pub use self::drag::DragForce;
pub use self::buoyancy::BuoyancyForce;
