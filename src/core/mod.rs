pub mod scene;
pub mod config;
pub mod storage;
pub mod events;
mod factories;

pub use self::scene::Scene;
pub use self::config::SimulationConfig;
pub use self::storage::BodyStorage;
pub use self::events::{EventQueue, CollisionEvent, CollisionEventType, BodyEvent, BodyEventType};

use std::fmt;

/// A durable identifier for a body in a scene.
///
/// Handles stay valid across ticks until their body is swept. Once the body
/// is gone its slot may be reused, but the generation counter makes the old
/// handle fail lookups instead of aliasing the new body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl fmt::Display for BodyHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "body#{}v{}", self.index, self.generation)
    }
}

/// A unique identifier for a force binding in a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ForceHandle(pub(crate) u64);

impl fmt::Display for ForceHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "force#{}", self.0)
    }
}
