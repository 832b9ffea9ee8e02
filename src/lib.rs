//! A minimal 2D rigid-body physics engine.
//!
//! Bodies are convex polygons owned by a [`Scene`]. Force bindings
//! (gravity, springs, drag, buoyancy and collision responses) accumulate
//! forces and impulses on their participants every tick, after which each
//! body is integrated and bodies flagged for removal are swept together with
//! every binding that references them.

pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod collision;
pub mod forces;

/// Re-export common types for easier usage
pub use crate::core::{Scene, SimulationConfig, BodyHandle, ForceHandle};
pub use crate::bodies::{RigidBody, RgbColor, BodyTag};
pub use crate::shapes::Polygon;
pub use crate::math::Vector2;

/// Error types for the physics engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Invalid mass {0}: mass must be positive or infinite")]
        InvalidMass(f64),

        #[error("Degenerate polygon: {0}")]
        DegeneratePolygon(String),

        #[error("Body index {index} out of range (body count: {len})")]
        IndexOutOfRange { index: usize, len: usize },

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
