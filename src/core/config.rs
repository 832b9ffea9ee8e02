use crate::collision::AxisMode;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration parameters for a scene
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Centroid distance below which newtonian gravity contributes nothing
    pub gravity_min_distance: f64,

    /// Out-of-plane thickness used to turn submerged area into displaced volume
    pub buoyancy_depth: f64,

    /// Which polygon edges collision bindings derive separating axes from
    pub axis_mode: AxisMode,

    /// Initial capacity of the body list
    pub body_capacity: usize,

    /// Initial capacity of the force binding list
    pub force_capacity: usize,
}

impl SimulationConfig {
    /// Creates a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the gravity cutoff distance
    pub fn with_gravity_min_distance(mut self, distance: f64) -> Self {
        self.gravity_min_distance = distance.max(0.0);
        self
    }

    /// Sets the buoyancy thickness
    pub fn with_buoyancy_depth(mut self, depth: f64) -> Self {
        self.buoyancy_depth = depth.max(0.0);
        self
    }

    /// Sets the separating axis mode used by collision bindings
    pub fn with_axis_mode(mut self, mode: AxisMode) -> Self {
        self.axis_mode = mode;
        self
    }

    /// Sets the initial capacities of the body and force lists
    pub fn with_capacity(mut self, bodies: usize, forces: usize) -> Self {
        self.body_capacity = bodies;
        self.force_capacity = forces;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity_min_distance: 5.0,
            buoyancy_depth: 2.0,
            axis_mode: AxisMode::Closed,
            body_capacity: 10,
            force_capacity: 10,
        }
    }
}
