use crate::core::{
    BodyHandle, ForceHandle, SimulationConfig, EventQueue, BodyEvent, BodyEventType, BodyStorage,
};
use crate::bodies::RigidBody;
use crate::error::PhysicsError;
use crate::forces::{ForceContext, ForceCreator, ForceGenerator, ForceRegistry};
use crate::Result;
use log::debug;

/// The scene owns every body and every force binding and advances them together.
///
/// Bodies can be addressed two ways. Indices follow insertion order and are
/// compacted whenever a removed body is swept at the end of a tick, so an
/// index is only meaningful until the next [`tick`](Scene::tick).
/// [`BodyHandle`]s stay valid until their body is swept and should be used
/// for anything kept across ticks.
pub struct Scene {
    /// All rigid bodies in the scene
    bodies: BodyStorage<RigidBody>,

    /// All force bindings, in registration order
    forces: ForceRegistry,

    /// Configuration for the simulation
    config: SimulationConfig,

    /// Events produced since the start of the last tick
    events: EventQueue,

    /// The total elapsed simulation time
    time: f64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Creates a new empty scene with default settings
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    /// Creates a new empty scene with the given configuration
    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            bodies: BodyStorage::with_capacity(config.body_capacity),
            forces: ForceRegistry::with_capacity(config.force_capacity),
            config,
            events: EventQueue::new(),
            time: 0.0,
        }
    }

    /// Returns the current simulation time
    pub fn get_time(&self) -> f64 {
        self.time
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Adds a rigid body to the end of the body list and returns its handle
    pub fn add_body(&mut self, body: RigidBody) -> BodyHandle {
        let handle = self.bodies.add(body);

        self.events.add_body_event(BodyEvent {
            event_type: BodyEventType::Added,
            body: handle,
        });

        handle
    }

    /// Returns the number of bodies in the scene
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Gets the body at `index` in insertion order
    pub fn get_body(&self, index: usize) -> Result<&RigidBody> {
        let handle = self.bodies.handle_at(index)?;
        self.bodies.get_body(handle)
    }

    /// Gets the body at `index` in insertion order, mutably
    pub fn get_body_mut(&mut self, index: usize) -> Result<&mut RigidBody> {
        let handle = self.bodies.handle_at(index)?;
        self.bodies.get_body_mut(handle)
    }

    /// Returns the handle of the body at `index`
    pub fn handle_at(&self, index: usize) -> Result<BodyHandle> {
        self.bodies.handle_at(index)
    }

    /// Returns the current index of a body
    pub fn index_of(&self, handle: BodyHandle) -> Option<usize> {
        self.bodies.index_of(handle)
    }

    /// Gets a body by its handle
    pub fn body(&self, handle: BodyHandle) -> Result<&RigidBody> {
        self.bodies.get_body(handle)
    }

    /// Gets a body by its handle, mutably
    pub fn body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody> {
        self.bodies.get_body_mut(handle)
    }

    /// Returns true if the handle refers to a body still in the scene
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.bodies.contains(handle)
    }

    /// Iterates over the bodies in insertion order
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> + '_ {
        self.bodies.iter()
    }

    /// Flags the body at `index` for removal.
    ///
    /// The body stays in the scene, readable by handlers, until the sweep at
    /// the end of the next tick.
    pub fn remove_body(&mut self, index: usize) -> Result<()> {
        self.get_body_mut(index)?.remove();
        Ok(())
    }

    /// Flags a body for removal by handle
    pub fn remove_body_by_handle(&mut self, handle: BodyHandle) -> Result<()> {
        self.bodies.get_body_mut(handle)?.remove();
        Ok(())
    }

    /// Registers a force generator at the end of the run order.
    ///
    /// Fails if any body the generator depends on is not in the scene.
    pub fn add_force_generator(&mut self, generator: Box<dyn ForceGenerator>) -> Result<ForceHandle> {
        if let Some(missing) = generator
            .get_affected_bodies()
            .iter()
            .find(|&&handle| !self.bodies.contains(handle))
        {
            return Err(PhysicsError::ResourceNotFound(format!(
                "{} binding references missing body {}",
                generator.generator_type(),
                missing
            )));
        }

        let handle = self.forces.add_generator(generator);
        debug!("registered force binding {}", handle);
        Ok(handle)
    }

    /// Registers a closure as a force binding.
    ///
    /// The closure owns its auxiliary state, which is dropped together with
    /// the binding. The binding is dropped as soon as any of `participants`
    /// is swept; with no participants it lives as long as the scene.
    pub fn add_force_creator<F>(&mut self, participants: Vec<BodyHandle>, update: F) -> Result<ForceHandle>
    where
        F: FnMut(&mut ForceContext<'_>) + 'static,
    {
        self.add_force_generator(Box::new(ForceCreator::new(participants, update)))
    }

    /// Drops a force binding
    pub fn remove_force(&mut self, handle: ForceHandle) -> Result<()> {
        self.forces
            .remove_generator(handle)
            .map(|_| ())
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Force binding {} not found", handle)))
    }

    /// Drops the most recently registered force binding
    pub fn remove_last_force(&mut self) -> Option<Box<dyn ForceGenerator>> {
        self.forces.remove_last()
    }

    /// Returns a force binding for inspection
    pub fn get_force(&self, handle: ForceHandle) -> Result<&dyn ForceGenerator> {
        self.forces
            .get(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Force binding {} not found", handle)))
    }

    /// Returns a force binding for retuning, e.g. via
    /// `as_any_mut().downcast_mut::<SpringForce>()`
    pub fn get_force_mut(&mut self, handle: ForceHandle) -> Result<&mut dyn ForceGenerator> {
        self.forces
            .get_mut(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Force binding {} not found", handle)))
    }

    /// Returns the number of force bindings
    pub fn force_count(&self) -> usize {
        self.forces.len()
    }

    /// Returns the events produced since the start of the last tick
    pub fn get_events(&self) -> &EventQueue {
        &self.events
    }

    /// Advances the simulation by `dt`.
    ///
    /// Every force binding runs once in registration order against the
    /// state at the start of the tick, then every body is integrated in list
    /// order, and finally bodies flagged for removal are swept along with
    /// every binding that references them.
    pub fn tick(&mut self, dt: f64) {
        self.events.clear();

        let mut ctx = ForceContext {
            bodies: &mut self.bodies,
            events: &mut self.events,
            dt,
        };
        self.forces.apply_forces(&mut ctx);

        for index in 0..self.bodies.len() {
            let handle = self.bodies.handles()[index];
            if let Some(body) = self.bodies.get_mut(handle) {
                body.tick(dt);
            }
        }

        self.sweep_removed();
        self.time += dt;
    }

    /// Deallocates flagged bodies and drops their bindings
    fn sweep_removed(&mut self) {
        let removed: Vec<BodyHandle> = self
            .bodies
            .iter()
            .filter(|(_, body)| body.is_removed())
            .map(|(handle, _)| handle)
            .collect();

        for handle in removed {
            let purged = self.forces.remove_generators_for_body(handle);
            self.bodies.remove(handle);
            debug!("swept {} and {} force binding(s)", handle, purged);

            self.events.add_body_event(BodyEvent {
                event_type: BodyEventType::Removed,
                body: handle,
            });
        }
    }

    /// Removes every body and force binding
    pub fn clear(&mut self) {
        self.forces.clear();
        self.bodies.clear();
        self.events.clear();
        self.time = 0.0;
    }
}
