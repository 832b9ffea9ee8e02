use crate::bodies::RigidBody;
use crate::core::{BodyHandle, BodyStorage, EventQueue, ForceHandle};
use std::any::Any;
use std::fmt;

/// What a force generator gets to work with during a tick
pub struct ForceContext<'a> {
    /// Every body in the scene, as it was at the start of the tick plus
    /// whatever earlier generators accumulated. Bodies can only be flagged
    /// with [`RigidBody::remove`] here; the scene deallocates them in its sweep.
    pub bodies: &'a mut BodyStorage<RigidBody>,

    /// The scene's event queue
    pub events: &'a mut EventQueue,

    /// The time step being simulated
    pub dt: f64,
}

/// Base trait for force generators that accumulate forces and impulses on bodies.
///
/// A generator owns whatever auxiliary state it needs; dropping it releases
/// that state. The scene drops a generator as soon as any body it reports
/// from [`get_affected_bodies`](ForceGenerator::get_affected_bodies) is swept.
pub trait ForceGenerator: fmt::Debug + 'static {
    /// Returns the type name of the force generator
    fn generator_type(&self) -> &'static str;

    /// Accumulates this tick's forces and impulses
    fn apply_forces(&mut self, ctx: &mut ForceContext<'_>);

    /// Returns the bodies this generator depends on
    fn get_affected_bodies(&self) -> &[BodyHandle];

    /// Returns true if the force generator affects the given body
    fn affects_body(&self, body: BodyHandle) -> bool {
        self.get_affected_bodies().contains(&body)
    }

    /// Returns a dynamic reference to any for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Returns a dynamic mutable reference to any for downcasting
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A force generator backed by a closure.
///
/// The closure owns its auxiliary state. Participants are only used to decide
/// when the binding must be dropped; an empty list makes the binding live as
/// long as the scene.
pub struct ForceCreator<F> {
    participants: Vec<BodyHandle>,
    update: F,
}

impl<F> ForceCreator<F>
where
    F: FnMut(&mut ForceContext<'_>) + 'static,
{
    /// Creates a new closure-backed generator
    pub fn new(participants: Vec<BodyHandle>, update: F) -> Self {
        Self {
            participants,
            update,
        }
    }
}

impl<F> fmt::Debug for ForceCreator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForceCreator")
            .field("participants", &self.participants)
            .finish_non_exhaustive()
    }
}

impl<F> ForceGenerator for ForceCreator<F>
where
    F: FnMut(&mut ForceContext<'_>) + 'static,
{
    fn generator_type(&self) -> &'static str {
        "ForceCreator"
    }

    fn apply_forces(&mut self, ctx: &mut ForceContext<'_>) {
        (self.update)(ctx);
    }

    fn get_affected_bodies(&self) -> &[BodyHandle] {
        &self.participants
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[derive(Debug)]
struct ForceBinding {
    handle: ForceHandle,
    generator: Box<dyn ForceGenerator>,
}

/// A force generator registry that runs generators in registration order
#[derive(Debug)]
pub struct ForceRegistry {
    bindings: Vec<ForceBinding>,
    next_id: u64,
}

impl Default for ForceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceRegistry {
    /// Creates a new empty force registry
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty registry with room for `capacity` generators
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bindings: Vec::with_capacity(capacity),
            next_id: 1,
        }
    }

    /// Adds a force generator to the end of the run order
    pub fn add_generator(&mut self, generator: Box<dyn ForceGenerator>) -> ForceHandle {
        let handle = ForceHandle(self.next_id);
        self.next_id += 1;
        self.bindings.push(ForceBinding { handle, generator });
        handle
    }

    /// Removes a force generator from the registry
    pub fn remove_generator(&mut self, handle: ForceHandle) -> Option<Box<dyn ForceGenerator>> {
        let index = self.bindings.iter().position(|b| b.handle == handle)?;
        Some(self.bindings.remove(index).generator)
    }

    /// Removes the most recently added generator
    pub fn remove_last(&mut self) -> Option<Box<dyn ForceGenerator>> {
        self.bindings.pop().map(|b| b.generator)
    }

    /// Returns the number of generators in the registry
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns a generator by handle
    pub fn get(&self, handle: ForceHandle) -> Option<&dyn ForceGenerator> {
        self.bindings
            .iter()
            .find(|b| b.handle == handle)
            .map(|b| b.generator.as_ref())
    }

    /// Returns a mutable generator by handle
    pub fn get_mut(&mut self, handle: ForceHandle) -> Option<&mut dyn ForceGenerator> {
        self.bindings
            .iter_mut()
            .find(|b| b.handle == handle)
            .map(|b| b.generator.as_mut())
    }

    /// Returns the handles in run order
    pub fn handles(&self) -> Vec<ForceHandle> {
        self.bindings.iter().map(|b| b.handle).collect()
    }

    /// Runs every generator once, in registration order
    pub fn apply_forces(&mut self, ctx: &mut ForceContext<'_>) {
        for binding in &mut self.bindings {
            binding.generator.apply_forces(ctx);
        }
    }

    /// Clears all force generators
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Drops every generator that depends on `body` and returns how many were dropped
    pub fn remove_generators_for_body(&mut self, body: BodyHandle) -> usize {
        let before = self.bindings.len();
        self.bindings.retain(|binding| !binding.generator.affects_body(body));
        before - self.bindings.len()
    }
}
