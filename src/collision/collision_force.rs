use crate::bodies::RigidBody;
use crate::collision::{find_collision_with_mode, AxisMode};
use crate::core::{BodyHandle, CollisionEvent, CollisionEventType};
use crate::forces::{ForceContext, ForceGenerator};
use crate::math::Vector2;
use log::trace;
use std::any::Any;
use std::fmt;

/// Reaction to two bodies starting to overlap.
///
/// Closures with the matching signature implement this trait, so any state
/// the handler needs can simply be captured.
pub trait CollisionHandler: 'static {
    /// Called once when the bodies begin overlapping, with the unit axis of least overlap
    fn on_collision(&mut self, body_a: &mut RigidBody, body_b: &mut RigidBody, axis: Vector2);
}

impl<F> CollisionHandler for F
where
    F: FnMut(&mut RigidBody, &mut RigidBody, Vector2) + 'static,
{
    fn on_collision(&mut self, body_a: &mut RigidBody, body_b: &mut RigidBody, axis: Vector2) {
        self(body_a, body_b, axis)
    }
}

/// Contact latch of a collision binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionState {
    #[default]
    NotColliding,
    Colliding,
}

/// A binding that runs a separating axis test on two bodies every tick.
///
/// The handler fires on the transition into contact only. While the bodies
/// keep overlapping nothing happens, and separating just resets the latch,
/// so a response impulse is never re-applied to interpenetrating bodies.
///
/// The latch belongs to the binding. Two bindings on the same pair track
/// contact independently.
pub struct CollisionForce {
    /// The two bodies tested against each other
    bodies: [BodyHandle; 2],

    /// The reaction to a new contact
    handler: Box<dyn CollisionHandler>,

    /// Current contact latch
    state: CollisionState,

    /// Which edges provide separating axes
    axis_mode: AxisMode,

    /// Axis reported by the most recent new contact
    last_axis: Option<Vector2>,
}

impl CollisionForce {
    /// Creates a new collision binding between two bodies
    pub fn new<H: CollisionHandler>(body_a: BodyHandle, body_b: BodyHandle, handler: H) -> Self {
        Self::with_axis_mode(body_a, body_b, handler, AxisMode::Closed)
    }

    /// Creates a new collision binding using a specific axis mode
    pub fn with_axis_mode<H: CollisionHandler>(
        body_a: BodyHandle,
        body_b: BodyHandle,
        handler: H,
        axis_mode: AxisMode,
    ) -> Self {
        Self {
            bodies: [body_a, body_b],
            handler: Box::new(handler),
            state: CollisionState::NotColliding,
            axis_mode,
            last_axis: None,
        }
    }

    /// Returns the contact latch
    pub fn get_state(&self) -> CollisionState {
        self.state
    }

    /// Returns true while the latch records contact
    pub fn is_colliding(&self) -> bool {
        self.state == CollisionState::Colliding
    }

    /// Returns the axis of the most recent new contact
    pub fn get_last_axis(&self) -> Option<Vector2> {
        self.last_axis
    }

    /// Returns the axis mode
    pub fn get_axis_mode(&self) -> AxisMode {
        self.axis_mode
    }
}

impl fmt::Debug for CollisionForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionForce")
            .field("bodies", &self.bodies)
            .field("state", &self.state)
            .field("axis_mode", &self.axis_mode)
            .field("last_axis", &self.last_axis)
            .finish_non_exhaustive()
    }
}

impl ForceGenerator for CollisionForce {
    fn generator_type(&self) -> &'static str {
        "Collision"
    }

    fn apply_forces(&mut self, ctx: &mut ForceContext<'_>) {
        let [handle_a, handle_b] = self.bodies;
        let (body_a, body_b) = match ctx.bodies.get_pair_mut(handle_a, handle_b) {
            Ok(pair) => pair,
            Err(_) => return,
        };

        let info = find_collision_with_mode(body_a.get_polygon(), body_b.get_polygon(), self.axis_mode);

        match (self.state, info.collided) {
            (CollisionState::NotColliding, true) => {
                self.state = CollisionState::Colliding;
                self.last_axis = Some(info.axis);
                body_a.set_collision_partner(Some(handle_b));
                body_b.set_collision_partner(Some(handle_a));

                trace!("{} and {} collided along {}", handle_a, handle_b, info.axis);
                self.handler.on_collision(body_a, body_b, info.axis);

                ctx.events.add_collision_event(CollisionEvent {
                    event_type: CollisionEventType::Begin,
                    body_a: handle_a,
                    body_b: handle_b,
                    axis: Some(info.axis),
                });
            }
            (CollisionState::Colliding, false) => {
                self.state = CollisionState::NotColliding;

                trace!("{} and {} separated", handle_a, handle_b);
                ctx.events.add_collision_event(CollisionEvent {
                    event_type: CollisionEventType::End,
                    body_a: handle_a,
                    body_b: handle_b,
                    axis: None,
                });
            }
            _ => {}
        }
    }

    fn get_affected_bodies(&self) -> &[BodyHandle] {
        &self.bodies
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
