use crate::bodies::{body_flags::BodyFlags, BodyTag, RgbColor};
use crate::core::BodyHandle;
use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::shapes::Polygon;
use crate::Result;

/// A rigid polygon body for physics simulation
#[derive(Debug, Clone)]
pub struct RigidBody {
    /// The body's polygon in world space
    shape: Polygon,

    /// Cached area centroid of `shape`
    centroid: Vector2,

    /// The body's mass, `f64::INFINITY` for immovable bodies
    mass: f64,

    /// The body's linear velocity
    velocity: Vector2,

    /// Absolute orientation in radians
    orientation: f64,

    /// Display color
    color: RgbColor,

    /// Force accumulated since the last integration step
    force: Vector2,

    /// Impulse accumulated since the last integration step
    impulse: Vector2,

    /// The body's flags
    flags: BodyFlags,

    /// Caller-defined classification
    tag: Option<BodyTag>,

    /// The body this one last made contact with through a collision binding
    collision_partner: Option<BodyHandle>,

    /// Sprite path for renderers that draw images instead of polygons
    image_path: Option<String>,
}

impl RigidBody {
    /// Creates a new rigid body.
    ///
    /// `mass` must be positive; `f64::INFINITY` creates an immovable body.
    pub fn new(shape: Polygon, mass: f64, color: RgbColor) -> Result<Self> {
        if mass.is_nan() || mass <= 0.0 {
            return Err(PhysicsError::InvalidMass(mass));
        }

        let centroid = shape.centroid();

        Ok(Self {
            shape,
            centroid,
            mass,
            velocity: Vector2::zero(),
            orientation: 0.0,
            color,
            force: Vector2::zero(),
            impulse: Vector2::zero(),
            flags: BodyFlags::empty(),
            tag: None,
            collision_partner: None,
            image_path: None,
        })
    }

    /// Creates a new rigid body from raw vertices
    pub fn from_points(points: Vec<Vector2>, mass: f64, color: RgbColor) -> Result<Self> {
        Self::new(Polygon::new(points)?, mass, color)
    }

    /// Creates an immovable body
    pub fn new_static(shape: Polygon, color: RgbColor) -> Self {
        let centroid = shape.centroid();
        Self {
            shape,
            centroid,
            mass: f64::INFINITY,
            velocity: Vector2::zero(),
            orientation: 0.0,
            color,
            force: Vector2::zero(),
            impulse: Vector2::zero(),
            flags: BodyFlags::empty(),
            tag: None,
            collision_partner: None,
            image_path: None,
        }
    }

    /// Attaches a tag
    pub fn with_tag(mut self, tag: impl Into<BodyTag>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Attaches a sprite path
    pub fn with_image_path(mut self, path: impl Into<String>) -> Self {
        self.image_path = Some(path.into());
        self
    }

    /// Returns a copy of the polygon's vertices
    pub fn get_shape(&self) -> Vec<Vector2> {
        self.shape.to_points()
    }

    /// Returns the polygon for read-only use
    pub fn get_polygon(&self) -> &Polygon {
        &self.shape
    }

    /// Replaces the polygon and recomputes the centroid. Orientation is kept as is.
    pub fn set_shape(&mut self, shape: Polygon) {
        self.centroid = shape.centroid();
        self.shape = shape;
    }

    /// Returns the polygon's area
    pub fn get_area(&self) -> f64 {
        self.shape.area()
    }

    pub fn get_centroid(&self) -> Vector2 {
        self.centroid
    }

    /// Moves the body so that its centroid lands on `centroid`
    pub fn set_centroid(&mut self, centroid: Vector2) {
        self.shape.translate(centroid - self.centroid);
        self.centroid = centroid;
    }

    pub fn get_velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    pub fn set_velocity_x(&mut self, vx: f64) {
        self.velocity.x = vx;
    }

    pub fn set_velocity_y(&mut self, vy: f64) {
        self.velocity.y = vy;
    }

    /// Returns the absolute orientation in radians
    pub fn get_rotation(&self) -> f64 {
        self.orientation
    }

    /// Rotates the body about its centroid so that its orientation becomes `angle`.
    ///
    /// Calling this repeatedly with the same angle has no further effect.
    pub fn set_rotation(&mut self, angle: f64) {
        self.shape.rotate(angle - self.orientation, self.centroid);
        self.orientation = angle;
    }

    /// Rotates the body about its centroid by `delta` radians
    pub fn rotate_by(&mut self, delta: f64) {
        self.shape.rotate(delta, self.centroid);
        self.orientation += delta;
    }

    pub fn get_mass(&self) -> f64 {
        self.mass
    }

    /// Returns true for immovable bodies
    pub fn is_infinite_mass(&self) -> bool {
        self.mass.is_infinite()
    }

    /// Returns the inverse mass, zero for immovable bodies
    pub fn get_inverse_mass(&self) -> f64 {
        if self.is_infinite_mass() {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    pub fn get_color(&self) -> RgbColor {
        self.color
    }

    pub fn set_color(&mut self, color: RgbColor) {
        self.color = color;
    }

    pub fn get_tag(&self) -> Option<BodyTag> {
        self.tag
    }

    pub fn set_tag(&mut self, tag: Option<BodyTag>) {
        self.tag = tag;
    }

    pub fn get_image_path(&self) -> Option<&str> {
        self.image_path.as_deref()
    }

    /// Returns the force accumulated so far this tick
    pub fn get_force(&self) -> Vector2 {
        self.force
    }

    /// Returns the impulse accumulated so far this tick
    pub fn get_impulse(&self) -> Vector2 {
        self.impulse
    }

    /// Adds a force to be integrated over the next tick
    pub fn add_force(&mut self, force: Vector2) {
        self.force += force;
    }

    /// Adds an instantaneous impulse to be applied on the next tick
    pub fn add_impulse(&mut self, impulse: Vector2) {
        self.impulse += impulse;
    }

    /// Flags the body for removal at the end of the current tick
    pub fn remove(&mut self) {
        self.flags.insert(BodyFlags::REMOVED);
    }

    pub fn is_removed(&self) -> bool {
        self.flags.contains(BodyFlags::REMOVED)
    }

    /// Returns whether a collision binding has reported contact for this body
    pub fn is_in_collision(&self) -> bool {
        self.flags.contains(BodyFlags::IN_COLLISION)
    }

    /// Returns the body last reported in contact with this one.
    ///
    /// The handle is a weak reference: the partner may have been removed since.
    pub fn get_collision_partner(&self) -> Option<BodyHandle> {
        if self.is_in_collision() {
            self.collision_partner
        } else {
            None
        }
    }

    /// Records contact with `partner`
    pub fn set_collision_partner(&mut self, partner: Option<BodyHandle>) {
        self.flags.insert(BodyFlags::IN_COLLISION);
        if partner.is_some() {
            self.collision_partner = partner;
        }
    }

    /// Integrates accumulated force and impulse over `dt` and moves the body.
    ///
    /// Position advances with the average of the old and new velocities.
    /// Both accumulators are reset afterwards.
    pub fn tick(&mut self, dt: f64) {
        let inv_mass = self.get_inverse_mass();
        let mut delta_v = Vector2::zero();
        if inv_mass > 0.0 {
            delta_v += self.force * inv_mass * dt;
            delta_v += self.impulse * inv_mass;
        }

        self.force = Vector2::zero();
        self.impulse = Vector2::zero();

        let old_velocity = self.velocity;
        let new_velocity = old_velocity + delta_v;
        let displacement = (old_velocity + new_velocity) * (0.5 * dt);

        self.set_centroid(self.centroid + displacement);
        self.velocity = new_velocity;
    }
}
