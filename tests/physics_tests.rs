use polyphys::{
    Scene, SimulationConfig, RigidBody, RgbColor, BodyHandle, BodyTag, Polygon, Vector2,
    collision::{AxisMode, CollisionForce, CollisionState},
    forces::{BuoyancyForce, DragForce, GravityForce, SpringForce},
    core::{BodyEventType, CollisionEventType},
    error::PhysicsError,
};
use approx::assert_relative_eq;
use std::cell::Cell;
use std::f64::consts::PI;
use std::rc::Rc;

fn square_body(center: Vector2, size: f64, mass: f64) -> RigidBody {
    let shape = Polygon::rectangle(center, size, size).unwrap();
    RigidBody::new(shape, mass, RgbColor::WHITE).unwrap()
}

fn add_square(scene: &mut Scene, center: Vector2, size: f64, mass: f64) -> BodyHandle {
    scene.add_body(square_body(center, size, mass))
}

#[test]
fn test_rigid_body_creation() {
    let body = square_body(Vector2::new(1.0, 2.0), 2.0, 3.0).with_tag(7u64);

    assert_relative_eq!(body.get_centroid(), Vector2::new(1.0, 2.0), epsilon = 1e-12);
    assert_eq!(body.get_mass(), 3.0);
    assert_relative_eq!(body.get_area(), 4.0);
    assert!(body.get_velocity().is_zero());
    assert_eq!(body.get_tag(), Some(BodyTag(7)));
    assert!(!body.is_removed());

    let shape = Polygon::rectangle(Vector2::zero(), 1.0, 1.0).unwrap();
    assert_eq!(
        RigidBody::new(shape.clone(), 0.0, RgbColor::RED).unwrap_err(),
        PhysicsError::InvalidMass(0.0)
    );
    assert!(RigidBody::new(shape.clone(), -1.0, RgbColor::RED).is_err());
    assert!(RigidBody::new(shape, f64::NAN, RgbColor::RED).is_err());
}

#[test]
fn test_set_centroid_is_exact() {
    let mut body = square_body(Vector2::new(0.5, 0.5), 1.0, 1.0);
    body.set_centroid(Vector2::new(10.0, -4.0));

    assert_eq!(body.get_centroid(), Vector2::new(10.0, -4.0));
    assert_relative_eq!(body.get_polygon().centroid(), Vector2::new(10.0, -4.0), epsilon = 1e-9);
    assert_relative_eq!(body.get_shape()[0], Vector2::new(9.5, -4.5), epsilon = 1e-9);
}

#[test]
fn test_rotation_is_absolute_and_idempotent() {
    let mut body = square_body(Vector2::new(2.0, 2.0), 2.0, 1.0);

    body.set_rotation(PI / 2.0);
    let once = body.get_shape();
    body.set_rotation(PI / 2.0);

    for (now, before) in body.get_shape().iter().zip(&once) {
        assert_relative_eq!(*now, *before, epsilon = 1e-12);
    }
    assert_relative_eq!(body.get_rotation(), PI / 2.0);
    assert_relative_eq!(body.get_centroid(), Vector2::new(2.0, 2.0));

    body.rotate_by(PI / 2.0);
    assert_relative_eq!(body.get_rotation(), PI);
    // The first corner started at (1, 1) and is now diagonally opposite
    assert_relative_eq!(body.get_shape()[0], Vector2::new(3.0, 3.0), epsilon = 1e-9);
}

#[test]
fn test_tick_without_forces_is_a_no_op() {
    let mut scene = Scene::new();
    let handle = add_square(&mut scene, Vector2::new(1.0, 1.0), 1.0, 2.0);
    let before = scene.body(handle).unwrap().get_shape();

    scene.tick(1.0);

    let body = scene.body(handle).unwrap();
    assert_eq!(body.get_shape(), before);
    assert_relative_eq!(body.get_centroid(), Vector2::new(1.0, 1.0), epsilon = 1e-12);
    assert!(body.get_velocity().is_zero());
    assert_relative_eq!(scene.get_time(), 1.0);
}

#[test]
fn test_trapezoidal_integration() {
    let mut body = square_body(Vector2::zero(), 1.0, 2.0);
    body.set_velocity(Vector2::new(1.0, 0.0));
    body.add_force(Vector2::new(4.0, 0.0));
    body.add_impulse(Vector2::new(0.0, 2.0));

    body.tick(0.5);

    // dv = 4/2*0.5 + (0, 2/2) = (1, 1); displacement = 0.5 * 0.5 * (v0 + v1)
    assert_relative_eq!(body.get_velocity(), Vector2::new(2.0, 1.0));
    assert_relative_eq!(body.get_centroid(), Vector2::new(0.75, 0.25));
    assert!(body.get_force().is_zero());
    assert!(body.get_impulse().is_zero());
}

#[test]
fn test_infinite_mass_is_immovable() {
    let shape = Polygon::rectangle(Vector2::new(0.0, -5.0), 10.0, 1.0).unwrap();
    let mut ground = RigidBody::new(shape, f64::INFINITY, RgbColor::BLACK).unwrap();

    ground.add_force(Vector2::new(1.0e9, -1.0e9));
    ground.add_impulse(Vector2::new(5.0, 5.0));
    ground.tick(1.0);

    assert!(ground.get_velocity().is_zero());
    assert_relative_eq!(ground.get_centroid(), Vector2::new(0.0, -5.0), epsilon = 1e-12);
    assert_eq!(ground.get_inverse_mass(), 0.0);
}

#[test]
fn test_gravity_obeys_newtons_third_law() {
    let mut scene = Scene::new();
    let a = add_square(&mut scene, Vector2::new(0.0, 0.0), 1.0, 1.0);
    let b = add_square(&mut scene, Vector2::new(10.0, 0.0), 1.0, 3.0);
    scene.create_newtonian_gravity(100.0, a, b).unwrap();

    scene.tick(0.1);

    let va = scene.body(a).unwrap().get_velocity();
    let vb = scene.body(b).unwrap().get_velocity();

    // F = 100 * 1 * 3 / 100 = 3, pulling the bodies together
    assert_relative_eq!(va, Vector2::new(0.3, 0.0), epsilon = 1e-9);
    assert_relative_eq!(vb, Vector2::new(-0.1, 0.0), epsilon = 1e-9);
    assert_relative_eq!(va * 1.0 + vb * 3.0, Vector2::zero(), epsilon = 1e-12);
}

#[test]
fn test_gravity_cutoff_below_min_distance() {
    let mut scene = Scene::with_config(SimulationConfig::default().with_gravity_min_distance(5.0));
    let a = add_square(&mut scene, Vector2::new(0.0, 0.0), 1.0, 1.0);
    let b = add_square(&mut scene, Vector2::new(4.0, 0.0), 1.0, 1.0);
    scene.create_newtonian_gravity(100.0, a, b).unwrap();

    scene.tick(0.1);

    assert!(scene.body(a).unwrap().get_velocity().is_zero());
    assert!(scene.body(b).unwrap().get_velocity().is_zero());
}

#[test]
fn test_surface_gravity_only_above_level() {
    let mut scene = Scene::new();
    let diver = add_square(&mut scene, Vector2::new(0.0, -1.0), 1.0, 1.0);
    let planet = add_square(&mut scene, Vector2::new(0.0, -100.0), 50.0, 1000.0);
    scene.create_surface_gravity(1.0, 0.0, diver, planet).unwrap();

    scene.tick(0.1);
    assert!(scene.body(diver).unwrap().get_velocity().is_zero());

    scene.body_mut(diver).unwrap().set_centroid(Vector2::new(0.0, 1.0));
    scene.tick(0.1);
    assert!(scene.body(diver).unwrap().get_velocity().y < 0.0);
}

#[test]
fn test_spring_pulls_bodies_together() {
    let mut scene = Scene::new();
    let a = add_square(&mut scene, Vector2::new(0.0, 0.0), 1.0, 1.0);
    let b = add_square(&mut scene, Vector2::new(10.0, 0.0), 1.0, 1.0);
    scene.create_spring(1.0, a, b).unwrap();

    scene.tick(0.1);

    assert_relative_eq!(scene.body(a).unwrap().get_velocity(), Vector2::new(1.0, 0.0), epsilon = 1e-12);
    assert_relative_eq!(scene.body(b).unwrap().get_velocity(), Vector2::new(-1.0, 0.0), epsilon = 1e-12);
}

#[test]
fn test_drag_opposes_velocity() {
    let mut scene = Scene::new();
    let a = add_square(&mut scene, Vector2::zero(), 1.0, 1.0);
    scene.body_mut(a).unwrap().set_velocity(Vector2::new(2.0, 0.0));
    scene.create_drag(0.5, a).unwrap();

    scene.tick(1.0);

    let body = scene.body(a).unwrap();
    assert_relative_eq!(body.get_velocity(), Vector2::new(1.0, 0.0), epsilon = 1e-12);
    assert_relative_eq!(body.get_centroid(), Vector2::new(1.5, 0.0), epsilon = 1e-12);
}

#[test]
fn test_buoyancy_lifts_submerged_body() {
    let mut scene = Scene::with_config(SimulationConfig::default().with_buoyancy_depth(2.0));
    let a = add_square(&mut scene, Vector2::zero(), 2.0, 1.0);
    scene.create_buoyancy(a, 0.5, 1.0, 1.0).unwrap();

    scene.tick(1.0);

    // Submerged area is 2 x 1.5, lift = 1 * 1 * 2 * 3
    assert_relative_eq!(scene.body(a).unwrap().get_velocity(), Vector2::new(0.0, 6.0), epsilon = 1e-9);
}

#[test]
fn test_buoyancy_skipped_above_water() {
    let mut scene = Scene::new();
    let a = add_square(&mut scene, Vector2::zero(), 2.0, 1.0);
    // Partly submerged but the centroid is above the water line
    scene.create_buoyancy(a, -0.5, 1.0, 1.0).unwrap();

    scene.tick(1.0);

    let body = scene.body(a).unwrap();
    assert!(body.get_velocity().is_zero());
    assert!(body.get_centroid().is_finite());
}

#[test]
fn test_elastic_collision_exchanges_velocities() {
    let mut scene = Scene::new();
    let a = add_square(&mut scene, Vector2::new(-0.5, 0.0), 2.0, 1.0);
    let b = add_square(&mut scene, Vector2::new(0.5, 0.0), 2.0, 1.0);
    scene.body_mut(a).unwrap().set_velocity(Vector2::new(1.0, 0.0));
    scene.body_mut(b).unwrap().set_velocity(Vector2::new(-1.0, 0.0));
    scene.create_physics_collision(1.0, a, b).unwrap();

    scene.tick(0.01);

    assert_relative_eq!(scene.body(a).unwrap().get_velocity(), Vector2::new(-1.0, 0.0), epsilon = 1e-12);
    assert_relative_eq!(scene.body(b).unwrap().get_velocity(), Vector2::new(1.0, 0.0), epsilon = 1e-12);
    assert_eq!(scene.body(a).unwrap().get_collision_partner(), Some(b));
    assert_eq!(scene.body(b).unwrap().get_collision_partner(), Some(a));
}

#[test]
fn test_collision_against_infinite_mass_reflects() {
    let mut scene = Scene::new();
    let ball = add_square(&mut scene, Vector2::new(0.0, 0.4), 1.0, 2.0);
    let ground = scene.add_body(RigidBody::new_static(
        Polygon::rectangle(Vector2::new(0.0, -0.5), 10.0, 1.0).unwrap(),
        RgbColor::BLACK,
    ));
    scene.body_mut(ball).unwrap().set_velocity(Vector2::new(0.0, -3.0));
    scene.create_physics_collision(1.0, ball, ground).unwrap();

    scene.tick(0.01);

    assert_relative_eq!(scene.body(ball).unwrap().get_velocity(), Vector2::new(0.0, 3.0), epsilon = 1e-12);
    assert!(scene.body(ground).unwrap().get_velocity().is_zero());
}

#[test]
fn test_collision_handler_fires_once_per_contact() {
    let mut scene = Scene::new();
    let a = add_square(&mut scene, Vector2::new(0.0, 0.0), 2.0, 1.0);
    let b = add_square(&mut scene, Vector2::new(1.0, 0.0), 2.0, 1.0);

    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    let binding = scene
        .create_collision(a, b, move |_: &mut RigidBody, _: &mut RigidBody, _: Vector2| {
            counter.set(counter.get() + 1);
        })
        .unwrap();

    for _ in 0..5 {
        scene.tick(0.01);
    }
    assert_eq!(hits.get(), 1);

    let state = scene
        .get_force(binding)
        .unwrap()
        .as_any()
        .downcast_ref::<CollisionForce>()
        .map(CollisionForce::get_state);
    assert_eq!(state, Some(CollisionState::Colliding));

    // Separate: latch resets, handler does not fire
    scene.body_mut(b).unwrap().set_centroid(Vector2::new(10.0, 0.0));
    scene.tick(0.01);
    assert_eq!(hits.get(), 1);
    assert_eq!(scene.get_events().get_collision_events_of_type(CollisionEventType::End).len(), 1);

    // Touch again: fires once more
    scene.body_mut(b).unwrap().set_centroid(Vector2::new(1.0, 0.0));
    scene.tick(0.01);
    scene.tick(0.01);
    assert_eq!(hits.get(), 2);
}

#[test]
fn test_open_chain_axis_mode_is_configurable() {
    let triangle = Polygon::new(vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(2.0, 0.0),
        Vector2::new(2.0, 2.0),
    ])
    .unwrap();
    let square = Polygon::rectangle(Vector2::new(0.3, 1.5), 0.4, 0.4).unwrap();

    for (mode, expected) in [(AxisMode::Closed, 0), (AxisMode::OpenChain, 1)] {
        let mut scene = Scene::with_config(SimulationConfig::default().with_axis_mode(mode));
        let a = scene.add_body(RigidBody::new(triangle.clone(), 1.0, RgbColor::RED).unwrap());
        let b = scene.add_body(RigidBody::new(square.clone(), 1.0, RgbColor::BLUE).unwrap());
        scene.create_collision(a, b, |_: &mut RigidBody, _: &mut RigidBody, _: Vector2| {}).unwrap();

        scene.tick(0.0);

        let begins = scene.get_events().get_collision_events_of_type(CollisionEventType::Begin).len();
        assert_eq!(begins, expected, "{:?}", mode);
    }
}

#[test]
fn test_destructive_collision_removes_bodies_safely() {
    let mut scene = Scene::new();
    let a = add_square(&mut scene, Vector2::new(0.0, 0.0), 2.0, 1.0);
    let b = add_square(&mut scene, Vector2::new(1.0, 0.0), 2.0, 1.0);
    let c = add_square(&mut scene, Vector2::new(20.0, 0.0), 1.0, 1.0);

    // Aux state owned by a binding on `b`; dropped once `b` is swept
    let aux = Rc::new(());
    let held = aux.clone();
    let seen = Rc::new(Cell::new(0));
    let seen_in_tick = seen.clone();
    scene
        .add_force_creator(vec![b], move |_ctx| {
            let _keep = &held;
            seen_in_tick.set(seen_in_tick.get() + 1);
        })
        .unwrap();

    scene.create_destructive_collision(a, b).unwrap();
    // Registered after the destructive binding: still sees `a` this tick
    scene.create_spring(1.0, a, c).unwrap();
    scene.create_drag(0.1, c).unwrap();
    assert_eq!(scene.force_count(), 4);
    assert_eq!(Rc::strong_count(&aux), 2);

    scene.tick(0.1);

    assert_eq!(scene.body_count(), 1);
    assert!(!scene.contains(a));
    assert!(!scene.contains(b));
    assert!(matches!(scene.body(a), Err(PhysicsError::ResourceNotFound(_))));

    // Only the drag on `c` survives, and the creator's state was released
    assert_eq!(scene.force_count(), 1);
    assert_eq!(Rc::strong_count(&aux), 1);
    assert_eq!(seen.get(), 1);

    // The spring ran before the sweep
    assert!(scene.body(c).unwrap().get_velocity().x < 0.0);

    // Indices compacted, handle still valid
    assert_eq!(scene.index_of(c), Some(0));
    assert_eq!(scene.handle_at(0).unwrap(), c);

    let removed = scene.get_events().get_body_events_of_type(BodyEventType::Removed);
    assert_eq!(removed.len(), 2);

    scene.tick(0.1);
    assert_eq!(scene.body_count(), 1);
    assert_eq!(seen.get(), 1);
}

#[test]
fn test_soft_removal_keeps_body_until_tick() {
    let mut scene = Scene::new();
    add_square(&mut scene, Vector2::zero(), 1.0, 1.0);
    let keep = add_square(&mut scene, Vector2::new(5.0, 0.0), 1.0, 1.0);

    scene.remove_body(0).unwrap();
    assert_eq!(scene.body_count(), 2);
    assert!(scene.get_body(0).unwrap().is_removed());

    scene.tick(0.0);
    assert_eq!(scene.body_count(), 1);
    assert_relative_eq!(scene.get_body(0).unwrap().get_centroid(), Vector2::new(5.0, 0.0), epsilon = 1e-12);
    assert!(scene.contains(keep));
}

#[test]
fn test_index_out_of_range() {
    let mut scene = Scene::new();
    add_square(&mut scene, Vector2::zero(), 1.0, 1.0);
    add_square(&mut scene, Vector2::new(5.0, 0.0), 1.0, 1.0);

    assert_eq!(
        scene.get_body(5).unwrap_err(),
        PhysicsError::IndexOutOfRange { index: 5, len: 2 }
    );
    assert!(scene.remove_body(2).is_err());
    assert!(scene.get_body_mut(2).is_err());
}

#[test]
fn test_force_binding_needs_live_bodies() {
    let mut scene = Scene::new();
    let a = add_square(&mut scene, Vector2::zero(), 1.0, 1.0);
    let b = add_square(&mut scene, Vector2::new(5.0, 0.0), 1.0, 1.0);
    scene.remove_body_by_handle(b).unwrap();
    scene.tick(0.0);

    assert!(matches!(scene.create_spring(1.0, a, b), Err(PhysicsError::ResourceNotFound(_))));
    assert_eq!(scene.force_count(), 0);
}

#[test]
fn test_remove_force_bindings() {
    let mut scene = Scene::new();
    let a = add_square(&mut scene, Vector2::zero(), 1.0, 1.0);
    let drag = scene.create_drag(1.0, a).unwrap();
    scene.add_force_creator(Vec::new(), |_ctx| {}).unwrap();

    assert_eq!(scene.remove_last_force().map(|g| g.generator_type()), Some("ForceCreator"));
    scene.remove_force(drag).unwrap();
    assert_eq!(scene.force_count(), 0);
    assert!(scene.remove_force(drag).is_err());
}

#[test]
fn test_events_cleared_each_tick() {
    let mut scene = Scene::new();
    add_square(&mut scene, Vector2::zero(), 1.0, 1.0);
    assert_eq!(scene.get_events().get_body_events_of_type(BodyEventType::Added).len(), 1);

    scene.tick(0.1);
    assert!(scene.get_events().is_empty());
}

#[test]
fn test_global_force_creator_sees_every_body() {
    let mut scene = Scene::new();
    let a = add_square(&mut scene, Vector2::new(0.0, 10.0), 1.0, 2.0);
    let b = add_square(&mut scene, Vector2::new(3.0, 10.0), 1.0, 4.0);

    // Uniform downward field
    scene
        .add_force_creator(Vec::new(), |ctx| {
            let handles = ctx.bodies.handles().to_vec();
            for handle in handles {
                if let Some(body) = ctx.bodies.get_mut(handle) {
                    let weight = Vector2::new(0.0, -9.8 * body.get_mass());
                    body.add_force(weight);
                }
            }
        })
        .unwrap();

    scene.tick(1.0);

    assert_relative_eq!(scene.body(a).unwrap().get_velocity().y, -9.8, epsilon = 1e-12);
    assert_relative_eq!(scene.body(b).unwrap().get_velocity().y, -9.8, epsilon = 1e-12);
}

#[test]
fn test_clear_resets_scene() {
    let mut scene = Scene::new();
    let a = add_square(&mut scene, Vector2::zero(), 1.0, 1.0);
    scene.create_drag(1.0, a).unwrap();
    scene.tick(1.0);

    scene.clear();

    assert_eq!(scene.body_count(), 0);
    assert_eq!(scene.force_count(), 0);
    assert_eq!(scene.get_time(), 0.0);
    assert!(!scene.contains(a));
}

#[test]
fn test_zero_dt_does_not_move_moving_body() {
    let mut scene = Scene::new();
    let a = add_square(&mut scene, Vector2::zero(), 1.0, 1.0);
    scene.body_mut(a).unwrap().set_velocity(Vector2::new(3.0, 1.0));
    let before = scene.body(a).unwrap().get_shape();

    scene.tick(0.0);

    let body = scene.body(a).unwrap();
    assert_eq!(body.get_shape(), before);
    assert_relative_eq!(body.get_centroid(), Vector2::zero(), epsilon = 1e-12);
    assert_eq!(body.get_velocity(), Vector2::new(3.0, 1.0));
    assert_eq!(scene.get_time(), 0.0);
}

#[test]
fn test_infinite_mass_platform_moves_with_set_velocity() {
    let mut scene = Scene::new();
    let platform = scene.add_body(RigidBody::new_static(
        Polygon::rectangle(Vector2::zero(), 4.0, 1.0).unwrap(),
        RgbColor::BLACK,
    ));
    scene.body_mut(platform).unwrap().set_velocity(Vector2::new(1.0, 0.0));
    scene.body_mut(platform).unwrap().add_force(Vector2::new(100.0, 0.0));

    scene.tick(1.0);

    let body = scene.body(platform).unwrap();
    assert_eq!(body.get_velocity(), Vector2::new(1.0, 0.0));
    assert_relative_eq!(body.get_centroid(), Vector2::new(1.0, 0.0), epsilon = 1e-12);
}

#[test]
fn test_removal_inside_binding_goes_through_sweep() {
    let mut scene = Scene::new();
    let a = add_square(&mut scene, Vector2::zero(), 1.0, 1.0);
    let b = add_square(&mut scene, Vector2::new(10.0, 0.0), 1.0, 1.0);

    // Bindings only see bodies through the storage view and can only flag them
    scene
        .add_force_creator(Vec::new(), move |ctx| {
            if let Some(body) = ctx.bodies.get_mut(b) {
                body.remove();
            }
        })
        .unwrap();
    scene.create_spring(1.0, a, b).unwrap();

    scene.tick(0.1);

    assert!(!scene.contains(b));
    assert_eq!(scene.body_count(), 1);
    // The spring on `b` is purged, the global creator stays
    assert_eq!(scene.force_count(), 1);
    let removed = scene.get_events().get_body_events_of_type(BodyEventType::Removed);
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].body, b);

    for _ in 0..3 {
        scene.tick(0.1);
    }
    assert_eq!(scene.force_count(), 1);
    assert_eq!(scene.body_count(), 1);
}

#[test]
fn test_bindings_can_be_toggled_and_retuned() {
    let mut scene = Scene::new();
    let a = add_square(&mut scene, Vector2::new(0.0, 0.0), 1.0, 1.0);
    let b = add_square(&mut scene, Vector2::new(10.0, 0.0), 1.0, 1.0);
    let spring = scene.create_spring(1.0, a, b).unwrap();

    scene
        .get_force_mut(spring)
        .unwrap()
        .as_any_mut()
        .downcast_mut::<SpringForce>()
        .unwrap()
        .set_enabled(false);
    scene.tick(0.1);
    assert!(scene.body(a).unwrap().get_velocity().is_zero());

    {
        let force = scene
            .get_force_mut(spring)
            .unwrap()
            .as_any_mut()
            .downcast_mut::<SpringForce>()
            .unwrap();
        force.set_enabled(true);
        force.set_stiffness(2.0);
    }
    scene.tick(0.1);
    assert_relative_eq!(scene.body(a).unwrap().get_velocity(), Vector2::new(2.0, 0.0), epsilon = 1e-9);

    let drag = scene.create_drag(0.5, a).unwrap();
    scene
        .get_force_mut(drag)
        .unwrap()
        .as_any_mut()
        .downcast_mut::<DragForce>()
        .unwrap()
        .set_gamma(0.25);
    let gamma = scene
        .get_force(drag)
        .unwrap()
        .as_any()
        .downcast_ref::<DragForce>()
        .map(DragForce::get_gamma);
    assert_eq!(gamma, Some(0.25));
}

#[test]
fn test_gravity_and_buoyancy_retuning() {
    let mut scene = Scene::new();
    let a = add_square(&mut scene, Vector2::new(0.0, 0.0), 2.0, 1.0);
    let b = add_square(&mut scene, Vector2::new(10.0, 0.0), 1.0, 1.0);
    let gravity = scene.create_newtonian_gravity(100.0, a, b).unwrap();
    let buoyancy = scene.create_buoyancy(a, -5.0, 1.0, 1.0).unwrap();

    {
        let force = scene
            .get_force_mut(gravity)
            .unwrap()
            .as_any_mut()
            .downcast_mut::<GravityForce>()
            .unwrap();
        force.set_strength(0.0);
        assert!(force.is_enabled());
    }
    {
        let force = scene
            .get_force_mut(buoyancy)
            .unwrap()
            .as_any_mut()
            .downcast_mut::<BuoyancyForce>()
            .unwrap();
        // Raise the water over the whole body: lift = 1 * 1 * 2 * 4
        force.set_water_level(5.0);
    }

    scene.tick(1.0);

    assert_relative_eq!(scene.body(a).unwrap().get_velocity(), Vector2::new(0.0, 8.0), epsilon = 1e-9);
    assert!(scene.body(b).unwrap().get_velocity().is_zero());

    scene
        .get_force_mut(buoyancy)
        .unwrap()
        .as_any_mut()
        .downcast_mut::<BuoyancyForce>()
        .unwrap()
        .set_enabled(false);
    scene.tick(1.0);
    assert_relative_eq!(scene.body(a).unwrap().get_velocity(), Vector2::new(0.0, 8.0), epsilon = 1e-9);
}
