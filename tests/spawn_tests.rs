use particle_box::*;

fn small_simulator(capacity: usize) -> Simulator {
    Simulator::new(SimulationConfig::default().with_capacity(capacity)).expect("valid config")
}

#[test]
fn spawning_at_capacity_is_a_no_op() {
    let mut sim = small_simulator(3);
    for _ in 0..3 {
        assert!(sim.spawn_ambient().is_some());
    }
    assert!(sim.is_full());

    assert_eq!(sim.spawn_ambient(), None);
    assert_eq!(sim.spawn_at(Vec2::new(50.0, 50.0), Vec2::ZERO, 100.0), None);
    assert_eq!(sim.spawn_if_requested(None), None);
    assert_eq!(sim.len(), 3);
}

#[test]
fn ids_are_sequential_slots() {
    let mut sim = small_simulator(10);
    let ids: Vec<usize> = (0..4)
        .filter_map(|_| sim.spawn_ambient())
        .map(|id| id.index())
        .collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}

#[test]
fn one_body_per_frame_regardless_of_request() {
    let mut sim = small_simulator(10);
    let config = *sim.config();

    sim.advance(&FrameInput::default());
    sim.advance(&FrameInput {
        spawn: Some(SpawnRequest::at_pointer(Vec2::new(600.0, 600.0), &config)),
        ..FrameInput::default()
    });

    assert_eq!(sim.len(), 2);
    assert_eq!(sim.bodies()[0].kind, BodyKind::Ambient);
    assert_eq!(sim.bodies()[1].kind, BodyKind::User);
    assert!((sim.bodies()[1].mass - 4200.0).abs() < 1e-2);
}

#[test]
fn invalid_request_falls_back_to_ambient_spawn() {
    let mut sim = small_simulator(10);

    let id = sim
        .spawn_if_requested(Some(SpawnRequest::new(Vec2::new(5.0, 5.0), Vec2::ZERO, 0.0)))
        .expect("room to spawn");
    assert_eq!(sim.len(), 1);
    assert_eq!(sim.body(id).expect("body").kind, BodyKind::Ambient);

    sim.advance(&FrameInput {
        spawn: Some(SpawnRequest::new(Vec2::new(5.0, 5.0), Vec2::ZERO, f32::NAN)),
        ..FrameInput::default()
    });
    assert_eq!(sim.len(), 2);
    assert_eq!(sim.bodies()[1].kind, BodyKind::Ambient);
}

#[test]
fn ambient_spawns_alternate_height() {
    let mut sim = small_simulator(10);
    let first = sim.spawn_ambient().expect("room");
    let second = sim.spawn_ambient().expect("room");

    let first = sim.body(first).expect("body").position;
    let second = sim.body(second).expect("body").position;
    assert_eq!(first, Vec2::new(1200.0, 100.0));
    assert_eq!(second, Vec2::new(1200.0, -100.0));
}

#[test]
fn out_of_bounds_ambient_spawn_is_settled_by_step() {
    let mut sim = small_simulator(10);
    sim.spawn_ambient();
    let id = sim.spawn_ambient().expect("room");

    sim.step(false, 0.0);

    let body = sim.body(id).expect("body");
    assert!(sim.config().bounds.contains(body.position), "{:?}", body.position);
}

#[test]
fn invalid_mass_is_rejected() {
    let mut sim = small_simulator(10);
    assert_eq!(sim.spawn_at(Vec2::new(50.0, 50.0), Vec2::ZERO, 0.0), None);
    assert_eq!(sim.spawn_at(Vec2::new(50.0, 50.0), Vec2::ZERO, -5.0), None);
    assert_eq!(sim.spawn_at(Vec2::new(50.0, 50.0), Vec2::ZERO, f32::NAN), None);
    assert!(sim.is_empty());
}

#[test]
fn spawned_bodies_share_radius_and_elasticity() {
    let config = SimulationConfig::default().with_elasticity(0.75);
    let mut sim = Simulator::new(config).expect("valid config");
    let id = sim
        .spawn_at(Vec2::new(50.0, 50.0), Vec2::ZERO, 12.0)
        .expect("room");

    let body = sim.body(id).expect("body");
    assert_eq!(body.radius, 10.0);
    assert_eq!(body.elasticity, 0.75);
    assert_eq!(body.mass, 12.0);
}
