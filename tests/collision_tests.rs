use approx::assert_abs_diff_eq;
use particle_box::*;

fn body(position: Vec2, velocity: Vec2, mass: f32, elasticity: f32) -> Body {
    Body::new(BodyKind::User, position, velocity, 10.0, mass, elasticity)
}

fn calm_simulator() -> Simulator {
    Simulator::new(SimulationConfig::default()).expect("default config is valid")
}

#[test]
fn head_on_pair_separates_after_one_step() {
    let mut sim = calm_simulator();
    let left = sim
        .spawn_at(Vec2::new(1000.0, 650.0), Vec2::new(100.0, 0.0), 100.0)
        .expect("room for left body");
    let right = sim
        .spawn_at(Vec2::new(1015.0, 650.0), Vec2::new(-100.0, 0.0), 100.0)
        .expect("room for right body");

    sim.step(false, 0.0);

    let a = sim.body(left).expect("left body");
    let b = sim.body(right).expect("right body");
    let distance = a.position.distance(b.position);
    assert!(distance > 15.0, "bodies should drift apart, distance = {distance}");
    assert!(a.velocity.x.abs() < 100.0, "left vx = {}", a.velocity.x);
    assert!(b.velocity.x.abs() < 100.0, "right vx = {}", b.velocity.x);
    assert_abs_diff_eq!(a.velocity.x, -b.velocity.x, epsilon = 1e-3);
}

#[test]
fn perfectly_elastic_equal_masses_swap_velocities() {
    let mut bodies = vec![
        body(Vec2::new(400.0, 400.0), Vec2::new(120.0, 0.0), 100.0, 1.0),
        body(Vec2::new(416.0, 400.0), Vec2::new(-120.0, 0.0), 100.0, 1.0),
    ];

    let resolved = CollisionPass::new(0.002).run(&mut bodies);

    assert_eq!(resolved, 1);
    assert_abs_diff_eq!(bodies[0].velocity.x, -120.0, epsilon = 1e-3);
    assert_abs_diff_eq!(bodies[1].velocity.x, 120.0, epsilon = 1e-3);
    assert_abs_diff_eq!(bodies[0].velocity.y, 0.0, epsilon = 1e-6);
}

#[test]
fn isolated_pair_conserves_momentum() {
    let mut bodies = vec![
        body(Vec2::new(700.0, 500.0), Vec2::new(40.0, 25.0), 100.0, 0.9),
        body(Vec2::new(708.0, 512.0), Vec2::new(-10.0, -60.0), 4200.0, 0.9),
    ];
    let before: Vec2 = bodies.iter().map(Body::linear_momentum).sum();

    CollisionPass::new(0.002).run(&mut bodies);

    let after: Vec2 = bodies.iter().map(Body::linear_momentum).sum();
    assert_abs_diff_eq!(after.x, before.x, epsilon = 1.0);
    assert_abs_diff_eq!(after.y, before.y, epsilon = 1.0);
}

#[test]
fn heavy_body_barely_deflects() {
    let mut bodies = vec![
        body(Vec2::new(700.0, 500.0), Vec2::new(50.0, 0.0), 100.0, 0.9),
        body(Vec2::new(715.0, 500.0), Vec2::ZERO, 4200.0, 0.9),
    ];

    CollisionPass::new(0.0).run(&mut bodies);

    assert!(bodies[0].velocity.x < 0.0, "light body should rebound");
    assert!(bodies[1].velocity.x > 0.0 && bodies[1].velocity.x < 5.0);
}

#[test]
fn stacked_bodies_resolve_every_overlapping_pair() {
    let mut bodies: Vec<Body> = (0..5)
        .map(|i| body(Vec2::new(300.0 + i as f32 * 12.0, 300.0), Vec2::ZERO, 100.0, 0.9))
        .collect();

    // Neighbours 12 apart overlap; bodies two apart (24) do not.
    let resolved = CollisionPass::new(0.002).run(&mut bodies);

    assert_eq!(resolved, 4);
    assert!(bodies[0].position.x < 300.0);
    assert!(bodies[4].position.x > 348.0);
}
