use particle_box::*;

fn main() {
    let config = SimulationConfig::default().with_capacity(200);
    let mut sim = match Simulator::new(config) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return;
        }
    };

    // A scripted "mouse" sweeping across the box while the button is held every other frame.
    for frame in 0..240 {
        let pointer = Vec2::new(200.0 + frame as f32 * 8.0, 400.0);
        let input = FrameInput {
            gravity_enabled: frame % 120 < 90,
            wind_speed: 0.0,
            spawn: (frame % 2 == 0).then(|| SpawnRequest::at_pointer(pointer, &config)),
        };
        sim.advance(&input);
    }

    let heavy = sim
        .bodies()
        .iter()
        .filter(|body| body.kind == BodyKind::User)
        .count();
    println!("{} bodies ({heavy} user-spawned)", sim.len());
    for sprite in sim.sprites().take(5) {
        println!("  circle at ({}, {}) r={}", sprite.x, sprite.y, sprite.radius);
    }
}
