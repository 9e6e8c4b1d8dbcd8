use particle_box::*;

fn main() {
    let mut sim = Simulator::default();
    sim.set_parallel_enabled(true);

    for frame in 0..600 {
        let input = FrameInput {
            gravity_enabled: true,
            wind_speed: if frame < 300 { 0.0 } else { -3.0 },
            spawn: None,
        };
        sim.advance(&input);

        if frame % 60 == 0 {
            let metrics = sim.metrics();
            println!(
                "frame {frame:4}: {} bodies, avg speed {:.0}, avg momentum {:.0}",
                metrics.body_count, metrics.avg_speed, metrics.avg_momentum
            );
        }
    }

    sim.last_profile().report();
}
