//! Headless field-simulation driver
//!
//! Stands in for the host rendering loop: builds a simulation, steps it at a
//! fixed 60 Hz timestep through every field kind and logs swarm extents and
//! cache statistics. A real renderer would read `sim.particles()` each frame
//! instead of logging.

use field_physics::{Bounds, ConfigError, FieldKind, FieldParams};
use field_simulation::{Simulation, SimulationConfig};

const PARTICLE_COUNT: usize = 1000;
const DT: f32 = 1.0 / 60.0;
const FRAMES_PER_KIND: usize = 300;

fn main() -> Result<(), ConfigError> {
    env_logger::init();

    let config = SimulationConfig {
        particle_count: PARTICLE_COUNT,
        bounds: Bounds::centered(10.0),
        kind: FieldKind::Gravity,
        seed: 0x5EED,
        ..Default::default()
    };
    let mut sim = Simulation::new(config)?;

    for kind in FieldKind::ALL {
        sim.set_kind(kind);
        sim.set_params(FieldParams::preset(kind))?;
        log::info!("--- {} field ---", kind.label());

        for frame in 0..FRAMES_PER_KIND {
            sim.update(DT);
            if frame % 60 == 59 {
                let stats = sim.cache_stats();
                log::info!(
                    "t={:7.3}s extent={:6.2} cache: {} entries, {:.1}% hit rate",
                    sim.clock().now(),
                    sim.max_extent(),
                    stats.entries,
                    stats.hit_rate() * 100.0
                );
            }
        }

        let mean_speed: f32 = sim
            .particles()
            .iter()
            .map(|p| p.speed())
            .sum::<f32>()
            / sim.particle_count() as f32;
        log::info!(
            "{}: mean speed {:.3} after {} frames",
            kind.label(),
            mean_speed,
            FRAMES_PER_KIND
        );
    }

    Ok(())
}
