//! Per-frame stepper and the simulation facade
//!
//! One `update` call advances the clock, then for every particle: force
//! (cache first, law on miss), acceleration from force/mass, semi-implicit
//! Euler integration (velocity before position), the kind's boundary law,
//! and a color refresh on alternating particle parity so every particle
//! refreshes at least once per two calls.

use field_physics::{
    Bounds, ColorModel, ConfigError, FieldKind, FieldParams, Particle, BOUNDARY_EXTENT,
    FRAME_WINDOW,
};

use crate::cache::{CacheStats, ForceCache};
use crate::clock::SimulationClock;
use crate::store::ParticleStore;

/// Everything needed to build a [`Simulation`], validated once in
/// [`Simulation::new`]; the per-frame path never re-validates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub particle_count: usize,
    pub bounds: Bounds,
    pub kind: FieldKind,
    pub params: FieldParams,
    /// Half-extent of the cube the boundary policies enforce.
    pub boundary: f32,
    /// Force-cache validity window in simulation seconds; 0 disables it.
    pub cache_window: f32,
    /// Seed for the placement RNG; a fixed seed reproduces the exact swarm.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            particle_count: 1000,
            bounds: Bounds::default(),
            kind: FieldKind::Gravity,
            params: FieldParams::default(),
            boundary: BOUNDARY_EXTENT,
            cache_window: FRAME_WINDOW,
            seed: 0x5EED,
        }
    }
}

/// The simulation core an external rendering loop drives.
///
/// The renderer reads `particles()` every frame (positions and colors); no
/// graphics API is referenced here.
#[derive(Debug)]
pub struct Simulation {
    store: ParticleStore,
    clock: SimulationClock,
    cache: ForceCache,
    colors: ColorModel,
    bounds: Bounds,
    kind: FieldKind,
    params: FieldParams,
    boundary: f32,
    frame: u64,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.params.validate()?;
        config.bounds.validate()?;
        if !config.boundary.is_finite() || config.boundary <= 0.0 {
            return Err(ConfigError::Boundary(config.boundary));
        }
        if !config.cache_window.is_finite() || config.cache_window < 0.0 {
            return Err(ConfigError::CacheWindow(config.cache_window));
        }

        let clock = SimulationClock::new();
        let mut colors = ColorModel::new();
        let mut store = ParticleStore::with_seed(config.seed);
        store.initialize(
            config.particle_count,
            config.bounds,
            config.kind,
            &mut colors,
            clock.now(),
        );
        log::info!(
            "simulation ready: {} particles, {} field, boundary ±{}",
            store.len(),
            config.kind.label(),
            config.boundary
        );

        Ok(Self {
            store,
            clock,
            cache: ForceCache::new(config.cache_window),
            colors,
            bounds: config.bounds,
            kind: config.kind,
            params: config.params,
            boundary: config.boundary,
            frame: 0,
        })
    }

    /// Advance the simulation by one timestep of `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.clock.advance(dt);
        // One snapshot per frame: every particle sees the same "now".
        let now = self.clock.now();
        let laws = self.kind.laws();
        let parity = self.frame;

        for (i, particle) in self.store.particles_mut().iter_mut().enumerate() {
            let force = match self.cache.get(i as u32, self.kind, &self.params, now) {
                Some(force) => force,
                None => {
                    let force = (laws.force)(particle, &self.params, now);
                    self.cache.put(i as u32, self.kind, &self.params, now, force);
                    force
                }
            };

            // Semi-implicit Euler: velocity first, then position.
            let acceleration = force / particle.mass;
            let velocity = particle.velocity() + acceleration * dt;
            particle.set_velocity(velocity);
            particle.set_position(particle.position() + velocity * dt);

            (laws.boundary)(particle, self.boundary);

            if (i as u64 + parity) % 2 == 0 {
                particle.color =
                    self.colors
                        .color_for(self.kind, i, now, Some(particle.velocity()));
            }
        }
        self.frame = self.frame.wrapping_add(1);
    }

    /// Resize the particle array; survivors are untouched, newcomers are
    /// placed inside the configured bounds.
    pub fn resize(&mut self, new_count: usize) {
        let time = self.clock.now();
        self.store
            .resize(new_count, self.bounds, self.kind, &mut self.colors, time);
    }

    pub fn particles(&self) -> &[Particle] {
        self.store.particles()
    }

    /// Mutable access for the host to write initial conditions. During
    /// stepping, only `update` itself mutates particle state.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        self.store.particles_mut()
    }

    pub fn particle_count(&self) -> usize {
        self.store.len()
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Switch field kind. Cached forces belong to the old laws, so the
    /// cache entries are dropped.
    pub fn set_kind(&mut self, kind: FieldKind) {
        if kind != self.kind {
            self.kind = kind;
            self.cache.invalidate();
        }
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    /// Replace the field parameters; re-validated at this boundary.
    pub fn set_params(&mut self, params: FieldParams) -> Result<(), ConfigError> {
        params.validate()?;
        self.params = params;
        self.cache.invalidate();
        Ok(())
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Reset simulation time (and refresh parity) without touching particles.
    pub fn reset_time(&mut self) {
        self.clock.reset();
        self.frame = 0;
        self.cache.invalidate();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Largest coordinate magnitude across the swarm, handy for logging.
    pub fn max_extent(&self) -> f32 {
        self.store
            .particles()
            .iter()
            .map(|p| p.position().abs().max_element())
            .fold(0.0, f32::max)
    }
}
