//! Particle store
//!
//! Owns the mutable particle array and the seeded RNG used for placement,
//! so a fixed seed reproduces the exact same swarm under test. Growing
//! distributes new particles on a rough cubic grid spanning the bounds with
//! a centered per-cell jitter; shrinking truncates and never reshuffles the
//! survivors.

use field_physics::{
    Bounds, ColorModel, FieldKind, Particle, JITTER_FRACTION, MASS_MAX, MASS_MIN,
};
use glam::Vec3;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(Debug)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleStore {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Discard everything and place `count` fresh particles.
    pub fn initialize(
        &mut self,
        count: usize,
        bounds: Bounds,
        kind: FieldKind,
        colors: &mut ColorModel,
        time: f32,
    ) {
        self.particles.clear();
        self.grow(count, bounds, kind, colors, time);
    }

    /// Resize to `new_count`. Equal count is a no-op; shrinking truncates
    /// (retained particles keep their state bit for bit); growing appends
    /// grid-distributed newcomers and leaves existing entries untouched.
    pub fn resize(
        &mut self,
        new_count: usize,
        bounds: Bounds,
        kind: FieldKind,
        colors: &mut ColorModel,
        time: f32,
    ) {
        use std::cmp::Ordering;
        match new_count.cmp(&self.particles.len()) {
            Ordering::Equal => {}
            Ordering::Less => self.particles.truncate(new_count),
            Ordering::Greater => {
                let added = new_count - self.particles.len();
                self.grow(added, bounds, kind, colors, time);
            }
        }
        debug_assert_eq!(self.particles.len(), new_count);
    }

    fn grow(
        &mut self,
        added: usize,
        bounds: Bounds,
        kind: FieldKind,
        colors: &mut ColorModel,
        time: f32,
    ) {
        if added == 0 {
            return;
        }
        // Grid resolution: ceiling of the cube root of the newcomer count,
        // so added <= resolution³ and every newcomer gets a cell.
        let resolution = (added as f32).cbrt().ceil().max(1.0) as usize;
        let cell = bounds.extent() / resolution as f32;
        self.particles.reserve(added);

        let base_index = self.particles.len();
        for i in 0..added {
            let ix = i % resolution;
            let iy = (i / resolution) % resolution;
            let iz = i / (resolution * resolution);
            let center = bounds.min
                + (Vec3::new(ix as f32, iy as f32, iz as f32) + Vec3::splat(0.5)) * cell;
            let jitter = Vec3::new(
                self.rng.random_range(-JITTER_FRACTION..JITTER_FRACTION),
                self.rng.random_range(-JITTER_FRACTION..JITTER_FRACTION),
                self.rng.random_range(-JITTER_FRACTION..JITTER_FRACTION),
            ) * cell;
            let mass = self.rng.random_range(MASS_MIN..=MASS_MAX);
            let color = colors.color_for(kind, base_index + i, time, None);
            self.particles
                .push(Particle::at_rest(center + jitter, mass, color));
        }
        log::debug!(
            "placed {added} particles on a {resolution}^3 grid ({} total)",
            self.particles.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(count: usize, seed: u64) -> (ParticleStore, ColorModel) {
        let mut colors = ColorModel::new();
        let mut store = ParticleStore::with_seed(seed);
        store.initialize(count, Bounds::default(), FieldKind::Gravity, &mut colors, 0.0);
        (store, colors)
    }

    #[test]
    fn initialize_places_everyone_inside_bounds() {
        let bounds = Bounds::default();
        let (store, _) = store_of(100, 42);
        assert_eq!(store.len(), 100);
        for p in store.particles() {
            assert!(bounds.contains(p.position()), "{:?} escaped", p.position);
            assert!((MASS_MIN..=MASS_MAX).contains(&p.mass));
            assert_eq!(p.velocity, [0.0; 3]);
        }
    }

    #[test]
    fn same_seed_same_swarm() {
        let (a, _) = store_of(64, 7);
        let (b, _) = store_of(64, 7);
        assert_eq!(a.particles(), b.particles());

        let (c, _) = store_of(64, 8);
        assert_ne!(a.particles(), c.particles());
    }

    #[test]
    fn resize_equal_is_a_no_op() {
        let (mut store, mut colors) = store_of(50, 1);
        let before = store.particles().to_vec();
        store.resize(50, Bounds::default(), FieldKind::Gravity, &mut colors, 1.0);
        assert_eq!(store.particles(), &before[..]);
    }

    #[test]
    fn shrink_truncates_and_keeps_survivors_bit_identical() {
        let (mut store, mut colors) = store_of(80, 3);
        let before = store.particles().to_vec();
        store.resize(30, Bounds::default(), FieldKind::Gravity, &mut colors, 2.0);
        assert_eq!(store.len(), 30);
        assert_eq!(store.particles(), &before[..30]);
    }

    #[test]
    fn grow_preserves_prefix_and_bounds_newcomers() {
        let bounds = Bounds::default();
        let (mut store, mut colors) = store_of(50, 11);
        // Scatter some state so preservation is observable.
        for (i, p) in store.particles_mut().iter_mut().enumerate() {
            p.set_velocity(Vec3::splat(i as f32));
        }
        let before = store.particles().to_vec();

        store.resize(200, bounds, FieldKind::Wave, &mut colors, 3.0);
        assert_eq!(store.len(), 200);
        assert_eq!(store.particles()[..50], before[..]);
        for p in &store.particles()[50..] {
            assert!(bounds.contains(p.position()));
            assert!(p.mass > 0.0);
            assert_eq!(p.velocity, [0.0; 3]);
        }
    }

    #[test]
    fn single_newcomer_lands_near_the_center_cell() {
        let bounds = Bounds::centered(5.0);
        let mut colors = ColorModel::new();
        let mut store = ParticleStore::with_seed(99);
        store.initialize(1, bounds, FieldKind::Quantum, &mut colors, 0.0);
        // One cell spans the whole cube; jitter keeps it within 40% of that.
        let pos = store.particles()[0].position();
        assert!(pos.abs().max_element() <= 4.0 + 1e-5);
    }
}
