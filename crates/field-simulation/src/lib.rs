//! # Field Simulation Engine
//!
//! CPU-side per-frame stepper over a particle array: force lookup with
//! bounded-staleness caching, semi-implicit Euler integration, per-kind
//! boundary handling and alternating color refresh. The host rendering loop
//! calls [`Simulation::update`] once per frame and reads the particle array
//! back for display.

pub mod cache;
pub mod clock;
pub mod simulation;
pub mod store;

pub use cache::{CacheStats, ForceCache};
pub use clock::SimulationClock;
pub use simulation::{Simulation, SimulationConfig};
pub use store::ParticleStore;
