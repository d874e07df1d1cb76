//! Simulation clock
//!
//! An explicit value owned by the simulation, never a process-wide global.
//! The stepper snapshots it once per frame so every particle shares the same
//! notion of "now" within a step.

/// Monotonic (between resets) simulation time in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationClock {
    current: f32,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> f32 {
        self.current
    }

    pub fn advance(&mut self, dt: f32) {
        self.current += dt;
    }

    pub fn reset(&mut self) {
        self.current = 0.0;
    }
}
