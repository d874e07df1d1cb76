//! Color laws for the five field kinds
//!
//! Each kind gets a distinct catppuccin base color and its own pulse formula
//! in time, phase-shifted per particle index so the swarm never blinks in
//! lockstep. Channels always clamp to [0, 1].

use catppuccin::PALETTE;
use glam::Vec3;
use std::f32::consts::{SQRT_2, TAU};

use crate::constants::{BRIGHTNESS_CAP, SPEED_BRIGHTNESS};
use crate::field::FieldKind;

/// Per-particle phase offset, irrational-ish so neighbors desynchronize.
const INDEX_PHASE: f32 = 0.37;

fn palette_rgb(color: &catppuccin::Color) -> Vec3 {
    Vec3::new(
        color.rgb.r as f32 / 255.0,
        color.rgb.g as f32 / 255.0,
        color.rgb.b as f32 / 255.0,
    )
}

fn clamp01(color: Vec3) -> Vec3 {
    color.clamp(Vec3::ZERO, Vec3::ONE)
}

/// Gravity: warm peach with a slow additive per-channel pulse.
pub fn gravity_base(index: usize, time: f32) -> Vec3 {
    let base = palette_rgb(&PALETTE.mocha.colors.peach);
    let phase = TAU * 0.25 * time + index as f32 * INDEX_PHASE;
    clamp01(Vec3::new(
        base.x + 0.15 * phase.sin(),
        base.y + 0.15 * (phase + 2.1).sin(),
        base.z + 0.15 * (phase + 4.2).cos(),
    ))
}

/// Magnetic: sapphire with a whole-color brightness swell.
pub fn magnetic_base(index: usize, time: f32) -> Vec3 {
    let base = palette_rgb(&PALETTE.mocha.colors.sapphire);
    let phase = TAU * 0.4 * time + index as f32 * INDEX_PHASE;
    clamp01(base * (0.8 + 0.2 * phase.sin()))
}

/// Electric: yellow with a sharp sin² flicker.
pub fn electric_base(index: usize, time: f32) -> Vec3 {
    let base = palette_rgb(&PALETTE.mocha.colors.yellow);
    let phase = TAU * 0.6 * time + index as f32 * INDEX_PHASE;
    let flicker = phase.sin();
    clamp01(base * (0.7 + 0.3 * flicker * flicker))
}

/// Wave: teal with a traveling channel-shifted swell.
pub fn wave_base(index: usize, time: f32) -> Vec3 {
    let base = palette_rgb(&PALETTE.mocha.colors.teal);
    let phase = TAU * 0.5 * time + index as f32 * INDEX_PHASE;
    clamp01(Vec3::new(
        base.x * (0.85 + 0.15 * phase.sin()),
        base.y * (0.85 + 0.15 * (phase + 1.0).sin()),
        base.z * (0.85 + 0.15 * (phase + 2.0).sin()),
    ))
}

/// Quantum: mauve with a fast irrational-rate shimmer.
pub fn quantum_base(index: usize, time: f32) -> Vec3 {
    let base = palette_rgb(&PALETTE.mocha.colors.mauve);
    let phase = TAU * 1.2 * time + index as f32 * INDEX_PHASE;
    clamp01(Vec3::new(
        base.x + 0.12 * (phase * SQRT_2).sin(),
        base.y + 0.12 * phase.cos(),
        base.z + 0.12 * (phase * SQRT_2 + 1.3).cos(),
    ))
}

#[derive(Clone, Copy, Debug)]
struct BaseSample {
    time: f32,
    index: u32,
    color: Vec3,
}

/// Computes particle colors and keeps a one-entry-per-kind cache of the last
/// base color, so a color-only refresh can skip the trig re-evaluation.
#[derive(Debug, Default)]
pub struct ColorModel {
    cached: [Option<BaseSample>; FieldKind::COUNT],
}

impl ColorModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full recompute: evaluates the kind's base formula, refreshes the
    /// cache entry for that kind, and applies the optional velocity tint.
    pub fn color_for(
        &mut self,
        kind: FieldKind,
        index: usize,
        time: f32,
        velocity: Option<Vec3>,
    ) -> [f32; 3] {
        let base = (kind.laws().base_color)(index, time);
        self.cached[kind as usize] = Some(BaseSample {
            time,
            index: index as u32,
            color: base,
        });
        Self::tinted(base, velocity)
    }

    /// Color-only refresh from the cached base, if one exists for this kind.
    /// Returns `None` when no base has been computed yet.
    pub fn refresh(&self, kind: FieldKind, velocity: Option<Vec3>) -> Option<[f32; 3]> {
        self.cached[kind as usize]
            .map(|sample| Self::tinted(sample.color, velocity))
    }

    /// (time, index) of the cached base for a kind, for introspection.
    pub fn cached_at(&self, kind: FieldKind) -> Option<(f32, usize)> {
        self.cached[kind as usize].map(|s| (s.time, s.index as usize))
    }

    fn tinted(base: Vec3, velocity: Option<Vec3>) -> [f32; 3] {
        let boost = velocity
            .map(|v| 1.0 + (v.length() * SPEED_BRIGHTNESS).min(BRIGHTNESS_CAP))
            .unwrap_or(1.0);
        clamp01(base * boost).to_array()
    }
}
