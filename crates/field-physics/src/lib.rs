//! # Field Physics
//!
//! Data model and per-field-kind laws for the parametric field simulation:
//! force, color and boundary rules for gravity, magnetic, electric, wave and
//! quantum fields. Pure numeric code with no knowledge of any renderer.

pub mod boundary;
pub mod color;
pub mod constants;
pub mod error;
pub mod field;
pub mod forces;
pub mod params;
pub mod particle;

pub use color::ColorModel;
pub use constants::*;
pub use error::{ConfigError, Result};
pub use field::{FieldKind, FieldLaws};
pub use params::{Bounds, FieldParams};
pub use particle::Particle;
