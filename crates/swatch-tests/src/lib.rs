//! # swatch-tests
//!
//! Accuracy and property testing for swatchlab.
//!
//! This crate provides:
//! - A reference hex → Lab (D50) conversion built on `palette`
//! - deltaE2000 statistics over sample sets
//! - Deterministic sample sets (grays, cube corners, hue ramp, random)
//!
//! ## Test Categories
//!
//! 1. **Parity**: base Lab against `palette` with Bradford adaptation
//! 2. **Properties**: round trips, identities, ordering and determinism of the
//!    full pipeline

pub mod accuracy;
pub mod patterns;
pub mod reference;

pub use accuracy::{DeltaEStats, compare_lab};
pub use patterns::{TestPattern, generate_pattern};
