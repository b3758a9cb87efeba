//! Numeric building blocks
//!
//! - 3x3 matrix operations and the fixed sRGB / Bradford constants
//! - sRGB transfer function
//! - Bradford chromatic adaptation

pub mod chromatic_adaptation;
pub mod gamma;
pub mod matrix;

pub use chromatic_adaptation::{adapt_xyz, bradford_matrix};
pub use gamma::{srgb_gamma_decode, srgb_gamma_encode};
pub use matrix::Matrix3x3;
