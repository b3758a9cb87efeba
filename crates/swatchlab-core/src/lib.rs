//! # swatchlab - sRGB swatches through Lab and approximate rendering intents
//!
//! Converts a hex color to CIE Lab (D50) through the physically motivated
//! chain, previews how five rendering intents would shift it, and renders each
//! result back through an approximate CMYK separation to a display color.
//!
//! This is not a color management engine: there are no ICC profiles, and the
//! intents are fixed affine adjustments in Lab rather than gamut mapping.
//!
//! ## Quick Start
//!
//! ```
//! use swatchlab_core::{RenderIntent, evaluate};
//!
//! let results = evaluate("#629c67").unwrap();
//! assert_eq!(results.len(), 5);
//!
//! let naive = &results[4];
//! assert_eq!(naive.intent, RenderIntent::Naive);
//! assert_eq!(naive.display.to_string(), "#629c67");
//!
//! assert!(evaluate("#12345").is_err());
//! ```
//!
//! ## Modules
//!
//! - [`math`]: sRGB transfer function, 3x3 matrices, Bradford adaptation
//! - [`color`]: hex, RGB, XYZ, Lab and CMYK value types
//! - [`intent`]: the five rendering intents
//! - [`pipeline`]: composition of the above

pub mod color;
pub mod error;
pub mod intent;
pub mod math;
pub mod pipeline;

pub use color::{Cmyk, HexColor, Lab, LinearRgb, Rgb, Xyz, delta_e_2000};
pub use error::{Error, Result};
pub use intent::{ParseIntentError, RenderIntent};
pub use pipeline::{
    IntentRendering, IntentResult, LabConversion, evaluate, evaluate_all_intents, evaluate_batch,
    hex_to_lab, render_intent,
};

/// Version of swatchlab
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
