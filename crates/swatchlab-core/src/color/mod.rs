//! Color value types
//!
//! This module provides:
//! - Hex color codes (`#rrggbb`)
//! - Display-encoded and linear sRGB
//! - CIE XYZ tagged with its reference white
//! - CIELAB relative to D50
//! - Approximate CMYK
//! - The D65 and D50 white points

pub mod cmyk;
pub mod hex;
pub mod lab;
pub mod rgb;
pub mod white_point;
pub mod xyz;

pub use cmyk::Cmyk;
pub use hex::HexColor;
pub use lab::{Lab, delta_e_2000};
pub use rgb::{LinearRgb, Rgb};
pub use white_point::{D50, D50_WHITE, D65, D65_WHITE, Illuminant, WhitePoint};
pub use xyz::Xyz;
