#![deny(unsafe_code)]
//! Random color generation for UI code.
//!
//! Produces visually distinct colors under hue, luminosity and output format
//! constraints: a hue is sampled from a requested range, a catalog bucket
//! bounds saturation and brightness for that hue, and the resulting HSV color
//! is encoded as RGB, HSL or hex. Sampling uses a golden-ratio offset over a
//! seedable `Xorshift64` so runs can be replayed.
//!
//! ```
//! use randomkolor_core::{ColorName, Format, HueSpec, Luminosity, RandomKolor};
//!
//! let mut kolor = RandomKolor::new(42);
//! let hex = kolor.random_color(HueSpec::Named(ColorName::Blue), Luminosity::Light, Format::Hex);
//! assert!(hex.starts_with('#') && hex.len() == 7);
//! ```

pub mod catalog;
pub mod color;
pub mod error;
pub mod hue;
pub mod request;
pub mod sampler;
pub mod synth;

pub use catalog::ColorName;
pub use color::{Hsl, Hsv, Rgb};
pub use error::KolorError;
pub use hue::HueSpec;
pub use request::{ColorRequest, Format, Luminosity};
pub use sampler::GoldenSampler;
pub use synth::{random_color, random_colors, KolorValue, RandomKolor, Swatch};
