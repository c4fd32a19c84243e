//! Color synthesis: hue, then saturation, then brightness, then encoding.
//!
//! Each stage depends on the one before it. The hue picks a catalog bucket,
//! the bucket and luminosity policy bound the saturation, and the sampled
//! saturation in turn bounds the brightness.

use crate::catalog::ColorName;
use crate::color::{hsv_to_rgb, rgb_to_hex, rgb_to_hsl, Hsl, Hsv, Rgb};
use crate::error::KolorError;
use crate::hue::HueSpec;
use crate::request::{ColorRequest, Format, Luminosity};
use crate::sampler::GoldenSampler;
use log::{debug, trace};
use serde::Serialize;
use std::fmt;

/// A generated color in its requested encoding.
///
/// `Display` produces the exact textual contract: `"(r, g, b)"`,
/// `"(h, s, l)"` or `"#RRGGBB"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum KolorValue {
    Rgb(Rgb),
    Hsl(Hsl),
    Hex(String),
}

impl KolorValue {
    /// Encodes an HSV triple in the given format.
    pub fn encode(hsv: Hsv, format: Format) -> Self {
        let rgb = hsv_to_rgb(hsv);
        match format {
            Format::Rgb => KolorValue::Rgb(rgb),
            Format::Hsl => KolorValue::Hsl(rgb_to_hsl(rgb)),
            Format::Hex => KolorValue::Hex(rgb_to_hex(rgb)),
        }
    }
}

impl fmt::Display for KolorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KolorValue::Rgb(rgb) => write!(f, "{rgb}"),
            KolorValue::Hsl(hsl) => write!(f, "{hsl}"),
            KolorValue::Hex(hex) => f.write_str(hex),
        }
    }
}

/// Bucket used for saturation and brightness lookups.
///
/// A named hue uses its own bucket; anything else is matched by the sampled
/// hue.
pub fn resolve_color(hue: HueSpec, hue_value: i32) -> ColorName {
    match hue {
        HueSpec::Named(color) => color,
        _ => ColorName::from_hue(hue_value),
    }
}

/// One generated color with the intermediate values that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub hsv: Hsv,
    pub rgb: Rgb,
    /// Catalog bucket that bounded saturation and brightness.
    pub bucket: ColorName,
    pub value: KolorValue,
}

/// Random color generator.
///
/// Owns its sampler, so calls through one instance form a single sequence.
/// Seeded instances replay identically.
#[derive(Debug, Clone)]
pub struct RandomKolor {
    sampler: GoldenSampler,
}

impl RandomKolor {
    /// Creates a reproducible generator.
    pub fn new(seed: u64) -> Self {
        Self {
            sampler: GoldenSampler::new(seed),
        }
    }

    /// Creates a generator with a random seed.
    pub fn from_entropy() -> Self {
        Self {
            sampler: GoldenSampler::from_entropy(),
        }
    }

    /// Picks an HSV triple for the given hue spec and luminosity policy.
    pub fn random_hsv(&mut self, hue: HueSpec, luminosity: Luminosity) -> Hsv {
        self.pick(hue, luminosity).0
    }

    fn pick(&mut self, hue: HueSpec, luminosity: Luminosity) -> (Hsv, ColorName) {
        let h = hue.pick(&mut self.sampler);
        let color = resolve_color(hue, h);
        trace!("hue {h} resolved to bucket {color}");

        let s = self.pick_saturation(color, luminosity);
        let v = self.pick_brightness(color, s, luminosity);
        debug!("picked hsv({h}, {s}, {v}) for hue={hue} luminosity={luminosity}");
        (Hsv { h, s, v }, color)
    }

    fn pick_saturation(&mut self, color: ColorName, luminosity: Luminosity) -> i32 {
        if color == ColorName::Monochrome {
            return 0;
        }
        let (low, high) = luminosity.saturation_bounds(color.saturation_range());
        self.sampler.sample_within(low, high)
    }

    fn pick_brightness(&mut self, color: ColorName, saturation: i32, luminosity: Luminosity) -> i32 {
        let (low, high) = luminosity.brightness_bounds(color.brightness_range(saturation));
        self.sampler.sample_within(low, high)
    }

    /// Generates one color along with its HSV, RGB and bucket.
    pub fn swatch(&mut self, request: ColorRequest) -> Swatch {
        let (hsv, bucket) = self.pick(request.hue, request.luminosity);
        Swatch {
            hsv,
            rgb: hsv_to_rgb(hsv),
            bucket,
            value: KolorValue::encode(hsv, request.format),
        }
    }

    /// Generates `count` independent swatches.
    ///
    /// Returns `KolorError::InvalidArgument` if `count` is negative.
    pub fn swatches(&mut self, count: i64, request: ColorRequest) -> Result<Vec<Swatch>, KolorError> {
        let count = usize::try_from(count).map_err(|_| {
            KolorError::InvalidArgument(format!("count must be non-negative, got {count}"))
        })?;
        Ok((0..count).map(|_| self.swatch(request)).collect())
    }

    /// Generates one color as a structured value.
    pub fn generate(&mut self, request: ColorRequest) -> KolorValue {
        self.swatch(request).value
    }

    /// Generates one encoded color string.
    pub fn random_color(&mut self, hue: HueSpec, luminosity: Luminosity, format: Format) -> String {
        self.generate(ColorRequest::new(hue, luminosity, format)).to_string()
    }

    /// Generates `count` independent encoded color strings.
    ///
    /// Returns `KolorError::InvalidArgument` if `count` is negative.
    pub fn random_colors(
        &mut self,
        count: i64,
        hue: HueSpec,
        luminosity: Luminosity,
        format: Format,
    ) -> Result<Vec<String>, KolorError> {
        let swatches = self.swatches(count, ColorRequest::new(hue, luminosity, format))?;
        Ok(swatches.into_iter().map(|s| s.value.to_string()).collect())
    }
}

/// Generates one encoded color with a freshly seeded generator.
pub fn random_color(hue: HueSpec, luminosity: Luminosity, format: Format) -> String {
    RandomKolor::from_entropy().random_color(hue, luminosity, format)
}

/// Generates `count` encoded colors with a freshly seeded generator.
///
/// Returns `KolorError::InvalidArgument` if `count` is negative.
pub fn random_colors(
    count: i64,
    hue: HueSpec,
    luminosity: Luminosity,
    format: Format,
) -> Result<Vec<String>, KolorError> {
    RandomKolor::from_entropy().random_colors(count, hue, luminosity, format)
}
