//! Hue specifications and their resolution to a concrete hue.

use crate::catalog::ColorName;
use crate::error::KolorError;
use crate::sampler::GoldenSampler;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// What the caller asked for on the hue axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HueSpec {
    /// Any hue on the wheel.
    #[default]
    Random,
    /// One exact hue in degrees. Values outside `1..=359` behave as `Random`.
    Degree(i32),
    /// Any hue inside a catalog bucket.
    Named(ColorName),
}

impl HueSpec {
    /// Inclusive range of hues to sample from.
    ///
    /// Red's range has a negative lower bound; [`HueSpec::pick`] wraps the
    /// sampled value back onto the wheel.
    pub fn hue_range(self) -> (i32, i32) {
        match self {
            HueSpec::Random => (0, 360),
            HueSpec::Degree(v) if (1..=359).contains(&v) => (v, v),
            HueSpec::Degree(_) => (0, 360),
            HueSpec::Named(color) => color.hue_range(),
        }
    }

    /// Samples a hue from [`HueSpec::hue_range`] and normalizes it into `0..=359`.
    pub fn pick(self, sampler: &mut GoldenSampler) -> i32 {
        let (low, high) = self.hue_range();
        sampler.sample_within(low, high).rem_euclid(360)
    }
}

impl From<ColorName> for HueSpec {
    fn from(color: ColorName) -> Self {
        HueSpec::Named(color)
    }
}

impl fmt::Display for HueSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HueSpec::Random => f.write_str("random"),
            HueSpec::Degree(v) => write!(f, "{v}"),
            HueSpec::Named(color) => write!(f, "{color}"),
        }
    }
}

impl FromStr for HueSpec {
    type Err = KolorError;

    /// Accepts `"random"`, an integer degree, or a bucket name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("random") {
            return Ok(HueSpec::Random);
        }
        if let Ok(degree) = trimmed.parse::<i32>() {
            return Ok(HueSpec::Degree(degree));
        }
        trimmed.parse::<ColorName>().map(HueSpec::Named)
    }
}

/// Degrees serialize as JSON numbers, everything else as its name.
impl Serialize for HueSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            HueSpec::Degree(v) => serializer.serialize_i32(*v),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for HueSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Degree(i32),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Degree(v) => Ok(HueSpec::Degree(v)),
            Raw::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}
