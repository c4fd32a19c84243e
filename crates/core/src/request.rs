//! Generation options: luminosity policy, output format, and the bundled
//! [`ColorRequest`].

use crate::error::KolorError;
use crate::hue::HueSpec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Preset narrowing the saturation and brightness sampling ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Luminosity {
    #[default]
    Random,
    Bright,
    Light,
    Dark,
}

impl Luminosity {
    pub const ALL: [Luminosity; 4] = [
        Luminosity::Random,
        Luminosity::Bright,
        Luminosity::Light,
        Luminosity::Dark,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Luminosity::Random => "random",
            Luminosity::Bright => "bright",
            Luminosity::Light => "light",
            Luminosity::Dark => "dark",
        }
    }

    /// Saturation sub-range for a bucket whose saturation range is
    /// `(s_min, s_max)`.
    pub fn saturation_bounds(self, (s_min, s_max): (i32, i32)) -> (i32, i32) {
        match self {
            Luminosity::Random => (0, 100),
            Luminosity::Bright => (55, s_max),
            Luminosity::Light => (s_min, 55),
            Luminosity::Dark => (s_max - 10, s_max),
        }
    }

    /// Brightness sub-range for a bucket whose brightness range is
    /// `(b_min, b_max)`. The upper end never exceeds 100.
    pub fn brightness_bounds(self, (b_min, b_max): (i32, i32)) -> (i32, i32) {
        let (low, high) = match self {
            Luminosity::Random => (50, 100),
            Luminosity::Bright => (b_min, b_max),
            Luminosity::Light => ((b_max + b_min) / 2, b_max),
            Luminosity::Dark => (b_min, b_min + 20),
        };
        (low, high.min(100))
    }
}

/// Encoding of a generated color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `"(r, g, b)"`
    #[default]
    Rgb,
    /// `"(h, s, l)"`
    Hsl,
    /// `"#RRGGBB"`
    Hex,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Rgb, Format::Hsl, Format::Hex];

    pub fn name(self) -> &'static str {
        match self {
            Format::Rgb => "rgb",
            Format::Hsl => "hsl",
            Format::Hex => "hex",
        }
    }
}

macro_rules! named_enum_str {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = KolorError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase();
                <$ty>::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name() == wanted)
                    .ok_or_else(|| KolorError::UnknownName(s.to_string()))
            }
        }
    };
}

named_enum_str!(Luminosity);
named_enum_str!(Format);

/// Everything one generation call needs. Missing JSON fields take defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorRequest {
    pub hue: HueSpec,
    pub luminosity: Luminosity,
    pub format: Format,
}

impl ColorRequest {
    pub fn new(hue: HueSpec, luminosity: Luminosity, format: Format) -> Self {
        Self {
            hue,
            luminosity,
            format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ColorName;

    #[test]
    fn saturation_bounds_follow_policy() {
        let range = ColorName::Blue.saturation_range();
        assert_eq!(Luminosity::Random.saturation_bounds(range), (0, 100));
        assert_eq!(Luminosity::Bright.saturation_bounds(range), (55, 100));
        assert_eq!(Luminosity::Light.saturation_bounds(range), (20, 55));
        assert_eq!(Luminosity::Dark.saturation_bounds(range), (90, 100));
    }

    #[test]
    fn brightness_bounds_follow_policy() {
        let range = (40, 100);
        assert_eq!(Luminosity::Random.brightness_bounds(range), (50, 100));
        assert_eq!(Luminosity::Bright.brightness_bounds(range), (40, 100));
        assert_eq!(Luminosity::Light.brightness_bounds(range), (70, 100));
        assert_eq!(Luminosity::Dark.brightness_bounds(range), (40, 60));
    }

    #[test]
    fn dark_brightness_is_capped_at_100() {
        assert_eq!(Luminosity::Dark.brightness_bounds((92, 100)), (92, 100));
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("Bright".parse::<Luminosity>().unwrap(), Luminosity::Bright);
        assert_eq!("HEX".parse::<Format>().unwrap(), Format::Hex);
        assert!("neon".parse::<Luminosity>().is_err());
        assert!("cmyk".parse::<Format>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for l in Luminosity::ALL {
            assert_eq!(l.to_string().parse::<Luminosity>().unwrap(), l);
        }
        for f in Format::ALL {
            assert_eq!(f.to_string().parse::<Format>().unwrap(), f);
        }
    }

    #[test]
    fn default_request_is_random_random_rgb() {
        let req = ColorRequest::default();
        assert_eq!(req.hue, HueSpec::Random);
        assert_eq!(req.luminosity, Luminosity::Random);
        assert_eq!(req.format, Format::Rgb);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let req: ColorRequest = serde_json::from_str(r#"{"hue": "blue"}"#).unwrap();
        assert_eq!(
            req,
            ColorRequest::new(
                HueSpec::Named(ColorName::Blue),
                Luminosity::Random,
                Format::Rgb
            )
        );

        let req: ColorRequest =
            serde_json::from_str(r#"{"hue": 200, "luminosity": "dark", "format": "hsl"}"#)
                .unwrap();
        assert_eq!(
            req,
            ColorRequest::new(HueSpec::Degree(200), Luminosity::Dark, Format::Hsl)
        );
    }

    #[test]
    fn request_json_round_trip() {
        let req = ColorRequest::new(
            HueSpec::Named(ColorName::Yellow),
            Luminosity::Light,
            Format::Hex,
        );
        let json = serde_json::to_string(&req).unwrap();
        let restored: ColorRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req, restored);
    }
}
