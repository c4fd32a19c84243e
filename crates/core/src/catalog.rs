//! Static catalog of named hue buckets.
//!
//! Each chromatic bucket owns an inclusive hue range in degrees and a list of
//! `(saturation, minimum brightness)` lower-bound points. The saturation range
//! of a bucket is the span of those points; the brightness range for a given
//! saturation is found by linear interpolation along them.
//!
//! Red straddles 0 degrees, so it is stored as `(-26, 18)`. Hues in
//! `334..=360` are shifted by -360 before matching against the table.

use crate::error::KolorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named hue bucket.
///
/// `Monochrome` is special: its saturation is always 0 and it is never the
/// result of a hue scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    Monochrome,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
}

const MONOCHROME_BOUNDS: &[(i32, i32)] = &[(0, 0), (100, 0)];
const RED_BOUNDS: &[(i32, i32)] = &[
    (20, 100),
    (30, 92),
    (40, 89),
    (50, 85),
    (60, 78),
    (70, 70),
    (80, 60),
    (90, 55),
    (100, 50),
];
const ORANGE_BOUNDS: &[(i32, i32)] = &[
    (20, 100),
    (30, 93),
    (40, 88),
    (50, 86),
    (60, 85),
    (70, 70),
    (100, 70),
];
const YELLOW_BOUNDS: &[(i32, i32)] = &[
    (25, 100),
    (40, 94),
    (50, 89),
    (60, 86),
    (70, 84),
    (80, 82),
    (90, 80),
    (100, 75),
];
const GREEN_BOUNDS: &[(i32, i32)] = &[
    (30, 100),
    (40, 90),
    (50, 85),
    (60, 81),
    (70, 74),
    (80, 64),
    (90, 50),
    (100, 40),
];
const BLUE_BOUNDS: &[(i32, i32)] = &[
    (20, 100),
    (30, 86),
    (40, 80),
    (50, 74),
    (60, 60),
    (70, 52),
    (80, 44),
    (90, 39),
    (100, 35),
];
const PURPLE_BOUNDS: &[(i32, i32)] = &[
    (20, 100),
    (30, 87),
    (40, 79),
    (50, 70),
    (60, 65),
    (70, 59),
    (80, 52),
    (90, 45),
    (100, 42),
];
const PINK_BOUNDS: &[(i32, i32)] = &[
    (20, 100),
    (30, 90),
    (40, 86),
    (60, 84),
    (80, 80),
    (90, 75),
    (100, 73),
];

impl ColorName {
    /// Every bucket, in declaration order.
    pub const ALL: [ColorName; 8] = [
        ColorName::Monochrome,
        ColorName::Red,
        ColorName::Orange,
        ColorName::Yellow,
        ColorName::Green,
        ColorName::Blue,
        ColorName::Purple,
        ColorName::Pink,
    ];

    /// Buckets considered by [`ColorName::from_hue`], in scan order.
    const CHROMATIC: [ColorName; 7] = [
        ColorName::Red,
        ColorName::Orange,
        ColorName::Yellow,
        ColorName::Green,
        ColorName::Blue,
        ColorName::Purple,
        ColorName::Pink,
    ];

    /// Lowercase name used by `Display`, `FromStr` and serde.
    pub fn name(self) -> &'static str {
        match self {
            ColorName::Monochrome => "monochrome",
            ColorName::Red => "red",
            ColorName::Orange => "orange",
            ColorName::Yellow => "yellow",
            ColorName::Green => "green",
            ColorName::Blue => "blue",
            ColorName::Purple => "purple",
            ColorName::Pink => "pink",
        }
    }

    /// Returns the names of all buckets.
    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.name()).collect()
    }

    /// Inclusive hue range in degrees. Red's lower bound is negative.
    ///
    /// Monochrome has no hue of its own, so any hue may be drawn for it.
    pub fn hue_range(self) -> (i32, i32) {
        match self {
            ColorName::Monochrome => (0, 360),
            ColorName::Red => (-26, 18),
            ColorName::Orange => (18, 46),
            ColorName::Yellow => (46, 62),
            ColorName::Green => (62, 178),
            ColorName::Blue => (178, 257),
            ColorName::Purple => (257, 282),
            ColorName::Pink => (282, 334),
        }
    }

    fn lower_bounds(self) -> &'static [(i32, i32)] {
        match self {
            ColorName::Monochrome => MONOCHROME_BOUNDS,
            ColorName::Red => RED_BOUNDS,
            ColorName::Orange => ORANGE_BOUNDS,
            ColorName::Yellow => YELLOW_BOUNDS,
            ColorName::Green => GREEN_BOUNDS,
            ColorName::Blue => BLUE_BOUNDS,
            ColorName::Purple => PURPLE_BOUNDS,
            ColorName::Pink => PINK_BOUNDS,
        }
    }

    /// Inclusive saturation range `(min, max)` on the 0–100 scale.
    pub fn saturation_range(self) -> (i32, i32) {
        let bounds = self.lower_bounds();
        match (bounds.first(), bounds.last()) {
            (Some(&(s_min, _)), Some(&(s_max, _))) => (s_min, s_max),
            _ => (0, 100),
        }
    }

    /// Inclusive brightness range `(min, max)` for a given saturation.
    ///
    /// The minimum is interpolated from the lower-bound segment containing
    /// `saturation` and floored; the maximum is always 100. A saturation
    /// outside every segment yields the full `(0, 100)` scale.
    pub fn brightness_range(self, saturation: i32) -> (i32, i32) {
        let b_min = self
            .lower_bounds()
            .windows(2)
            .find_map(|pair| {
                let (s1, v1) = pair[0];
                let (s2, v2) = pair[1];
                if !(s1..=s2).contains(&saturation) {
                    return None;
                }
                Some(v1 + ((v2 - v1) * (saturation - s1)).div_euclid(s2 - s1))
            })
            .unwrap_or(0);
        (b_min, 100)
    }

    /// Finds the bucket a concrete hue falls into.
    ///
    /// Hues in `334..=360` are shifted into Red's negative range first. The
    /// first bucket in scan order (Red, Orange, Yellow, Green, Blue, Purple,
    /// Pink) whose range contains the hue wins, so shared boundaries resolve
    /// to the earlier bucket. A miss falls back to `Monochrome`.
    pub fn from_hue(hue: i32) -> ColorName {
        let shifted = if (334..=360).contains(&hue) {
            hue - 360
        } else {
            hue
        };
        Self::CHROMATIC
            .iter()
            .copied()
            .find(|color| {
                let (low, high) = color.hue_range();
                (low..=high).contains(&shifted)
            })
            .unwrap_or(ColorName::Monochrome)
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ColorName {
    type Err = KolorError;

    /// Parses a bucket name, case insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| KolorError::UnknownName(s.to_string()))
    }
}
