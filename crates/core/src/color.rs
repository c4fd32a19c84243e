//! Color value types and the pure conversions between them.
//!
//! Generation works in integer HSV (hue in degrees, saturation and brightness
//! on a 0–100 scale) and converts to 8-bit RGB, fractional HSL or a hex
//! string on the way out. The `Display` impls of [`Rgb`] and [`Hsl`] are the
//! `"(a, b, c)"` encodings consumers parse, and the matching `FromStr` impls
//! parse them back.

use crate::error::KolorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Integer HSV color: hue in degrees, saturation and brightness in 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsv {
    pub h: i32,
    pub s: i32,
    pub v: i32,
}

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL color: hue in degrees [0, 360), saturation and lightness in [0, 1].
///
/// Components are `f32` so the textual form matches the single-precision
/// values existing consumers exchange.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Rgb {
    /// Parses `"#RRGGBB"` or `"RRGGBB"`, case insensitive.
    pub fn from_hex(hex: &str) -> Result<Rgb, KolorError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(KolorError::InvalidColor(format!(
                "expected 6 hex digits, got {:?}",
                hex
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| KolorError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Rgb {
            r: channel(0..2, "red")?,
            g: channel(2..4, "green")?,
            b: channel(4..6, "blue")?,
        })
    }

    /// Formats as `"#RRGGBB"` with uppercase digits.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Hsl {
    /// Shortest round-trip form with a trailing `.0` on integral values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?}, {:?})", self.h, self.s, self.l)
    }
}

/// Splits `"(a, b, c)"` into its three trimmed components.
fn split_triple(s: &str) -> Result<[&str; 3], KolorError> {
    let inner = s
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| KolorError::InvalidColor(format!("expected \"(a, b, c)\", got {s:?}")))?;
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(KolorError::InvalidColor(format!(
            "expected 3 components, got {}",
            parts.len()
        ))),
    }
}

impl FromStr for Rgb {
    type Err = KolorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [r, g, b] = split_triple(s)?;
        let channel = |part: &str| {
            part.parse::<u8>()
                .map_err(|e| KolorError::InvalidColor(format!("invalid channel {part:?}: {e}")))
        };
        Ok(Rgb {
            r: channel(r)?,
            g: channel(g)?,
            b: channel(b)?,
        })
    }
}

impl FromStr for Hsl {
    type Err = KolorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [h, s_part, l] = split_triple(s)?;
        let component = |part: &str| {
            part.parse::<f32>()
                .map_err(|e| KolorError::InvalidColor(format!("invalid component {part:?}: {e}")))
        };
        Ok(Hsl {
            h: component(h)?,
            s: component(s_part)?,
            l: component(l)?,
        })
    }
}

/// Scales a [0, 1] channel to 0–255, flooring.
fn to_channel(c: f64) -> u8 {
    (c * 255.0).floor().clamp(0.0, 255.0) as u8
}

/// Converts HSV to 8-bit RGB with the six-sector formula.
///
/// Hue is wrapped into [0, 360) and then clamped to [1, 359], so 0 and 360
/// both convert as hue 1 instead of straddling the sector 0 boundary.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = f64::from(hsv.h.rem_euclid(360).clamp(1, 359)) / 360.0;
    let s = f64::from(hsv.s.clamp(0, 100)) / 100.0;
    let v = f64::from(hsv.v.clamp(0, 100)) / 100.0;

    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector as i32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}

/// Converts 8-bit RGB to HSL.
///
/// Achromatic input yields hue 0 and saturation 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f32::from(rgb.r) / 255.0;
    let g = f32::from(rgb.g) / 255.0;
    let b = f32::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    let (h, s) = if delta == 0.0 {
        (0.0, 0.0)
    } else {
        let h = if max == r {
            ((g - b) / delta) % 6.0
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        (h, delta / (1.0 - (2.0 * l - 1.0).abs()))
    };

    let mut h = (h * 60.0) % 360.0;
    if h < 0.0 {
        h += 360.0;
    }

    Hsl {
        h: h.clamp(0.0, 360.0),
        s: s.clamp(0.0, 1.0),
        l: l.clamp(0.0, 1.0),
    }
}

/// Formats RGB as `"#RRGGBB"`, uppercase and zero padded.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Converts 8-bit RGB back to integer HSV, rounding each component.
///
/// Lossy: the forward conversion floors every channel, so a decoded hue can
/// drift a few degrees from the one that was generated, more so at low
/// saturation or brightness.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv {
        h: (h.round() as i32).rem_euclid(360),
        s: (s * 100.0).round() as i32,
        v: (max * 100.0).round() as i32,
    }
}
