//! HSL colors and their conversion to RGB / HEX

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::{ColorError, Rgb};

/// HSL color: hue in degrees (0–360), saturation and lightness in percent (0–100)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const BLACK: Hsl = Hsl { h: 0.0, s: 0.0, l: 0.0 };
    pub const WHITE: Hsl = Hsl { h: 0.0, s: 0.0, l: 100.0 };

    /// Create a normalized color: hue wraps modulo 360, saturation and
    /// lightness are clamped to 0–100, NaN becomes 0.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_percent(s),
            l: clamp_percent(l),
        }
    }

    /// Same hue and saturation, different lightness
    pub fn with_lightness(&self, l: f64) -> Self {
        Self::new(self.h, self.s, l)
    }

    pub fn to_rgb(&self) -> Rgb {
        hsl_to_rgb(self.h, self.s, self.l)
    }

    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }

    /// WCAG relative luminance of the displayed (8-bit) color
    pub fn relative_luminance(&self) -> f64 {
        relative_luminance(self.h, self.s, self.l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl FromStr for Hsl {
    type Err = ColorError;

    /// Parse `h,s,l`, `h s l` or `hsl(h, s%, l%)`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidHsl(s.to_string());

        let text = s.trim().to_ascii_lowercase();
        let body = match text.strip_prefix("hsl(") {
            Some(rest) => rest.strip_suffix(')').ok_or_else(invalid)?,
            None => text.as_str(),
        };

        let parts: Vec<&str> = body
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        let [h, sat, light] = parts.as_slice() else {
            return Err(invalid());
        };

        let number = |part: &str, suffix: &str| {
            let part = part.strip_suffix(suffix).unwrap_or(part);
            part.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(invalid)
        };

        Ok(Self::new(number(*h, "deg")?, number(*sat, "%")?, number(*light, "%")?))
    }
}

fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid can round tiny negative hues up to exactly 360
    if h >= 360.0 { 0.0 } else { h }
}

fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) }
}

/// Convert HSL to 8-bit RGB
///
/// Uses the chroma / hue sector formulation and rounds each channel to the
/// nearest integer.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let Hsl { h, s, l } = Hsl::new(h, s, l);
    let s = s / 100.0;
    let l = l / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h / 60.0) as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert HSL to `#rrggbb`
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    hsl_to_rgb(h, s, l).to_hex()
}

/// WCAG relative luminance of an HSL color
///
/// Measured on the 8-bit channels of [`hsl_to_rgb`], so it is exactly the
/// luminance of the color's hex swatch.
pub fn relative_luminance(h: f64, s: f64, l: f64) -> f64 {
    hsl_to_rgb(h, s, l).relative_luminance()
}

/// Evenly spaced hues around the wheel with their hex swatches
pub fn hue_wheel(steps: usize, s: f64, l: f64) -> Vec<(f64, String)> {
    (0..steps)
        .map(|i| {
            let hue = i as f64 * 360.0 / steps as f64;
            (hue, hsl_to_hex(hue, s, l))
        })
        .collect()
}
