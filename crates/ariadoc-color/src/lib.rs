//! ariadoc Color
//!
//! Color math behind the hue wheel and contrast calculator demos:
//! HSL ⇄ RGB ⇄ HEX conversion, WCAG relative luminance, contrast ratio and
//! AA / AAA classification.
//!
//! The math never fails: inputs are normalized (hue modulo 360, saturation
//! and lightness clamped to 0–100). Only parsing user text returns errors.

mod contrast;
mod hsl;
mod rgb;

pub use contrast::{
    check_contrast, contrast_ratio, contrast_ratio_from_luminance, contrast_ratio_rgb, linearize,
    suggest_lightness, ContrastResult, WcagLevel, AAA_RATIO, AA_LARGE_RATIO, AA_RATIO,
};
pub use hsl::{hsl_to_hex, hsl_to_rgb, hue_wheel, relative_luminance, Hsl};
pub use rgb::Rgb;

/// Color parsing error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("Invalid hex color: {0:?} (expected #rrggbb or #rgb)")]
    InvalidHex(String),

    #[error("Invalid HSL color: {0:?} (expected h,s,l or hsl(h, s%, l%))")]
    InvalidHsl(String),
}
