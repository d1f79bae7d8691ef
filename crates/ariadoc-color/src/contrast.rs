//! WCAG contrast ratio and conformance levels

use std::fmt;

use serde::Serialize;

use crate::{Hsl, Rgb};

/// Minimum ratio for large text (AA)
pub const AA_LARGE_RATIO: f64 = 3.0;
/// Minimum ratio for normal text (AA)
pub const AA_RATIO: f64 = 4.5;
/// Minimum ratio for normal text (AAA)
pub const AAA_RATIO: f64 = 7.0;

/// sRGB channel (0.0–1.0) to linear light
pub fn linearize(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// `(lighter + 0.05) / (darker + 0.05)`, in 1–21 for luminances in 0–1
pub fn contrast_ratio_from_luminance(a: f64, b: f64) -> f64 {
    let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two HSL colors. Order does not matter.
pub fn contrast_ratio(fg: Hsl, bg: Hsl) -> f64 {
    contrast_ratio_from_luminance(fg.relative_luminance(), bg.relative_luminance())
}

/// Contrast ratio between two 8-bit colors
pub fn contrast_ratio_rgb(fg: Rgb, bg: Rgb) -> f64 {
    contrast_ratio_from_luminance(fg.relative_luminance(), bg.relative_luminance())
}

/// WCAG conformance level reached by a ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WcagLevel {
    Fail,
    AaLarge,
    Aa,
    Aaa,
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            WcagLevel::Fail => "Fail",
            WcagLevel::AaLarge => "AA Large",
            WcagLevel::Aa => "AA",
            WcagLevel::Aaa => "AAA",
        };
        f.write_str(text)
    }
}

/// Contrast check result
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastResult {
    pub ratio: f64,
    pub meets_aa: bool,
    pub meets_aaa: bool,
    pub meets_aa_large: bool,
}

impl ContrastResult {
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            meets_aa: ratio >= AA_RATIO,
            meets_aaa: ratio >= AAA_RATIO,
            meets_aa_large: ratio >= AA_LARGE_RATIO,
        }
    }

    /// Highest level reached
    pub fn level(&self) -> WcagLevel {
        if self.meets_aaa {
            WcagLevel::Aaa
        } else if self.meets_aa {
            WcagLevel::Aa
        } else if self.meets_aa_large {
            WcagLevel::AaLarge
        } else {
            WcagLevel::Fail
        }
    }
}

/// Compute the ratio between two colors and classify it
pub fn check_contrast(fg: Hsl, bg: Hsl) -> ContrastResult {
    let result = ContrastResult::from_ratio(contrast_ratio(fg, bg));
    tracing::debug!(%fg, %bg, ratio = result.ratio, level = %result.level(), "Contrast checked");
    result
}

// Lightness is searched in hundredths of a percent
const STEPS: i64 = 10_000;

/// Adjust the lightness of `fg` until it reaches `min_ratio` against `bg`
///
/// Hue and saturation are kept. Both darker and lighter candidates are
/// searched and the one closest to the original lightness wins (darker on a
/// tie). Returns `fg` unchanged if it already passes and `None` if no
/// lightness does.
pub fn suggest_lightness(fg: Hsl, bg: Hsl, min_ratio: f64) -> Option<Hsl> {
    let bg_luminance = bg.relative_luminance();
    let meets = |step: i64| {
        let candidate = fg.with_lightness(step as f64 / 100.0);
        contrast_ratio_from_luminance(candidate.relative_luminance(), bg_luminance) >= min_ratio
    };

    if contrast_ratio(fg, bg) >= min_ratio {
        return Some(fg);
    }

    let current = fg.l * 100.0;
    let darker = search_darker(&meets, current.floor() as i64);
    let lighter = search_lighter(&meets, current.ceil() as i64);

    let best = match (darker, lighter) {
        (Some(d), Some(l)) => {
            if current - d as f64 <= l as f64 - current { Some(d) } else { Some(l) }
        }
        (d, l) => d.or(l),
    };

    match best {
        Some(step) => {
            let suggestion = fg.with_lightness(step as f64 / 100.0);
            tracing::debug!(%fg, %bg, %suggestion, min_ratio, "Suggested lightness");
            Some(suggestion)
        }
        None => {
            tracing::debug!(%fg, %bg, min_ratio, "No lightness reaches the ratio");
            None
        }
    }
}

/// Largest step in `0..=upper` that meets the ratio
///
/// Below the failing original the ratio only grows as lightness drops, so
/// the passing steps form a prefix.
fn search_darker(meets: &impl Fn(i64) -> bool, upper: i64) -> Option<i64> {
    if !meets(0) {
        return None;
    }
    if meets(upper) {
        return Some(upper);
    }
    let (mut pass, mut fail) = (0, upper);
    while fail - pass > 1 {
        let mid = pass + (fail - pass) / 2;
        if meets(mid) { pass = mid } else { fail = mid }
    }
    Some(pass)
}

/// Smallest step in `lower..=STEPS` that meets the ratio
fn search_lighter(meets: &impl Fn(i64) -> bool, lower: i64) -> Option<i64> {
    if !meets(STEPS) {
        return None;
    }
    if meets(lower) {
        return Some(lower);
    }
    let (mut fail, mut pass) = (lower, STEPS);
    while pass - fail > 1 {
        let mid = fail + (pass - fail) / 2;
        if meets(mid) { pass = mid } else { fail = mid }
    }
    Some(pass)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_on_white() {
        let ratio = contrast_ratio(Hsl::BLACK, Hsl::WHITE);
        assert!((ratio - 21.0).abs() < 1e-9);
        assert_eq!(ContrastResult::from_ratio(ratio).level(), WcagLevel::Aaa);
    }

    #[test]
    fn test_same_color() {
        let c = Hsl::new(200.0, 60.0, 45.0);
        assert_eq!(contrast_ratio(c, c), 1.0);
        assert_eq!(check_contrast(c, c).level(), WcagLevel::Fail);
    }

    #[test]
    fn test_gray_on_white() {
        let result = check_contrast(Hsl::new(0.0, 0.0, 50.0), Hsl::WHITE);
        // #808080 on white
        assert!((result.ratio - 3.949).abs() < 0.001, "ratio {}", result.ratio);
        assert!(!result.meets_aa);
        assert!(!result.meets_aaa);
        assert!(result.meets_aa_large);
        assert_eq!(result.level(), WcagLevel::AaLarge);
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        let aa = ContrastResult::from_ratio(4.5);
        assert!(aa.meets_aa && aa.meets_aa_large && !aa.meets_aaa);
        assert!(ContrastResult::from_ratio(7.0).meets_aaa);
        assert!(ContrastResult::from_ratio(3.0).meets_aa_large);
        assert!(!ContrastResult::from_ratio(2.999).meets_aa_large);
    }

    #[test]
    fn test_rgb_ratio() {
        let ratio = contrast_ratio_rgb(Rgb::new(0x33, 0x66, 0x99), Rgb::WHITE);
        assert!((ratio - 6.0).abs() < 0.1, "ratio {ratio}");
        assert_eq!(contrast_ratio_rgb(Rgb::WHITE, Rgb::BLACK), contrast_ratio_rgb(Rgb::BLACK, Rgb::WHITE));
    }

    #[test]
    fn test_level_display() {
        assert_eq!(WcagLevel::AaLarge.to_string(), "AA Large");
        assert!(WcagLevel::Aaa > WcagLevel::Aa);
    }

    #[test]
    fn test_suggest_keeps_passing_color() {
        let fg = Hsl::new(0.0, 0.0, 10.0);
        assert_eq!(suggest_lightness(fg, Hsl::WHITE, AA_RATIO), Some(fg));
    }

    #[test]
    fn test_suggest_darker_on_white() {
        let fg = Hsl::new(0.0, 0.0, 50.0);
        let suggestion = suggest_lightness(fg, Hsl::WHITE, AA_RATIO).unwrap();
        assert!(suggestion.l < 50.0 && suggestion.l > 45.0, "l = {}", suggestion.l);
        assert!(contrast_ratio(suggestion, Hsl::WHITE) >= AA_RATIO);
        // One step lighter no longer passes
        assert!(contrast_ratio(suggestion.with_lightness(suggestion.l + 0.01), Hsl::WHITE) < AA_RATIO);
    }

    #[test]
    fn test_suggest_lighter_on_black() {
        let fg = Hsl::new(210.0, 40.0, 20.0);
        let suggestion = suggest_lightness(fg, Hsl::BLACK, AA_RATIO).unwrap();
        assert!(suggestion.l > 20.0);
        assert_eq!(suggestion.h, fg.h);
        assert_eq!(suggestion.s, fg.s);
        assert!(contrast_ratio(suggestion, Hsl::BLACK) >= AA_RATIO);
    }

    #[test]
    fn test_suggest_impossible() {
        let mid_gray = Hsl::new(0.0, 0.0, 50.0);
        assert_eq!(suggest_lightness(Hsl::new(0.0, 0.0, 40.0), mid_gray, AAA_RATIO), None);
    }
}
