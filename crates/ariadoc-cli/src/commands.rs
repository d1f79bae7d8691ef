//! Subcommand implementations
//!
//! Each command renders its result to a string in the configured output
//! format; `main` only prints it.

use std::fmt::Write as _;

use anyhow::Result;
use ariadoc_a11y::{announce_by_id, VirtualBuffer};
use ariadoc_color::{check_contrast, suggest_lightness, Hsl, AA_RATIO};
use ariadoc_dom::Document;
use serde_json::json;

use crate::config::{Config, OutputFormat};

/// Announcement for one element, or the whole body in reading order
pub fn announce(doc: &Document, id: Option<&str>, group: bool, config: &Config) -> Result<String> {
    if let Some(id) = id {
        let text = announce_by_id(doc, id, group)?;
        tracing::debug!(id, group, "Announced element");
        return Ok(match config.output {
            OutputFormat::Text => text,
            OutputFormat::Json => json!({ "id": id, "text": text }).to_string(),
        });
    }

    let Some(body) = doc.body() else {
        tracing::warn!("Document has no body");
        return Ok(match config.output {
            OutputFormat::Text => String::new(),
            OutputFormat::Json => "[]".to_string(),
        });
    };

    let buffer = VirtualBuffer::from_document(doc, body);
    tracing::debug!(items = buffer.len(), "Built virtual buffer");

    Ok(match config.output {
        OutputFormat::Text => buffer
            .items()
            .iter()
            .map(|item| format!("[{}] {}", item.kind.as_str(), item.text))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => {
            let items: Vec<_> = buffer
                .items()
                .iter()
                .map(|item| json!({ "kind": item.kind.as_str(), "text": item.text }))
                .collect();
            serde_json::to_string_pretty(&items)?
        }
    })
}

/// Contrast ratio and WCAG levels for a foreground / background pair
pub fn contrast(fg: Hsl, bg: Hsl, suggest: bool, config: &Config) -> Result<String> {
    let result = check_contrast(fg, bg);
    let suggestion = if suggest { suggest_lightness(fg, bg, AA_RATIO) } else { None };

    if config.output == OutputFormat::Json {
        let mut value = json!({
            "foreground": fg,
            "background": bg,
            "result": result,
            "level": result.level(),
        });
        if suggest {
            value["suggestion"] = json!(suggestion.map(|s| json!({ "hsl": s, "hex": s.to_hex() })));
        }
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let verdict = |pass: bool| if pass { "pass" } else { "fail" };
    let mut out = String::new();
    writeln!(out, "Ratio: {:.*}:1", config.ratio_precision, result.ratio)?;
    writeln!(out, "AA: {}", verdict(result.meets_aa))?;
    writeln!(out, "AA Large: {}", verdict(result.meets_aa_large))?;
    writeln!(out, "AAA: {}", verdict(result.meets_aaa))?;
    write!(out, "Level: {}", result.level())?;
    if suggest {
        match suggestion {
            Some(s) => write!(out, "\nSuggested foreground (AA): {} {}", s, s.to_hex())?,
            None => write!(out, "\nSuggested foreground (AA): none")?,
        }
    }
    Ok(out)
}

/// RGB, hex and luminance of an HSL color
pub fn convert(color: Hsl, config: &Config) -> Result<String> {
    let rgb = color.to_rgb();
    let luminance = color.relative_luminance();

    Ok(match config.output {
        OutputFormat::Text => format!(
            "{}\nrgb: {}\nhex: {}\nluminance: {:.4}",
            color,
            rgb,
            rgb.to_hex(),
            luminance
        ),
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "hsl": color,
            "rgb": rgb,
            "hex": rgb.to_hex(),
            "luminance": luminance,
        }))?,
    })
}

/// Hue wheel swatches
pub fn wheel(steps: usize, saturation: f64, lightness: f64, config: &Config) -> Result<String> {
    let swatches = ariadoc_color::hue_wheel(steps, saturation, lightness);

    Ok(match config.output {
        OutputFormat::Text => swatches
            .iter()
            .map(|(hue, hex)| format!("{hue:>6.1} {hex}"))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => {
            let items: Vec<_> = swatches
                .iter()
                .map(|(hue, hex)| json!({ "hue": hue, "hex": hex }))
                .collect();
            serde_json::to_string_pretty(&items)?
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_config() -> Config {
        Config { output: OutputFormat::Json, ..Config::default() }
    }

    #[test]
    fn test_contrast_text() {
        let out = contrast(Hsl::new(0.0, 0.0, 50.0), Hsl::WHITE, false, &Config::default()).unwrap();
        assert_eq!(out, "Ratio: 3.95:1\nAA: fail\nAA Large: pass\nAAA: fail\nLevel: AA Large");
    }

    #[test]
    fn test_contrast_precision() {
        let config = Config { ratio_precision: 0, ..Config::default() };
        let out = contrast(Hsl::BLACK, Hsl::WHITE, false, &config).unwrap();
        assert!(out.starts_with("Ratio: 21:1\n"));
    }

    #[test]
    fn test_contrast_suggestion() {
        let out = contrast(Hsl::new(0.0, 0.0, 50.0), Hsl::WHITE, true, &Config::default()).unwrap();
        assert!(out.contains("Suggested foreground (AA): hsl(0, 0%, 46."));

        let out = contrast(Hsl::new(0.0, 0.0, 40.0), Hsl::new(0.0, 0.0, 50.0), true, &Config::default())
            .unwrap();
        assert!(out.ends_with("Suggested foreground (AA): none"));
    }

    #[test]
    fn test_contrast_json() {
        let out = contrast(Hsl::BLACK, Hsl::WHITE, true, &json_config()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["result"]["meets_aaa"], true);
        assert_eq!(value["level"], "aaa");
        assert_eq!(value["suggestion"]["hex"], "#000000");
    }

    #[test]
    fn test_convert() {
        let out = convert(Hsl::new(210.0, 50.0, 40.0), &Config::default()).unwrap();
        assert_eq!(out.lines().nth(1), Some("rgb: rgb(51, 102, 153)"));
        assert_eq!(out.lines().nth(2), Some("hex: #336699"));

        let value: serde_json::Value =
            serde_json::from_str(&convert(Hsl::WHITE, &json_config()).unwrap()).unwrap();
        assert_eq!(value["rgb"]["r"], 255);
        assert_eq!(value["hex"], "#ffffff");
    }

    #[test]
    fn test_wheel() {
        let out = wheel(4, 100.0, 50.0, &Config::default()).unwrap();
        assert_eq!(out, "   0.0 #ff0000\n  90.0 #80ff00\n 180.0 #00ffff\n 270.0 #8000ff");
        assert_eq!(wheel(0, 100.0, 50.0, &json_config()).unwrap(), "[]");
    }

    #[test]
    fn test_announce() {
        let doc = ariadoc_html::parse(
            r#"<h1>見出し</h1><button id="b" aria-pressed="true">太字</button>"#,
        );
        let config = Config::default();

        assert_eq!(announce(&doc, Some("b"), false, &config).unwrap(), "太字、ボタン、押下");
        assert_eq!(
            announce(&doc, None, false, &config).unwrap(),
            "[heading] 見出し\n[button] 太字、ボタン、押下"
        );
        assert!(announce(&doc, Some("nope"), false, &config).is_err());

        let value: serde_json::Value =
            serde_json::from_str(&announce(&doc, None, false, &json_config()).unwrap()).unwrap();
        assert_eq!(value[1]["kind"], "button");
    }
}
