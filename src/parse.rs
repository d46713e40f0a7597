//! Free-text color parsing for the seed dialog.
//!
//! Accepted forms:
//! * `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (the `#` is optional)
//! * `rgb(r, g, b)` / `rgba(r, g, b, a)`
//! * `hsl(h, s%, l%)` / `hsla(h, s%, l%, a)`, `%` optional, `°`/`deg` allowed
//!   after the hue

use std::sync::LazyLock;

use regex::Regex;

use crate::color::{Hsla, Rgba};
use crate::error::ParseColorError;

static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*(?:,\s*(\d+(?:\.\d*)?|\.\d+)\s*)?\)$",
    )
    .expect("rgba pattern is valid")
});

static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^hsla?\(\s*(\d+)\s*(?:°|deg)?\s*,\s*(\d+)\s*%?\s*,\s*(\d+)\s*%?\s*(?:,\s*(\d+(?:\.\d*)?|\.\d+)\s*)?\)$",
    )
    .expect("hsl pattern is valid")
});

/// Parse any supported color string.
///
/// The parser is picked from the prefix: `#` is hex, `rgb` is
/// [`parse_rgba`], `hsl` is [`parse_hsl`], and anything else is tried as hex
/// without the `#`.
pub fn parse_color(input: &str) -> Result<Rgba, ParseColorError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseColorError::Empty);
    }
    let lower = trimmed.to_ascii_lowercase();
    if trimmed.starts_with('#') {
        parse_hex(trimmed)
    } else if lower.starts_with("rgb") {
        parse_rgba(trimmed)
    } else if lower.starts_with("hsl") {
        parse_hsl(trimmed)
    } else {
        parse_hex(trimmed)
    }
}

/// Parse a hex color; one leading `#` is stripped.
///
/// 3- and 4-digit forms duplicate each nibble. Alpha is the last byte / 255.
pub fn parse_hex(hex: &str) -> Result<Rgba, ParseColorError> {
    let body = hex.trim();
    let body = body.strip_prefix('#').unwrap_or(body);
    if !matches!(body.len(), 3 | 4 | 6 | 8) {
        return Err(ParseColorError::HexLength(body.len()));
    }
    if !body.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(ParseColorError::HexDigit);
    }

    let bytes: Vec<u8> = if body.len() <= 4 {
        body.chars()
            .map(|c| byte_at(&format!("{c}{c}")))
            .collect::<Result<_, _>>()?
    } else {
        (0..body.len())
            .step_by(2)
            .map(|i| byte_at(&body[i..i + 2]))
            .collect::<Result<_, _>>()?
    };

    let a = bytes.get(3).map_or(1.0, |&a| f64::from(a) / 255.0);
    Rgba::new(bytes[0], bytes[1], bytes[2], a).map_err(|_| ParseColorError::OutOfRange("alpha"))
}

/// Parse `rgb(r, g, b)` or `rgba(r, g, b, a)`.
pub fn parse_rgba(input: &str) -> Result<Rgba, ParseColorError> {
    let caps = RGBA_RE
        .captures(input.trim())
        .ok_or(ParseColorError::Function("rgba"))?;

    let r = channel(&caps[1], "red")?;
    let g = channel(&caps[2], "green")?;
    let b = channel(&caps[3], "blue")?;
    let a = alpha(caps.get(4).map(|m| m.as_str()))?;

    Rgba::new(r, g, b, a).map_err(|_| ParseColorError::OutOfRange("alpha"))
}

/// Parse `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)` and convert to RGBA.
pub fn parse_hsl(input: &str) -> Result<Rgba, ParseColorError> {
    let caps = HSL_RE
        .captures(input.trim())
        .ok_or(ParseColorError::Function("hsl"))?;

    let h = bounded(&caps[1], 360, "hue")?;
    let s = bounded(&caps[2], 100, "saturation")?;
    let l = bounded(&caps[3], 100, "lightness")?;
    let a = alpha(caps.get(4).map(|m| m.as_str()))?;

    let hsla = Hsla::new(h, s as u8, l as u8, a)
        .map_err(|_| ParseColorError::OutOfRange("hsl component"))?;
    Ok(hsla.to_rgba())
}

fn byte_at(pair: &str) -> Result<u8, ParseColorError> {
    u8::from_str_radix(pair, 16).map_err(|_| ParseColorError::HexDigit)
}

fn channel(digits: &str, name: &'static str) -> Result<u8, ParseColorError> {
    bounded(digits, 255, name).map(|v| v as u8)
}

fn bounded(digits: &str, max: u16, name: &'static str) -> Result<u16, ParseColorError> {
    match digits.parse::<u16>() {
        Ok(v) if v <= max => Ok(v),
        _ => Err(ParseColorError::OutOfRange(name)),
    }
}

fn alpha(text: Option<&str>) -> Result<f64, ParseColorError> {
    let Some(text) = text else {
        return Ok(1.0);
    };
    match text.parse::<f64>() {
        Ok(a) if (0.0..=1.0).contains(&a) => Ok(a),
        _ => Err(ParseColorError::OutOfRange("alpha")),
    }
}
