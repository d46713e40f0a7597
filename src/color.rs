//! `Rgba` and `Hsla`: the color values shared by every widget.
//!
//! `Rgba` is the source of truth: 0–255 integer channels plus a 0.0–1.0
//! alpha. `Hsla` is always derived from it on demand and never stored.

use std::fmt;

use crate::error::ColorError;
use crate::math;

/// RGBA color with 0–255 channels and alpha in 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    r: u8,
    g: u8,
    b: u8,
    a: f64,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    /// Create a color, rejecting alpha outside 0.0–1.0.
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Result<Self, ColorError> {
        if !(0.0..=1.0).contains(&a) {
            return Err(ColorError::Alpha(a));
        }
        Ok(Self { r, g, b, a })
    }

    /// Create a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from normalized 0.0–1.0 components, clamping each.
    pub fn from_unit(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: math::to_byte(r),
            g: math::to_byte(g),
            b: math::to_byte(b),
            a: clamp_alpha(a),
        }
    }

    /// Red channel (0–255).
    pub fn r(&self) -> u8 {
        self.r
    }
    /// Green channel (0–255).
    pub fn g(&self) -> u8 {
        self.g
    }
    /// Blue channel (0–255).
    pub fn b(&self) -> u8 {
        self.b
    }
    /// Alpha (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Channels normalized to 0.0–1.0.
    pub fn to_unit(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Convert to HSLA with integer degrees and percentages.
    ///
    /// Hue may round up to 360 for reds just below it; treat 360 as 0.
    pub fn to_hsla(&self) -> Hsla {
        let (r, g, b) = self.to_unit();
        let (h, s, l) = math::rgb_to_hsl(r, g, b);
        Hsla {
            h: h.round() as u16,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
            a: self.a,
        }
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when alpha does not round to 255.
    pub fn to_hex(&self) -> String {
        let alpha = math::to_byte(self.a);
        if alpha == u8::MAX {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, alpha)
        }
    }

    /// Channel-wise complement; alpha unchanged.
    pub fn inverted(&self) -> Self {
        Self {
            r: u8::MAX - self.r,
            g: u8::MAX - self.g,
            b: u8::MAX - self.b,
            a: self.a,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::opaque(128, 128, 128)
    }
}

/// `rgba(r, g, b, a)` with alpha to two decimals.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {:.2})", self.r, self.g, self.b, self.a)
    }
}

/// HSLA color: hue in degrees (0–360, 360 ≡ 0), saturation and lightness in
/// percent (0–100), alpha in 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    h: u16,
    s: u8,
    l: u8,
    a: f64,
}

impl Hsla {
    /// Create an HSLA value, validating every component.
    pub fn new(h: u16, s: u8, l: u8, a: f64) -> Result<Self, ColorError> {
        if h > 360 {
            return Err(ColorError::Hue(h));
        }
        if s > 100 {
            return Err(ColorError::Percent {
                component: "saturation",
                value: s,
            });
        }
        if l > 100 {
            return Err(ColorError::Percent {
                component: "lightness",
                value: l,
            });
        }
        if !(0.0..=1.0).contains(&a) {
            return Err(ColorError::Alpha(a));
        }
        Ok(Self { h, s, l, a })
    }

    /// Build from components already known to be in range; hue is wrapped
    /// into 0..360 and percentages are clamped.
    pub(crate) fn from_parts(h: i32, s: u8, l: u8, a: f64) -> Self {
        Self {
            h: math::wrap_hue(h),
            s: s.min(100),
            l: l.min(100),
            a: clamp_alpha(a),
        }
    }

    /// Hue in degrees.
    pub fn h(&self) -> u16 {
        self.h
    }
    /// Saturation in percent.
    pub fn s(&self) -> u8 {
        self.s
    }
    /// Lightness in percent.
    pub fn l(&self) -> u8 {
        self.l
    }
    /// Alpha (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Convert to RGBA, rounding each channel.
    pub fn to_rgba(&self) -> Rgba {
        let (r, g, b) = math::hsl_to_rgb(
            f64::from(self.h),
            f64::from(self.s) / 100.0,
            f64::from(self.l) / 100.0,
        );
        Rgba {
            r: math::to_byte(r),
            g: math::to_byte(g),
            b: math::to_byte(b),
            a: self.a,
        }
    }
}

/// `hsl(h°, s%, l%, a)` with alpha to two decimals.
impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}°, {}%, {}%, {:.2})",
            self.h, self.s, self.l, self.a
        )
    }
}

impl From<Hsla> for Rgba {
    fn from(hsla: Hsla) -> Self {
        hsla.to_rgba()
    }
}

impl From<Rgba> for Hsla {
    fn from(rgba: Rgba) -> Self {
        rgba.to_hsla()
    }
}

fn clamp_alpha(a: f64) -> f64 {
    if a.is_nan() { 1.0 } else { a.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rgba(r: u8, g: u8, b: u8, a: f64) -> Rgba {
        Rgba::new(r, g, b, a).unwrap()
    }

    #[test]
    fn new_rejects_bad_alpha() {
        assert_eq!(Rgba::new(0, 0, 0, 1.5), Err(ColorError::Alpha(1.5)));
        assert!(Rgba::new(0, 0, 0, -0.1).is_err());
        assert!(Rgba::new(0, 0, 0, f64::NAN).is_err());
        assert!(Rgba::new(0, 0, 0, 0.0).is_ok());
    }

    #[test]
    fn hsla_new_validates_ranges() {
        assert_eq!(Hsla::new(361, 0, 0, 1.0), Err(ColorError::Hue(361)));
        assert!(matches!(
            Hsla::new(0, 101, 0, 1.0),
            Err(ColorError::Percent {
                component: "saturation",
                ..
            })
        ));
        assert!(matches!(
            Hsla::new(0, 0, 101, 1.0),
            Err(ColorError::Percent {
                component: "lightness",
                ..
            })
        ));
        assert!(Hsla::new(360, 100, 100, 1.0).is_ok());
    }

    #[test]
    fn hex_omits_opaque_alpha() {
        assert_eq!(rgba(255, 0, 0, 1.0).to_hex(), "#ff0000");
        assert_eq!(rgba(255, 0, 0, 0.5).to_hex(), "#ff000080");
        // 0.999 rounds to 255 and is treated as opaque.
        assert_eq!(rgba(1, 2, 3, 0.999).to_hex(), "#010203");
        assert_eq!(rgba(1, 2, 3, 0.0).to_hex(), "#01020300");
    }

    #[test]
    fn inverse_complements_channels() {
        assert_eq!(rgba(10, 20, 30, 1.0).inverted(), rgba(245, 235, 225, 1.0));
        assert_eq!(rgba(0, 128, 255, 0.25).inverted(), rgba(255, 127, 0, 0.25));
    }

    #[test]
    fn to_hsla_known_values() {
        let h = rgba(255, 0, 0, 1.0).to_hsla();
        assert_eq!((h.h(), h.s(), h.l()), (0, 100, 50));
        let h = rgba(0, 0, 255, 0.3).to_hsla();
        assert_eq!((h.h(), h.s(), h.l(), h.a()), (240, 100, 50, 0.3));
        let h = rgba(128, 128, 128, 1.0).to_hsla();
        assert_eq!((h.h(), h.s(), h.l()), (0, 0, 50));
    }

    #[test]
    fn to_rgba_known_values() {
        let c = Hsla::new(120, 100, 50, 1.0).unwrap().to_rgba();
        assert_eq!(c, rgba(0, 255, 0, 1.0));
        let c = Hsla::new(360, 100, 50, 1.0).unwrap().to_rgba();
        assert_eq!(c, rgba(255, 0, 0, 1.0));
        let c = Hsla::new(0, 0, 100, 0.4).unwrap().to_rgba();
        assert_eq!(c, rgba(255, 255, 255, 0.4));
    }

    #[test]
    fn grays_round_trip_within_one() {
        for v in 0..=255u8 {
            let back = rgba(v, v, v, 1.0).to_hsla().to_rgba();
            assert!(v.abs_diff(back.r()) <= 1, "{v} -> {back:?}");
            assert_eq!(back.r(), back.g());
            assert_eq!(back.g(), back.b());
        }
    }

    // Whole-degree hue and whole-percent s/l bound the drift; an exhaustive
    // sweep peaks at 5, e.g. rgb(2, 228, 230) -> rgb(2, 223, 227).
    #[test]
    fn round_trip_drift_is_bounded() {
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(51) {
                    let c = rgba(r as u8, g as u8, b as u8, 0.75);
                    let back = c.to_hsla().to_rgba();
                    for (x, y) in [(c.r(), back.r()), (c.g(), back.g()), (c.b(), back.b())] {
                        assert!(x.abs_diff(y) <= 5, "{c:?} -> {back:?}");
                    }
                    assert_eq!(back.a(), 0.75);
                }
            }
        }
    }

    #[test]
    fn primary_and_secondary_hex_survive_round_trip() {
        for hex in ["#ff0000", "#00ff00", "#0000ff", "#ffff00", "#00ffff", "#ff00ff"] {
            let c = crate::parse::parse_color(hex).unwrap();
            assert_eq!(c.to_hsla().to_rgba().to_hex(), hex);
        }
    }

    #[test]
    fn display_formats() {
        let c = rgba(12, 34, 56, 0.5);
        assert_eq!(c.to_string(), "rgba(12, 34, 56, 0.50)");
        let h = Hsla::new(210, 65, 13, 1.0).unwrap();
        assert_eq!(h.to_string(), "hsl(210°, 65%, 13%, 1.00)");
    }

    #[test]
    fn from_unit_clamps() {
        let c = Rgba::from_unit(1.2, -0.1, 0.5, 2.0);
        assert_eq!(c, rgba(255, 0, 128, 1.0));
    }

    #[test]
    fn from_parts_wraps_hue() {
        let h = Hsla::from_parts(-30, 120, 50, 1.0);
        assert_eq!((h.h(), h.s(), h.l()), (330, 100, 50));
    }
}
