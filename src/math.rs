//! Color math: direct conversions without external dependencies.
//! Channels, saturation and lightness are normalized f64 in 0.0–1.0; hue is
//! in degrees.

/// RGB → HSL. Returns (hue degrees in 0.0–360.0, s, l).
///
/// Achromatic input (`max == min`) yields hue 0 and saturation 0.
pub(crate) fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0 * 360.0, s, l)
}

/// HSL → RGB via the chroma/k-function form. Hue in degrees (any finite
/// value, taken mod 360), s and l in 0.0–1.0.
pub(crate) fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let chroma = s * l.min(1.0 - l);
    let f = |n: f64| {
        let k = (n + h / 30.0).rem_euclid(12.0);
        l - chroma * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };
    (f(0.0), f(8.0), f(4.0))
}

/// Wrap a (possibly negative) degree value into 0..360.
pub(crate) fn wrap_hue(degrees: i32) -> u16 {
    (((degrees % 360) + 360) % 360) as u16
}

/// Normalized channel → 0–255 byte, clamped and rounded.
pub(crate) fn to_byte(unit: f64) -> u8 {
    (unit.clamp(0.0, 1.0) * 255.0).round() as u8
}
