//! Derived colors: the harmony palette and random seed sampling.

use rand::Rng;

use crate::color::{Hsla, Rgba};

/// Seeds with saturation below this percentage are treated as grayscale.
pub const GRAYSCALE_MIN_SATURATION: u8 = 10;
/// Seeds darker than this lightness percentage are treated as grayscale.
pub const GRAYSCALE_MIN_LIGHTNESS: u8 = 10;
/// Seeds lighter than this lightness percentage are treated as grayscale.
pub const GRAYSCALE_MAX_LIGHTNESS: u8 = 90;

/// Saturation used for every derived color of a grayscale seed.
pub const FALLBACK_SATURATION: u8 = 75;
/// Lightness used for every derived color of a grayscale seed.
pub const FALLBACK_LIGHTNESS: u8 = 50;

/// Hue offsets in degrees, in output order: complementary, the two
/// split-complementaries, then the two analogous hues.
pub const HARMONY_OFFSETS: [i32; 5] = [180, 150, 210, 30, -30];

/// Palette length used by the color picker.
pub const DEFAULT_PALETTE_SIZE: usize = 5;

/// Hue range for [`random_light_color`], in degrees.
pub const RANDOM_HUE: std::ops::Range<u16> = 0..360;
/// Saturation range for [`random_light_color`], in percent.
pub const RANDOM_SATURATION: std::ops::Range<u8> = 60..100;
/// Lightness range for [`random_light_color`], in percent.
pub const RANDOM_LIGHTNESS: std::ops::Range<u8> = 45..70;

/// Whether `hsl` carries too little chroma (or sits too close to black or
/// white) for its hue to be meaningful.
pub fn is_near_grayscale(hsl: &Hsla) -> bool {
    hsl.s() < GRAYSCALE_MIN_SATURATION
        || hsl.l() < GRAYSCALE_MIN_LIGHTNESS
        || hsl.l() > GRAYSCALE_MAX_LIGHTNESS
}

/// Build a harmony palette: the seed itself followed by one color per
/// [`HARMONY_OFFSETS`] entry, truncated to `count`.
///
/// Six candidates exist, so the default `count` of 5 drops the last
/// analogous hue (`-30`). Grayscale seeds get vivid derived colors at
/// [`FALLBACK_SATURATION`] / [`FALLBACK_LIGHTNESS`].
pub fn generate_palette(seed: Rgba, count: usize) -> Vec<Rgba> {
    let base = seed.to_hsla();
    let (s, l) = if is_near_grayscale(&base) {
        (FALLBACK_SATURATION, FALLBACK_LIGHTNESS)
    } else {
        (base.s(), base.l())
    };

    let derived = HARMONY_OFFSETS
        .iter()
        .map(|offset| Hsla::from_parts(i32::from(base.h()) + offset, s, l, base.a()).to_rgba());

    std::iter::once(seed).chain(derived).take(count).collect()
}

/// A random opaque color that is neither dark, pale, nor gray.
pub fn random_light_color() -> Rgba {
    random_light_color_with(&mut rand::rng())
}

/// [`random_light_color`] drawing from the given generator.
pub fn random_light_color_with<R: Rng + ?Sized>(rng: &mut R) -> Rgba {
    random_light_hsla_with(rng).to_rgba()
}

/// The HSLA sample behind [`random_light_color_with`].
pub fn random_light_hsla_with<R: Rng + ?Sized>(rng: &mut R) -> Hsla {
    Hsla::from_parts(
        i32::from(rng.random_range(RANDOM_HUE)),
        rng.random_range(RANDOM_SATURATION),
        rng.random_range(RANDOM_LIGHTNESS),
        1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn hsl(h: u16, s: u8, l: u8) -> Hsla {
        Hsla::new(h, s, l, 1.0).unwrap()
    }

    #[test]
    fn default_palette_keeps_seed_and_first_four_offsets() {
        let seed = hsl(0, 50, 50).to_rgba();
        let palette = generate_palette(seed, DEFAULT_PALETTE_SIZE);

        let expected: Vec<Rgba> = std::iter::once(seed)
            .chain([180, 150, 210, 30].map(|h| hsl(h, 50, 50).to_rgba()))
            .collect();
        assert_eq!(palette, expected);
    }

    // Parity: with five slots the -30 analogous hue never appears.
    #[test]
    fn truncation_drops_last_offset() {
        let seed = hsl(100, 60, 40).to_rgba();
        let five = generate_palette(seed, 5);
        let six = generate_palette(seed, 6);
        assert_eq!(five.len(), 5);
        assert_eq!(six.len(), 6);
        assert_eq!(&six[..5], &five[..]);
        let base = seed.to_hsla();
        let last = Hsla::from_parts(i32::from(base.h()) - 30, base.s(), base.l(), 1.0);
        assert_eq!(six[5], last.to_rgba());
    }

    #[test]
    fn count_caps_length() {
        let seed = hsl(200, 70, 50).to_rgba();
        assert!(generate_palette(seed, 0).is_empty());
        assert_eq!(generate_palette(seed, 1), vec![seed]);
        assert_eq!(generate_palette(seed, 50).len(), 1 + HARMONY_OFFSETS.len());
    }

    #[test]
    fn seed_is_returned_unmodified() {
        // Alpha and channels that would not survive an HSL round trip.
        let seed = Rgba::new(2, 228, 230, 0.37).unwrap();
        assert_eq!(generate_palette(seed, 5)[0], seed);
    }

    #[test]
    fn grayscale_seed_uses_vivid_fallback() {
        let seed = hsl(0, 5, 50).to_rgba();
        let base = seed.to_hsla();
        assert!(is_near_grayscale(&base));
        let palette = generate_palette(seed, 5);
        for (color, offset) in palette[1..].iter().zip(HARMONY_OFFSETS) {
            let expected =
                Hsla::from_parts(i32::from(base.h()) + offset, FALLBACK_SATURATION, FALLBACK_LIGHTNESS, 1.0);
            assert_eq!(*color, expected.to_rgba());
        }
    }

    #[test]
    fn black_and_white_are_grayscale() {
        assert!(is_near_grayscale(&Rgba::BLACK.to_hsla()));
        assert!(is_near_grayscale(&Rgba::WHITE.to_hsla()));
        assert!(is_near_grayscale(&hsl(120, 80, 95)));
        assert!(is_near_grayscale(&hsl(120, 80, 9)));
        assert!(!is_near_grayscale(&hsl(120, 10, 10)));
        assert!(!is_near_grayscale(&hsl(120, 10, 90)));
    }

    #[test]
    fn derived_colors_keep_seed_alpha() {
        let seed = Rgba::new(200, 40, 40, 0.4).unwrap();
        assert!(generate_palette(seed, 6).iter().all(|c| c.a() == 0.4));
    }

    #[test]
    fn hue_wraps_below_zero() {
        let seed = hsl(10, 60, 50).to_rgba();
        let base = seed.to_hsla();
        let palette = generate_palette(seed, 6);
        let wrapped = Hsla::new(340, base.s(), base.l(), 1.0).unwrap();
        assert_eq!(palette[5], wrapped.to_rgba());
    }

    #[test]
    fn random_light_color_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            let sample = random_light_hsla_with(&mut rng);
            assert!(sample.h() < 360);
            assert!((60..100).contains(&sample.s()));
            assert!((45..70).contains(&sample.l()));
            assert_eq!(sample.a(), 1.0);
            assert!(!is_near_grayscale(&sample));

            let color = sample.to_rgba();
            assert_eq!(color.a(), 1.0);
            assert!(!is_near_grayscale(&color.to_hsla()));
        }
    }

    #[test]
    fn random_light_color_uses_thread_rng() {
        let color = random_light_color();
        assert!(!is_near_grayscale(&color.to_hsla()));
    }
}
