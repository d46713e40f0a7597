//! Circular HSL color wheel.
//!
//! Angle maps to hue and radius maps to saturation. The wheel is rasterized
//! once at lightness 0.5; other lightness values are drawn as a black or white
//! overlay, which is exact for HSL: `hsl(h, s, l)` for `l < 0.5` equals the
//! mid-lightness color darkened toward black by `1 - 2l`, and for `l > 0.5`
//! lightened toward white by `2l - 1`.

use std::f64::consts::TAU;
use std::sync::Arc;

use floem::kurbo::{Circle, Point, Rect, Stroke};
use floem::peniko::{self, Blob, Color};
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::constants;
use crate::math;

/// Anti-alias band at the rim, in raster pixels.
const FEATHER: f64 = 3.0;

/// Cursor rings as (radius offset, stroke width, color): dark halo, white
/// ring, dark inner edge.
const CURSOR_RINGS: [(f64, f64, Color); 3] = [
    (1.0, 1.0, Color::rgba8(0, 0, 0, 80)),
    (0.0, 2.0, Color::WHITE),
    (-1.5, 1.0, Color::rgba8(0, 0, 0, 80)),
];

/// RGBA8 raster of a `size`×`size` wheel at lightness 0.5.
///
/// The disc is inset by [`FEATHER`] and fades to transparent across it;
/// saturation is already 1.0 where the fade starts.
fn rasterize_wheel_base(size: u32) -> Vec<u8> {
    let half = f64::from(size) / 2.0;
    let radius = half - FEATHER;
    let mut buf = vec![0u8; (size * size * 4) as usize];

    for (i, px) in buf.chunks_exact_mut(4).enumerate() {
        let (x, y) = (i as u32 % size, i as u32 / size);
        let dx = f64::from(x) + 0.5 - half;
        let dy = f64::from(y) + 0.5 - half;
        let dist = dx.hypot(dy);
        let coverage = ((radius + FEATHER - dist) / FEATHER).clamp(0.0, 1.0);
        if coverage == 0.0 {
            continue;
        }
        let hue = angle_to_hue(dx, dy) * 360.0;
        let (r, g, b) = math::hsl_to_rgb(hue, (dist / radius).min(1.0), 0.5);
        px.copy_from_slice(&[
            math::to_byte(r),
            math::to_byte(g),
            math::to_byte(b),
            math::to_byte(coverage),
        ]);
    }
    buf
}

/// Hue fraction (0.0–1.0) for an offset from the wheel center: 0 at 3 o'clock,
/// increasing clockwise in screen coordinates.
fn angle_to_hue(dx: f64, dy: f64) -> f64 {
    (dy.atan2(dx) / TAU).rem_euclid(1.0)
}

/// Overlay `(gray level, alpha)` that takes the mid-lightness raster to
/// lightness `l`.
fn lightness_overlay(l: f64) -> Option<(f64, f64)> {
    if l < 0.5 {
        Some((0.0, 1.0 - 2.0 * l))
    } else if l > 0.5 {
        Some((1.0, 2.0 * l - 1.0))
    } else {
        None
    }
}

enum WheelUpdate {
    HueSat(f64, f64),
    Lightness(f64),
}

pub(crate) struct ColorWheel {
    id: ViewId,
    held: bool,
    hue: f64,
    saturation: f64,
    lightness: f64,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(f64, f64)>>,
    /// Cached mid-lightness wheel image.
    wheel_img: Option<peniko::Image>,
    wheel_hash: Vec<u8>,
}

/// Creates a circular HSL wheel.
///
/// - `hue`: 0.0–1.0 (angle around the wheel)
/// - `saturation`: 0.0 (center) to 1.0 (edge)
/// - `lightness`: read-only, drives the overlay
pub(crate) fn color_wheel(
    hue: RwSignal<f64>,
    saturation: RwSignal<f64>,
    lightness: RwSignal<f64>,
) -> ColorWheel {
    let id = ViewId::new();

    create_effect(move |_| {
        let h = hue.get();
        let s = saturation.get();
        id.update_state(WheelUpdate::HueSat(h, s));
    });

    create_effect(move |_| {
        let l = lightness.get();
        id.update_state(WheelUpdate::Lightness(l));
    });

    ColorWheel {
        id,
        held: false,
        hue: hue.get_untracked(),
        saturation: saturation.get_untracked(),
        lightness: lightness.get_untracked(),
        size: Default::default(),
        on_change: Some(Box::new(move |h, s| {
            hue.set(h);
            saturation.set(s);
        })),
        wheel_img: None,
        wheel_hash: Vec::new(),
    }
    .style(|s| {
        s.size(constants::WHEEL_SIZE, constants::WHEEL_SIZE)
            .flex_shrink(0.0)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl ColorWheel {
    /// The largest disc centered in the view.
    fn disc(&self) -> Circle {
        let (w, h) = (f64::from(self.size.width), f64::from(self.size.height));
        Circle::new(Point::new(w / 2.0, h / 2.0), w.min(h) / 2.0)
    }

    fn update_from_pointer(&mut self, pos: Point) {
        let disc = self.disc();
        if disc.radius <= 0.0 {
            return;
        }
        let offset = pos - disc.center;
        self.hue = angle_to_hue(offset.x, offset.y);
        self.saturation = (offset.hypot() / disc.radius).clamp(0.0, 1.0);
    }

    fn cursor_position(&self) -> Point {
        let disc = self.disc();
        let (sin, cos) = (self.hue * TAU).sin_cos();
        let r = self.saturation * disc.radius;
        disc.center + (cos * r, sin * r)
    }

    fn wheel_image(&mut self) -> &peniko::Image {
        self.wheel_img.get_or_insert_with(|| {
            let size = constants::WHEEL_RASTER_SIZE;
            let blob = Blob::new(Arc::new(rasterize_wheel_base(size)));
            self.wheel_hash = blob.id().to_le_bytes().to_vec();
            peniko::Image::new(blob, peniko::Format::Rgba8, size, size)
        })
    }

    fn emit(&self) {
        if let Some(cb) = &self.on_change {
            cb(self.hue, self.saturation);
        }
        self.id.request_layout();
    }
}

impl View for ColorWheel {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<WheelUpdate>() {
            match *update {
                WheelUpdate::HueSat(h, s) => {
                    self.hue = h;
                    self.saturation = s;
                }
                WheelUpdate::Lightness(l) => self.lightness = l,
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos);
                self.emit();
                EventPropagation::Stop
            }
            Event::PointerMove(e) if self.held => {
                self.update_from_pointer(e.pos);
                self.emit();
                EventPropagation::Stop
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let disc = self.disc();
        if disc.radius <= 0.0 {
            return;
        }
        let side = disc.radius * 2.0;
        let bounds = Rect::from_center_size(disc.center, (side, side));

        let img = self.wheel_image().clone();
        cx.save();
        cx.clip(&disc);
        cx.draw_img(
            floem_renderer::Img {
                img,
                hash: &self.wheel_hash,
            },
            bounds,
        );
        cx.restore();

        if let Some((level, alpha)) = lightness_overlay(self.lightness) {
            cx.fill(&disc, Color::rgba(level, level, level, alpha), 0.0);
        }

        let cursor = self.cursor_position();
        for (offset, width, color) in CURSOR_RINGS {
            cx.stroke(
                &Circle::new(cursor, constants::CURSOR_RADIUS + offset),
                color,
                &Stroke::new(width),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(buf: &[u8], size: u32, x: u32, y: u32) -> [u8; 4] {
        let o = ((y * size + x) * 4) as usize;
        [buf[o], buf[o + 1], buf[o + 2], buf[o + 3]]
    }

    #[test]
    fn center_is_mid_gray_and_corner_is_empty() {
        let size = 64;
        let buf = rasterize_wheel_base(size);
        let [r, g, b, a] = pixel(&buf, size, 32, 32);
        assert_eq!(a, 255);
        assert!(r.abs_diff(128) <= 8 && g.abs_diff(128) <= 8 && b.abs_diff(128) <= 8);
        assert_eq!(pixel(&buf, size, 0, 0)[3], 0);
    }

    #[test]
    fn right_edge_is_red() {
        let size = 64;
        let buf = rasterize_wheel_base(size);
        let [r, g, b, a] = pixel(&buf, size, 60, 32);
        assert_eq!(a, 255);
        assert!(r > 240 && g < 30 && b < 30, "{r} {g} {b}");
    }

    #[test]
    fn hue_angle_wraps_clockwise() {
        assert_eq!(angle_to_hue(1.0, 0.0), 0.0);
        assert!((angle_to_hue(0.0, 1.0) - 0.25).abs() < 1e-12);
        assert!((angle_to_hue(0.0, -1.0) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn overlay_reproduces_hsl_lightness() {
        // Compositing the overlay over the l = 0.5 color must equal hsl_to_rgb at l.
        for &(h, s, l) in &[(200.0, 0.8, 0.2), (40.0, 0.5, 0.85), (0.0, 1.0, 0.5)] {
            let (br, bg, bb) = math::hsl_to_rgb(h, s, 0.5);
            let (er, eg, eb) = math::hsl_to_rgb(h, s, l);
            let (ov, a) = lightness_overlay(l).unwrap_or((0.0, 0.0));
            let mix = |c: f64| c * (1.0 - a) + ov * a;
            assert!((mix(br) - er).abs() < 1e-9);
            assert!((mix(bg) - eg).abs() < 1e-9);
            assert!((mix(bb) - eb).abs() < 1e-9);
        }
    }
}
