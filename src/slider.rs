//! Horizontal 1D sliders: lightness (0.0–1.0) and alpha (0.0–1.0).
//!
//! The track is rasterized to an image rather than drawn as a gradient, so
//! the lightness ramp follows HSL exactly and the alpha ramp can be composited
//! over a checkerboard in the same pass.

use std::sync::Arc;

use floem::kurbo::{Circle, Rect, Stroke};
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

/// What the track shows. Left end is value 0.0, right end is 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Track {
    /// Black through the hue at full lightness to white.
    Lightness { hue: f64, saturation: f64 },
    /// The color fading in over a checkerboard.
    #[cfg(feature = "alpha")]
    Alpha { r: f64, g: f64, b: f64 },
}

impl Track {
    /// Color at position `t` (0.0–1.0) and raster pixel `(px, py)`, as
    /// normalized RGB.
    #[cfg_attr(not(feature = "alpha"), allow(unused_variables))]
    fn sample(&self, t: f64, px: u32, py: u32, cell: u32) -> (f64, f64, f64) {
        match *self {
            Track::Lightness { hue, saturation } => math::hsl_to_rgb(hue * 360.0, saturation, t),
            #[cfg(feature = "alpha")]
            Track::Alpha { r, g, b } => {
                let bg = checker(px, py, cell);
                let mix = |c: f64| c * t + bg * (1.0 - t);
                (mix(r), mix(g), mix(b))
            }
        }
    }
}

/// Light or dark checker level at a raster pixel.
#[cfg(feature = "alpha")]
fn checker(px: u32, py: u32, cell: u32) -> f64 {
    let cell = cell.max(1);
    if (px / cell + py / cell) % 2 == 0 {
        1.0
    } else {
        0.8
    }
}

/// Thumb rings as (inset from the thumb radius, stroke width, color).
const THUMB_RINGS: [(f64, f64, Color); 3] = [
    (0.0, 1.0, Color::rgba8(0, 0, 0, 80)),
    (1.5, 2.0, Color::WHITE),
    (3.0, 1.0, Color::rgba8(0, 0, 0, 80)),
];

/// Rasterize `track` into an opaque RGBA8 buffer.
fn rasterize_track(track: &Track, width: u32, height: u32, cell: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for px in 0..width {
        let t = px as f64 / (width - 1).max(1) as f64;
        for py in 0..height {
            let (r, g, b) = track.sample(t, px, py, cell);
            let offset = ((py * width + px) * 4) as usize;
            buf[offset] = math::to_byte(r);
            buf[offset + 1] = math::to_byte(g);
            buf[offset + 2] = math::to_byte(b);
            buf[offset + 3] = 255;
        }
    }
    buf
}

enum SliderUpdate {
    Value(f64),
    Track(Track),
}

pub(crate) struct TrackSlider {
    id: ViewId,
    held: bool,
    value: f64,
    track: Track,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(f64)>,
    img: Option<peniko::Image>,
    img_hash: Vec<u8>,
    cached: Option<(Track, u32, u32)>,
}

/// Lightness slider for the given hue and saturation.
pub(crate) fn lightness_slider(
    hue: RwSignal<f64>,
    saturation: RwSignal<f64>,
    lightness: RwSignal<f64>,
) -> TrackSlider {
    track_slider(lightness, move || Track::Lightness {
        hue: hue.get(),
        saturation: saturation.get(),
    })
}

/// Alpha slider over the normalized RGB returned by `base_color`.
#[cfg(feature = "alpha")]
pub(crate) fn alpha_slider(
    alpha: RwSignal<f64>,
    base_color: impl Fn() -> (f64, f64, f64) + 'static,
) -> TrackSlider {
    track_slider(alpha, move || {
        let (r, g, b) = base_color();
        Track::Alpha { r, g, b }
    })
}

fn track_slider(value: RwSignal<f64>, track: impl Fn() -> Track + 'static) -> TrackSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        id.update_state(SliderUpdate::Value(value.get()));
    });

    let initial = track();
    create_effect(move |_| {
        id.update_state(SliderUpdate::Track(track()));
    });

    TrackSlider {
        id,
        held: false,
        value: value.get_untracked(),
        track: initial,
        size: Default::default(),
        on_change: Box::new(move |v| value.set(v)),
        img: None,
        img_hash: Vec::new(),
        cached: None,
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl TrackSlider {
    fn update_from_pointer(&mut self, x: f64) {
        let r = constants::THUMB_RADIUS;
        let usable = self.size.width as f64 - 2.0 * r;
        if usable > 0.0 {
            self.value = ((x - r) / usable).clamp(0.0, 1.0);
        }
    }

    fn ensure_track_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }
        if self.cached == Some((self.track, pw, ph)) {
            return;
        }

        let cell = checker_cell(s);
        let pixels = rasterize_track(&self.track, pw, ph, cell);
        let blob = Blob::new(Arc::new(pixels));
        self.img_hash = blob.id().to_le_bytes().to_vec();
        self.img = Some(peniko::Image::new(blob, peniko::Format::Rgba8, pw, ph));
        self.cached = Some((self.track, pw, ph));
    }
}

#[cfg(feature = "alpha")]
fn checker_cell(scale: f64) -> u32 {
    (constants::CHECKER_CELL as f64 * scale).round() as u32
}

#[cfg(not(feature = "alpha"))]
fn checker_cell(_scale: f64) -> u32 {
    1
}

impl View for TrackSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SliderUpdate>() {
            match *update {
                SliderUpdate::Value(v) => self.value = v,
                SliderUpdate::Track(track) => self.track = track,
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                (self.on_change)(self.value);
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) if self.held => {
                self.update_from_pointer(e.pos.x);
                (self.on_change)(self.value);
                self.id.request_layout();
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
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        cx.save();
        cx.clip(&rrect);
        let scale = cx.scale();
        self.ensure_track_image(scale);
        if let Some(ref img) = self.img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.img_hash,
                },
                rect,
            );
        }
        cx.restore();

        cx.stroke(&rrect, Color::rgba8(0, 0, 0, 40), &Stroke::new(1.0));

        let radius = constants::THUMB_RADIUS;
        let thumb = (radius + self.value * (w - 2.0 * radius), h / 2.0);
        for (inset, width, color) in THUMB_RINGS {
            cx.stroke(&Circle::new(thumb, radius - inset), color, &Stroke::new(width));
        }
    }
}
