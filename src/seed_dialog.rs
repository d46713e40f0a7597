//! Seed dialog: set the picker color from text or the screen sampler.

use floem::event::{EventListener, EventPropagation};
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::style::CursorStyle;

use crate::color::Rgba;
use crate::constants;
use crate::inputs::{action_button, field_style, is_enter, is_escape, toggle};
use crate::parse::parse_color;

/// Where an accepted seed is written.
#[derive(Clone, Copy)]
pub(crate) struct SeedTarget {
    pub color: RwSignal<Rgba>,
    pub show_inverse: RwSignal<bool>,
    pub show_palette: RwSignal<bool>,
}

/// Dialog state, reset every time it opens.
#[derive(Clone, Copy)]
struct DialogState {
    open: RwSignal<bool>,
    text: RwSignal<String>,
    error: RwSignal<Option<String>>,
    show_inverse: RwSignal<bool>,
    show_palette: RwSignal<bool>,
}

impl DialogState {
    fn submit(self, target: SeedTarget, color: Rgba) {
        target.color.set(color);
        target.show_inverse.set(self.show_inverse.get_untracked());
        target.show_palette.set(self.show_palette.get_untracked());
        self.open.set(false);
    }

    fn apply_text(self, target: SeedTarget) {
        let input = self.text.get_untracked();
        match parse_color(&input) {
            Ok(color) => {
                self.error.set(None);
                self.submit(target, color);
            }
            Err(err) => {
                log::debug!("rejected seed {input:?}: {err}");
                self.error.set(Some(format!("Invalid color format: \"{input}\"")));
            }
        }
    }
}

/// Overlay shown while `open` is set.
pub(crate) fn seed_dialog(open: RwSignal<bool>, target: SeedTarget) -> impl IntoView {
    let state = DialogState {
        open,
        text: RwSignal::new(String::new()),
        error: RwSignal::new(None),
        show_inverse: RwSignal::new(target.show_inverse.get_untracked()),
        show_palette: RwSignal::new(target.show_palette.get_untracked()),
    };

    create_effect(move |_| {
        if open.get() {
            state.text.set(String::new());
            state.error.set(None);
            state.show_inverse.set(target.show_inverse.get_untracked());
            state.show_palette.set(target.show_palette.get_untracked());
        }
    });

    let header = h_stack((
        label(|| "Set Seed Color").style(|s| {
            s.font_size(constants::TITLE_FONT)
                .font_weight(floem::text::Weight::SEMIBOLD)
        }),
        empty().style(|s| s.flex_grow(1.0)),
        label(|| "×")
            .style(|s| {
                s.font_size(20.0)
                    .color(constants::MUTED_TEXT)
                    .cursor(CursorStyle::Pointer)
                    .hover(|s| s.color(constants::TEXT))
            })
            .on_click_stop(move |_| open.set(false)),
    ))
    .style(|s| s.items_center());

    let input = v_stack((
        label(|| "Enter Color (Hex, RGBA, HSL):")
            .style(|s| s.font_size(constants::TEXT_FONT).color(constants::MUTED_TEXT)),
        text_input(state.text)
            .placeholder("#dddd27 or rgba(221, 221, 39, 1) or hsl(60, 73%, 51%)")
            .style(move |s| {
                let invalid = state.error.get().is_some();
                field_style(s)
                    .width_full()
                    .apply_if(invalid, |s| s.border_color(constants::ERROR_TEXT))
            })
            .on_event(EventListener::KeyDown, move |e| {
                if is_enter(e) {
                    state.apply_text(target);
                    return EventPropagation::Stop;
                }
                EventPropagation::Continue
            }),
        label(move || state.error.get().unwrap_or_default()).style(move |s| {
            s.font_size(constants::LABEL_FONT)
                .color(constants::ERROR_TEXT)
                .apply_if(state.error.get().is_none(), |s| s.hide())
        }),
    ))
    .style(|s| s.gap(4.0).width_full());

    let options = v_stack((
        label(|| "Options on Submit:")
            .style(|s| s.font_size(constants::LABEL_FONT).color(constants::MUTED_TEXT)),
        toggle("Show Inverse Color", state.show_inverse),
        toggle("Show Complementary Palette", state.show_palette),
    ))
    .style(|s| {
        s.gap(6.0)
            .padding(8.0)
            .border(1.0)
            .border_color(constants::BORDER)
            .border_radius(constants::RADIUS)
    });

    let buttons = h_stack((
        empty().style(|s| s.flex_grow(1.0)),
        action_button(
            || "Cancel".to_string(),
            || Some((constants::HOVER, constants::TEXT)),
            move || open.set(false),
        ),
        action_button(|| "Apply".to_string(), || None, move || state.apply_text(target)),
    ))
    .style(|s| s.gap(constants::GAP));

    let panel = v_stack((header, input, eyedropper_row(state, target), options, buttons))
        .style(|s| {
            s.gap(12.0)
                .padding(16.0)
                .width(380.0)
                .color(constants::TEXT)
                .background(constants::CARD_BACKGROUND)
                .border(1.0)
                .border_color(constants::BORDER)
                .border_radius(8.0)
        })
        .on_click_stop(|_| {});

    container(panel)
        .style(move |s| {
            s.absolute()
                .inset(0.0)
                .z_index(10)
                .items_center()
                .justify_center()
                .background(Color::rgba8(0, 0, 0, 150))
                .apply_if(!open.get(), |s| s.hide())
        })
        .on_click_stop(move |_| open.set(false))
        .on_event(EventListener::KeyDown, move |e| {
            if is_escape(e) {
                open.set(false);
                return EventPropagation::Stop;
            }
            EventPropagation::Continue
        })
}

#[cfg(all(feature = "eyedropper", target_os = "macos"))]
fn eyedropper_row(state: DialogState, target: SeedTarget) -> impl IntoView {
    use crate::eyedropper;

    if eyedropper::is_available() {
        action_button(
            || "Use Eyedropper (Screen-wide)".to_string(),
            || None,
            move || eyedropper::sample_color(move |picked| state.submit(target, picked)),
        )
        .into_any()
    } else {
        eyedropper_unavailable().into_any()
    }
}

#[cfg(not(all(feature = "eyedropper", target_os = "macos")))]
fn eyedropper_row(_state: DialogState, _target: SeedTarget) -> impl IntoView {
    eyedropper_unavailable()
}

fn eyedropper_unavailable() -> impl IntoView {
    label(|| "Screen-wide eyedropper is not available on this platform.").style(|s| {
        s.font_size(constants::LABEL_FONT)
            .font_style(floem::text::Style::Italic)
            .color(constants::MUTED_TEXT)
            .padding(6.0)
            .width_full()
            .justify_center()
            .border(1.0)
            .border_color(constants::BORDER)
            .border_radius(constants::RADIUS)
    })
}
