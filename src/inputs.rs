//! Shared input widgets: numeric fields, toggles, buttons, copy buttons.

use floem::event::{Event, EventListener, EventPropagation};
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::style::{CursorStyle, Style};

use crate::clipboard::{CopyFormat, copy_with_status};
use crate::color::Rgba;
use crate::constants;

/// Style shared by every text field.
pub(crate) fn field_style(s: Style) -> Style {
    s.padding(3.0)
        .font_size(constants::INPUT_FONT)
        .font_family("monospace".to_string())
        .color(constants::TEXT)
        .background(constants::PANEL_BACKGROUND)
        .border(1.0)
        .border_color(constants::BORDER)
        .border_radius(3.0)
}

/// Whether a key event is Enter.
pub(crate) fn is_enter(event: &Event) -> bool {
    matches!(event, Event::KeyDown(ke) if ke.key.logical_key == Key::Named(NamedKey::Enter))
}

/// Whether a key event is Escape.
pub(crate) fn is_escape(event: &Event) -> bool {
    matches!(event, Event::KeyDown(ke) if ke.key.logical_key == Key::Named(NamedKey::Escape))
}

/// A numeric input that maps a normalized 0.0–1.0 signal to a display range.
///
/// For example, hue maps 0.0–1.0 → 0–360, saturation maps 0.0–1.0 → 0–100.
/// The text is committed on Enter or focus loss; anything unparsable resets
/// to the current value.
pub(crate) fn number_input(
    lbl: &'static str,
    signal: RwSignal<f64>,
    max_display: f64,
) -> impl IntoView {
    let display = move |normalized: f64| format!("{}", (normalized * max_display).round() as i64);
    let text = RwSignal::new(display(signal.get_untracked()));

    // Signal → text (external updates)
    create_effect(move |_| {
        let expected = display(signal.get());
        if text.get_untracked() != expected {
            text.set(expected);
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        if let Ok(num) = raw.trim().parse::<f64>() {
            let clamped = num.clamp(0.0, max_display);
            let new_display = clamped.round() as i64;
            let old_display = (signal.get_untracked() * max_display).round() as i64;
            if new_display != old_display {
                signal.set(clamped / max_display);
            }
        }
        let formatted = display(signal.get_untracked());
        if raw != formatted {
            text.set(formatted);
        }
    };

    v_stack((
        text_input(text)
            .style(|s| field_style(s).width(constants::INPUT_WIDTH))
            .on_event_stop(EventListener::FocusLost, move |_| on_commit())
            .on_event(EventListener::KeyDown, move |e| {
                if is_enter(e) {
                    on_commit();
                    return EventPropagation::Stop;
                }
                EventPropagation::Continue
            }),
        label(move || lbl).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(constants::MUTED_TEXT)
        }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// A checkbox-style toggle bound to `checked`.
pub(crate) fn toggle(text: &'static str, checked: RwSignal<bool>) -> impl IntoView {
    h_stack((
        label(move || if checked.get() { "☑" } else { "☐" }).style(move |s| {
            s.font_size(constants::TEXT_FONT + 2.0).color(if checked.get() {
                constants::ACCENT
            } else {
                constants::MUTED_TEXT
            })
        }),
        label(move || text).style(|s| s.font_size(constants::TEXT_FONT)),
    ))
    .style(|s| {
        s.items_center()
            .gap(6.0)
            .color(constants::TEXT)
            .cursor(CursorStyle::Pointer)
    })
    .on_click_stop(move |_| checked.update(|c| *c = !*c))
}

/// Button border when not hovered: the text color at 40% of its alpha.
fn resting_border(fg: Color) -> Color {
    fg.multiply_alpha(0.4)
}

/// A text button. `fill` is the background, or the accent color when `None`.
pub(crate) fn action_button(
    text: impl Fn() -> String + 'static,
    fill: impl Fn() -> Option<(Color, Color)> + 'static,
    on_press: impl Fn() + 'static,
) -> impl IntoView {
    label(text)
        .style(move |s| {
            let (bg, fg) = fill().unwrap_or((constants::ACCENT, Color::WHITE));
            s.padding_horiz(12.0)
                .padding_vert(6.0)
                .font_size(constants::TEXT_FONT)
                .color(fg)
                .background(bg)
                .border(1.0)
                .border_color(resting_border(fg))
                .border_radius(constants::RADIUS)
                .cursor(CursorStyle::Pointer)
                .hover(move |s| s.border_color(fg))
        })
        .on_click_stop(move |_| on_press())
}

/// A small copy button that copies `color` in `format` and reports the outcome
/// to `status`.
pub(crate) fn copy_button(
    format: CopyFormat,
    color: impl Fn() -> Rgba + 'static,
    status: RwSignal<String>,
) -> impl IntoView {
    copy_text_button(move || format.render(&color()), format.label(), status)
}

/// A small copy button for arbitrary text.
pub(crate) fn copy_text_button(
    get_text: impl Fn() -> String + 'static,
    what: &'static str,
    status: RwSignal<String>,
) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                constants::TEXT
            } else {
                constants::MUTED_TEXT
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(CursorStyle::Pointer)
            .hover(|s| s.background(constants::HOVER))
    })
    .on_event_stop(EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(EventListener::PointerUp, move |_| {
        pressed.set(false);
        status.set(copy_with_status(&get_text(), what));
    })
}

/// A one-line status message; errors are drawn in red.
pub(crate) fn status_line(
    status: RwSignal<String>,
    is_error: impl Fn(&str) -> bool + 'static,
) -> impl IntoView {
    label(move || status.get()).style(move |s| {
        let text = status.get();
        s.font_size(constants::LABEL_FONT)
            .min_height(14.0)
            .color(if is_error(&text) {
                constants::ERROR_TEXT
            } else {
                constants::MUTED_TEXT
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_border_fades_only_alpha() {
        let border = resting_border(Color::rgba8(10, 20, 30, 200));
        assert_eq!((border.r, border.g, border.b), (10, 20, 30));
        assert_eq!(border.a, 80);
    }
}
