//! Titled card container and the shared result row of the generator cards.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet};

use crate::constants;
use crate::inputs::{action_button, copy_text_button};

/// A card with a header strip and padded body.
pub(crate) fn card(title: &'static str, body: impl IntoView + 'static) -> impl IntoView {
    v_stack((
        label(move || title).style(|s| {
            s.width_full()
                .padding_horiz(16.0)
                .padding_vert(8.0)
                .font_size(constants::TITLE_FONT)
                .font_weight(floem::text::Weight::SEMIBOLD)
                .background(constants::CARD_BACKGROUND)
                .border_radius(8.0)
        }),
        container(body).style(|s| s.width_full().padding(constants::PADDING)),
    ))
    .style(|s| {
        s.width_full()
            .color(constants::TEXT)
            .background(constants::PANEL_BACKGROUND)
            .border(1.0)
            .border_color(constants::CARD_BACKGROUND)
            .border_radius(8.0)
    })
}

/// Outcome of a generator: the value, or the message to show instead.
pub(crate) type Outcome = Option<Result<String, String>>;

/// "Generate" button followed by the latest outcome. Values get a copy
/// button; errors are drawn in red.
pub(crate) fn generate_row(
    outcome: RwSignal<Outcome>,
    status: RwSignal<String>,
    what: &'static str,
    on_generate: impl Fn() + 'static,
) -> impl IntoView {
    let text = move || match outcome.get() {
        Some(Ok(value)) | Some(Err(value)) => value,
        None => String::new(),
    };
    let value = move || match outcome.get() {
        Some(Ok(value)) => value,
        _ => String::new(),
    };

    h_stack((
        action_button(|| "Generate".to_string(), || None, on_generate),
        label(text).style(move |s| {
            let state = outcome.get();
            s.flex_grow(1.0)
                .padding(8.0)
                .font_family("monospace".to_string())
                .justify_center()
                .border_radius(constants::RADIUS)
                .apply_if(matches!(state, Some(Ok(_))), |s| {
                    s.background(Color::rgb8(21, 128, 61)).color(Color::WHITE)
                })
                .apply_if(matches!(state, Some(Err(_))), |s| {
                    s.color(constants::ERROR_TEXT)
                })
                .apply_if(state.is_none(), |s| s.hide())
        }),
        container(copy_text_button(value, what, status)).style(move |s| {
            s.apply_if(!matches!(outcome.get(), Some(Ok(_))), |s| s.hide())
        }),
    ))
    .style(|s| s.items_center().gap(constants::GAP).width_full())
}
