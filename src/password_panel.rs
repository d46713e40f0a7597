//! Password generator card.

use floem::event::{EventListener, EventPropagation};
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use floem::taffy::FlexWrap;

use crate::card::{Outcome, card, generate_row};
use crate::constants;
use crate::inputs::{field_style, is_enter, status_line, toggle};
use crate::password::{DEFAULT_LENGTH, PasswordOptions, generate_password};

pub(crate) fn password_panel() -> impl IntoView {
    let defaults = PasswordOptions::default();
    let length_text = RwSignal::new(DEFAULT_LENGTH.to_string());
    let uppercase = RwSignal::new(defaults.uppercase);
    let lowercase = RwSignal::new(defaults.lowercase);
    let digits = RwSignal::new(defaults.digits);
    let symbols = RwSignal::new(defaults.symbols);
    let outcome: RwSignal<Outcome> = RwSignal::new(None);
    let status = RwSignal::new(String::new());

    // Normalize the length field to the clamped value.
    let commit_length = move || {
        let length = PasswordOptions::length_from_input(&length_text.get_untracked());
        length_text.set(length.to_string());
        length
    };

    let generate = move || {
        let options = PasswordOptions {
            length: commit_length(),
            uppercase: uppercase.get_untracked(),
            lowercase: lowercase.get_untracked(),
            digits: digits.get_untracked(),
            symbols: symbols.get_untracked(),
        };
        outcome.set(Some(generate_password(&options).map_err(|e| e.to_string())));
        status.set(String::new());
    };

    let body = v_stack((
        label(|| "Length:").style(|s| s.font_size(constants::TEXT_FONT)),
        text_input(length_text)
            .style(|s| field_style(s).width_full())
            .on_event_stop(EventListener::FocusLost, move |_| {
                commit_length();
            })
            .on_event(EventListener::KeyDown, move |e| {
                if is_enter(e) {
                    generate();
                    return EventPropagation::Stop;
                }
                EventPropagation::Continue
            }),
        h_stack((
            toggle("Uppercase", uppercase),
            toggle("Lowercase", lowercase),
            toggle("Numbers", digits),
            toggle("Symbols", symbols),
        ))
        .style(|s| {
            s.flex_wrap(FlexWrap::Wrap)
                .gap(16.0)
                .justify_center()
                .width_full()
        }),
        generate_row(outcome, status, "password", generate),
        status_line(status, |s| s.starts_with("Copy failed")),
    ))
    .style(|s| s.gap(constants::GAP).width_full());

    card("Password Generator", body)
}
