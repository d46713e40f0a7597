//! Random number generator card.

use floem::event::{EventListener, EventPropagation};
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use floem::taffy::FlexWrap;

use crate::card::{Outcome, card, generate_row};
use crate::constants;
use crate::inputs::{field_style, is_enter, status_line, toggle};
use crate::number::{MAX_SIGNIFICANT_FIGURES, MIN_SIGNIFICANT_FIGURES, NumberOptions, generate_number};

/// Parse a bound; anything unparsable becomes NaN and is reported as an
/// invalid range.
fn parse_bound(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

fn parse_figures(text: &str, fallback: u8) -> u8 {
    text.trim()
        .parse::<i64>()
        .map_or(fallback, |n| {
            n.clamp(
                i64::from(MIN_SIGNIFICANT_FIGURES),
                i64::from(MAX_SIGNIFICANT_FIGURES),
            ) as u8
        })
}

fn labeled_field(
    caption: &'static str,
    text: RwSignal<String>,
    on_enter: impl Fn() + 'static,
) -> impl IntoView {
    v_stack((
        label(move || caption).style(|s| s.font_size(constants::TEXT_FONT)),
        text_input(text)
            .style(|s| field_style(s).width_full())
            .on_event(EventListener::KeyDown, move |e| {
                if is_enter(e) {
                    on_enter();
                    return EventPropagation::Stop;
                }
                EventPropagation::Continue
            }),
    ))
    .style(|s| s.gap(4.0).flex_grow(1.0).flex_basis(0.0))
}

pub(crate) fn number_panel() -> impl IntoView {
    let defaults = NumberOptions::default();
    let min_text = RwSignal::new(defaults.min.to_string());
    let max_text = RwSignal::new(defaults.max.to_string());
    let figures_text = RwSignal::new(defaults.significant_figures.to_string());
    let allow_negative = RwSignal::new(defaults.allow_negative);
    let allow_decimals = RwSignal::new(defaults.allow_decimals);
    let outcome: RwSignal<Outcome> = RwSignal::new(None);
    let status = RwSignal::new(String::new());

    let generate = move || {
        let figures = parse_figures(&figures_text.get_untracked(), defaults.significant_figures);
        figures_text.set(figures.to_string());
        let options = NumberOptions {
            min: parse_bound(&min_text.get_untracked()),
            max: parse_bound(&max_text.get_untracked()),
            allow_negative: allow_negative.get_untracked(),
            allow_decimals: allow_decimals.get_untracked(),
            significant_figures: figures,
        };
        let result = generate_number(&options);
        if let Err(err) = &result {
            log::debug!("number generation rejected {options:?}: {err}");
        }
        outcome.set(Some(result.map_err(|e| e.to_string())));
        status.set(String::new());
    };

    let figures = h_stack((
        label(|| "Significant Figures:").style(|s| s.font_size(constants::TEXT_FONT)),
        text_input(figures_text).style(|s| field_style(s).width(48.0)),
    ))
    .style(move |s| {
        s.items_center()
            .gap(6.0)
            .apply_if(!allow_decimals.get(), |s| s.hide())
    });

    let body = v_stack((
        h_stack((
            labeled_field("Minimum:", min_text, generate),
            labeled_field("Maximum:", max_text, generate),
        ))
        .style(|s| s.gap(16.0).width_full()),
        h_stack((
            toggle("Allow Negative Numbers", allow_negative),
            toggle("Allow Decimals", allow_decimals),
            figures,
        ))
        .style(|s| s.flex_wrap(FlexWrap::Wrap).items_center().gap(16.0)),
        generate_row(outcome, status, "number", generate),
        status_line(status, |s| s.starts_with("Copy failed")),
    ))
    .style(|s| s.gap(constants::GAP).width_full());

    card("Random Number Generator", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_parse_or_become_nan() {
        assert_eq!(parse_bound(" 12.5 "), 12.5);
        assert_eq!(parse_bound("-3"), -3.0);
        assert!(parse_bound("ten").is_nan());
        assert!(parse_bound("").is_nan());
    }

    #[test]
    fn figures_are_clamped_with_fallback() {
        assert_eq!(parse_figures("4", 8), 4);
        assert_eq!(parse_figures("0", 8), 1);
        assert_eq!(parse_figures("99", 8), 20);
        assert_eq!(parse_figures("x", 8), 8);
    }
}
