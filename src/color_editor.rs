//! Color picker card: HSL wheel and sliders on the left; values, options,
//! swatches, and the palette on the right.
//!
//! `color` is the source of truth. The wheel and sliders edit normalized
//! h/s/l/a signals that are kept in sync with it in both directions, and
//! every displayed value is a memo over `color`.

use std::cell::Cell;
use std::rc::Rc;

use floem::menu::{Menu, MenuItem};
use floem::prelude::*;
use floem::reactive::{Memo, RwSignal, SignalGet, SignalUpdate, create_effect, create_memo};
use floem::taffy::{AlignItems, FlexWrap};
use floem::views::tooltip;

use crate::clipboard::{CopyFormat, copy_with_status};
use crate::color::Rgba;
use crate::color_wheel::color_wheel;
use crate::constants;
use crate::inputs::{action_button, copy_button, number_input, status_line, toggle};
use crate::math;
use crate::palette::{DEFAULT_PALETTE_SIZE, generate_palette};
use crate::seed_dialog::{SeedTarget, seed_dialog};
#[cfg(feature = "alpha")]
use crate::slider::alpha_slider;
use crate::slider::lightness_slider;

/// Inverse colors lighter than this get dark text on the seed button.
const LIGHT_BUTTON_LIGHTNESS: u8 = 55;

/// Picker position as a color.
fn picked(h: f64, s: f64, l: f64, a: f64) -> Rgba {
    let (r, g, b) = math::hsl_to_rgb(h * 360.0, s, l);
    Rgba::from_unit(r, g, b, a)
}

/// Swatch fill for a color, alpha included.
pub(crate) fn fill(color: Rgba) -> Color {
    Color::rgba8(color.r(), color.g(), color.b(), math::to_byte(color.a()))
}

/// Right-click menu that copies `target` in every format.
fn copy_menu(
    target: impl Fn() -> Rgba + Copy + 'static,
    status: RwSignal<String>,
) -> impl Fn() -> Menu + 'static {
    move || {
        CopyFormat::ALL.into_iter().fold(Menu::new(""), |menu, format| {
            menu.entry(
                MenuItem::new(format!("Copy {}", format.label())).action(move || {
                    status.set(copy_with_status(&format.render(&target()), format.label()));
                }),
            )
        })
    }
}

/// Hover text listing every format.
fn describe(color: Rgba) -> String {
    CopyFormat::ALL
        .iter()
        .map(|f| format!("{}: {}", f.label(), f.render(&color)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn caption(text: &'static str) -> impl IntoView {
    label(move || text).style(|s| {
        s.font_size(constants::LABEL_FONT)
            .font_weight(floem::text::Weight::MEDIUM)
    })
}

/// A wide swatch bar with a caption, copyable by right-click.
fn swatch_bar(
    title: &'static str,
    target: impl Fn() -> Rgba + Copy + 'static,
    status: RwSignal<String>,
) -> impl IntoView {
    v_stack((
        caption(title),
        tooltip(
            empty().style(move |s| {
                s.width_full()
                    .height(constants::SWATCH_BAR_HEIGHT)
                    .border(1.0)
                    .border_color(constants::BORDER)
                    .border_radius(constants::RADIUS)
                    .background(fill(target()))
            }),
            move || label(move || describe(target())),
        )
        .style(|s| s.width_full())
        .context_menu(copy_menu(target, status)),
    ))
    .style(|s| s.gap(2.0).flex_grow(1.0).flex_basis(0.0))
}

/// One palette swatch; reads entry `index` of `palette`.
fn palette_swatch(
    palette: Memo<Vec<Rgba>>,
    index: usize,
    status: RwSignal<String>,
) -> impl IntoView {
    let entry = move || palette.get().get(index).copied().unwrap_or_default();
    tooltip(
        empty().style(move |s| {
            s.size(constants::SWATCH_SIZE, constants::SWATCH_SIZE)
                .border(1.0)
                .border_color(constants::BORDER)
                .border_radius(constants::RADIUS)
                .background(fill(entry()))
        }),
        move || label(move || describe(entry())),
    )
    .style(move |s| s.apply_if(index >= palette.get().len(), |s| s.hide()))
    .context_menu(copy_menu(entry, status))
}

/// One row of the palette value table.
fn palette_row(
    palette: Memo<Vec<Rgba>>,
    index: usize,
    status: RwSignal<String>,
) -> impl IntoView {
    let entry = move || palette.get().get(index).copied().unwrap_or_default();
    let cell = move |format: CopyFormat, width: f32| {
        label(move || format.render(&entry())).style(move |s| {
            s.width(width)
                .font_family("monospace".to_string())
                .font_size(constants::LABEL_FONT)
                .justify_center()
        })
    };
    h_stack((
        container(empty().style(move |s| {
            s.size(18.0, 18.0)
                .border(1.0)
                .border_color(constants::BORDER)
                .border_radius(2.0)
                .background(fill(entry()))
        }))
        .style(|s| s.width(48.0).justify_center()),
        cell(CopyFormat::Hex, 80.0),
        cell(CopyFormat::Rgba, 150.0),
        cell(CopyFormat::Hsl, 150.0),
    ))
    .style(move |s| {
        s.items_center()
            .padding_vert(4.0)
            .border_bottom(1.0)
            .border_color(constants::BORDER)
            .hover(|s| s.background(constants::HOVER))
            .apply_if(index >= palette.get().len(), |s| s.hide())
    })
    .context_menu(copy_menu(entry, status))
}

fn palette_table(palette: Memo<Vec<Rgba>>, status: RwSignal<String>) -> impl IntoView {
    let head = |text: &'static str, width: f32| {
        label(move || text).style(move |s| {
            s.width(width)
                .font_size(constants::LABEL_FONT)
                .font_weight(floem::text::Weight::MEDIUM)
                .justify_center()
        })
    };
    v_stack((
        h_stack((
            head("Swatch", 48.0),
            head("Hex", 80.0),
            head("RGBA", 150.0),
            head("HSL", 150.0),
        ))
        .style(|s| s.padding_vert(4.0).border_bottom(1.0).border_color(constants::BORDER)),
        v_stack_from_iter((0..DEFAULT_PALETTE_SIZE).map(move |i| palette_row(palette, i, status))),
    ))
    .style(|s| {
        s.padding(8.0)
            .background(constants::CARD_BACKGROUND)
            .border_radius(6.0)
            .align_self(Some(AlignItems::Center))
    })
}

/// Creates the color picker card around `color`.
pub(crate) fn color_editor(color: RwSignal<Rgba>) -> impl IntoView {
    let start = color.get_untracked();
    let (r0, g0, b0) = start.to_unit();
    let (h0, s0, l0) = math::rgb_to_hsl(r0, g0, b0);
    let h = RwSignal::new(h0 / 360.0);
    let s = RwSignal::new(s0);
    let l = RwSignal::new(l0);
    let a = RwSignal::new(start.a());

    let show_inverse = RwSignal::new(false);
    let show_palette = RwSignal::new(false);
    let show_values = RwSignal::new(false);
    let dialog_open = RwSignal::new(false);
    let status = RwSignal::new(String::new());

    // Set while the picker signals are being written from `color`.
    let syncing = Rc::new(Cell::new(false));

    // Picker → color
    let guard = syncing.clone();
    create_effect(move |_| {
        let next = picked(h.get(), s.get(), l.get(), a.get());
        if guard.get() {
            return;
        }
        if color.get_untracked() != next {
            color.set(next);
        }
    });

    // External color → picker
    let guard = syncing;
    create_effect(move |_| {
        let c = color.get();
        let current = picked(
            h.get_untracked(),
            s.get_untracked(),
            l.get_untracked(),
            a.get_untracked(),
        );
        if current == c {
            return;
        }
        let (r, g, b) = c.to_unit();
        let (hd, sv, lv) = math::rgb_to_hsl(r, g, b);
        guard.set(true);
        // Grays keep the last hue so the wheel cursor does not jump.
        if sv > 0.0 {
            h.set(hd / 360.0);
        }
        s.set(sv);
        l.set(lv);
        a.set(c.a());
        guard.set(false);
    });

    let inverse = create_memo(move |_| color.get().inverted());
    let palette = create_memo(move |_| generate_palette(color.get(), DEFAULT_PALETTE_SIZE));
    let current = move || color.get();
    let inverse_color = move || inverse.get();

    let controls = v_stack((
        color_wheel(h, s, l).context_menu(copy_menu(current, status)),
        lightness_slider(h, s, l).style(|s| s.width_full()),
        #[cfg(feature = "alpha")]
        alpha_slider(a, move || picked(h.get(), s.get(), l.get(), 1.0).to_unit())
            .style(|s| s.width_full()),
        h_stack((
            number_input("H", h, 360.0),
            number_input("S", s, 100.0),
            number_input("L", l, 100.0),
            #[cfg(feature = "alpha")]
            number_input("A", a, 100.0),
        ))
        .style(|s| s.gap(constants::GAP / 2.0).justify_center()),
    ))
    .style(|s| s.gap(constants::GAP).width(constants::WHEEL_SIZE));

    let info = v_stack_from_iter(CopyFormat::ALL.into_iter().map(move |format| {
        h_stack((
            label(move || format!("{}:", format.label()))
                .style(|s| s.width(44.0).color(constants::MUTED_TEXT)),
            label(move || format.render(&color.get()))
                .style(|s| s.font_family("monospace".to_string())),
            copy_button(format, current, status),
        ))
        .style(|s| s.items_center().gap(6.0).font_size(constants::TEXT_FONT))
    }))
    .style(|s| s.gap(4.0).flex_grow(1.0));

    let options = v_stack((
        action_button(
            || "Seed/Pick Color".to_string(),
            move || {
                let inv = inverse.get();
                let text = if inv.to_hsla().l() > LIGHT_BUTTON_LIGHTNESS {
                    Color::BLACK
                } else {
                    Color::WHITE
                };
                Some((fill(inv), text))
            },
            move || dialog_open.set(true),
        ),
        toggle("Inverse Color", show_inverse),
        toggle("Complementary Palette", show_palette),
    ))
    .style(|s| s.gap(6.0).items_start());

    let swatches = h_stack((
        swatch_bar("Selected Color:", current, status),
        container(swatch_bar("Inverse Color:", inverse_color, status)).style(move |s| {
            s.flex_grow(1.0)
                .flex_basis(0.0)
                .apply_if(!show_inverse.get(), |s| s.hide())
        }),
    ))
    .style(|s| s.gap(6.0).width_full());

    let palette_section = v_stack((
        h_stack((
            caption("Complementary Palette:"),
            empty().style(|s| s.flex_grow(1.0)),
            toggle("Show Values", show_values),
        ))
        .style(|s| s.items_center()),
        h_stack_from_iter(
            (0..DEFAULT_PALETTE_SIZE).map(move |i| palette_swatch(palette, i, status)),
        )
        .style(|s| {
            s.gap(6.0)
                .flex_wrap(FlexWrap::Wrap)
                .align_self(Some(AlignItems::Center))
        }),
        container(palette_table(palette, status))
            .style(move |s| s.width_full().apply_if(!show_values.get(), |s| s.hide())),
    ))
    .style(move |s| {
        s.gap(6.0)
            .width_full()
            .apply_if(!show_palette.get(), |s| s.hide())
    });

    let details = v_stack((
        h_stack((info, options)).style(|s| s.gap(constants::GAP).width_full()),
        label(|| "Right-click swatches or table rows to copy color values.").style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(constants::MUTED_TEXT)
                .align_self(Some(AlignItems::Center))
        }),
        swatches,
        palette_section,
        status_line(status, |s| s.starts_with("Copy failed")),
    ))
    .style(|s| s.gap(constants::GAP).flex_grow(1.0).min_width(320.0));

    let target = SeedTarget {
        color,
        show_inverse,
        show_palette,
    };

    stack((
        h_stack((controls, details))
            .style(|s| s.gap(12.0).width_full().flex_wrap(FlexWrap::Wrap)),
        seed_dialog(dialog_open, target),
    ))
    .style(|s| s.width_full())
}
