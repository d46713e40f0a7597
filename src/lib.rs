//! # floem-toolbox
//!
//! A small utility toolbox for [Floem](https://github.com/lapce/floem): an HSL
//! color picker with inverse color and complementary palette, a password
//! generator, and a bounded random number generator. With the `users`
//! feature the crate also ships a client for the randomuser.me service.
//!
//! The color model, parsers, palette and generators are plain functions and
//! can be used without any UI.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_toolbox::{color_picker, parse_color};
//!
//! let color = RwSignal::new(parse_color("#3b82f6").unwrap());
//! // Use `color_picker(color)` in your Floem view tree, or `toolbox()` for
//! // all three cards.
//! ```

mod card;
mod clipboard;
mod color;
mod color_editor;
mod color_wheel;
mod constants;
mod error;
#[cfg(all(feature = "eyedropper", target_os = "macos"))]
mod eyedropper;
mod inputs;
mod math;
mod number;
mod number_panel;
mod palette;
mod parse;
mod password;
mod password_panel;
mod seed_dialog;
mod slider;
#[cfg(feature = "users")]
pub mod users;

pub use clipboard::{CopyFormat, copy_text};
pub use color::{Hsla, Rgba};
#[cfg(feature = "users")]
pub use error::UserError;
pub use error::{ClipboardError, ColorError, GeneratorError, ParseColorError};
pub use number::{
    MAX_SIGNIFICANT_FIGURES, MIN_SIGNIFICANT_FIGURES, NumberOptions, format_significant,
    generate_number, generate_number_with,
};
pub use palette::{
    DEFAULT_PALETTE_SIZE, HARMONY_OFFSETS, generate_palette, is_near_grayscale,
    random_light_color, random_light_color_with,
};
pub use parse::{parse_color, parse_hex, parse_hsl, parse_rgba};
pub use password::{
    DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH, PasswordOptions, generate_password,
    generate_password_with,
};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

fn load_icons() {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
}

/// Creates the color picker card.
///
/// The picker reads from and writes to `color`. Any external changes to the
/// signal are reflected in the UI, and user edits update the signal.
pub fn color_picker(color: RwSignal<Rgba>) -> impl IntoView {
    load_icons();
    color_editor::color_editor(color)
}

/// Creates the password generator card.
pub fn password_generator() -> impl IntoView {
    load_icons();
    password_panel::password_panel()
}

/// Creates the random number generator card.
pub fn number_generator() -> impl IntoView {
    load_icons();
    number_panel::number_panel()
}

/// All three cards in a scrollable column, the picker seeded with a random
/// light color.
pub fn toolbox() -> impl IntoView {
    let color = RwSignal::new(random_light_color());
    scroll(
        v_stack((
            color_picker(color),
            password_generator(),
            number_generator(),
        ))
        .style(|s| {
            s.gap(16.0)
                .padding(constants::PADDING)
                .width_full()
                .max_width(960.0)
        }),
    )
    .style(|s| s.size_full().background(constants::PANEL_BACKGROUND))
}
