//! Sizing, color, and styling constants for the toolbox views.

use floem::peniko::Color;

/// 1D slider track height
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Cursor circle radius on the wheel
pub const CURSOR_RADIUS: f64 = 8.0;

/// Thumb radius on 1D sliders
pub const THUMB_RADIUS: f64 = 7.0;

/// Border radius for swatches and cards
pub const RADIUS: f32 = 4.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding inside a card
pub const PADDING: f32 = 12.0;

/// Side of the square wheel raster, in pixels
pub const WHEEL_RASTER_SIZE: u32 = 512;

/// Side length of the wheel view
pub const WHEEL_SIZE: f32 = 220.0;

/// Palette swatch side length
pub const SWATCH_SIZE: f32 = 36.0;

/// Height of the selected/inverse swatch bars
pub const SWATCH_BAR_HEIGHT: f32 = 32.0;

/// Input field width
pub const INPUT_WIDTH: f32 = 36.0;

/// Input font size
pub const INPUT_FONT: f32 = 12.0;

/// Label font size
pub const LABEL_FONT: f32 = 11.0;

/// Body text size
pub const TEXT_FONT: f32 = 13.0;

/// Card title size
pub const TITLE_FONT: f32 = 16.0;

/// Checkerboard cell size (for alpha backgrounds), in raster pixels
#[cfg(feature = "alpha")]
pub const CHECKER_CELL: u32 = 5;

pub const CARD_BACKGROUND: Color = Color::rgb8(31, 41, 55);
pub const PANEL_BACKGROUND: Color = Color::rgb8(17, 24, 39);
pub const BORDER: Color = Color::rgb8(75, 85, 99);
pub const TEXT: Color = Color::rgb8(243, 244, 246);
pub const MUTED_TEXT: Color = Color::rgb8(156, 163, 175);
pub const ERROR_TEXT: Color = Color::rgb8(248, 113, 113);
pub const ACCENT: Color = Color::rgb8(59, 130, 246);
pub const HOVER: Color = Color::rgb8(55, 65, 81);
