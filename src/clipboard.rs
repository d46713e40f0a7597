//! Copy formats and the system clipboard writer.

use crate::color::Rgba;
use crate::error::ClipboardError;

/// A textual rendering offered by the copy buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyFormat {
    /// `#rrggbb` or `#rrggbbaa`.
    Hex,
    /// `rgba(r, g, b, a)`.
    Rgba,
    /// `hsl(h°, s%, l%, a)`.
    Hsl,
}

impl CopyFormat {
    /// Every format, in menu order.
    pub const ALL: [CopyFormat; 3] = [CopyFormat::Hex, CopyFormat::Rgba, CopyFormat::Hsl];

    /// Short name shown in menus and status messages.
    pub fn label(self) -> &'static str {
        match self {
            CopyFormat::Hex => "Hex",
            CopyFormat::Rgba => "RGBA",
            CopyFormat::Hsl => "HSL",
        }
    }

    /// Render `color` in this format.
    pub fn render(self, color: &Rgba) -> String {
        match self {
            CopyFormat::Hex => color.to_hex(),
            CopyFormat::Rgba => color.to_string(),
            CopyFormat::Hsl => color.to_hsla().to_string(),
        }
    }
}

/// Write `text` to the system clipboard.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Copy `text` and return the status line to show the user.
pub(crate) fn copy_with_status(text: &str, what: &str) -> String {
    match copy_text(text) {
        Ok(()) => format!("Copied {what}!"),
        Err(err) => {
            log::warn!("copy of {what} failed: {err}");
            "Copy failed!".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_each_format() {
        let c = Rgba::new(255, 0, 0, 0.5).unwrap();
        assert_eq!(CopyFormat::Hex.render(&c), "#ff000080");
        assert_eq!(CopyFormat::Rgba.render(&c), "rgba(255, 0, 0, 0.50)");
        assert_eq!(CopyFormat::Hsl.render(&c), "hsl(0°, 100%, 50%, 0.50)");
    }

    #[test]
    fn every_rendering_parses_back() {
        let c = Rgba::new(40, 90, 200, 1.0).unwrap();
        for format in CopyFormat::ALL {
            let parsed = crate::parse::parse_color(&format.render(&c)).unwrap();
            assert_eq!(parsed.to_hsla(), c.to_hsla(), "{}", format.label());
        }
    }

    #[test]
    fn labels() {
        let labels: Vec<_> = CopyFormat::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["Hex", "RGBA", "HSL"]);
    }
}
