//! Error types

/// A color value outside its representable range.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ColorError {
    /// Alpha outside 0.0–1.0, or not finite.
    #[error("alpha {0} outside 0.0..=1.0")]
    Alpha(f64),

    /// Hue above 360 degrees.
    #[error("hue {0} outside 0..=360")]
    Hue(u16),

    /// Saturation or lightness above 100 percent.
    #[error("{component} {value} outside 0..=100")]
    Percent {
        /// Which component was rejected (`"saturation"` or `"lightness"`).
        component: &'static str,
        /// The rejected value.
        value: u8,
    },
}

/// Failure to read a color from free text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    /// Nothing but whitespace.
    #[error("empty color string")]
    Empty,

    /// Hex body is not 3, 4, 6, or 8 digits long.
    #[error("invalid hex length {0}")]
    HexLength(usize),

    /// Hex body contains a non-hex character.
    #[error("invalid hex digit")]
    HexDigit,

    /// Text does not match the `rgb()`/`rgba()` or `hsl()`/`hsla()` syntax.
    #[error("malformed {0}() color")]
    Function(&'static str),

    /// A component parsed but is out of range.
    #[error("{0} out of range")]
    OutOfRange(&'static str),
}

/// Failure of one of the random generators.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GeneratorError {
    /// Every character set is disabled.
    #[error("Please select at least one character set.")]
    EmptyCharset,

    /// Lower bound is above the upper bound after clamping.
    #[error("Invalid range.")]
    InvalidRange {
        /// Effective lower bound.
        min: f64,
        /// Effective upper bound.
        max: f64,
    },
}

/// Failure to write to the system clipboard.
#[derive(Debug, thiserror::Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(#[from] pub arboard::Error);

/// Errors from the random-user client.
#[cfg(feature = "users")]
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    /// Network error during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP response.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// JSON body did not match the expected shape.
    #[error("Response parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML body did not match the expected shape.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// XML body is malformed or did not match the expected shape.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// Endpoint could not be parsed as a URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// CSV body has a malformed or undecodable row.
    #[error("CSV row {row}: {message}")]
    Csv {
        /// One-based data row number (header excluded); 0 when unknown.
        row: usize,
        /// Description of the problem.
        message: String,
    },
}
