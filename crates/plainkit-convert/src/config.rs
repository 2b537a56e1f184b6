//! Conversion options.

use serde::Deserialize;

/// Options for a single conversion.
///
/// Each flag enables one attribute family on top of the standard HTML
/// attribute table. With a flag off, attributes of that family fall through
/// to the standard tier and usually end up as `Custom(key, value)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Route `hx-*` attributes through the htmx table.
    pub htmx: bool,

    /// Route `x-*`, `@*` and `:*` attributes through the Alpine.js tables.
    pub alpine: bool,
}

impl ConversionConfig {
    /// Create a config with the given attribute families enabled.
    pub fn new(htmx: bool, alpine: bool) -> Self {
        Self { htmx, alpine }
    }

    /// Enable htmx attribute conversion.
    pub fn with_htmx(mut self) -> Self {
        self.htmx = true;
        self
    }

    /// Enable Alpine.js attribute conversion.
    pub fn with_alpine(mut self) -> Self {
        self.alpine = true;
        self
    }
}
