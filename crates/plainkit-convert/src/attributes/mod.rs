//! Attribute to Plain option mapping.
//!
//! Attributes go through three tiers in order: htmx, Alpine.js, then the
//! standard HTML table. The first tier that claims a key renders it. The
//! standard tier ends in `Custom(key, value)`, so no attribute is dropped.

pub mod alpine;
pub mod htmx;
pub mod standard;

use crate::config::ConversionConfig;
use crate::format::inline_call;
use crate::imports::Import;
use crate::literal::quote_value;

/// Which tier rendered an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Htmx,
    Alpine,
    Standard,
}

impl Tier {
    /// Import required by attributes routed through this tier.
    pub fn import(self) -> Option<Import> {
        match self {
            Tier::Htmx => Some(Import::Htmx),
            Tier::Alpine => Some(Import::Alpine),
            Tier::Standard => None,
        }
    }
}

/// A rendered attribute call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedAttribute {
    /// Tier that claimed the attribute
    pub tier: Tier,
    /// Go call expression, e.g. `Class("container")`
    pub code: String,
}

/// Map one attribute of element `tag` to a call expression.
pub fn map_attribute(
    key: &str,
    value: &str,
    tag: &str,
    config: &ConversionConfig,
) -> MappedAttribute {
    let (tier, code) = if config.htmx && htmx::claims(key) {
        (Tier::Htmx, htmx::convert(key, value))
    } else if config.alpine && alpine::claims(key) {
        (Tier::Alpine, alpine::convert(key, value))
    } else {
        (Tier::Standard, standard::convert(key, value, tag))
    };

    tracing::trace!(key, ?tier, %code, "mapped attribute");
    MappedAttribute { tier, code }
}

/// `Custom("key", "value")`, the catch-all for unrecognized attributes.
pub(crate) fn custom(key: &str, value: &str) -> String {
    inline_call("Custom", &[&quote_value(key), &quote_value(value)])
}
