//! HTML to Plain Go code conversion.
//!
//! This crate turns an HTML document or fragment into Go source that rebuilds
//! the same tree with the Plain HTML library, optionally recognizing htmx and
//! Alpine.js attributes.

pub mod attributes;
pub mod classify;
pub mod config;
pub mod converter;
pub mod dom;
pub mod emitter;
pub mod error;
pub mod format;
pub mod fragment;
pub mod imports;
pub mod literal;
pub mod tags;

pub use attributes::{map_attribute, MappedAttribute, Tier};
pub use classify::{classify, DocumentKind};
pub use config::ConversionConfig;
pub use converter::{convert, Conversion, Converter, OutputKind};
pub use error::ConvertError;
pub use format::render_call;
pub use imports::{Import, ImportSet};
pub use literal::quote_value;
pub use tags::{resolve_tag, resolve_tag_within, tag_to_function};
