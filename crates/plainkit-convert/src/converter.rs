//! HTML to Plain conversion entry points.

use markup5ever_rcdom::Handle;

use crate::classify::{classify, DocumentKind};
use crate::config::ConversionConfig;
use crate::dom;
use crate::emitter::Emitter;
use crate::error::ConvertError;
use crate::format::{component_function, components_function, module_header, page_function};
use crate::fragment::meaningful_nodes;
use crate::imports::ImportSet;

/// Which function the generated module exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// `func Page() Node` for a full document
    Page,
    /// `func Component() Node` for a single fragment
    Component,
    /// `func Components() []Node` holding this many fragments
    Components(usize),
}

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Complete Go source file
    pub source: String,

    /// Shape of the generated function
    pub kind: OutputKind,

    /// Import paths in emission order
    pub imports: Vec<&'static str>,
}

/// Converts HTML into Go code built on the Plain HTML library.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConversionConfig,
}

impl Converter {
    /// Create a converter with the given options.
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Convert an HTML document or fragment.
    ///
    /// Each call starts from a fresh import set, so one converter can be
    /// shared across threads and inputs.
    pub fn convert(&self, html: &str) -> Result<Conversion, ConvertError> {
        let html = html.trim();
        let kind = classify(html);
        tracing::debug!(?kind, len = html.len(), "classified input");

        match kind {
            DocumentKind::FullPage => self.convert_full_page(html),
            DocumentKind::Fragment => self.convert_fragment(html),
        }
    }

    fn convert_full_page(&self, html: &str) -> Result<Conversion, ConvertError> {
        let parsed = dom::parse(html)?;
        let root = dom::find_element(&parsed.document, "html").ok_or(ConvertError::NoRootFound)?;

        let mut emitter = Emitter::new(&self.config);
        let body = emitter.emit(&root, 1).unwrap_or_default();

        Ok(assemble(emitter.into_imports(), OutputKind::Page, &page_function(&body)))
    }

    fn convert_fragment(&self, html: &str) -> Result<Conversion, ConvertError> {
        let parsed = dom::parse(html)?;
        let nodes = meaningful_nodes(&parsed.document)?;

        let mut emitter = Emitter::new(&self.config);

        let (kind, function) = if let [node] = nodes.as_slice() {
            let body = emitter.emit(node, 1).unwrap_or_default();
            (OutputKind::Component, component_function(&body))
        } else {
            let bodies = emit_all(&mut emitter, &nodes, 2);
            (OutputKind::Components(bodies.len()), components_function(&bodies))
        };

        Ok(assemble(emitter.into_imports(), kind, &function))
    }
}

fn emit_all(emitter: &mut Emitter<'_>, nodes: &[Handle], depth: usize) -> Vec<String> {
    nodes
        .iter()
        .filter_map(|node| emitter.emit(node, depth))
        .collect()
}

fn assemble(imports: ImportSet, kind: OutputKind, function: &str) -> Conversion {
    let mut source = module_header(&imports);
    source.push('\n');
    source.push_str(function);

    tracing::debug!(?kind, imports = imports.iter().count(), "generated module");

    Conversion {
        source,
        kind,
        imports: imports.paths(),
    }
}

/// Convert `html` with `config`, returning only the generated source.
pub fn convert(html: &str, config: ConversionConfig) -> Result<String, ConvertError> {
    Converter::new(config).convert(html).map(|c| c.source)
}
