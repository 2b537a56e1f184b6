//! Import collection.

use std::collections::BTreeSet;

/// A Go package the generated code depends on.
///
/// Declaration order is emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Import {
    /// `github.com/plainkit/html`, dot-imported.
    Html,
    /// `github.com/plainkit/htmx`
    Htmx,
    /// `github.com/plainkit/alpine`
    Alpine,
}

impl Import {
    /// Package import path.
    pub fn path(self) -> &'static str {
        match self {
            Import::Html => "github.com/plainkit/html",
            Import::Htmx => "github.com/plainkit/htmx",
            Import::Alpine => "github.com/plainkit/alpine",
        }
    }

    /// Import spec as written inside an `import ( ... )` block.
    pub fn spec(self) -> String {
        match self {
            Import::Html => format!(". \"{}\"", self.path()),
            _ => format!("\"{}\"", self.path()),
        }
    }
}

/// Deduplicated set of imports, always containing the core html package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSet {
    imports: BTreeSet<Import>,
}

impl ImportSet {
    /// Create a set holding only the core import.
    pub fn new() -> Self {
        Self {
            imports: BTreeSet::from([Import::Html]),
        }
    }

    /// Record an import. Returns `true` the first time it is seen.
    pub fn insert(&mut self, import: Import) -> bool {
        self.imports.insert(import)
    }

    /// Whether `import` has been recorded.
    pub fn contains(&self, import: Import) -> bool {
        self.imports.contains(&import)
    }

    /// Imports in emission order.
    pub fn iter(&self) -> impl Iterator<Item = Import> + '_ {
        self.imports.iter().copied()
    }

    /// Import paths in emission order.
    pub fn paths(&self) -> Vec<&'static str> {
        self.iter().map(Import::path).collect()
    }
}

impl Default for ImportSet {
    fn default() -> Self {
        Self::new()
    }
}
