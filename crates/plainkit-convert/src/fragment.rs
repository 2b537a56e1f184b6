//! Fragment unwrapping.
//!
//! The parser wraps snippets in implicit `html`/`head`/`body` containers.
//! Those are skipped and their children emitted in place.

use markup5ever_rcdom::{Handle, NodeData};

use crate::dom;
use crate::error::ConvertError;

/// Implicit containers the parser adds around a fragment.
const WRAPPERS: [&str; 3] = ["html", "head", "body"];

/// Extract the meaningful top-level nodes of a parsed fragment.
///
/// Returns elements and non-blank text nodes in document order.
pub fn meaningful_nodes(document: &Handle) -> Result<Vec<Handle>, ConvertError> {
    let top_level = dom::children(document);
    if top_level.is_empty() {
        return Err(ConvertError::NoFragmentsFound);
    }

    let mut nodes = Vec::new();
    for node in &top_level {
        unwrap_into(node, &mut nodes);
    }

    if nodes.is_empty() {
        return Err(ConvertError::NoConvertibleContent);
    }

    tracing::debug!(count = nodes.len(), "extracted fragment nodes");
    Ok(nodes)
}

/// Push `node` (or, for wrappers, its meaningful descendants) onto `out`.
fn unwrap_into(node: &Handle, out: &mut Vec<Handle>) {
    match &node.data {
        NodeData::Element { name, .. } if is_wrapper(&name.local) => {
            for child in dom::children(node) {
                unwrap_into(&child, out);
            }
        }
        NodeData::Element { .. } => out.push(node.clone()),
        NodeData::Text { contents } if !contents.borrow().trim().is_empty() => {
            out.push(node.clone());
        }
        _ => {}
    }
}

fn is_wrapper(tag: &str) -> bool {
    WRAPPERS.contains(&tag)
}
