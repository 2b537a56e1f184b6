//! Thin layer over the html5ever `RcDom`.
//!
//! The parser owns the tree top-down; parents are weak back-references that
//! are only read for ancestor lookups.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::error::ConvertError;

/// Parse text into a document tree.
///
/// Fragments go through the same entry point with no context element, so the
/// parser wraps them in implicit `html`, `head` and `body` containers.
pub fn parse(source: &str) -> Result<RcDom, ConvertError> {
    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut source.as_bytes())
        .map_err(|e| ConvertError::Parse(e.to_string()))
}

/// Tag name of an element, `None` for every other node kind.
pub fn tag_name(handle: &Handle) -> Option<&str> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// Attributes of an element in source order.
pub fn attributes(handle: &Handle) -> Vec<(String, String)> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .map(|a| (a.name.local.to_string(), a.value.to_string()))
            .collect(),
        _ => Vec::new(),
    }
}

/// Children in document order.
///
/// `<template>` content lives in a separate fragment node; it is returned in
/// place of the (always empty) direct child list.
pub fn children(handle: &Handle) -> Vec<Handle> {
    if let NodeData::Element {
        template_contents, ..
    } = &handle.data
    {
        if let Some(contents) = template_contents.borrow().as_ref() {
            return contents.children.borrow().clone();
        }
    }
    handle.children.borrow().clone()
}

/// Parent of a node, if it is still attached.
pub fn parent(handle: &Handle) -> Option<Handle> {
    // The cell holds a non-Copy weak handle: take it out and put it back.
    let weak = handle.parent.take()?;
    let parent = weak.upgrade();
    handle.parent.set(Some(weak));
    parent
}

/// Whether any ancestor of `handle` is an element named `tag`.
pub fn has_ancestor(handle: &Handle, tag: &str) -> bool {
    let mut current = parent(handle);
    while let Some(node) = current {
        if tag_name(&node) == Some(tag) {
            return true;
        }
        current = parent(&node);
    }
    false
}

/// First element named `tag` in document order.
pub fn find_element(root: &Handle, tag: &str) -> Option<Handle> {
    let mut stack = vec![root.clone()];
    while let Some(node) = stack.pop() {
        if tag_name(&node) == Some(tag) {
            return Some(node);
        }
        // Reverse so the first child is popped first.
        stack.extend(children(&node).into_iter().rev());
    }
    None
}
