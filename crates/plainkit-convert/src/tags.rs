//! Tag name to Plain function name resolution.

use markup5ever_rcdom::Handle;

use crate::dom;

/// Resolve the Plain function for an element.
///
/// `title` and `label` depend on their ancestors; every other tag is a pure
/// function of its name.
pub fn resolve_tag(handle: &Handle) -> String {
    resolve_tag_within(handle, &|_: &str| false)
}

/// Resolve the Plain function for an element nested in elements the caller
/// has already opened.
///
/// `enclosing` answers whether an open element has the given tag. It covers
/// `<template>` content, which is detached from the template in the tree.
pub fn resolve_tag_within(handle: &Handle, enclosing: &dyn Fn(&str) -> bool) -> String {
    let Some(tag) = dom::tag_name(handle) else {
        return String::new();
    };
    let inside = |ancestor: &str| enclosing(ancestor) || dom::has_ancestor(handle, ancestor);

    match tag {
        "title" if inside("head") => "HeadTitle".to_string(),
        "label" if inside("form") => "FormLabel".to_string(),
        _ => tag_to_function(tag),
    }
}

/// Context-free mapping from tag name to function name.
pub fn tag_to_function(tag: &str) -> String {
    match special_tag(tag) {
        Some(name) => name.to_string(),
        None => capitalize(tag),
    }
}

/// Tags whose function name is fixed rather than derived.
fn special_tag(tag: &str) -> Option<&'static str> {
    let name = match tag {
        "a" => "A",
        "b" => "B",
        "i" => "I",
        "p" => "P",
        "br" => "Br",
        "hr" => "Hr",
        "h1" => "H1",
        "h2" => "H2",
        "h3" => "H3",
        "h4" => "H4",
        "h5" => "H5",
        "h6" => "H6",
        "ul" => "Ul",
        "ol" => "Ol",
        "li" => "Li",
        "dl" => "Dl",
        "dt" => "Dt",
        "dd" => "Dd",
        "em" => "Em",
        "abbr" => "Abbr",
        "kbd" => "Kbd",
        "var" => "Var",
        "dfn" => "Dfn",
        "del" => "Del",
        "ins" => "Ins",
        "sub" => "Sub",
        "sup" => "Sup",
        "col" => "Col",
        "colgroup" => "ColGroup",
        "tbody" => "Tbody",
        "thead" => "Thead",
        "tfoot" => "Tfoot",
        "tr" => "Tr",
        "td" => "Td",
        "th" => "Th",
        "fieldset" => "Fieldset",
        "legend" => "Legend",
        "datalist" => "Datalist",
        "optgroup" => "OptGroup",
        "textarea" => "Textarea",
        "blockquote" => "Blockquote",
        "figcaption" => "Figcaption",
        "title" => "Title",
        "label" => "Label",
        _ => return None,
    };
    Some(name)
}

/// Upper-case the first character, leave the rest alone.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
