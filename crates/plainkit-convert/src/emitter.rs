//! Tree walker that turns DOM nodes into nested Plain calls.

use markup5ever_rcdom::{Handle, NodeData};

use crate::attributes::map_attribute;
use crate::config::ConversionConfig;
use crate::dom;
use crate::format::{inline_call, render_call};
use crate::imports::ImportSet;
use crate::literal::quote_value;
use crate::tags::resolve_tag_within;

/// Emits call expressions and records the imports they need.
///
/// One emitter serves one conversion; it never touches the tree it reads.
#[derive(Debug)]
pub struct Emitter<'a> {
    config: &'a ConversionConfig,
    imports: ImportSet,
}

/// An element whose arguments are still being collected.
struct Frame {
    tag: String,
    function: String,
    depth: usize,
    args: Vec<String>,
    children: std::vec::IntoIter<Handle>,
}

impl<'a> Emitter<'a> {
    /// Create an emitter with a fresh import set.
    pub fn new(config: &'a ConversionConfig) -> Self {
        Self {
            config,
            imports: ImportSet::new(),
        }
    }

    /// Consume the emitter, returning the collected imports.
    pub fn into_imports(self) -> ImportSet {
        self.imports
    }

    /// Convert a node rendered at indentation `depth`.
    ///
    /// Returns `None` for blank text and for node kinds with no Plain
    /// counterpart (comments, doctypes, ...).
    pub fn emit(&mut self, node: &Handle, depth: usize) -> Option<String> {
        match &node.data {
            NodeData::Element { .. } => Some(self.emit_element(node, depth)),
            NodeData::Text { contents } => text_call(&contents.borrow()),
            _ => None,
        }
    }

    /// Depth-first walk using an explicit stack, so nesting depth is bounded by
    /// heap rather than the call stack.
    fn emit_element(&mut self, root: &Handle, depth: usize) -> String {
        let mut stack = vec![self.open(root, depth, &|_: &str| false)];

        loop {
            let Some(frame) = stack.last_mut() else {
                // The root frame always completes through the branch below.
                return String::new();
            };

            match frame.children.next() {
                Some(child) => {
                    let child_depth = frame.depth + 1;
                    match &child.data {
                        NodeData::Element { .. } => {
                            let enclosing = |tag: &str| stack.iter().any(|f| f.tag == tag);
                            let opened = self.open(&child, child_depth, &enclosing);
                            stack.push(opened);
                        }
                        NodeData::Text { contents } => {
                            if let Some(code) = text_call(&contents.borrow()) {
                                frame.args.push(code);
                            }
                        }
                        _ => {}
                    }
                }
                None => {
                    let Some(done) = stack.pop() else {
                        return String::new();
                    };
                    let code = render_call(&done.function, &done.args, done.depth);
                    match stack.last_mut() {
                        Some(parent) => parent.args.push(code),
                        None => return code,
                    }
                }
            }
        }
    }

    /// Start an element: resolve its function and render its attributes.
    ///
    /// `enclosing` reports the tags of the frames already open around `node`.
    fn open(&mut self, node: &Handle, depth: usize, enclosing: &dyn Fn(&str) -> bool) -> Frame {
        let tag = dom::tag_name(node).unwrap_or_default();
        let mut args = Vec::new();

        for (key, value) in dom::attributes(node) {
            let mapped = map_attribute(&key, &value, tag, self.config);
            if let Some(import) = mapped.tier.import() {
                if self.imports.insert(import) {
                    tracing::debug!(import = import.path(), "import required");
                }
            }
            args.push(mapped.code);
        }

        Frame {
            tag: tag.to_string(),
            function: resolve_tag_within(node, enclosing),
            depth,
            args,
            children: dom::children(node).into_iter(),
        }
    }
}

/// `T("...")` for a text node, `None` when it is blank.
fn text_call(raw: &str) -> Option<String> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    Some(inline_call("T", &[&quote_value(text)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imports::Import;
    use pretty_assertions::assert_eq;

    fn emit_first(html: &str, tag: &str, config: &ConversionConfig) -> (String, ImportSet) {
        let parsed = dom::parse(html).unwrap();
        let node = dom::find_element(&parsed.document, tag).unwrap();
        let mut emitter = Emitter::new(config);
        let code = emitter.emit(&node, 1).unwrap();
        (code, emitter.into_imports())
    }

    #[test]
    fn attributes_precede_children() {
        let config = ConversionConfig::default();
        let (code, _) = emit_first(r#"<div class="container">Hello</div>"#, "div", &config);

        assert_eq!(code, r#"Div(Class("container"), T("Hello"))"#);
    }

    #[test]
    fn text_is_trimmed_and_blank_text_dropped() {
        let config = ConversionConfig::default();
        let (code, _) = emit_first(
            "<p>\n   Paragraph <strong>bold</strong> text\n</p>",
            "p",
            &config,
        );

        assert_eq!(code, r#"P(T("Paragraph"), Strong(T("bold")), T("text"))"#);
    }

    #[test]
    fn comments_are_skipped() {
        let config = ConversionConfig::default();
        let (code, _) = emit_first("<div><!-- hidden --><br></div>", "div", &config);

        assert_eq!(code, "Div(Br())");
    }

    #[test]
    fn nested_multiline_layout() {
        let config = ConversionConfig::default();
        let (code, _) = emit_first(
            "<ul><li>Item 1</li><li>Item 2</li><li>Item 3</li><li>Item 4</li></ul>",
            "ul",
            &config,
        );

        assert_eq!(
            code,
            "Ul(\n\t\tLi(T(\"Item 1\")),\n\t\tLi(T(\"Item 2\")),\n\t\tLi(T(\"Item 3\")),\n\t\tLi(T(\"Item 4\")),\n\t)"
        );
    }

    #[test]
    fn children_indent_one_level_deeper() {
        let config = ConversionConfig::default();
        let (code, _) = emit_first(
            r#"<section><div id="a" class="b" title="c" role="d"></div></section>"#,
            "section",
            &config,
        );

        assert_eq!(
            code,
            "Section(\n\t\tDiv(\n\t\t\tId(\"a\"),\n\t\t\tClass(\"b\"),\n\t\t\tTitle(\"c\"),\n\t\t\tRole(\"d\"),\n\t\t),\n\t)"
        );
    }

    #[test]
    fn records_framework_imports_once() {
        let config = ConversionConfig::new(true, true);
        let (_, imports) = emit_first(
            r##"<div hx-get="/a" hx-target="#b"><span x-show="c" hx-swap="outerHTML"></span></div>"##,
            "div",
            &config,
        );

        assert_eq!(
            imports.iter().collect::<Vec<_>>(),
            vec![Import::Html, Import::Htmx, Import::Alpine]
        );
    }

    #[test]
    fn standard_attributes_need_no_extra_import() {
        let config = ConversionConfig::new(true, true);
        let (_, imports) = emit_first(r#"<div class="a" data-x="y"></div>"#, "div", &config);

        assert_eq!(imports.iter().collect::<Vec<_>>(), vec![Import::Html]);
    }

    #[test]
    fn template_content_sees_enclosing_elements() {
        let config = ConversionConfig::default();
        let (code, _) = emit_first(
            "<form><template><label>Name</label></template></form>",
            "form",
            &config,
        );

        assert_eq!(code, r#"Form(Template(FormLabel(T("Name"))))"#);
    }

    #[test]
    fn deep_nesting_does_not_recurse() {
        let config = ConversionConfig::default();
        let depth = 1_000;
        let html = format!("{}x{}", "<span>".repeat(depth), "</span>".repeat(depth));
        let parsed = dom::parse(&html).unwrap();
        let node = dom::find_element(&parsed.document, "span").unwrap();

        let code = Emitter::new(&config).emit(&node, 0).unwrap();

        assert!(code.starts_with("Span(\n"));
        assert_eq!(code.matches("Span(").count(), depth);
    }

    #[test]
    fn blank_text_emits_nothing() {
        assert_eq!(text_call("  \n\t "), None);
        assert_eq!(text_call(" hi "), Some(r#"T("hi")"#.to_string()));
    }
}
