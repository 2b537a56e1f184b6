//! Call expression layout and Go module assembly.

use crate::imports::ImportSet;

/// Calls with more arguments than this are always split across lines.
const MAX_INLINE_ARGS: usize = 3;

/// Calls whose single-line argument list is longer than this many bytes are
/// split.
const MAX_INLINE_WIDTH: usize = 80;

/// Render a call, choosing single-line or one-argument-per-line layout.
///
/// `depth` is the indentation level (in tabs) of the line the call starts on.
pub fn render_call(name: &str, args: &[String], depth: usize) -> String {
    if args.is_empty() {
        return format!("{name}()");
    }

    let inline = args.join(", ");
    let multiline = args.len() > MAX_INLINE_ARGS
        || inline.len() > MAX_INLINE_WIDTH
        || args.iter().any(|a| a.contains('\n'));

    if !multiline {
        return format!("{name}({inline})");
    }

    let mut out = format!("{name}(\n");
    let arg_indent = indent(depth + 1);
    for arg in args {
        out.push_str(&arg_indent);
        out.push_str(arg);
        out.push_str(",\n");
    }
    out.push_str(&indent(depth));
    out.push(')');
    out
}

/// Render an attribute-style call that always stays on one line.
pub fn inline_call(name: &str, args: &[&str]) -> String {
    format!("{name}({})", args.join(", "))
}

fn indent(depth: usize) -> String {
    "\t".repeat(depth)
}

/// Header and import block shared by every output.
pub fn module_header(imports: &ImportSet) -> String {
    let mut out = String::from("package main\n\nimport (\n");
    for import in imports.iter() {
        out.push('\t');
        out.push_str(&import.spec());
        out.push('\n');
    }
    out.push_str(")\n");
    out
}

/// `func Page() Node` wrapping a full document.
pub fn page_function(body: &str) -> String {
    format!("func Page() Node {{\n\treturn {body}\n}}\n")
}

/// `func Component() Node` wrapping a single fragment.
pub fn component_function(body: &str) -> String {
    format!("func Component() Node {{\n\treturn {body}\n}}\n")
}

/// `func Components() []Node` wrapping several fragments.
pub fn components_function(bodies: &[String]) -> String {
    let mut out = String::from("func Components() []Node {\n\treturn []Node{\n");
    for body in bodies {
        out.push_str("\t\t");
        out.push_str(body);
        out.push_str(",\n");
    }
    out.push_str("\t}\n}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_call() {
        assert_eq!(render_call("Br", &[], 1), "Br()");
    }

    #[test]
    fn short_calls_stay_inline() {
        let rendered = render_call("Div", &args(&[r#"Class("a")"#, r#"T("b")"#]), 1);
        assert_eq!(rendered, r#"Div(Class("a"), T("b"))"#);
    }

    #[test]
    fn more_than_three_args_split() {
        let rendered = render_call("Ul", &args(&["A()", "B()", "C()", "D()"]), 1);
        assert_eq!(rendered, "Ul(\n\t\tA(),\n\t\tB(),\n\t\tC(),\n\t\tD(),\n\t)");
    }

    #[test]
    fn three_args_stay_inline() {
        let rendered = render_call("Ul", &args(&["A()", "B()", "C()"]), 1);
        assert_eq!(rendered, "Ul(A(), B(), C())");
    }

    #[test]
    fn wide_calls_split() {
        let long = format!("T(\"{}\")", "x".repeat(80));
        let rendered = render_call("P", &[long.clone()], 0);
        assert_eq!(rendered, format!("P(\n\t{long},\n)"));
    }

    #[test]
    fn width_counts_the_joined_form() {
        // 2 x 39 characters plus the separator is 80: still inline.
        let a = format!("T(\"{}\")", "a".repeat(34));
        let b = format!("T(\"{}\")", "b".repeat(34));
        assert_eq!(a.len() + b.len() + 2, 80);
        let rendered = render_call("P", &[a.clone(), b.clone()], 0);
        assert_eq!(rendered, format!("P({a}, {b})"));
    }

    #[test]
    fn width_counts_bytes() {
        // 32 chars, 86 bytes.
        let wide = format!("T(\"{}\")", "€".repeat(27));
        assert!(wide.chars().count() <= MAX_INLINE_WIDTH);
        assert!(wide.len() > MAX_INLINE_WIDTH);

        let rendered = render_call("P", &[wide.clone()], 0);
        assert_eq!(rendered, format!("P(\n\t{wide},\n)"));
    }

    #[test]
    fn multiline_args_split() {
        let rendered = render_call("Div", &args(&["Span(\n\t\tX(),\n\t)"]), 1);
        assert_eq!(rendered, "Div(\n\t\tSpan(\n\t\tX(),\n\t),\n\t)");
    }

    #[test]
    fn inline_calls_join_with_commas() {
        assert_eq!(inline_call("Disabled", &[]), "Disabled()");
        assert_eq!(inline_call("Data", &[r#""id""#, r#""1""#]), r#"Data("id", "1")"#);
    }

    #[test]
    fn components_function_lists_each_body() {
        let rendered = components_function(&args(&["Div()", "P()"]));
        assert_eq!(
            rendered,
            "func Components() []Node {\n\treturn []Node{\n\t\tDiv(),\n\t\tP(),\n\t}\n}\n"
        );
    }
}
