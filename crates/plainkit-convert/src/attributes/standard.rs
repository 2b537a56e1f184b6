//! Standard HTML attributes.

use crate::format::inline_call;
use crate::literal::quote_value;

use super::custom;

/// Render a standard attribute of element `tag`.
///
/// Never fails: unknown keys become `Custom(key, value)`.
pub fn convert(key: &str, value: &str, tag: &str) -> String {
    if let Some(name) = presence_name(key) {
        return inline_call(name, &[]);
    }

    if let Some(name) = contextual_name(key, tag).or_else(|| value_name(key)) {
        return inline_call(name, &[&quote_value(value)]);
    }

    if let Some(data) = key.strip_prefix("data-") {
        return inline_call("Data", &[&quote_value(data), &quote_value(value)]);
    }

    if let Some(aria) = key.strip_prefix("aria-") {
        return inline_call("Aria", &[&quote_value(aria), &quote_value(value)]);
    }

    custom(key, value)
}

/// Boolean attributes whose value is irrelevant.
fn presence_name(key: &str) -> Option<&'static str> {
    let name = match key {
        "disabled" => "Disabled",
        "checked" => "Checked",
        "readonly" => "ReadOnly",
        "required" => "Required",
        "multiple" => "Multiple",
        "selected" => "Selected",
        "defer" => "Defer",
        "async" => "Async",
        "autofocus" => "Autofocus",
        _ => return None,
    };
    Some(name)
}

/// Attributes whose function depends on the element they sit on.
fn contextual_name(key: &str, tag: &str) -> Option<&'static str> {
    let name = match (key, tag) {
        ("src", "script") => "ScriptSrc",
        ("src", _) => "Src",
        ("type", "input") => "InputType",
        ("type", "button") => "ButtonType",
        ("type", _) => "Type",
        ("value", "input") => "InputValue",
        ("value", _) => "Value",
        ("name", "input") => "InputName",
        ("name", _) => "Name",
        _ => return None,
    };
    Some(name)
}

fn value_name(key: &str) -> Option<&'static str> {
    let name = match key {
        "class" => "Class",
        "id" => "Id",
        "style" => "Style",
        "href" => "Href",
        "placeholder" => "Placeholder",
        "charset" => "Charset",
        "content" => "Content",
        "method" => "Method",
        "action" => "Action",
        "target" => "Target",
        "rel" => "Rel",
        "alt" => "Alt",
        "title" => "Title",
        "width" => "Width",
        "height" => "Height",
        "colspan" => "ColSpan",
        "rowspan" => "RowSpan",
        "for" => "For",
        "maxlength" => "MaxLength",
        "minlength" => "MinLength",
        "min" => "Min",
        "max" => "Max",
        "step" => "Step",
        "pattern" => "Pattern",
        "rows" => "Rows",
        "cols" => "Cols",
        "autocomplete" => "AutoComplete",
        "role" => "Role",
        "tabindex" => "TabIndex",
        _ => return None,
    };
    Some(name)
}
