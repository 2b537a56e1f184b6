//! htmx (`hx-*`) attributes.

use crate::format::inline_call;
use crate::literal::quote_value;

use super::custom;

const PREFIX: &str = "hx-";

/// Whether this tier handles `key`.
pub fn claims(key: &str) -> bool {
    key.starts_with(PREFIX)
}

/// Render an `hx-*` attribute.
pub fn convert(key: &str, value: &str) -> String {
    let Some(name) = function_name(key) else {
        return custom(key, value);
    };
    let function = format!("htmx.{name}");

    if is_boolean(key) {
        // `hx-boost="true"` is the common spelling; anything else is false.
        if value == "true" {
            return inline_call(&function, &[]);
        }
        return inline_call(&function, &["false"]);
    }

    inline_call(&function, &[&quote_value(value)])
}

fn is_boolean(key: &str) -> bool {
    matches!(key, "hx-boost" | "hx-preserve" | "hx-validate")
}

fn function_name(key: &str) -> Option<&'static str> {
    let name = match key {
        "hx-get" => "HxGet",
        "hx-post" => "HxPost",
        "hx-put" => "HxPut",
        "hx-patch" => "HxPatch",
        "hx-delete" => "HxDelete",
        "hx-trigger" => "HxTrigger",
        "hx-target" => "HxTarget",
        "hx-swap" => "HxSwap",
        "hx-swap-oob" => "HxSwapOob",
        "hx-indicator" => "HxIndicator",
        "hx-push-url" => "HxPushUrl",
        "hx-replace-url" => "HxReplaceUrl",
        "hx-select" => "HxSelect",
        "hx-select-oob" => "HxSelectOob",
        "hx-vals" => "HxVals",
        "hx-headers" => "HxHeaders",
        "hx-include" => "HxInclude",
        "hx-params" => "HxParams",
        "hx-confirm" => "HxConfirm",
        "hx-prompt" => "HxPrompt",
        "hx-validate" => "HxValidate",
        "hx-disabled-elt" => "HxDisabledElt",
        "hx-ext" => "HxExt",
        "hx-boost" => "HxBoost",
        "hx-preserve" => "HxPreserve",
        "hx-sse" => "HxSse",
        "hx-ws" => "HxWs",
        "hx-sync" => "HxSync",
        "hx-encoding" => "HxEncoding",
        "hx-disinherit" => "HxDisinherit",
        _ => return None,
    };
    Some(name)
}
