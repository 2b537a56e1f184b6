//! Alpine.js attributes: `x-*` directives, `@event` and `:attr` shorthands.

use crate::format::inline_call;
use crate::literal::quote_value;

use super::custom;

/// Whether this tier handles `key`.
pub fn claims(key: &str) -> bool {
    key.starts_with("x-") || key.starts_with('@') || key.starts_with(':')
}

/// Render an Alpine.js attribute.
pub fn convert(key: &str, value: &str) -> String {
    if let Some(event) = key.strip_prefix('@') {
        convert_event(key, event, value)
    } else if let Some(attr) = key.strip_prefix(':') {
        convert_bind(attr, value)
    } else {
        convert_directive(key, value)
    }
}

fn alpine(name: &str, args: &[&str]) -> String {
    inline_call(&format!("alpine.{name}"), args)
}

/// `x-*` directives.
fn convert_directive(key: &str, value: &str) -> String {
    if let Some(event) = key.strip_prefix("x-on:") {
        return alpine("XOn", &[&quote_value(event), &quote_value(value)]);
    }

    if let Some(attr) = key.strip_prefix("x-bind:") {
        return alpine("XBind", &[&quote_value(attr), &quote_value(value)]);
    }

    // x-model.debounce.500ms: the delay is the third segment.
    if key.starts_with("x-model.debounce") {
        if let Some(delay) = key.split('.').nth(2) {
            return alpine("XModelDebounce", &[&quote_value(value), &quote_value(delay)]);
        }
    }

    match directive_name(key) {
        Some(name) if is_valueless(key) => alpine(name, &[]),
        Some(name) => alpine(name, &[&quote_value(value)]),
        None => custom(key, value),
    }
}

fn is_valueless(key: &str) -> bool {
    matches!(key, "x-cloak" | "x-ignore" | "x-transition")
}

fn directive_name(key: &str) -> Option<&'static str> {
    let name = match key {
        "x-data" => "XData",
        "x-init" => "XInit",
        "x-show" => "XShow",
        "x-if" => "XIf",
        "x-for" => "XFor",
        "x-html" => "XHtml",
        "x-text" => "XText",
        "x-model" => "XModel",
        "x-modelable" => "XModelable",
        "x-effect" => "XEffect",
        "x-ref" => "XRef",
        "x-teleport" => "XTeleport",
        "x-ignore" => "XIgnore",
        "x-id" => "XId",
        "x-cloak" => "XCloak",
        "x-transition" => "XTransition",
        "x-transition:enter" => "XTransitionEnter",
        "x-transition:enter-start" => "XTransitionEnterStart",
        "x-transition:enter-end" => "XTransitionEnterEnd",
        "x-transition:leave" => "XTransitionLeave",
        "x-transition:leave-start" => "XTransitionLeaveStart",
        "x-transition:leave-end" => "XTransitionLeaveEnd",
        "x-model.lazy" => "XModelLazy",
        "x-model.number" => "XModelNumber",
        _ => return None,
    };
    Some(name)
}

/// `@event` and `@event.modifier` shorthands. `key` is the full attribute name.
fn convert_event(key: &str, event_part: &str, value: &str) -> String {
    let (event, modifiers) = match event_part.split_once('.') {
        Some((event, modifiers)) => (event, Some(modifiers)),
        None => (event_part, None),
    };

    if let Some(modifiers) = modifiers {
        // Unknown combinations keep the full key rather than guessing at
        // a structured call.
        return match event_modifier_name(&format!("{event}.{modifiers}")) {
            Some(name) => alpine(name, &[&quote_value(value)]),
            None => custom(key, value),
        };
    }

    match event_name(event) {
        Some(name) => alpine(name, &[&quote_value(value)]),
        None => alpine("At", &[&quote_value(event), &quote_value(value)]),
    }
}

fn event_modifier_name(combo: &str) -> Option<&'static str> {
    let name = match combo {
        "click.away" => "AtClickAway",
        "click.outside" => "AtClickOutside",
        "click.prevent" => "AtClickPrevent",
        "click.stop" => "AtClickStop",
        "submit.prevent" => "AtSubmitPrevent",
        "keydown.escape" => "AtKeydownEscape",
        "keydown.enter" => "AtKeydownEnter",
        "keydown.window" => "AtKeydownWindow",
        _ => return None,
    };
    Some(name)
}

fn event_name(event: &str) -> Option<&'static str> {
    let name = match event {
        "click" => "AtClick",
        "submit" => "AtSubmit",
        "change" => "AtChange",
        "input" => "AtInput",
        "keydown" => "AtKeydown",
        "keyup" => "AtKeyup",
        "mouseenter" => "AtMouseenter",
        "mouseleave" => "AtMouseleave",
        _ => return None,
    };
    Some(name)
}

/// `:attr` bind shorthands.
fn convert_bind(attr: &str, value: &str) -> String {
    let name = match attr {
        "class" => "ColonClass",
        "style" => "ColonStyle",
        "disabled" => "ColonDisabled",
        "value" => "ColonValue",
        _ => return alpine("Colon", &[&quote_value(attr), &quote_value(value)]),
    };
    alpine(name, &[&quote_value(value)])
}
