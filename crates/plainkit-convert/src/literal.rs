//! Go string literal rendering.

/// Values longer than this many bytes that look like script are emitted as
/// raw strings.
const RAW_SCRIPT_THRESHOLD: usize = 50;

/// Quote a value as a Go string literal.
///
/// Multi-line values, and long values that look like inline script, become
/// backtick raw strings. Everything else becomes an interpreted string.
pub fn quote_value(value: &str) -> String {
    if wants_raw_literal(value) {
        // Raw strings cannot contain a backtick; splice one in instead.
        format!("`{}`", value.replace('`', "` + \"`\" + `"))
    } else {
        format!("\"{}\"", escape_string(value))
    }
}

fn wants_raw_literal(value: &str) -> bool {
    value.contains('\n')
        || (value.len() > RAW_SCRIPT_THRESHOLD
            && (value.contains('{') || value.contains("function")))
}

/// Escape a string for a double-quoted Go literal.
///
/// Backslashes are doubled as well as quotes, so values such as `\d{3}` stay
/// valid Go rather than turning into escape sequences.
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
