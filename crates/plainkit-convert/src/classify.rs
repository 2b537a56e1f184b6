//! Full page vs. fragment detection.
//!
//! This is a lexical check over the raw text, not a parse. Anything that does
//! not look like a complete document is treated as a fragment.

use regex::Regex;
use std::sync::LazyLock;

/// How an input should be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// A complete document, converted into `Page()`.
    FullPage,
    /// A snippet, converted into `Component()` or `Components()`.
    Fragment,
}

static DOCTYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!doctype\b").expect("Invalid doctype regex"));

static HTML_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<html\b").expect("Invalid html regex"));

// `\b` keeps `<header>` from counting as a head marker.
static HEAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<head\b").expect("Invalid head regex"));

static BODY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<body\b").expect("Invalid body regex"));

/// Classify trimmed input text.
pub fn classify(source: &str) -> DocumentKind {
    let full_page = DOCTYPE_RE.is_match(source)
        || HTML_RE.is_match(source)
        || (HEAD_RE.is_match(source) && BODY_RE.is_match(source));

    if full_page {
        DocumentKind::FullPage
    } else {
        DocumentKind::Fragment
    }
}
