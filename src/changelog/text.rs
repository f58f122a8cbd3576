//! Text cleanup helpers for mod names and changelog lines

use std::sync::LazyLock;

use regex::{Captures, Regex};

static BRACKETED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(.*?\)|\[.*?\]|\{.*?\}").expect("bracket pattern should compile")
});

// An escaped `\[` matches on its own so the span after it is still found.
static SQUARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\\[|\[(.*?)\]").expect("square bracket pattern should compile"));

/// Remove every `(...)`, `[...]` and `{...}` span, then trim
#[must_use]
pub fn strip_bracketed(input: &str) -> String {
    BRACKETED.replace_all(input, "").trim().to_string()
}

/// Turn each `[...]` span into an inline code span
///
/// With `keep_brackets` the code span keeps the literal brackets
/// (`` `[note]` ``), otherwise only the contents are quoted. An escaped
/// `\[` is kept as written and never opens a span.
#[must_use]
pub fn codify_bracketed(input: &str, keep_brackets: bool) -> String {
    SQUARE
        .replace_all(input, |caps: &Captures<'_>| {
            let Some(inner) = caps.get(1) else {
                return caps[0].to_string();
            };
            let inner = inner.as_str();
            if keep_brackets {
                format!("`[{inner}]`")
            } else {
                format!("`{inner}`")
            }
        })
        .into_owned()
}

/// Render lines as a markdown bullet list
#[must_use]
pub fn bullet_list<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(|line| format!("- {}", line.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prefix a version with exactly one `v`
#[must_use]
pub fn normalize_version(version: &str) -> String {
    format!("v{}", bare_version(version))
}

/// A version without its leading `v`, if any
#[must_use]
pub fn bare_version(version: &str) -> &str {
    let version = version.trim();
    version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('V'))
        .unwrap_or(version)
}
