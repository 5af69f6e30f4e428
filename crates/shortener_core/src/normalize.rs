/// Scheme prepended to input that does not carry one.
pub const DEFAULT_SCHEME: &str = "https";

/// Turns user-typed text into an absolute URL string.
///
/// Input that already starts with `scheme://` is returned as typed (minus
/// surrounding whitespace). Everything else gets `https://` in front. Empty
/// input stays empty; guarding against empty submissions is up to the caller.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if has_scheme(trimmed) {
        return trimmed.to_string();
    }
    match trimmed.strip_prefix("//") {
        Some(rest) => format!("{DEFAULT_SCHEME}://{rest}"),
        None => format!("{DEFAULT_SCHEME}://{trimmed}"),
    }
}

/// True when `input` begins with `scheme://`, scheme per RFC 3986.
pub fn has_scheme(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
