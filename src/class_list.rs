//! Class attribute tokenization.
//!
//! A class value is a list of words separated by single ASCII spaces. Runs of
//! spaces produce no empty tokens.

/// Split a class attribute value into its tokens, in textual order.
pub fn tokenize(class_value: &str) -> Vec<&str> {
    class_value
        .split(' ')
        .filter(|token| !token.is_empty())
        .collect()
}

/// True if `token` starts with `prefix`. A token shorter than the prefix never matches.
pub fn has_prefix(token: &str, prefix: &str) -> bool {
    token.as_bytes().starts_with(prefix.as_bytes())
}

/// Remainder of `token` after `prefix`.
///
/// Returns an empty string when the token *is* the prefix (a nameless block,
/// element or modifier). Callers must check [`has_prefix`] first; a token that
/// does not carry the prefix is returned unchanged.
pub fn strip_prefix<'a>(token: &'a str, prefix: &str) -> &'a str {
    token.strip_prefix(prefix).unwrap_or(token)
}

/// Join tokens back into a class value, one space between each.
pub fn join_tokens(tokens: &[String]) -> String {
    tokens.join(" ")
}
