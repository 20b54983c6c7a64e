//! Prefix extraction: moves class tokens that carry a BEM prefix into a
//! dedicated attribute.
//!
//! [`extract_attribute`] is the generic engine; [`extract_block`],
//! [`extract_element`] and [`extract_modifiers`] specialize it for the three
//! BEM roles.

use crate::class_list::{has_prefix, join_tokens, strip_prefix, tokenize};
use crate::config::NamingConfig;
use crate::error::BemError;
use crate::node::{AttributeMap, AttributeValue, CLASS_ATTR};

pub const BLOCK_ATTR: &str = "block";
pub const ELEM_ATTR: &str = "elem";
pub const MODS_ATTR: &str = "mods";

/// Outcome of partitioning one class list against one prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Number of tokens carrying the prefix. All of them leave the class list.
    pub matched: usize,
    /// Non-empty transformed matches, in original order.
    pub extracted: Vec<String>,
    /// Tokens without the prefix, in original order.
    pub kept: Vec<String>,
}

impl ExtractionResult {
    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }
}

/// Partition `tokens` by `prefix`, running `transform` on the stripped remainder of each match.
///
/// Every token carrying the prefix is consumed. An empty output (a token equal
/// to the prefix, or a modifier without a name) is dropped rather than joined
/// into the target attribute.
pub fn partition_tokens<F>(tokens: &[&str], prefix: &str, transform: F) -> ExtractionResult
where
    F: Fn(&str) -> String,
{
    let mut result = ExtractionResult::default();
    for &token in tokens {
        if !has_prefix(token, prefix) {
            result.kept.push(token.to_string());
            continue;
        }
        result.matched += 1;
        let output = transform(strip_prefix(token, prefix));
        if !output.is_empty() {
            result.extracted.push(output);
        }
    }
    result
}

/// Move every `class` token carrying `prefix` into the `target` attribute.
///
/// Returns `Ok(true)` if the attributes were rewritten. The map is left
/// untouched when there is no `class` or no token matches. `target` is only
/// written when at least one match has a non-empty output; matched tokens leave
/// `class` either way. A non-string `class` fails before anything is modified.
pub fn extract_attribute<F>(
    attributes: &mut AttributeMap,
    tag: Option<&str>,
    prefix: &str,
    target: &str,
    transform: F,
) -> Result<bool, BemError>
where
    F: Fn(&str) -> String,
{
    let class_value = match attributes.get(CLASS_ATTR) {
        None => return Ok(false),
        Some(AttributeValue::Text(value)) => value,
        Some(AttributeValue::Other(value)) => {
            return Err(BemError::invalid_node(
                tag,
                &format!("`class` must be a string, got {}", value),
            ))
        }
    };

    let tokens = tokenize(class_value);
    let result = partition_tokens(&tokens, prefix, transform);
    if result.is_empty() {
        return Ok(false);
    }

    if !result.extracted.is_empty() {
        attributes.set(target, &join_tokens(&result.extracted));
    }
    if result.kept.is_empty() {
        attributes.remove(CLASS_ATTR);
    } else {
        attributes.set(CLASS_ATTR, &join_tokens(&result.kept));
    }
    Ok(true)
}

pub fn extract_block(
    attributes: &mut AttributeMap,
    tag: Option<&str>,
    config: &NamingConfig,
) -> Result<bool, BemError> {
    extract_attribute(attributes, tag, &config.block_prefix, BLOCK_ATTR, str::to_string)
}

pub fn extract_element(
    attributes: &mut AttributeMap,
    tag: Option<&str>,
    config: &NamingConfig,
) -> Result<bool, BemError> {
    extract_attribute(attributes, tag, &config.elem_prefix, ELEM_ATTR, str::to_string)
}

pub fn extract_modifiers(
    attributes: &mut AttributeMap,
    tag: Option<&str>,
    config: &NamingConfig,
) -> Result<bool, BemError> {
    let delimiter = config.mod_delimiter.as_str();
    extract_attribute(attributes, tag, &config.mod_prefix, MODS_ATTR, |stripped| {
        modifier_pair(stripped, delimiter)
    })
}

/// Format one stripped modifier token as `name:value` or `name`.
///
/// Only the first delimiter splits; later ones belong to the value
/// (`theme_dark_blue` gives `theme:dark_blue`). A token with an empty name
/// yields an empty string.
pub fn modifier_pair(stripped: &str, delimiter: &str) -> String {
    let (name, value) = stripped.split_once(delimiter).unwrap_or((stripped, ""));
    match (name.is_empty(), value.is_empty()) {
        (true, _) => String::new(),
        (false, true) => name.to_string(),
        (false, false) => format!("{}:{}", name, value),
    }
}
