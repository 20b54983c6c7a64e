//! # BEM Sugar
//!
//! Rewrites shorthand BEM class tokens on a markup tree into structured
//! attributes consumed by later BEM passes.
//!
//! ## Pass Invariants
//!
//! 1. **Extraction Order**: block, then element, then modifier. A token consumed
//!    by one step is never seen by the next.
//! 2. **Token Conservation**: exactly the class tokens that carry no prefix stay
//!    in `class`, in their original order. An emptied `class` is removed, never
//!    left as `""`.
//! 3. **No Empty Attributes**: `block`, `elem` and `mods` are only written when at
//!    least one prefixed token has a non-empty name. Nameless tokens (`-`, `_`)
//!    are consumed and dropped.
//! 4. **Per-Node Atomicity**: a node is either fully rewritten or left as it was.
//! 5. **Idempotence**: running the pass on its own output changes nothing.
//!
//! Parsing markup into a tree and printing it back are the host's job.

#[cfg(feature = "napi")]
use napi_derive::napi;

mod class_list;
mod config;
mod error;
mod extract;
mod node;
mod transform;
mod visitor;

#[cfg(test)]
mod extract_tests;
#[cfg(test)]
mod node_tests;

pub use class_list::{has_prefix, join_tokens, strip_prefix, tokenize};
pub use config::{NamingConfig, NamingOverrides};
pub use error::BemError;
pub use extract::{
    extract_attribute, extract_block, extract_element, extract_modifiers, modifier_pair,
    partition_tokens, ExtractionResult, BLOCK_ATTR, ELEM_ATTR, MODS_ATTR,
};
pub use node::{AttributeMap, AttributeValue, ElementNode, MarkupNode, NodeTag, CLASS_ATTR};
pub use transform::{transform_tree_json, BemSugar};
pub use visitor::{
    match_elements, par_match_elements, walk_element, walk_node, walk_nodes, MarkupVisitor,
};

#[cfg(feature = "napi")]
pub use transform::transform_tree_native;

#[cfg(feature = "napi")]
#[napi]
pub fn bem_sugar_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
