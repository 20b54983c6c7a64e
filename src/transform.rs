//! BEM sugar pass.
//!
//! Rewrites shorthand class tokens into `block` / `elem` / `mods` attributes:
//!
//! ```text
//! <div class="-card __title _size_lg extra">
//!   => <div block="card" elem="title" mods="size:lg" class="extra">
//! ```
//!
//! Extraction runs block, then element, then modifier. A token taken by an
//! earlier step is no longer visible to a later one, which decides overlapping
//! prefixes (with `-` and `-e`, `-elem` is a block).

use log::{debug, trace};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::{NamingConfig, NamingOverrides};
use crate::error::BemError;
use crate::extract::{extract_block, extract_element, extract_modifiers};
use crate::node::{AttributeMap, ElementNode, MarkupNode, NodeTag};
use crate::visitor::{match_elements, par_match_elements};

#[cfg(feature = "napi")]
use napi_derive::napi;

#[derive(Debug, Clone)]
pub struct BemSugar {
    config: NamingConfig,
}

impl BemSugar {
    /// Fails with [`BemError::Configuration`] if any naming field is unusable.
    pub fn new(config: NamingConfig) -> Result<Self, BemError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    /// Rewrite one node's attributes. Atomic: on error the map is unchanged.
    pub fn rewrite_node(
        &self,
        attributes: &mut AttributeMap,
        tag: Option<&str>,
    ) -> Result<bool, BemError> {
        let mut next = attributes.clone();
        let block = extract_block(&mut next, tag, &self.config)?;
        let elem = extract_element(&mut next, tag, &self.config)?;
        let mods = extract_modifiers(&mut next, tag, &self.config)?;

        let changed = block || elem || mods;
        if changed {
            trace!(
                "rewrote <{}> (block: {}, elem: {}, mods: {})",
                tag.unwrap_or("?"),
                block,
                elem,
                mods
            );
            *attributes = next;
        }
        Ok(changed)
    }

    pub fn rewrite_element(&self, element: &mut ElementNode) -> Result<bool, BemError> {
        let tag = element.tag.as_ref().and_then(NodeTag::name);
        match element.attributes.as_mut() {
            Some(attributes) => self.rewrite_node(attributes, tag),
            None => Ok(false),
        }
    }

    /// Apply the pass to every element carrying a `class` attribute.
    ///
    /// Returns the number of elements that were rewritten. Stops at the first
    /// invalid node; elements rewritten before it keep their new attributes.
    pub fn apply(&self, tree: &mut [MarkupNode]) -> Result<usize, BemError> {
        let mut rewritten = 0;
        let visited = match_elements(tree, ElementNode::has_class, |el| {
            if self.rewrite_element(el)? {
                rewritten += 1;
            }
            Ok::<(), BemError>(())
        })?;
        debug!(
            "bem sugar: {} of {} classed elements rewritten",
            rewritten, visited
        );
        Ok(rewritten)
    }

    /// Same result as [`BemSugar::apply`], with sibling subtrees rewritten on the rayon pool.
    pub fn apply_parallel(&self, tree: &mut [MarkupNode]) -> Result<usize, BemError> {
        let rewritten = AtomicUsize::new(0);
        let visited = par_match_elements(
            tree,
            &ElementNode::has_class,
            &|el: &mut ElementNode| {
                if self.rewrite_element(el)? {
                    rewritten.fetch_add(1, Ordering::Relaxed);
                }
                Ok::<(), BemError>(())
            },
        )?;
        let rewritten = rewritten.into_inner();
        debug!(
            "bem sugar (parallel): {} of {} classed elements rewritten",
            rewritten, visited
        );
        Ok(rewritten)
    }
}

/// Rust-to-Rust entry for hosts exchanging posthtml JSON trees.
///
/// `config_json` is a partial config; missing fields take the conventional defaults.
pub fn transform_tree_json(tree_json: &str, config_json: Option<&str>) -> Result<String, BemError> {
    let overrides = match config_json {
        Some(json) if !json.trim().is_empty() => NamingOverrides::from_json(json)?,
        _ => NamingOverrides::default(),
    };
    let sugar = BemSugar::new(NamingConfig::default().merged(overrides))?;

    let mut tree: Vec<MarkupNode> = serde_json::from_str(tree_json)?;
    sugar.apply(&mut tree)?;
    Ok(serde_json::to_string(&tree)?)
}

#[cfg(feature = "napi")]
#[napi]
pub fn transform_tree_native(tree_json: String, config_json: Option<String>) -> napi::Result<String> {
    transform_tree_json(&tree_json, config_json.as_deref())
        .map_err(|e| napi::Error::from_reason(e.to_string()))
}
