use thiserror::Error;

/// Errors raised while configuring or running the BEM sugar pass.
#[derive(Debug, Error)]
pub enum BemError {
    /// A naming field is unusable. Raised when the pass is constructed, before any node is touched.
    #[error("Invalid naming config: `{field}` {reason}")]
    Configuration { field: &'static str, reason: String },

    /// A node's `class` attribute cannot be tokenized. The node is left as it was.
    #[error("Invalid node <{tag}>: {reason}")]
    InvalidNode { tag: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BemError {
    pub fn configuration(field: &'static str, reason: &str) -> Self {
        BemError::Configuration {
            field,
            reason: reason.to_string(),
        }
    }

    pub fn invalid_node(tag: Option<&str>, reason: &str) -> Self {
        BemError::InvalidNode {
            tag: tag.unwrap_or("?").to_string(),
            reason: reason.to_string(),
        }
    }
}
