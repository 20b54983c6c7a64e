//! Naming convention configuration.
//!
//! The pass itself has no built-in defaults: [`NamingConfig`] must carry four
//! non-empty strings. `NamingConfig::default()` is the conventional host policy
//! (`-block __elem _mod_value`), and [`NamingOverrides`] is the partial form a
//! host passes in to adjust it.

use serde::{Deserialize, Serialize};

use crate::error::BemError;

pub const DEFAULT_BLOCK_PREFIX: &str = "-";
pub const DEFAULT_ELEM_PREFIX: &str = "__";
pub const DEFAULT_MOD_PREFIX: &str = "_";
pub const DEFAULT_MOD_DELIMITER: &str = "_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingConfig {
    pub block_prefix: String,
    pub elem_prefix: String,
    pub mod_prefix: String,
    /// Separates a modifier's name from its value, e.g. `_size_large`.
    #[serde(rename = "modDlmtr", alias = "modDelimiter", alias = "modDelim")]
    pub mod_delimiter: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            block_prefix: DEFAULT_BLOCK_PREFIX.to_string(),
            elem_prefix: DEFAULT_ELEM_PREFIX.to_string(),
            mod_prefix: DEFAULT_MOD_PREFIX.to_string(),
            mod_delimiter: DEFAULT_MOD_DELIMITER.to_string(),
        }
    }
}

impl NamingConfig {
    pub fn new(
        block_prefix: &str,
        elem_prefix: &str,
        mod_prefix: &str,
        mod_delimiter: &str,
    ) -> Self {
        Self {
            block_prefix: block_prefix.to_string(),
            elem_prefix: elem_prefix.to_string(),
            mod_prefix: mod_prefix.to_string(),
            mod_delimiter: mod_delimiter.to_string(),
        }
    }

    /// Apply a partial config on top of this one. Fields absent from `overrides` keep their value.
    pub fn merged(mut self, overrides: NamingOverrides) -> Self {
        if let Some(v) = overrides.block_prefix {
            self.block_prefix = v;
        }
        if let Some(v) = overrides.elem_prefix {
            self.elem_prefix = v;
        }
        if let Some(v) = overrides.mod_prefix {
            self.mod_prefix = v;
        }
        if let Some(v) = overrides.mod_delimiter {
            self.mod_delimiter = v;
        }
        self
    }

    /// Every field must be a non-empty string. An empty prefix would match every token.
    pub fn validate(&self) -> Result<(), BemError> {
        let fields = [
            ("blockPrefix", &self.block_prefix),
            ("elemPrefix", &self.elem_prefix),
            ("modPrefix", &self.mod_prefix),
            ("modDlmtr", &self.mod_delimiter),
        ];
        for (field, value) in fields {
            if value.is_empty() {
                return Err(BemError::configuration(field, "must not be empty"));
            }
            if value.contains(' ') {
                return Err(BemError::configuration(
                    field,
                    "must not contain spaces; class tokens are space separated",
                ));
            }
        }
        Ok(())
    }
}

/// Partial naming config as supplied by a host. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingOverrides {
    #[serde(default)]
    pub block_prefix: Option<String>,
    #[serde(default)]
    pub elem_prefix: Option<String>,
    #[serde(default)]
    pub mod_prefix: Option<String>,
    #[serde(default, rename = "modDlmtr", alias = "modDelimiter", alias = "modDelim")]
    pub mod_delimiter: Option<String>,
}

impl NamingOverrides {
    pub fn from_json(json: &str) -> Result<Self, BemError> {
        Ok(serde_json::from_str(json)?)
    }
}
