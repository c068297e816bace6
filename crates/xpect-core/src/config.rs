//! Render configuration
//!
//! Controls how failure messages render the two compared values. Every field
//! has a default, so a partial JSON document is enough.

use crate::errors::{Result, XpectError};
use serde::{Deserialize, Serialize};

const MAX_INDENT: usize = 8;

/// Settings consumed by [`TextRenderer`](crate::render::TextRenderer)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Unchanged lines shown around each change in a diff hunk
    pub context_lines: usize,
    /// Spaces per nesting level when stringifying containers
    pub indent: usize,
    /// Header label for the value under test
    pub actual_label: String,
    /// Header label for the expected value
    pub expected_label: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            context_lines: 3,
            indent: 2,
            actual_label: "actual".to_string(),
            expected_label: "expected".to_string(),
        }
    }
}

impl RenderConfig {
    /// Parse and validate a JSON document
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the document is not valid JSON for this
    /// shape, a label is empty, or the indent exceeds 8.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: RenderConfig =
            serde_json::from_str(json).map_err(|e| XpectError::InvalidConfig {
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check field ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` on an empty label or an indent above 8.
    pub fn validate(&self) -> Result<()> {
        if self.actual_label.trim().is_empty() || self.expected_label.trim().is_empty() {
            return Err(XpectError::InvalidConfig {
                reason: "diff labels must not be empty".to_string(),
            }
            .into());
        }
        if self.indent > MAX_INDENT {
            return Err(XpectError::InvalidConfig {
                reason: format!("indent {} exceeds {}", self.indent, MAX_INDENT),
            }
            .into());
        }
        Ok(())
    }
}
