//! Failure rendering
//!
//! Equality-style matchers describe a failure by rendering both values to
//! text and embedding a unified line diff of the two renderings. The matcher
//! engine only talks to the [`DiffRenderer`] trait; [`TextRenderer`] is the
//! implementation installed by default.

pub mod stringify;
pub mod unified_diff;

pub use stringify::stringify;
pub use unified_diff::unified_diff;

use crate::config::RenderConfig;
use crate::value::Value;

/// Stringify and diff collaborator
///
/// Implementations must be deterministic and total.
pub trait DiffRenderer: Send + Sync {
    /// Render any value to text
    fn stringify(&self, value: &Value) -> String;

    /// Human-readable line diff from `actual` to `expected`
    fn unified_diff(&self, actual: &str, expected: &str) -> String;

    /// Stringify both values and diff the renderings
    fn render_pair(&self, actual: &Value, expected: &Value) -> String {
        self.unified_diff(&self.stringify(actual), &self.stringify(expected))
    }
}

/// Indented text rendering with an LCS line diff
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    config: RenderConfig,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

impl DiffRenderer for TextRenderer {
    fn stringify(&self, value: &Value) -> String {
        stringify(value, self.config.indent)
    }

    fn unified_diff(&self, actual: &str, expected: &str) -> String {
        unified_diff(actual, expected, &self.config)
    }
}
