//! Dispatch entry point
//!
//! An [`Expect`] owns a registry and a diff renderer. [`Expect::that`] binds a
//! value to the registry; [`Expect::extend`] returns a new entry point over a
//! merged registry and leaves the receiver as it was. The entry point is
//! also the context handed to every matcher body, so bodies can check other
//! values through it.
//!
//! ```
//! use xpect_core::{expect, Matcher, Matchers, Value};
//!
//! expect(5).to_be_greater_than(3).unwrap();
//!
//! let doubled = Matchers::new().with(
//!     "doubled_to_be",
//!     Matcher::predicate(|ctx, value, args| {
//!         let n = value.as_f64().unwrap_or(f64::NAN);
//!         ctx.that(n * 2.0).to_equal(args[0].as_f64().unwrap_or(f64::NAN))
//!     })
//!     .with_arity(1),
//! );
//! let expect_number = xpect_core::default_expect().extend(doubled);
//! expect_number
//!     .that(5)
//!     .check("doubled_to_be", &[Value::from(10)])
//!     .unwrap();
//! ```

use crate::binder::{bind, Checks};
use crate::{log_op_end, log_op_start};
use crate::registry::{Matchers, Registry};
use crate::render::{DiffRenderer, TextRenderer};
use crate::value::Value;
use std::sync::{Arc, OnceLock};
use std::time::Instant;
use xpect_core_types::schema::OP_EXTEND;

/// Dispatch entry point and matcher context
#[derive(Clone)]
pub struct Expect {
    registry: Registry,
    renderer: Arc<dyn DiffRenderer>,
}

impl Expect {
    /// Entry point over `registry` with the default [`TextRenderer`]
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            renderer: Arc::new(TextRenderer::new()),
        }
    }

    /// Entry point over the base registry
    pub fn base() -> Self {
        Self::new(Registry::base())
    }

    /// Same registry, different diff renderer
    pub fn with_renderer(self, renderer: Arc<dyn DiffRenderer>) -> Self {
        Self { renderer, ..self }
    }

    /// Bind `value` and return its checks
    pub fn that<T: Into<Value>>(&self, value: T) -> Checks<'_, T> {
        bind(self, value.into())
    }

    /// Read-only view of the active registry
    pub fn matchers(&self) -> &Registry {
        &self.registry
    }

    pub fn renderer(&self) -> &Arc<dyn DiffRenderer> {
        &self.renderer
    }

    /// New entry point whose registry also holds `extra`
    ///
    /// Same-named definitions in `extra` shadow existing ones for the new
    /// entry point only. Calls can be chained.
    pub fn extend(&self, extra: Matchers) -> Expect {
        let started = Instant::now();
        let added = extra.len();
        log_op_start!(OP_EXTEND, added = added);
        let registry = self.registry.extend(extra);
        log_op_end!(
            OP_EXTEND,
            duration_ms = started.elapsed().as_millis() as u64,
            added = added,
            matcher_count = registry.len()
        );
        Expect {
            registry,
            renderer: Arc::clone(&self.renderer),
        }
    }
}

impl Default for Expect {
    fn default() -> Self {
        Self::base()
    }
}

impl std::fmt::Debug for Expect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Expect")
            .field("matchers", &self.registry.names().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

static DEFAULT: OnceLock<Expect> = OnceLock::new();

/// Process-wide entry point over the base registry
pub fn default_expect() -> &'static Expect {
    DEFAULT.get_or_init(Expect::base)
}

/// Bind `value` to the process-wide entry point
pub fn expect<T: Into<Value>>(value: T) -> Checks<'static, T> {
    default_expect().that(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::Matcher;

    #[test]
    fn test_default_entry_point_is_shared() {
        assert!(default_expect()
            .matchers()
            .ptr_eq(default_expect().matchers()));
    }

    #[test]
    fn test_extend_returns_new_entry_point() {
        let base = Expect::base();
        let extended = base.extend(
            Matchers::new().with("to_be_anything", Matcher::predicate(|_, _, _| Ok(()))),
        );
        assert!(!base.that(1).has("to_be_anything"));
        assert!(extended.that(1).has("to_be_anything"));
        assert!(Arc::ptr_eq(base.renderer(), extended.renderer()));
    }
}
