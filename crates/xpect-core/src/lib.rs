//! Xpect Core - Extensible assertion library
//!
//! This crate provides:
//! - A dynamic value model with observable container identity
//! - An equality engine: reference, strict, loose, depth-bounded and deep
//! - An immutable matcher registry seeded with numeric, boolean, sequence,
//!   deferred and fallback checks
//! - A binder producing the check set available for one value, with typed
//!   check methods filtered by the bound type
//! - `expect` entry points that can be extended without mutation
//! - Failure rendering with unified diffs of the compared values
//!
//! ```
//! use xpect_core::expect;
//!
//! expect(vec![1, 2, 3]).to_have_length(3).unwrap();
//! assert!(expect(vec![1, 2]).to_contain(5).is_err());
//! ```

pub mod binder;
pub mod config;
pub mod equality;
pub mod errors;
pub mod expect;
pub mod logging_facility;
pub mod matcher;
pub mod matchers;
pub mod registry;
pub mod render;
pub mod typed;
pub mod value;

#[doc(hidden)]
pub use tracing as __tracing;

pub use xpect_core_types::{schema, ValueKind};

// Re-export commonly used types
pub use binder::{bind, BoundCheck, Checks};
pub use config::RenderConfig;
pub use errors::{ExError, ExErrorKind, Result, XpectError};
pub use expect::{default_expect, expect, Expect};
pub use matcher::{Accepts, Arity, Matcher, Outcome};
pub use registry::{Matchers, Registry};
pub use render::{DiffRenderer, TextRenderer};
pub use typed::{Numeric, Sequence};
pub use value::{rejection, Deferred, Instance, Rejection, Value};
