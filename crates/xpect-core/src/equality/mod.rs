//! Equality engine
//!
//! Three levels of equality over [`Value`](crate::value::Value):
//!
//! - [`reference_equal`]: strict identity. `NaN` equals itself, `+0` and `-0`
//!   differ, containers must be the same allocation.
//! - [`equal_to_depth`] / [`shallow_equal`]: loose equality, descending a
//!   bounded number of container levels. Arrays recurse with a decremented
//!   depth; plain records compare their fields by loose equality only.
//! - [`deep_equal`]: unbounded structural equality.
//!
//! All operations are pure and total.

mod loose;
mod structural;

pub use loose::{loose_equal, reference_equal, strict_equal};
pub use structural::{deep_equal, equal_to_depth, shallow_equal};
