//! Matcher definitions
//!
//! A [`Matcher`] is a predicate over a bound value plus caller arguments. It
//! signals failure by returning an [`ExError`], and on success returns an
//! [`Outcome`]. Besides its body it declares which value kinds it accepts and
//! how many arguments it takes; the binder enforces both before the body runs.

use crate::errors::{ExError, Result, XpectError};
use crate::expect::Expect;
use crate::value::Value;
use futures::future::BoxFuture;
use std::sync::Arc;
use xpect_core_types::ValueKind;

/// Body signature shared by every matcher
///
/// The first argument is the owning entry point, so a body can run nested
/// checks on other values through it.
pub type MatcherFn = dyn Fn(&Expect, &Value, &[Value]) -> Result<Outcome> + Send + Sync;

/// Number of caller-supplied arguments a matcher takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    /// Variadic with a minimum
    AtLeast(usize),
}

impl Arity {
    pub fn admits(&self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == *n,
            Arity::AtLeast(n) => count >= *n,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "exactly {}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

/// Value kinds a matcher can be bound to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accepts {
    Any,
    Kinds(Vec<ValueKind>),
}

impl Accepts {
    pub fn admits(&self, kind: ValueKind) -> bool {
        match self {
            Accepts::Any => true,
            Accepts::Kinds(kinds) => kinds.contains(&kind),
        }
    }
}

/// Successful result of a check
pub enum Outcome {
    Pass,
    /// Success value for narrowing-style checks; `true` whenever returned
    Flag(bool),
    /// The check completes once this future resolves
    Pending(BoxFuture<'static, Result<()>>),
}

impl Outcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, Outcome::Pending(_))
    }

    /// The success flag, if the check produced one
    pub fn flag(&self) -> Option<bool> {
        match self {
            Outcome::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Drive the outcome to completion
    ///
    /// Synchronous outcomes resolve immediately.
    ///
    /// # Errors
    ///
    /// Returns whatever the pending check fails with, unchanged.
    pub async fn settle(self) -> Result<()> {
        match self {
            Outcome::Pending(pending) => pending.await,
            Outcome::Pass | Outcome::Flag(_) => Ok(()),
        }
    }
}

impl std::fmt::Debug for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Pass => write!(f, "Pass"),
            Outcome::Flag(flag) => f.debug_tuple("Flag").field(flag).finish(),
            Outcome::Pending(_) => write!(f, "Pending(..)"),
        }
    }
}

/// A named check's definition, minus its name
///
/// Defaults: accepts any value kind, variadic with no minimum.
#[derive(Clone)]
pub struct Matcher {
    accepts: Accepts,
    arity: Arity,
    body: Arc<MatcherFn>,
}

impl Matcher {
    /// Matcher from a body returning an [`Outcome`]
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&Expect, &Value, &[Value]) -> Result<Outcome> + Send + Sync + 'static,
    {
        Self {
            accepts: Accepts::Any,
            arity: Arity::AtLeast(0),
            body: Arc::new(body),
        }
    }

    /// Matcher from a body that only passes or fails
    pub fn predicate<F>(body: F) -> Self
    where
        F: Fn(&Expect, &Value, &[Value]) -> Result<()> + Send + Sync + 'static,
    {
        Self::new(move |ctx, value, args| body(ctx, value, args).map(|()| Outcome::Pass))
    }

    /// Restrict to the given value kinds
    pub fn accepting(mut self, kinds: impl IntoIterator<Item = ValueKind>) -> Self {
        self.accepts = Accepts::Kinds(kinds.into_iter().collect());
        self
    }

    /// Require exactly `count` arguments
    pub fn with_arity(mut self, count: usize) -> Self {
        self.arity = Arity::Exact(count);
        self
    }

    /// Accept `min` or more arguments
    pub fn variadic(mut self, min: usize) -> Self {
        self.arity = Arity::AtLeast(min);
        self
    }

    pub fn accepts(&self) -> &Accepts {
        &self.accepts
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    pub(crate) fn invoke(&self, ctx: &Expect, value: &Value, args: &[Value]) -> Result<Outcome> {
        (self.body)(ctx, value, args)
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("accepts", &self.accepts)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Positional argument, or an `InvalidArgument` error if absent
///
/// # Errors
///
/// Returns `InvalidArgument` when `args` is shorter than `index + 1`.
pub fn argument(args: &[Value], index: usize) -> Result<&Value> {
    args.get(index).ok_or_else(|| {
        ExError::from(XpectError::InvalidArgument {
            reason: format!("missing argument #{}", index + 1),
        })
    })
}
