//! Binding a value to the active registry
//!
//! [`bind`] produces the bound check set for one value: one [`BoundCheck`]
//! per check name the value's kind resolves to. Nothing runs until a check
//! is invoked. Each invocation goes through the arity check, logs start and
//! end events, and calls the matcher with the owning [`Expect`] as context.
//! A pending outcome logs its end or end_error event when it settles.

use crate::errors::{ExError, Result, XpectError};
use crate::expect::Expect;
use crate::matcher::{Matcher, Outcome};
use crate::registry::Resolution;
use crate::value::Value;
use crate::{log_op_end, log_op_error, log_op_start};
use futures::future::{BoxFuture, FutureExt};
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::time::Instant;
use xpect_core_types::schema::{EVENT_PENDING, OP_CHECK};
use xpect_core_types::ValueKind;

/// One check bound to a value
#[derive(Debug, Clone)]
pub struct BoundCheck<'e> {
    name: &'e str,
    matcher: &'e Matcher,
    ctx: &'e Expect,
    value: Value,
}

impl<'e> BoundCheck<'e> {
    pub fn name(&self) -> &'e str {
        self.name
    }

    pub fn matcher(&self) -> &'e Matcher {
        self.matcher
    }

    /// Run the matcher with the bound value first and `args` after it
    ///
    /// # Errors
    ///
    /// Returns `ArityMismatch` for a wrong argument count, otherwise whatever
    /// the matcher fails with, tagged with the check name and value kind.
    pub fn call(&self, args: &[Value]) -> Result<Outcome> {
        let kind = self.value.kind();
        let started = Instant::now();
        log_op_start!(
            OP_CHECK,
            check = self.name,
            value_kind = kind.name(),
            arg_count = args.len()
        );

        let result = self.run(args).map_err(|err| tag(err, self.name, kind));
        let duration_ms = started.elapsed().as_millis() as u64;
        match result {
            Ok(Outcome::Pending(pending)) => {
                log_pending(self.name, duration_ms);
                Ok(Outcome::Pending(settle_logged(pending, self.name, kind, started)))
            }
            Ok(outcome) => {
                log_op_end!(OP_CHECK, duration_ms = duration_ms, check = self.name);
                Ok(outcome)
            }
            Err(err) => {
                log_op_error!(OP_CHECK, &err, duration_ms = duration_ms, check = self.name);
                Err(err)
            }
        }
    }

    fn run(&self, args: &[Value]) -> Result<Outcome> {
        let arity = self.matcher.arity();
        if !arity.admits(args.len()) {
            return Err(XpectError::ArityMismatch {
                name: self.name.to_string(),
                expected: arity.to_string(),
                actual: args.len(),
            }
            .into());
        }
        self.matcher.invoke(self.ctx, &self.value, args)
    }
}

fn tag(err: ExError, name: &str, kind: ValueKind) -> ExError {
    let err = if err.check().is_none() {
        err.with_check(name)
    } else {
        err
    };
    if err.value_kind().is_none() {
        err.with_value_kind(kind)
    } else {
        err
    }
}

fn log_pending(check: &str, duration_ms: u64) {
    tracing::debug!(
        component = module_path!(),
        op = OP_CHECK,
        event = EVENT_PENDING,
        duration_ms = duration_ms,
        check = check,
    );
}

/// Close the invocation's log bracket once the pending check settles
fn settle_logged(
    pending: BoxFuture<'static, Result<()>>,
    check: &str,
    kind: ValueKind,
    started: Instant,
) -> BoxFuture<'static, Result<()>> {
    let check = check.to_string();
    async move {
        let settled = pending.await.map_err(|err| tag(err, &check, kind));
        let duration_ms = started.elapsed().as_millis() as u64;
        match &settled {
            Ok(()) => {
                log_op_end!(OP_CHECK, duration_ms = duration_ms, check = check.as_str());
            }
            Err(err) => {
                log_op_error!(OP_CHECK, err, duration_ms = duration_ms, check = check.as_str());
            }
        }
        settled
    }
    .boxed()
}

/// Bound check set for one value
///
/// `T` is the static type the value was bound from. Typed check methods
/// are only available for the `T`s they make sense for; the untyped
/// [`Checks::check`] works for any name and reports dispatch errors at run
/// time.
#[derive(Debug)]
pub struct Checks<'e, T = Value> {
    ctx: &'e Expect,
    value: Value,
    bound: BTreeMap<&'e str, BoundCheck<'e>>,
    _type: PhantomData<fn() -> T>,
}

/// Bind `value` to every check the context's registry resolves for its kind
pub fn bind<'e, T>(ctx: &'e Expect, value: Value) -> Checks<'e, T> {
    let kind = value.kind();
    let registry = ctx.matchers();
    let bound = registry
        .names()
        .filter_map(|name| match registry.resolve(name, kind) {
            Resolution::Bound(matcher) => Some((
                name,
                BoundCheck {
                    name,
                    matcher,
                    ctx,
                    value: value.clone(),
                },
            )),
            Resolution::Unsupported | Resolution::Unknown => None,
        })
        .collect();
    Checks {
        ctx,
        value,
        bound,
        _type: PhantomData,
    }
}

impl<'e, T> Checks<'e, T> {
    /// The bound value
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    /// Entry point this set was bound from
    pub fn context(&self) -> &'e Expect {
        self.ctx
    }

    /// Names of the checks available for this value, sorted
    pub fn names(&self) -> impl Iterator<Item = &'e str> + '_ {
        self.bound.keys().copied()
    }

    pub fn has(&self, name: &str) -> bool {
        self.bound.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&BoundCheck<'e>> {
        self.bound.get(name)
    }

    /// Invoke a check by name
    ///
    /// # Errors
    ///
    /// - `UnknownCheck`: no such name in the registry
    /// - `UnsupportedValue`: the name exists but not for this value's kind
    /// - `ArityMismatch`: wrong argument count
    /// - anything the matcher itself fails with
    pub fn check(&self, name: &str, args: &[Value]) -> Result<Outcome> {
        match self.bound.get(name) {
            Some(bound) => bound.call(args),
            None => Err(self.dispatch_error(name)),
        }
    }

    /// Invoke a check and require it to settle synchronously
    ///
    /// Returns the success flag, or `true` for checks without one.
    ///
    /// # Errors
    ///
    /// As [`Checks::check`], plus `Unsettled` for a pending outcome.
    pub fn check_now(&self, name: &str, args: &[Value]) -> Result<bool> {
        match self.check(name, args)? {
            Outcome::Pass => Ok(true),
            Outcome::Flag(flag) => Ok(flag),
            Outcome::Pending(_) => Err(XpectError::Unsettled {
                name: name.to_string(),
            }
            .into()),
        }
    }

    fn dispatch_error(&self, name: &str) -> ExError {
        let kind = self.kind();
        let err = if self.ctx.matchers().contains(name) {
            XpectError::UnsupportedValue {
                name: name.to_string(),
                kind,
            }
        } else {
            XpectError::UnknownCheck {
                name: name.to_string(),
            }
        };
        ExError::from(err).with_value_kind(kind)
    }
}
