use super::{diff_failure, invalid_argument, names};
use crate::equality::deep_equal;
use crate::errors::ExError;
use crate::expect::Expect;
use crate::matcher::{argument, Matcher, Outcome};
use crate::registry::Matchers;
use futures::FutureExt;
use xpect_core_types::schema::OP_AWAIT;
use xpect_core_types::ValueKind;

/// The asynchronous-resolution check
pub fn deferred() -> Matchers {
    Matchers::new().with(names::TO_AWAIT_TO_EQUAL, await_to_equal())
}

/// Await the bound deferred value, then deep-compare it with the argument
///
/// A rejection is returned as-is through [`ExError::rejected`]; it is never
/// reworded into an assertion failure.
fn await_to_equal() -> Matcher {
    Matcher::new(|ctx, value, args| {
        let deferred = value
            .as_deferred()
            .cloned()
            .ok_or_else(|| invalid_argument(format!("expected a deferred value, got {}", value.kind())))?;
        let expected = argument(args, 0)?.clone();
        // Owned context: the pending future outlives this call.
        let ctx: Expect = ctx.clone();
        Ok(Outcome::Pending(
            async move {
                let resolved = match deferred.settle().await {
                    Ok(resolved) => resolved,
                    Err(rejection) => {
                        tracing::debug!(
                            component = module_path!(),
                            op = OP_AWAIT,
                            check = names::TO_AWAIT_TO_EQUAL,
                            "deferred value rejected"
                        );
                        return Err(ExError::rejected(rejection).with_check(names::TO_AWAIT_TO_EQUAL));
                    }
                };
                if deep_equal(&resolved, &expected) {
                    return Ok(());
                }
                Err(diff_failure(
                    &ctx,
                    "Deferred value did not resolve to expected value",
                    &resolved,
                    &expected,
                )
                .with_check(names::TO_AWAIT_TO_EQUAL)
                .with_value_kind(ValueKind::Deferred))
            }
            .boxed(),
        ))
    })
    .accepting([ValueKind::Deferred])
    .with_arity(1)
}
