//! Conditional helpers over a [`ContextValues`] carrier.
//!
//! They only read the carrier and never report errors: a missing key or a
//! value of another type simply skips the callback. Hooks built on them are
//! best-effort and must not break message handling.

use std::any::{type_name, Any};

use crate::context::ContextValues;
use crate::key::ContextKey;

/// Calls `on_present` with the value under `key` if it is set as a `T`.
pub fn if_set<T, C>(ctx: &C, key: &ContextKey, on_present: impl FnOnce(&T))
where
    T: Any,
    C: ContextValues + ?Sized,
{
    let Some(value) = ctx.value(key) else {
        return;
    };

    match value.downcast_ref::<T>() {
        Some(value) => on_present(value),
        None => log::trace!(
            "Context key {key} is set but not as {}, skipping",
            type_name::<T>()
        ),
    }
}

/// Calls `on_absent` if nothing is set under `key`, whatever its type.
pub fn if_not_set<C>(ctx: &C, key: &ContextKey, on_absent: impl FnOnce())
where
    C: ContextValues + ?Sized,
{
    if ctx.value(key).is_none() {
        on_absent();
    }
}

/// Calls `on_equal` if the value under `key` is set as a `T` equal to `expected`.
pub fn if_equals<T, C>(ctx: &C, key: &ContextKey, expected: &T, on_equal: impl FnOnce())
where
    T: Any + PartialEq,
    C: ContextValues + ?Sized,
{
    if_set(ctx, key, |value: &T| {
        if value == expected {
            on_equal();
        }
    });
}
