use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::key::ContextKey;

/// Type-erased value stored in a context.
pub type ContextValue = dyn Any + Send + Sync;

/// Read access to a key/value carrier threaded through message handling.
///
/// The accessors in this crate only need this lookup, so any carrier can be
/// plugged in as long as it hands back the stored value itself (not a wrapper
/// around it) for the runtime type check to work.
pub trait ContextValues {
    fn value(&self, key: &ContextKey) -> Option<&ContextValue>;
}

/// Context bag carrying typed values under [`ContextKey`]s.
///
/// Values are shared: cloning a context is cheap and readers never mutate it.
#[derive(Clone, Default)]
pub struct Context {
    values: HashMap<ContextKey, Arc<ContextValue>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the context with `value` stored under `key`, replacing any
    /// previous value for that key.
    pub fn with_value<T>(mut self, key: ContextKey, value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        self.values.insert(key, Arc::new(value));
        self
    }

    pub fn contains(&self, key: &ContextKey) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &ContextKey> {
        self.values.keys()
    }
}

impl ContextValues for Context {
    fn value(&self, key: &ContextKey) -> Option<&ContextValue> {
        self.values.get(key).map(|value| &**value)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.values.keys().map(ContextKey::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("Context").field("keys", &keys).finish()
    }
}
