//! # asyncgen extensions
//!
//! Context plumbing shared by generated clients/servers and broker
//! integrations.
//!
//! The [`ContextKey`] constants are the contract between both sides: a writer
//! stores a value of the documented type under a key, and readers branch on it
//! with [`if_set`], [`if_not_set`] and [`if_equals`]. A value of the wrong type
//! is skipped, never reported as an error.
//!
//! ## Example
//!
//! ```rust
//! use asyncgen_extensions::{if_equals, if_set, Context, ContextKey, Direction};
//!
//! let ctx = Context::new()
//!     .with_value(ContextKey::CORRELATION_ID, "42".to_string())
//!     .with_value(ContextKey::DIRECTION, Direction::Reception.as_str().to_string());
//!
//! let mut correlation_id = None;
//! if_set(&ctx, &ContextKey::CORRELATION_ID, |id: &String| {
//!     correlation_id = Some(id.clone())
//! });
//! assert_eq!(correlation_id.as_deref(), Some("42"));
//!
//! let mut received = false;
//! if_equals(&ctx, &ContextKey::DIRECTION, &"reception".to_string(), || received = true);
//! assert!(received);
//! ```

mod accessors;
mod context;
mod error;
mod key;
mod message;

pub use accessors::{if_equals, if_not_set, if_set};
pub use context::{Context, ContextValue, ContextValues};
pub use error::{ExtensionError, Result};
pub use key::{ContextKey, Direction, GENERATED_PROVIDER};
pub use message::BrokerMessage;
