//! # asyncgen AsyncAPI model
//!
//! The subset of the AsyncAPI document model that the template helpers read:
//! channels, their subscribe/publish operations, messages and schemas.
//!
//! Parsing a full document is not the job of this crate; the types derive
//! `Deserialize` so that any front end producing JSON/YAML values can hand
//! them over directly.

mod channel;
mod schema;

pub use channel::{Channel, Message, Operation};
pub use schema::Schema;
