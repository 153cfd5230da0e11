//! # asyncgen template helpers
//!
//! Naming helpers called by the code generator's templates to turn names
//! found in an AsyncAPI document into exported identifiers.
//!
//! ## Identifier normalization
//!
//! ```text
//! raw name ("0user_signed-upId")
//!     │
//!     ├──> strip leading digits
//!     ├──> split on non-alphanumerics and camelCase humps
//!     │      → ["user", "signed", "up", "Id"]
//!     ├──> acronyms uppercased, other words title-cased
//!     └──> concatenated → "UserSignedUpID"
//! ```
//!
//! ## Example
//!
//! ```rust
//! use asyncgen_asyncapi::{Channel, Operation};
//! use asyncgen_templates::{namify, operation_name};
//!
//! assert_eq!(namify("eh_oh__ah"), "EhOhAh");
//! assert_eq!(namify("TotoId"), "TotoID");
//!
//! let channel = Channel::new("user/signedup")
//!     .with_publish(Operation::with_id("userSignedUp"));
//! assert_eq!(namify(operation_name(&channel)), "UserSignedUp");
//! ```

mod acronyms;
mod config;
mod error;
mod namify;
mod operation;
mod required;

pub use acronyms::{Acronyms, BUILTIN_ACRONYMS};
pub use config::{NamingConfig, ACRONYMS_ENV};
pub use error::{NamingError, Result};
pub use namify::{namify, Namifier};
pub use operation::operation_name;
pub use required::is_required;
