use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ExtensionError, Result};

macro_rules! prefixed {
    ($name:literal) => {
        concat!("asyncapi-", $name)
    };
}

/// Provider name stored under [`ContextKey::PROVIDER`] by generated code.
pub const GENERATED_PROVIDER: &str = "asyncapi";

/// Key of a value in a [`Context`](crate::Context).
///
/// Well-known keys share the [`ContextKey::PREFIX`] prefix so they do not
/// collide with keys placed in the same bag by unrelated code. The prefix is a
/// convention: [`ContextKey::new`] accepts any string.
///
/// Each well-known key documents the value type readers expect. Writers must
/// store exactly that type; anything else is skipped by the accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContextKey(Cow<'static, str>);

impl ContextKey {
    pub const PREFIX: &'static str = prefixed!("");

    /// AsyncAPI specification version (`String`).
    pub const VERSION: Self = Self::from_static(prefixed!("version"));
    /// Provider the data is coming from (`String`, [`GENERATED_PROVIDER`] for generated code).
    pub const PROVIDER: Self = Self::from_static(prefixed!("provider"));
    /// Channel the data is coming from (`String`).
    pub const CHANNEL: Self = Self::from_static(prefixed!("channel"));
    /// Direction of the data (`String`, see [`Direction::as_str`]).
    pub const DIRECTION: Self = Self::from_static(prefixed!("operation"));
    /// Message sent to or received from the broker ([`BrokerMessage`](crate::BrokerMessage)).
    pub const BROKER_MESSAGE: Self = Self::from_static(prefixed!("broker-message"));
    /// Correlation ID of the message (`String`).
    pub const CORRELATION_ID: Self = Self::from_static(prefixed!("correlationID"));

    pub const WELL_KNOWN: [Self; 6] = [
        Self::VERSION,
        Self::PROVIDER,
        Self::CHANNEL,
        Self::DIRECTION,
        Self::BROKER_MESSAGE,
        Self::CORRELATION_ID,
    ];

    pub const fn from_static(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    pub fn new(key: impl Into<Cow<'static, str>>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Direction of the data flowing through a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Sent to the broker
    Publication,
    /// Received from the broker
    Reception,
}

impl Direction {
    /// Value stored under [`ContextKey::DIRECTION`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Publication => "publication",
            Self::Reception => "reception",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ExtensionError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            "publication" => Ok(Self::Publication),
            "reception" => Ok(Self::Reception),
            other => Err(ExtensionError::UnknownDirection(other.to_string())),
        }
    }
}
