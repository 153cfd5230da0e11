use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Message as sent to or received from a broker.
///
/// Stored under [`ContextKey::BROKER_MESSAGE`](crate::ContextKey::BROKER_MESSAGE).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerMessage {
    #[serde(default)]
    pub headers: BTreeMap<String, Vec<u8>>,
    #[serde(default)]
    pub payload: Vec<u8>,
}

impl BrokerMessage {
    pub fn with_payload(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            headers: BTreeMap::new(),
            payload: payload.into(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn header(&self, name: &str) -> Option<&[u8]> {
        self.headers.get(name).map(Vec::as_slice)
    }

    /// True when neither headers nor payload were set.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.payload.is_empty()
    }
}

impl fmt::Display for BrokerMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("headers={")?;
        for (i, (name, value)) in self.headers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {:?}", String::from_utf8_lossy(value))?;
        }
        write!(
            f,
            "}} payload={:?}",
            String::from_utf8_lossy(&self.payload)
        )
    }
}
