use serde::{Deserialize, Serialize};

use crate::Schema;

/// Channel of an AsyncAPI document.
///
/// A channel may define a subscribe side, a publish side, both, or neither.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Channel name, as keyed in the document (e.g. "user/signedup")
    #[serde(default)]
    pub name: String,

    /// Operation performed by applications receiving on this channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribe: Option<Operation>,

    /// Operation performed by applications sending on this channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish: Option<Operation>,
}

impl Channel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_subscribe(mut self, operation: Operation) -> Self {
        self.subscribe = Some(operation);
        self
    }

    pub fn with_publish(mut self, operation: Operation) -> Self {
        self.publish = Some(operation);
        self
    }
}

/// Subscribe or publish side of a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Human-assigned identifier; empty when the document does not set one
    #[serde(rename = "operationId", default)]
    pub operation_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

impl Operation {
    pub fn with_id(operation_id: impl Into<String>) -> Self {
        Self {
            operation_id: operation_id.into(),
            ..Default::default()
        }
    }

    /// Returns the operation id when it is set to a non-empty value.
    pub fn id(&self) -> Option<&str> {
        Some(self.operation_id.as_str()).filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Schema>,

    /// Runtime expression locating the correlation ID (e.g. "$message.header#/correlationId")
    #[serde(
        rename = "correlationId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub correlation_id: Option<String>,
}
