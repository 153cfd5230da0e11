use asyncgen_asyncapi::{Channel, Operation};

/// Name under which templates expose a channel's operation.
///
/// The subscribe operation id wins over the publish one; an operation with an
/// empty id counts as absent. Falls back to the channel name. Only one name
/// is surfaced for a bidirectional channel.
pub fn operation_name(channel: &Channel) -> &str {
    channel
        .subscribe
        .as_ref()
        .and_then(Operation::id)
        .or_else(|| channel.publish.as_ref().and_then(Operation::id))
        .unwrap_or(channel.name.as_str())
}
