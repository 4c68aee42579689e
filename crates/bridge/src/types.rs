//! Wire types shared by the shell and the processing runtime.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Name of the channel carrying Services-menu invocations.
///
/// Both endpoints must agree on this exact string at build time; a mismatch
/// silently breaks delivery.
pub const SERVICES_CHANNEL: &str = "com.tiranotech.novaextract/services";

/// Method identifier carried by every forwarded file invocation.
pub const METHOD_HANDLE_SERVICE: &str = "handleService";

/// One OS "open these files" request.
///
/// Paths keep the order the OS supplied them in, and the sequence is never
/// empty: constructing from zero paths yields `None`, so an event in hand is
/// always forwardable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationEvent {
    paths: Vec<String>,
}

impl InvocationEvent {
    /// Builds an event from resolved local paths, or `None` when empty.
    pub fn new(paths: Vec<String>) -> Option<Self> {
        if paths.is_empty() {
            None
        } else {
            Some(Self { paths })
        }
    }

    /// The invoked paths, in OS-supplied order.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }
}

/// Wire-level encoding of a one-way method invocation on a channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BridgeMessage {
    /// Fixed identifier naming the operation on the receiving side.
    pub method: String,

    /// Named arguments for the method.
    pub arguments: Map<String, Value>,
}

impl BridgeMessage {
    /// Encodes a file invocation as a `handleService` call with the paths
    /// bound under the `"paths"` argument.
    pub fn handle_service(event: &InvocationEvent) -> Self {
        let mut arguments = Map::new();
        arguments.insert("paths".to_string(), json!(event.paths()));
        Self {
            method: METHOD_HANDLE_SERVICE.to_string(),
            arguments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_paths_yield_no_event() {
        assert!(InvocationEvent::new(Vec::new()).is_none());
    }

    #[test]
    fn handle_service_binds_paths_argument() {
        let event = InvocationEvent::new(vec!["/tmp/a.zip".to_string()]).unwrap();
        let message = BridgeMessage::handle_service(&event);

        assert_eq!(message.method, METHOD_HANDLE_SERVICE);
        assert_eq!(message.arguments["paths"], json!(["/tmp/a.zip"]));
    }
}
