//! Integration tests for the named bridge channel.

use bridge::{BridgeError, BridgeMessage, ChannelRegistry, InvocationEvent, SERVICES_CHANNEL};
use serde_json::json;

/// Helper to build a `handleService` message for the given paths
fn message_for(paths: &[&str]) -> BridgeMessage {
    let event = InvocationEvent::new(paths.iter().map(|p| p.to_string()).collect())
        .expect("non-empty path list");
    BridgeMessage::handle_service(&event)
}

#[test]
fn delivers_in_production_order() {
    let registry = ChannelRegistry::new();
    let mut receiver = registry.register(SERVICES_CHANNEL);
    let endpoint = registry.endpoint(SERVICES_CHANNEL);

    endpoint.send(message_for(&["/tmp/first.zip"]));
    endpoint.send(message_for(&["/tmp/second.tar"]));
    endpoint.send(message_for(&["/tmp/third.gz"]));

    assert_eq!(
        receiver.try_recv().unwrap().arguments["paths"],
        json!(["/tmp/first.zip"])
    );
    assert_eq!(
        receiver.try_recv().unwrap().arguments["paths"],
        json!(["/tmp/second.tar"])
    );
    assert_eq!(
        receiver.try_recv().unwrap().arguments["paths"],
        json!(["/tmp/third.gz"])
    );
    assert!(receiver.try_recv().is_none());
}

#[test]
fn send_without_receiver_is_silent() {
    let registry = ChannelRegistry::new();
    let endpoint = registry.endpoint(SERVICES_CHANNEL);

    // Nothing registered under the name: the send must not panic or error
    endpoint.send(message_for(&["/tmp/a.zip"]));
}

#[test]
fn send_to_mismatched_name_is_lost() {
    let registry = ChannelRegistry::new();
    let mut receiver = registry.register(SERVICES_CHANNEL);
    let endpoint = registry.endpoint("com.tiranotech.novaextract/other");

    endpoint.send(message_for(&["/tmp/a.zip"]));

    assert!(receiver.try_recv().is_none());
}

#[test]
fn send_after_receiver_dropped_is_silent() {
    let registry = ChannelRegistry::new();
    let receiver = registry.register(SERVICES_CHANNEL);
    let endpoint = registry.endpoint(SERVICES_CHANNEL);
    drop(receiver);

    endpoint.send(message_for(&["/tmp/a.zip"]));
    assert!(matches!(
        endpoint.try_send(message_for(&["/tmp/a.zip"])),
        Err(BridgeError::MissingReceiver { channel }) if channel == SERVICES_CHANNEL
    ));
}

#[test]
fn reregistration_replaces_previous_receiver() {
    let registry = ChannelRegistry::new();
    let mut stale = registry.register(SERVICES_CHANNEL);
    let mut live = registry.register(SERVICES_CHANNEL);
    let endpoint = registry.endpoint(SERVICES_CHANNEL);

    endpoint.send(message_for(&["/tmp/a.zip"]));

    assert!(stale.try_recv().is_none());
    assert!(live.try_recv().is_some());
}

#[test]
fn wire_shape_matches_contract() {
    let message = message_for(&["/Users/a/file1.zip", "/Users/a/file2.tar.gz"]);

    assert_eq!(
        serde_json::to_value(&message).unwrap(),
        json!({
            "method": "handleService",
            "arguments": {
                "paths": ["/Users/a/file1.zip", "/Users/a/file2.tar.gz"]
            }
        })
    );
}
