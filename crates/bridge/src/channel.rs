//! Named in-process channels between the shell and the processing runtime.
//!
//! A [`ChannelRegistry`] maps channel names to the sending half of a tokio
//! mpsc channel. The shell holds a [`ChannelEndpoint`] per name and fires
//! messages at it; the runtime registers under the same name and drains the
//! paired [`ChannelReceiver`]. Delivery is fire-and-forget: a send with no
//! registered receiver drops the message instead of erroring.

use crate::error::BridgeError;
use crate::types::BridgeMessage;
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Process-wide table of named channels.
///
/// Passed as a handle into both the sending and receiving side rather than
/// held as a global, so the bridge can be exercised without process state.
#[derive(Clone, Default)]
pub struct ChannelRegistry {
    senders: Arc<Mutex<HashMap<String, mpsc::UnboundedSender<BridgeMessage>>>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a receiver under `name`, replacing any previous one.
    ///
    /// Messages sent before registration are lost; the transport buffers
    /// only between a live sender/receiver pair.
    pub fn register(&self, name: &str) -> ChannelReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders.lock().insert(name.to_string(), tx);
        ChannelReceiver { inner: rx }
    }

    /// Creates the sending endpoint for `name`.
    ///
    /// The endpoint is valid whether or not a receiver exists yet. It is
    /// created once at startup and kept for the process lifetime.
    pub fn endpoint(&self, name: &str) -> ChannelEndpoint {
        ChannelEndpoint {
            name: name.to_string(),
            registry: self.clone(),
        }
    }

    fn send(&self, name: &str, message: BridgeMessage) -> Result<(), BridgeError> {
        let senders = self.senders.lock();
        let tx = senders.get(name).ok_or_else(|| BridgeError::MissingReceiver {
            channel: name.to_string(),
        })?;

        // A dropped receiver counts as missing, same as never registered.
        tx.send(message).map_err(|_| BridgeError::MissingReceiver {
            channel: name.to_string(),
        })
    }
}

/// Sending half of a named channel, owned by the shell layer.
#[derive(Clone)]
pub struct ChannelEndpoint {
    name: String,
    registry: ChannelRegistry,
}

impl ChannelEndpoint {
    /// The channel name this endpoint is bound to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fire-and-forget send; never blocks and never fails the caller.
    pub fn send(&self, message: BridgeMessage) {
        if let Err(e) = self.try_send(message) {
            tracing::debug!(channel = %self.name, error = %e, "bridge message dropped");
        }
    }

    /// Like [`send`](Self::send) but reports why a message was lost.
    pub fn try_send(&self, message: BridgeMessage) -> Result<(), BridgeError> {
        self.registry.send(&self.name, message)
    }

    /// Encodes and sends a one-way method invocation.
    pub fn invoke(&self, method: &str, arguments: Map<String, Value>) {
        self.send(BridgeMessage {
            method: method.to_string(),
            arguments,
        });
    }
}

/// Receiving half of a named channel, owned by the processing runtime.
pub struct ChannelReceiver {
    inner: mpsc::UnboundedReceiver<BridgeMessage>,
}

impl ChannelReceiver {
    /// Waits for the next message; `None` once every sender is gone.
    pub async fn recv(&mut self) -> Option<BridgeMessage> {
        self.inner.recv().await
    }

    /// Non-blocking receive, for callers outside an async context.
    pub fn try_recv(&mut self) -> Option<BridgeMessage> {
        self.inner.try_recv().ok()
    }
}
