//! # Bridge
//!
//! Native-shell integration layer for NovaExtract.
//!
//! This library connects the operating-system shell of the application to
//! its processing runtime. When the OS asks the running process to open one
//! or more files ("Open With", drag-onto-icon, or the Services menu), the
//! shell converts the request into an [`InvocationEvent`] and relays it over
//! a named in-process channel as a [`BridgeMessage`]. The runtime registers
//! the receiving half of the channel under the same name and drains it.
//!
//! Delivery is best-effort by design: invocations arriving before the
//! primary window exists, invocations with no resolvable paths, and sends
//! with no registered receiver all degrade to "nothing happens". The OS
//! re-delivers on the next user action when it matters.
//!
//! ## Guarantees
//!
//! - Path order within one invocation is preserved end to end.
//! - Messages arrive in the order invocations were produced.
//! - An invocation with zero paths never produces a message.
//!
//! ## Example
//!
//! ```rust
//! use bridge::{ChannelRegistry, ServiceListener, SurfaceGate, SERVICES_CHANNEL};
//! use std::path::PathBuf;
//!
//! let registry = ChannelRegistry::new();
//! let mut services = registry.register(SERVICES_CHANNEL);
//!
//! let gate = SurfaceGate::new();
//! gate.mark_ready();
//!
//! let listener = ServiceListener::new(registry.endpoint(SERVICES_CHANNEL), gate);
//! listener.handle_open_paths(&[PathBuf::from("/tmp/archive.zip")]);
//!
//! let message = services.try_recv().expect("invocation forwarded");
//! assert_eq!(message.method, "handleService");
//! ```

pub mod channel;
pub mod error;
pub mod listener;
pub mod types;

// Re-export main types
pub use channel::{ChannelEndpoint, ChannelReceiver, ChannelRegistry};
pub use error::BridgeError;
pub use listener::{ServiceListener, SurfaceGate};
pub use types::{BridgeMessage, InvocationEvent, METHOD_HANDLE_SERVICE, SERVICES_CHANNEL};
