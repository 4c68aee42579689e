//! OS event listener: turns "open these files" callbacks into bridge sends.
//!
//! The host shell subscribes a [`ServiceListener`] once at startup and calls
//! it from whatever callback the platform delivers open-file requests
//! through. The listener stays decoupled from any particular host API so the
//! forwarding contract can be exercised without a real operating system.

use crate::channel::ChannelEndpoint;
use crate::error::BridgeError;
use crate::types::{BridgeMessage, InvocationEvent};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use url::Url;

/// Shared flag marking when the application's primary UI surface exists.
///
/// Invocations arriving before [`mark_ready`](Self::mark_ready) are dropped,
/// not queued; the OS re-delivers on the next user action if needed.
#[derive(Clone, Default)]
pub struct SurfaceGate {
    ready: Arc<AtomicBool>,
}

impl SurfaceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the primary surface as available. Never unset.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

/// Forwards each OS open-file callback to the processing runtime as a
/// `handleService` invocation on the bound channel endpoint.
pub struct ServiceListener {
    endpoint: ChannelEndpoint,
    surface: SurfaceGate,
}

impl ServiceListener {
    pub fn new(endpoint: ChannelEndpoint, surface: SurfaceGate) -> Self {
        Self { endpoint, surface }
    }

    /// Handles one OS callback delivering file URLs.
    ///
    /// Resolves each `file://` URL to a local path, preserving the order the
    /// OS supplied and skipping references without one. Best-effort: late
    /// and empty invocations are dropped silently, repeated invocations are
    /// forwarded again without deduplication.
    pub fn handle_open_urls(&self, urls: &[Url]) {
        let paths: Vec<PathBuf> = urls.iter().filter_map(|u| u.to_file_path().ok()).collect();
        self.handle_open_paths(&paths);
    }

    /// Handles one OS callback delivering already-resolved local paths.
    pub fn handle_open_paths(&self, paths: &[PathBuf]) {
        // A zero-path invocation is suppressed outright: not an error, not logged.
        if paths.is_empty() {
            return;
        }
        if let Err(e) = self.try_forward(paths) {
            tracing::debug!(error = %e, "file invocation dropped");
        }
    }

    fn try_forward(&self, paths: &[PathBuf]) -> Result<(), BridgeError> {
        if !self.surface.is_ready() {
            return Err(BridgeError::SurfaceUnavailable);
        }

        let paths: Vec<String> = paths
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        let event = InvocationEvent::new(paths).ok_or(BridgeError::EmptyInvocation)?;

        // Encoding and sending complete inside the callback, so a single
        // producer keeps delivery order equal to production order.
        self.endpoint.try_send(BridgeMessage::handle_service(&event))
    }
}
