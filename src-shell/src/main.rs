//! NovaExtract shell binary.
//!
//! Wires the OS invocation bridge at startup: creates the channel registry,
//! registers the services channel for the processing runtime, and forwards
//! any paths supplied on the command line the way an OS "Open With" callback
//! would deliver them.

mod about;
mod lifecycle;

use bridge::{ChannelRegistry, ServiceListener, SurfaceGate, SERVICES_CHANNEL};
use lifecycle::SurfaceTracker;
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let about = about::AboutInfo::new();
    tracing::info!(app = about.name, version = about.version, "starting shell");

    let registry = ChannelRegistry::new();

    // The runtime's half of the services channel. In the packaged app this
    // lives inside the embedded processing runtime; a task drains it here.
    let mut services = registry.register(SERVICES_CHANNEL);
    let runtime = tokio::spawn(async move {
        while let Some(message) = services.recv().await {
            let forwarded = message
                .arguments
                .get("paths")
                .and_then(|v| v.as_array())
                .map(Vec::len)
                .unwrap_or(0);
            tracing::info!(method = %message.method, paths = forwarded, "invocation received");
        }
    });

    let surfaces = SurfaceTracker::new();
    surfaces.opened();

    let gate = SurfaceGate::new();
    gate.mark_ready();

    let listener = ServiceListener::new(registry.endpoint(SERVICES_CHANNEL), gate);
    let paths: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if !paths.is_empty() {
        listener.handle_open_paths(&paths);
    }

    // No background mode: the primary surface closing ends the process.
    surfaces.closed();
    if surfaces.should_terminate() {
        drop(listener);
        drop(registry);
        let _ = runtime.await;
    }
}
