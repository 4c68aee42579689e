//! Error types for the shell bridge.

use thiserror::Error;

/// Reasons a file invocation fails to reach the processing runtime.
///
/// None of these are surfaced to the user. The bridge is a best-effort
/// notification path; every failure degrades to the message being dropped.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// No receiver is registered under the channel name at send time.
    #[error("no receiver registered for channel: {channel}")]
    MissingReceiver {
        /// The channel name the send was addressed to
        channel: String,
    },

    /// An OS callback yielded zero resolvable paths.
    #[error("invocation carried no resolvable paths")]
    EmptyInvocation,

    /// An OS callback arrived before the primary UI surface existed.
    #[error("primary surface not yet available")]
    SurfaceUnavailable,
}
