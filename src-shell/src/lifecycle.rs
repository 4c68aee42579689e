//! Process lifecycle policy: terminate once the last surface closes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts the application's open user-facing surfaces.
///
/// The app has no background or headless mode: once the count returns to
/// zero the process is expected to exit.
#[derive(Clone, Default)]
pub struct SurfaceTracker {
    open: Arc<AtomicUsize>,
}

impl SurfaceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) {
        self.open.fetch_add(1, Ordering::AcqRel);
    }

    /// Records a surface closing. A stray close never underflows the count.
    pub fn closed(&self) {
        let _ = self
            .open
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));
    }

    pub fn should_terminate(&self) -> bool {
        self.open.load(Ordering::Acquire) == 0
    }
}
