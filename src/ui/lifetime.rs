use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Liveness flag for one mount of the screen.
///
/// Background tasks hold clones and check [`is_mounted`](Self::is_mounted)
/// before delivering results. The owning [`App`](crate::ui::app::App) calls
/// [`unmount`](Self::unmount) when it is dropped.
#[derive(Debug, Clone)]
pub struct ScreenLifetime {
    mounted: Arc<AtomicBool>,
}

impl ScreenLifetime {
    pub fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Mark the screen as torn down. Idempotent.
    pub fn unmount(&self) {
        if self.mounted.swap(false, Ordering::SeqCst) {
            tracing::debug!("Screen unmounted");
        }
    }
}
