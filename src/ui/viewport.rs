use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Page background scrolling. Suppressed while at least one `ScrollLock` is alive.
#[derive(Clone, Debug, Default)]
pub struct Viewport {
    locks: Arc<AtomicUsize>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock_scroll(&self) -> ScrollLock {
        self.locks.fetch_add(1, Ordering::SeqCst);

        ScrollLock {
            locks: self.locks.clone(),
        }
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.locks.load(Ordering::SeqCst) > 0
    }
}

/// Released on drop, so scrolling comes back however the owner goes away.
#[derive(Debug)]
pub struct ScrollLock {
    locks: Arc<AtomicUsize>,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.locks.fetch_sub(1, Ordering::SeqCst);
    }
}
