use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Liveness flag shared between a view and the mutations it started. A
/// mutation that resolves after teardown must not touch the view.
#[derive(Debug, Clone)]
pub struct ViewHandle {
    mounted: Arc<AtomicBool>,
}

impl Default for ViewHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewHandle {
    pub fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    pub fn teardown(&self) {
        self.mounted.store(false, Ordering::Release);
    }
}
