//! View lifetime scope
//!
//! A view owns one scope and cancels it when it unmounts. Async work started
//! by the view runs through the scope so a result arriving after unmount is
//! dropped instead of being written into dead state.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ViewScope {
    active: Arc<AtomicBool>,
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewScope {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn cancel(&self) {
        self.active.store(false, Ordering::Release);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Await `fut`; yields `None` if the scope was cancelled meanwhile
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        let output = fut.await;
        if self.is_active() {
            Some(output)
        } else {
            log::debug!("discarding result for a closed view");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_active_scope_passes_result() {
        let scope = ViewScope::new();
        assert_eq!(scope.run(async { 5 }).await, Some(5));
    }

    #[tokio::test]
    async fn test_cancelled_scope_discards_late_result() {
        let scope = ViewScope::new();
        let handle = scope.clone();
        let result = scope
            .run(async move {
                handle.cancel();
                "late"
            })
            .await;
        assert_eq!(result, None);
        assert!(!scope.is_active());
    }
}
