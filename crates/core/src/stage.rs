//! The shared stage: one registry behind one lock.
//!
//! A `Stage` is the process-wide service instance that replaces ambient
//! global tables — constructed once, `Arc`-shared between the main thread
//! and the background physics loop. Each `with` call is a single
//! read-modify-write critical section; the lock is never held across a
//! tick's sleep. Lock ordering throughout the engine is registry first,
//! canvas second.

use std::sync::{Mutex, PoisonError};

use crate::registry::SpriteRegistry;

#[derive(Debug, Default)]
pub struct Stage {
    registry: Mutex<SpriteRegistry>,
}

impl Stage {
    pub fn new() -> Self {
        Self {
            registry: Mutex::new(SpriteRegistry::new()),
        }
    }

    /// Run `f` with exclusive access to the registry.
    ///
    /// A poisoned lock is recovered rather than propagated: the registry
    /// stays usable and the process continues (documented degraded-mode
    /// behavior for backend failures).
    pub fn with<R>(&self, f: impl FnOnce(&mut SpriteRegistry) -> R) -> R {
        let mut guard = self
            .registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_stage_is_shareable_across_threads() {
        let stage = Arc::new(Stage::new());
        let s2 = Arc::clone(&stage);
        let handle = std::thread::spawn(move || s2.with(|reg| reg.len()));
        assert_eq!(handle.join().unwrap(), 0);
        stage.with(|reg| assert!(reg.is_empty()));
    }
}
