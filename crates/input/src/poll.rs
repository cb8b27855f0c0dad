//! Background input polling loop.
//!
//! A dedicated thread samples the terminal at a fixed interval (10 ms by
//! default), converts pending raw events and dispatches them through the
//! bus. The loop starts lazily on the first listener registration and must
//! be stopped explicitly; start/stop are idempotent and the stop is a
//! cooperative flag plus a join, so `stop` returning `true` means the
//! thread is gone.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event;

use gridfx_types::{Event, EventId, DEFAULT_POLL_MS};

use crate::bus::EventBus;
use crate::map;

/// Most raw events drained per poll iteration.
const POLL_BATCH: usize = 32;

pub struct EventLoop {
    bus: Arc<EventBus>,
    running: Arc<AtomicBool>,
    handle: Mutex<Option<JoinHandle<()>>>,
    interval: Duration,
}

impl EventLoop {
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self::with_interval(bus, Duration::from_millis(DEFAULT_POLL_MS))
    }

    pub fn with_interval(bus: Arc<EventBus>, interval: Duration) -> Self {
        Self {
            bus,
            running: Arc::new(AtomicBool::new(false)),
            handle: Mutex::new(None),
            interval,
        }
    }

    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Register a listener and lazily start the polling loop.
    pub fn add<F>(&self, id: EventId, callback: F) -> Option<usize>
    where
        F: Fn(&Event) -> i32 + Send + 'static,
    {
        let slot = self.bus.add(id, callback)?;
        self.start();
        Some(slot)
    }

    /// Start the polling thread. Returns `false` (no-op) when already
    /// running.
    pub fn start(&self) -> bool {
        if self.running.swap(true, Ordering::SeqCst) {
            return false;
        }

        let bus = Arc::clone(&self.bus);
        let running = Arc::clone(&self.running);
        let interval = self.interval;

        let handle = thread::spawn(move || {
            while running.load(Ordering::SeqCst) {
                let mut batch = ArrayVec::<Event, POLL_BATCH>::new();
                // Non-blocking drain; a headless terminal just yields nothing.
                while !batch.is_full() && event::poll(Duration::from_millis(0)).unwrap_or(false) {
                    match event::read() {
                        Ok(raw) => {
                            if let Some(ev) = map::to_engine_event(&raw) {
                                let _ = batch.try_push(ev);
                            }
                        }
                        Err(_) => break,
                    }
                }
                for ev in &batch {
                    bus.dispatch(ev);
                }
                thread::sleep(interval);
            }
        });

        let mut slot = self.handle.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(handle);
        true
    }

    /// Stop and join the polling thread. Returns `false` (no-op) when not
    /// running.
    pub fn stop(&self) -> bool {
        if !self.running.swap(false, Ordering::SeqCst) {
            return false;
        }
        let handle = {
            let mut slot = self.handle.lock().unwrap_or_else(PoisonError::into_inner);
            slot.take()
        };
        if let Some(handle) = handle {
            let _ = handle.join();
        }
        true
    }
}

impl Drop for EventLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
