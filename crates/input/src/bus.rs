//! Bounded listener table with synchronous in-order dispatch.
//!
//! Each event id in `[0, MAX_EVENT_IDS)` holds an ordered list of callback
//! slots. `add` reuses the first free slot before growing; `remove` nulls a
//! slot and trims trailing empties so slot indices of other listeners stay
//! stable. Dispatch runs callbacks on the calling thread in ascending slot
//! order; a callback returning 0 is recorded as having handled the event.
//!
//! The table lock is held for the whole dispatch, so callbacks must not add
//! or remove listeners on the same bus (they may freely use the stage and
//! the physics engine).

use std::sync::{Mutex, PoisonError};

use gridfx_types::{Event, EventId, EventSink, MAX_EVENT_IDS};

type Callback = Box<dyn Fn(&Event) -> i32 + Send>;

pub struct EventBus {
    table: Mutex<Vec<Vec<Option<Callback>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        let mut table = Vec::with_capacity(MAX_EVENT_IDS);
        table.resize_with(MAX_EVENT_IDS, Vec::new);
        Self {
            table: Mutex::new(table),
        }
    }

    /// Register a callback for `id`; returns its slot, or `None` when `id`
    /// is out of range.
    pub fn add<F>(&self, id: EventId, callback: F) -> Option<usize>
    where
        F: Fn(&Event) -> i32 + Send + 'static,
    {
        if !id.is_valid() {
            return None;
        }
        let mut table = self.lock();
        let slots = &mut table[id.0 as usize];
        let boxed: Callback = Box::new(callback);
        match slots.iter_mut().position(|s| s.is_none()) {
            Some(free) => {
                slots[free] = Some(boxed);
                Some(free)
            }
            None => {
                slots.push(Some(boxed));
                Some(slots.len() - 1)
            }
        }
    }

    /// Unregister the callback at `slot`. Returns `false` when there is no
    /// live callback there.
    pub fn remove(&self, id: EventId, slot: usize) -> bool {
        if !id.is_valid() {
            return false;
        }
        let mut table = self.lock();
        let slots = &mut table[id.0 as usize];
        match slots.get_mut(slot) {
            Some(entry @ Some(_)) => {
                *entry = None;
                while matches!(slots.last(), Some(None)) {
                    slots.pop();
                }
                true
            }
            _ => false,
        }
    }

    /// Number of live callbacks registered for `id`.
    pub fn listener_count(&self, id: EventId) -> usize {
        if !id.is_valid() {
            return 0;
        }
        self.lock()[id.0 as usize]
            .iter()
            .filter(|s| s.is_some())
            .count()
    }

    /// Invoke every callback registered for `event.id` in slot order.
    ///
    /// Returns the slots whose callback reported the event as handled
    /// (returned 0). A non-zero return skips the list but never stops later
    /// listeners.
    pub fn dispatch(&self, event: &Event) -> Vec<(EventId, usize)> {
        if !event.id.is_valid() {
            return Vec::new();
        }
        let table = self.lock();
        let mut handled = Vec::new();
        for (slot, callback) in table[event.id.0 as usize].iter().enumerate() {
            if let Some(callback) = callback {
                if callback(event) == 0 {
                    handled.push((event.id, slot));
                }
            }
        }
        handled
    }

    /// Drop every registered listener.
    pub fn shutdown(&self) {
        let mut table = self.lock();
        for slots in table.iter_mut() {
            slots.clear();
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Vec<Option<Callback>>>> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for EventBus {
    fn dispatch(&self, event: &Event) {
        let _ = EventBus::dispatch(self, event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use gridfx_types::{EventPayload, EVENT_KEY};

    fn key_event() -> Event {
        Event::new(EVENT_KEY, EventPayload::None)
    }

    #[test]
    fn test_add_assigns_sequential_slots() {
        let bus = EventBus::new();
        assert_eq!(bus.add(EVENT_KEY, |_| 0), Some(0));
        assert_eq!(bus.add(EVENT_KEY, |_| 0), Some(1));
        assert_eq!(bus.listener_count(EVENT_KEY), 2);
    }

    #[test]
    fn test_add_rejects_out_of_range_id() {
        let bus = EventBus::new();
        assert_eq!(bus.add(EventId(MAX_EVENT_IDS as u16), |_| 0), None);
    }

    #[test]
    fn test_removed_slot_is_reused() {
        let bus = EventBus::new();
        bus.add(EVENT_KEY, |_| 0);
        bus.add(EVENT_KEY, |_| 0);
        bus.add(EVENT_KEY, |_| 0);
        assert!(bus.remove(EVENT_KEY, 1));
        assert_eq!(bus.add(EVENT_KEY, |_| 0), Some(1));
    }

    #[test]
    fn test_remove_trailing_slot_compacts() {
        let bus = EventBus::new();
        bus.add(EVENT_KEY, |_| 0);
        bus.add(EVENT_KEY, |_| 0);
        assert!(bus.remove(EVENT_KEY, 1));
        assert!(!bus.remove(EVENT_KEY, 1));
        // Next add takes the compacted position back.
        assert_eq!(bus.add(EVENT_KEY, |_| 0), Some(1));
    }

    #[test]
    fn test_dispatch_order_and_removal() {
        let bus = EventBus::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let l1 = Arc::clone(&log);
        let a = bus
            .add(EVENT_KEY, move |_| {
                l1.lock().unwrap().push('A');
                0
            })
            .unwrap();
        let l2 = Arc::clone(&log);
        bus.add(EVENT_KEY, move |_| {
            l2.lock().unwrap().push('B');
            0
        })
        .unwrap();

        bus.dispatch(&key_event());
        assert_eq!(*log.lock().unwrap(), vec!['A', 'B']);

        assert!(bus.remove(EVENT_KEY, a));
        bus.dispatch(&key_event());
        assert_eq!(*log.lock().unwrap(), vec!['A', 'B', 'B']);
    }

    #[test]
    fn test_handled_list_includes_only_zero_returns() {
        let bus = EventBus::new();
        bus.add(EVENT_KEY, |_| 0).unwrap();
        bus.add(EVENT_KEY, |_| 1).unwrap();
        let ran = Arc::new(AtomicUsize::new(0));
        let r = Arc::clone(&ran);
        bus.add(EVENT_KEY, move |_| {
            r.fetch_add(1, Ordering::SeqCst);
            0
        })
        .unwrap();

        let handled = bus.dispatch(&key_event());
        assert_eq!(handled, vec![(EVENT_KEY, 0), (EVENT_KEY, 2)]);
        // The non-zero return did not stop the third listener.
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_shutdown_clears_listeners() {
        let bus = EventBus::new();
        bus.add(EVENT_KEY, |_| 0);
        bus.shutdown();
        assert_eq!(bus.listener_count(EVENT_KEY), 0);
        assert!(bus.dispatch(&key_event()).is_empty());
    }
}
