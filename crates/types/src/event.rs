//! Event types shared by the dispatcher, the input poller and the physics
//! engine.
//!
//! Event ids are bounded integers in `[0, MAX_EVENT_IDS)`. A handful of
//! well-known ids cover the built-in event sources; the rest of the space is
//! free for applications.

/// Identifier of a drawn sprite. `UNDRAWN` (0) marks a sprite that is not in
/// any registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SpriteId(pub u32);

impl SpriteId {
    /// Id carried by a sprite before `draw` and after `remove`.
    pub const UNDRAWN: SpriteId = SpriteId(0);

    pub fn is_drawn(self) -> bool {
        self.0 != 0
    }
}

/// Upper bound (exclusive) of the event-id space.
pub const MAX_EVENT_IDS: usize = 1024;

/// Bounded event identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(pub u16);

impl EventId {
    pub fn is_valid(self) -> bool {
        (self.0 as usize) < MAX_EVENT_IDS
    }
}

/// Keyboard press event id.
pub const EVENT_KEY: EventId = EventId(0);
/// Mouse press/release event id.
pub const EVENT_MOUSE: EventId = EventId(1);
/// Terminal resize event id.
pub const EVENT_RESIZE: EventId = EventId(2);
/// Sprite-sprite collision event id.
pub const EVENT_COLLISION: EventId = EventId(3);

/// Symbolic key identity, backend-neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySym {
    Char,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Backspace,
    Tab,
    Other,
}

/// Payload carried by an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventPayload {
    None,
    Key {
        sym: KeySym,
        ch: Option<char>,
    },
    Mouse {
        x: u16,
        y: u16,
        button: u8,
        pressed: bool,
    },
    Resize {
        width: u16,
        height: u16,
    },
    Collision {
        a: SpriteId,
        b: SpriteId,
    },
}

/// An event delivered to registered listeners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub payload: EventPayload,
}

impl Event {
    pub fn new(id: EventId, payload: EventPayload) -> Self {
        Self { id, payload }
    }

    pub fn key(sym: KeySym, ch: Option<char>) -> Self {
        Self::new(EVENT_KEY, EventPayload::Key { sym, ch })
    }

    pub fn mouse(x: u16, y: u16, button: u8, pressed: bool) -> Self {
        Self::new(
            EVENT_MOUSE,
            EventPayload::Mouse {
                x,
                y,
                button,
                pressed,
            },
        )
    }

    pub fn resize(width: u16, height: u16) -> Self {
        Self::new(EVENT_RESIZE, EventPayload::Resize { width, height })
    }

    /// Collision event; the pair is unordered, stored smaller id first.
    pub fn collision(a: SpriteId, b: SpriteId) -> Self {
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        Self::new(EVENT_COLLISION, EventPayload::Collision { a, b })
    }
}

/// Anything that can receive events.
///
/// The physics engine reports collisions through this seam so it never
/// depends on a concrete dispatcher.
pub trait EventSink: Send + Sync {
    fn dispatch(&self, event: &Event);
}

/// Sink that drops every event. Useful for tests and headless runs.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn dispatch(&self, _event: &Event) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_id_bound() {
        assert!(EventId(0).is_valid());
        assert!(EventId(1023).is_valid());
        assert!(!EventId(1024).is_valid());
    }

    #[test]
    fn test_collision_pair_is_unordered() {
        let e1 = Event::collision(SpriteId(2), SpriteId(1));
        let e2 = Event::collision(SpriteId(1), SpriteId(2));
        assert_eq!(e1, e2);
    }

    #[test]
    fn test_undrawn_sentinel() {
        assert!(!SpriteId::UNDRAWN.is_drawn());
        assert!(SpriteId(1).is_drawn());
    }
}
