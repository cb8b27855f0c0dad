//! Shared data types and constants for gridfx.
//!
//! Everything here is pure data with no external dependencies, usable from
//! the core compositor, the physics engine, the input layer and the terminal
//! backend alike.

mod cell;
mod event;
mod vec2;

pub use cell::{Cell, CellStyle, Rgb};
pub use event::{
    Event, EventId, EventPayload, EventSink, KeySym, NullSink, SpriteId, EVENT_COLLISION,
    EVENT_KEY, EVENT_MOUSE, EVENT_RESIZE, MAX_EVENT_IDS,
};
pub use vec2::Vec2;

/// Default physics tick rate in ticks per second (10 → 100 ms interval).
pub const DEFAULT_TICK_SPEED: u32 = 10;

/// Input polling loop interval in milliseconds.
pub const DEFAULT_POLL_MS: u64 = 10;

/// Default downward acceleration in cells/s².
pub const DEFAULT_GRAVITY: f64 = 9.8;

/// Default ground friction coefficient.
pub const DEFAULT_FRICTION: f64 = 0.5;

/// Default sprite mass.
pub const DEFAULT_MASS: f64 = 1.0;
