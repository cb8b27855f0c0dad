//! Terminal backend: an in-memory framebuffer implementing the core
//! `Canvas` contract, and a diff-based crossterm renderer that flushes it.

mod fb;
mod renderer;

pub use fb::FrameBuffer;
pub use renderer::TerminalRenderer;

use std::sync::{Arc, Mutex};

/// The shared drawing surface handed to the registry, the physics loop and
/// the animator. Lock per cell write, never across a sleep.
pub type SharedCanvas = Arc<Mutex<FrameBuffer>>;

/// Convenience constructor for a [`SharedCanvas`].
pub fn shared_canvas(width: u16, height: u16) -> SharedCanvas {
    Arc::new(Mutex::new(FrameBuffer::new(width, height)))
}
