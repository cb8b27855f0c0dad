//! The engine crate: background physics tick loop and time-sliced animated
//! drawing primitives.

pub mod animate;
pub mod geometry;
mod physics;

pub use physics::{step, PhysicsConfig, PhysicsEngine, StepReport};
